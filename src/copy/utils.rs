//! Helpers shared by the copy operations.

use filetime::{FileTime, set_file_times};
use std::fs::{File, Metadata};
use std::io;
use std::path::Path;

/// Stream the full contents of `src` into `dst`.
///
/// On Linux 4.5+ this uses `copy_file_range` for kernel-to-kernel transfer,
/// falling back to a userspace copy when the filesystem does not support it.
/// Other platforms always use the userspace copy.
pub(crate) fn copy_file_contents(src: &File, dst: &File, len: u64) -> io::Result<u64> {
    #[cfg(target_os = "linux")]
    {
        copy_file_range_all(src, dst, len)
    }
    #[cfg(not(target_os = "linux"))]
    {
        let _ = len; // unused off Linux
        io::copy(&mut io::BufReader::new(src), &mut &*dst)
    }
}

/// Linux-specific: copy using the copy_file_range(2) syscall.
///
/// Data never enters userspace. Falls back to `io::copy` when the syscall
/// is unsupported for this file pair (e.g. cross-filesystem).
#[cfg(target_os = "linux")]
fn copy_file_range_all(src: &File, dst: &File, len: u64) -> io::Result<u64> {
    use std::os::unix::io::AsRawFd;

    let mut remaining = len;
    let mut copied: u64 = 0;
    while remaining > 0 {
        let chunk = remaining.min(1 << 30) as usize;

        // SAFETY: both fds are valid for the duration of the borrowed File
        // handles; null offsets mean the current file positions are used.
        let n = unsafe {
            libc::copy_file_range(
                src.as_raw_fd(),
                std::ptr::null_mut(),
                dst.as_raw_fd(),
                std::ptr::null_mut(),
                chunk,
                0,
            )
        };

        if n < 0 {
            let err = io::Error::last_os_error();
            if copied == 0
                && matches!(
                    err.raw_os_error(),
                    Some(libc::EXDEV | libc::ENOSYS | libc::EINVAL | libc::EOPNOTSUPP)
                )
            {
                return io::copy(&mut io::BufReader::new(src), &mut &*dst);
            }
            return Err(err);
        }
        if n == 0 {
            // EOF before the expected length; the source shrank mid-copy
            break;
        }

        copied += n as u64;
        remaining = remaining.saturating_sub(n as u64);
    }
    Ok(copied)
}

/// Copy mtime and atime from the source metadata onto `dst`.
pub(crate) fn preserve_timestamps(src_meta: &Metadata, dst: &Path) -> io::Result<()> {
    let mtime = FileTime::from_last_modification_time(src_meta);
    let atime = FileTime::from_last_access_time(src_meta);
    set_file_times(dst, atime, mtime)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_copy_file_contents_streams_all_bytes() {
        let dir = tempdir().unwrap();
        let src_path = dir.path().join("src.bin");
        let dst_path = dir.path().join("dst.bin");

        let payload = vec![7u8; 256 * 1024];
        fs::write(&src_path, &payload).unwrap();

        let src = File::open(&src_path).unwrap();
        let dst = File::create(&dst_path).unwrap();
        let copied = copy_file_contents(&src, &dst, payload.len() as u64).unwrap();

        assert_eq!(copied, payload.len() as u64);
        assert_eq!(fs::read(&dst_path).unwrap(), payload);
    }

    #[test]
    fn test_copy_file_contents_empty_file() {
        let dir = tempdir().unwrap();
        let src_path = dir.path().join("src.bin");
        let dst_path = dir.path().join("dst.bin");
        fs::write(&src_path, b"").unwrap();

        let src = File::open(&src_path).unwrap();
        let dst = File::create(&dst_path).unwrap();
        let copied = copy_file_contents(&src, &dst, 0).unwrap();

        assert_eq!(copied, 0);
        assert!(fs::read(&dst_path).unwrap().is_empty());
    }

    #[test]
    fn test_preserve_timestamps() {
        let dir = tempdir().unwrap();
        let src_path = dir.path().join("src.txt");
        let dst_path = dir.path().join("dst.txt");
        fs::write(&src_path, "content").unwrap();
        std::thread::sleep(std::time::Duration::from_millis(20));
        fs::write(&dst_path, "content").unwrap();

        let src_meta = fs::metadata(&src_path).unwrap();
        preserve_timestamps(&src_meta, &dst_path).unwrap();

        let src_mtime = FileTime::from_last_modification_time(&src_meta);
        let dst_meta = fs::metadata(&dst_path).unwrap();
        let dst_mtime = FileTime::from_last_modification_time(&dst_meta);
        assert_eq!(src_mtime, dst_mtime);
    }
}
