//! Recursive tree copy.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::time::Instant;

use crate::error::{Error, Result};
use crate::options::CopyOptions;
use crate::utils::path::normalize;
use crate::utils::stat;
use crate::walk::walk_files;

use super::file::copy_one;

/// Report of a completed tree copy.
///
/// Returned by [`copy_tree`] to describe what was written.
///
/// # Example
///
/// ```no_run
/// use std::path::Path;
/// use treeops::{CopyOptions, copy_tree};
///
/// let report = copy_tree(Path::new("src"), Path::new("dst"), &CopyOptions::default())?;
/// for path in &report.copied {
///     println!("wrote {}", path.display());
/// }
/// # Ok::<(), treeops::Error>(())
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CopyReport {
    /// Destination paths written, in copy order
    pub copied: Vec<PathBuf>,
    /// Total bytes copied
    pub bytes_copied: u64,
    /// Number of times a missing destination directory (with any missing
    /// ancestors) was created
    pub dirs_created: u64,
    /// Duration of the copy operation
    pub duration: std::time::Duration,
}

/// Copy `src` (a file or a directory tree) into the directory `dst`.
///
/// A file source is copied directly into `dst` under its base name. A
/// directory source is walked depth-first and every file is copied to `dst`
/// joined with its path relative to the source root, so the directory
/// structure is preserved. Missing destination directories, including `dst`
/// itself, are created on demand with default permissions.
///
/// Empty source directories are ignored: they are not recreated at the
/// destination, and an empty source tree writes nothing at all.
///
/// Copying is strictly sequential, one file at a time. Leaf entries that do
/// not resolve to regular files (sockets, fifos, symlinks to directories)
/// are skipped with a warning; symlinks to regular files are copied through
/// as content.
///
/// # Errors
///
/// Returns [`Error::DestinationNotDirectory`] when `dst` exists as a
/// non-directory entry, [`Error::NotFound`] when `src` is missing, and a
/// contextual error ([`Error::CreateDir`], [`Error::CopyFile`], ...) for the
/// first I/O failure encountered. No rollback is performed: files copied
/// before a failure remain on disk.
pub fn copy_tree(src: &Path, dst: &Path, options: &CopyOptions) -> Result<CopyReport> {
    let start_time = Instant::now();

    // The destination may be absent, but must not exist as a non-directory
    match fs::metadata(dst) {
        Ok(meta) if !meta.is_dir() => {
            return Err(Error::DestinationNotDirectory(dst.to_path_buf()));
        }
        Ok(_) => {}
        Err(e) if e.kind() == io::ErrorKind::NotFound => {}
        Err(source) => {
            return Err(Error::Metadata {
                path: dst.to_path_buf(),
                source,
            });
        }
    }

    let src_meta = stat(src)?;
    let src_root = normalize(src);
    let mut report = CopyReport::default();

    // A file source lands directly under dst by its base name
    if !src_meta.is_dir() {
        if !src_meta.is_file() {
            return Err(Error::InvalidPath {
                path: src_root,
                source: io::Error::new(io::ErrorKind::InvalidInput, "source is not a regular file"),
            });
        }
        let name = src_root.file_name().ok_or_else(|| Error::InvalidPath {
            path: src_root.clone(),
            source: io::Error::new(io::ErrorKind::InvalidInput, "path has no file name"),
        })?;
        let savepath = dst.join(name);
        let outcome = copy_one(&src_root, &savepath, &src_meta, options)?;
        report.bytes_copied += outcome.bytes;
        if outcome.created_dir {
            report.dirs_created += 1;
        }
        report.copied.push(savepath);
        report.duration = start_time.elapsed();
        return Ok(report);
    }

    for file in walk_files(&src_root)? {
        let rel = file.strip_prefix(&src_root).map_err(|_| Error::InvalidPath {
            path: file.clone(),
            source: io::Error::new(io::ErrorKind::InvalidInput, "path escapes the source root"),
        })?;
        let savepath = dst.join(rel);

        let meta = stat(&file)?;
        if !meta.is_file() {
            options.warn(&format!("skipping non-regular file: {}", file.display()));
            continue;
        }

        let outcome = copy_one(&file, &savepath, &meta, options)?;
        report.bytes_copied += outcome.bytes;
        if outcome.created_dir {
            report.dirs_created += 1;
        }
        report.copied.push(savepath);
    }

    report.duration = start_time.elapsed();
    Ok(report)
}

// =============================================================================
// Tests
// =============================================================================
