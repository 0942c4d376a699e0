//! Single file copy.
//!
//! The copy opens the source for reading, creates (or truncates) the
//! destination, and streams all bytes. Both handles are scoped locals,
//! dropped on every exit path, success or failure, before control returns
//! to the caller.

use std::fs::{self, File, Metadata};
use std::io;
use std::path::Path;

use crate::error::{Error, Result};
use crate::options::CopyOptions;

use super::utils::{copy_file_contents, preserve_timestamps};

/// Result of a single file copy (internal use)
#[derive(Debug, Clone, Copy)]
pub(crate) struct FileCopied {
    /// Number of bytes written
    pub bytes: u64,
    /// Whether a missing ancestor directory had to be created
    pub created_dir: bool,
}

/// Copy one regular file to an exact destination path.
///
/// Missing ancestor directories of `dst` are created first, with default
/// permissions. An existing destination file is truncated and overwritten.
/// `src_meta` is the already-fetched source metadata; permission bits and
/// timestamps are carried over from it when the options ask for them.
pub(crate) fn copy_one(
    src: &Path,
    dst: &Path,
    src_meta: &Metadata,
    options: &CopyOptions,
) -> Result<FileCopied> {
    let mut created_dir = false;
    if let Some(parent) = dst.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            fs::create_dir_all(parent).map_err(|source| Error::CreateDir {
                path: parent.to_path_buf(),
                source,
            })?;
            created_dir = true;
        }
    }

    let src_file = File::open(src).map_err(|source| copy_error(src, dst, source))?;
    let dst_file = File::create(dst).map_err(|source| copy_error(src, dst, source))?;
    let bytes = copy_file_contents(&src_file, &dst_file, src_meta.len())
        .map_err(|source| copy_error(src, dst, source))?;

    if options.preserve_permissions {
        fs::set_permissions(dst, src_meta.permissions())
            .map_err(|source| copy_error(src, dst, source))?;
    }
    if options.preserve_timestamps {
        // Best effort; a stale timestamp is not worth failing the copy
        if let Err(e) = preserve_timestamps(src_meta, dst) {
            options.warn(&format!(
                "failed to preserve timestamps on {}: {}",
                dst.display(),
                e
            ));
        }
    }

    Ok(FileCopied { bytes, created_dir })
}

fn copy_error(src: &Path, dst: &Path, source: io::Error) -> Error {
    Error::CopyFile {
        src: src.to_path_buf(),
        dst: dst.to_path_buf(),
        source,
    }
}

// =============================================================================
// Tests
// =============================================================================
