//! Parent directory resolution.

use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::utils::path::absolutize;

/// Resolve the absolute path of the directory containing `path`.
///
/// The input is made absolute against the current working directory and
/// normalized lexically; it does not need to exist on disk. A trailing
/// separator is ignored, so `/root/foo/` and `/root/foo` resolve to the same
/// parent. The parent of the filesystem root is the root itself.
///
/// # Example
///
/// ```no_run
/// use std::path::{Path, PathBuf};
/// use treeops::parent_dir;
///
/// let parent = parent_dir(Path::new("/root/foo"))?;
/// assert_eq!(parent, PathBuf::from("/root"));
/// # Ok::<(), treeops::Error>(())
/// ```
///
/// # Errors
///
/// Returns [`Error::InvalidPath`](crate::Error::InvalidPath) when the path
/// cannot be resolved against the current working directory.
pub fn parent_dir(path: &Path) -> Result<PathBuf> {
    let resolved = absolutize(path)?;
    match resolved.parent() {
        Some(parent) => Ok(parent.to_path_buf()),
        None => Ok(resolved),
    }
}
