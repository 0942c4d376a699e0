//! Recursive file enumeration.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};
use crate::utils::path::normalize;
use crate::utils::stat;

/// Recursively list the files under `path`.
///
/// If `path` is a file rather than a directory, the result is a single entry
/// holding the normalized input path. For a directory, the result is every
/// non-directory entry found by depth-first descent: entries at each level
/// are visited in name order, and a subdirectory is descended the moment it
/// is reached. Directories themselves never appear in the output, so
/// directories containing no files contribute nothing.
///
/// Symlinks are not followed during the descent; a symlink is reported as a
/// leaf entry even when it points at a directory.
///
/// The returned paths extend the normalized input, so the output format is
/// the same whether or not the input carried a trailing separator. The
/// result is a snapshot: nothing guarantees the entries still exist once the
/// call returns.
///
/// # Example
///
/// ```no_run
/// use std::path::Path;
/// use treeops::walk_files;
///
/// for file in walk_files(Path::new("src"))? {
///     println!("{}", file.display());
/// }
/// # Ok::<(), treeops::Error>(())
/// ```
///
/// # Errors
///
/// Returns [`Error::NotFound`] when the path does not exist,
/// [`Error::ReadDir`] when a directory cannot be listed, and
/// [`Error::Metadata`] when an entry cannot be classified.
pub fn walk_files(path: &Path) -> Result<Vec<PathBuf>> {
    let meta = stat(path)?;
    let root = normalize(path);
    if !meta.is_dir() {
        return Ok(vec![root]);
    }

    let mut files = Vec::new();
    // Explicit traversal stack instead of recursion, so tree depth is not
    // bounded by the call stack. Each directory pushes its children in
    // reverse name order; popping then matches a name-ordered recursive
    // descent.
    let mut pending: Vec<(PathBuf, bool)> = vec![(root, true)];
    while let Some((current, is_dir)) = pending.pop() {
        if !is_dir {
            files.push(current);
            continue;
        }

        let entries = fs::read_dir(&current).map_err(|source| Error::ReadDir {
            path: current.clone(),
            source,
        })?;
        let mut children = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|source| Error::ReadDir {
                path: current.clone(),
                source,
            })?;
            let file_type = entry.file_type().map_err(|source| Error::Metadata {
                path: entry.path(),
                source,
            })?;
            children.push((entry.path(), file_type.is_dir()));
        }
        children.sort_by(|a, b| a.0.cmp(&b.0));
        while let Some(child) = children.pop() {
            pending.push(child);
        }
    }
    Ok(files)
}
