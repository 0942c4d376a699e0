//! Lexical path helpers.
//!
//! These operate on path components only and never touch the filesystem
//! (beyond a cwd lookup in [`absolutize`]), so they work for paths that do
//! not exist on disk.

use std::env;
use std::path::{Component, Path, PathBuf};

use crate::error::{Error, Result};

/// Normalize a path lexically.
///
/// Drops `.` segments and duplicate separators, and resolves `..` against
/// the preceding component. `..` immediately under the root stays at the
/// root; leading `..` segments of a relative path are kept. An empty input
/// normalizes to `.`. Trailing separators disappear as a side effect of the
/// component walk.
pub(crate) fn normalize(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => match out.components().next_back() {
                Some(Component::Normal(_)) => {
                    out.pop();
                }
                // Cannot go above the root
                Some(Component::RootDir) | Some(Component::Prefix(_)) => {}
                Some(Component::ParentDir) | Some(Component::CurDir) | None => {
                    out.push(Component::ParentDir.as_os_str());
                }
            },
            other => out.push(other.as_os_str()),
        }
    }
    if out.as_os_str().is_empty() {
        out.push(Component::CurDir.as_os_str());
    }
    out
}

/// Resolve `path` to an absolute, normalized form.
///
/// Relative paths are joined onto the current working directory; the result
/// is then normalized lexically. The target does not need to exist.
///
/// # Errors
///
/// Returns [`Error::InvalidPath`] when the current working directory cannot
/// be determined.
pub(crate) fn absolutize(path: &Path) -> Result<PathBuf> {
    if path.is_absolute() {
        return Ok(normalize(path));
    }
    let cwd = env::current_dir().map_err(|source| Error::InvalidPath {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(normalize(&cwd.join(path)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_drops_cur_dir_segments() {
        assert_eq!(normalize(Path::new("a/./b")), PathBuf::from("a/b"));
        assert_eq!(normalize(Path::new("./a")), PathBuf::from("a"));
    }

    #[test]
    fn test_normalize_resolves_parent_segments() {
        assert_eq!(normalize(Path::new("a/b/..")), PathBuf::from("a"));
        assert_eq!(normalize(Path::new("a/../b")), PathBuf::from("b"));
    }

    #[test]
    fn test_normalize_keeps_leading_parent_segments() {
        assert_eq!(normalize(Path::new("..")), PathBuf::from(".."));
        assert_eq!(normalize(Path::new("../..")), PathBuf::from("../.."));
        assert_eq!(normalize(Path::new("../a/..")), PathBuf::from(".."));
    }

    #[test]
    fn test_normalize_collapses_duplicate_separators() {
        assert_eq!(normalize(Path::new("a//b")), PathBuf::from("a/b"));
    }

    #[test]
    fn test_normalize_strips_trailing_separator() {
        assert_eq!(normalize(Path::new("a/b/")), PathBuf::from("a/b"));
    }

    #[test]
    fn test_normalize_empty_is_cur_dir() {
        assert_eq!(normalize(Path::new("")), PathBuf::from("."));
        assert_eq!(normalize(Path::new("a/..")), PathBuf::from("."));
    }

    #[cfg(unix)]
    #[test]
    fn test_normalize_clamps_at_root() {
        assert_eq!(normalize(Path::new("/..")), PathBuf::from("/"));
        assert_eq!(normalize(Path::new("/../a")), PathBuf::from("/a"));
    }

    #[test]
    fn test_absolutize_absolute_passthrough() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("x/./y");
        assert_eq!(absolutize(&input).unwrap(), dir.path().join("x/y"));
    }

    #[test]
    fn test_absolutize_relative_joins_cwd() {
        let cwd = env::current_dir().unwrap();
        assert_eq!(
            absolutize(Path::new("some/rel")).unwrap(),
            normalize(&cwd.join("some/rel"))
        );
    }
}
