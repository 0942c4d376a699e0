//! Shared internal helpers.

pub(crate) mod path;

use std::fs::{self, Metadata};
use std::io;
use std::path::Path;

use crate::error::{Error, Result};

/// Stat a path, following symlinks.
///
/// A missing entry maps to [`Error::NotFound`]; any other failure maps to
/// [`Error::Metadata`] with the path attached.
pub(crate) fn stat(path: &Path) -> Result<Metadata> {
    fs::metadata(path).map_err(|source| {
        if source.kind() == io::ErrorKind::NotFound {
            Error::NotFound(path.to_path_buf())
        } else {
            Error::Metadata {
                path: path.to_path_buf(),
                source,
            }
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_stat_missing_maps_to_not_found() {
        let dir = tempdir().unwrap();
        let result = stat(&dir.path().join("missing"));
        assert!(matches!(result, Err(Error::NotFound(_))));
    }

    #[test]
    fn test_stat_existing() {
        let dir = tempdir().unwrap();
        let file = dir.path().join("file.txt");
        std::fs::write(&file, "content").unwrap();

        let meta = stat(&file).unwrap();
        assert!(meta.is_file());
    }
}
