//! Error types for treeops.
//!
//! This module provides the [`Error`] enum containing all possible errors
//! that can occur during path resolution, traversal, and copy operations,
//! and the [`Result`] type alias.
//!
//! # Error Categories
//!
//! | Category | Errors |
//! |----------|--------|
//! | Validation | [`Error::InvalidPath`], [`Error::DestinationNotDirectory`] |
//! | Missing | [`Error::NotFound`] |
//! | IO | [`Error::Metadata`], [`Error::ReadDir`], [`Error::CreateDir`], [`Error::CopyFile`] |

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Result type for treeops operations.
///
/// This is a type alias for `std::result::Result<T, Error>`.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur during treeops operations.
///
/// All errors carry the path (or path pair) that failed so a deep failure in
/// a recursive copy remains identifiable at the top-level caller.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// The input path could not be resolved
    #[error("invalid path {path}: {source}")]
    InvalidPath {
        /// The offending path
        path: PathBuf,
        /// Underlying error
        source: io::Error,
    },

    /// The path does not exist
    #[error("path does not exist: {0}")]
    NotFound(PathBuf),

    /// The destination exists and is not a directory
    #[error("destination must be a directory: {0}")]
    DestinationNotDirectory(PathBuf),

    /// Failed to read metadata for a path
    #[error("failed to read metadata for {path}: {source}")]
    Metadata {
        /// The path being inspected
        path: PathBuf,
        /// Underlying error
        source: io::Error,
    },

    /// Failed to list a directory during traversal
    #[error("failed to read directory {path}: {source}")]
    ReadDir {
        /// The directory being listed
        path: PathBuf,
        /// Underlying error
        source: io::Error,
    },

    /// Failed to create a destination directory
    #[error("failed to create directory {path}: {source}")]
    CreateDir {
        /// The directory being created
        path: PathBuf,
        /// Underlying error
        source: io::Error,
    },

    /// Failed to copy a single file
    #[error("failed to copy {src} to {dst}: {source}")]
    CopyFile {
        /// Source file path
        src: PathBuf,
        /// Destination file path
        dst: PathBuf,
        /// Underlying error
        source: io::Error,
    },
}
