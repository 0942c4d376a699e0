//! # treeops
//!
//! Sequential filesystem tree utilities: parent-directory resolution,
//! recursive file enumeration, and structure-preserving tree copy.
//!
//! ## Operations
//!
//! - [`parent_dir`]: resolve the directory containing a path, without
//!   requiring the path to exist
//! - [`walk_files`]: recursively list the files under a directory
//! - [`copy_tree`]: copy a file or directory tree into a destination
//!   directory, preserving relative structure
//!
//! ## Quick Start
//!
//! ```no_run
//! use std::path::Path;
//! use treeops::{CopyOptions, copy_tree};
//!
//! let report = copy_tree(Path::new("src"), Path::new("dst"), &CopyOptions::default())?;
//! println!("Copied {} files ({} bytes)", report.copied.len(), report.bytes_copied);
//! # Ok::<(), treeops::Error>(())
//! ```
//!
//! ## Behavior
//!
//! - Copying is strictly sequential: one file at a time, no background work.
//! - Empty source directories are not recreated at the destination.
//! - Missing destination directories are created on demand with default
//!   permissions.
//! - The first error aborts the operation; files copied before the failure
//!   remain on disk.
//! - Every file handle is a scoped local, released on success and on error
//!   alike before the call returns.
//!
//! ## Optional Features
//!
//! | Feature | Description |
//! |---------|-------------|
//! | `tracing` | Route warnings through the tracing crate |
//! | `serde` | Serialize/Deserialize for [`CopyOptions`] |
//! | `full` | Enable all optional features |

mod copy;
mod error;
mod options;
mod parent;
mod utils;
mod walk;

pub use copy::{CopyReport, copy_tree};
pub use error::{Error, Result};
pub use options::CopyOptions;
pub use parent::parent_dir;
pub use walk::walk_files;
