//! Configuration options for tree copy operations.
//!
//! This module provides [`CopyOptions`] for configuring the metadata
//! behavior of [`copy_tree`](crate::copy_tree).
//!
//! # Example
//!
//! ```
//! use treeops::CopyOptions;
//!
//! let options = CopyOptions::default()
//!     .with_permissions()
//!     .with_timestamps();
//! ```

/// Options for copy operations.
///
/// Use [`Default::default()`] for the stock behavior, then customize using
/// the builder methods. The copy mechanics themselves are fixed (sequential,
/// create-or-truncate, structure-preserving); these options only govern the
/// metadata carried onto the copied files.
///
/// # Default Values
///
/// | Field | Default | Description |
/// |-------|---------|-------------|
/// | `preserve_permissions` | `false` | Copy file permission bits |
/// | `preserve_timestamps` | `false` | Copy file mtime/atime |
///
/// By default a copied file gets the process umask and the time of the copy.
#[derive(Debug, Clone, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CopyOptions {
    /// Whether to copy source permission bits onto each destination file
    pub preserve_permissions: bool,

    /// Whether to copy source mtime/atime onto each destination file
    ///
    /// Timestamp preservation is best effort: a failure produces a warning,
    /// not an error.
    pub preserve_timestamps: bool,

    /// Callback for warnings (optional)
    ///
    /// If not set and the `tracing` feature is enabled, warnings are logged
    /// via tracing. Otherwise, warnings are silently dropped.
    #[cfg_attr(feature = "serde", serde(skip))]
    pub warn_handler: Option<fn(&str)>,
}

impl CopyOptions {
    /// Preserve file permission bits on copied files
    #[must_use]
    pub fn with_permissions(mut self) -> Self {
        self.preserve_permissions = true;
        self
    }

    /// Preserve modification and access times on copied files
    #[must_use]
    pub fn with_timestamps(mut self) -> Self {
        self.preserve_timestamps = true;
        self
    }

    /// Install a warning handler
    #[must_use]
    pub fn with_warn_handler(mut self, handler: fn(&str)) -> Self {
        self.warn_handler = Some(handler);
        self
    }

    pub(crate) fn warn(&self, msg: &str) {
        if let Some(handler) = self.warn_handler {
            handler(msg);
        } else {
            #[cfg(feature = "tracing")]
            tracing::warn!("{}", msg);
        }
    }
}
