//! Source trait and error type.

use std::path::{Path, PathBuf};

/// File extension of page-description files.
pub const PAGE_FILE_EXTENSION: &str = ".page";

/// Error raised by a page source.
#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    /// File does not exist in this source.
    #[error("file not found: {}", .0.display())]
    NotFound(PathBuf),
    /// I/O error while enumerating or reading.
    #[error("{}: {source}", .path.display())]
    Io {
        /// Path the operation failed on.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
}

impl SourceError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

/// Supplies page files to the registry builder.
///
/// All three operations correspond to collaborators injected from the
/// hosting environment: path mapping, directory enumeration, and content
/// reading. Implementations must be usable from multiple threads.
pub trait PageSource: Send + Sync {
    /// Map a logical content root (e.g. `/Views/Documentation`) to a
    /// filesystem directory.
    fn map_root(&self, logical_root: &str) -> PathBuf;

    /// Enumerate all page files under `root`, recursively.
    ///
    /// Only files carrying [`PAGE_FILE_EXTENSION`] are returned. The order
    /// of the returned paths is unspecified; callers impose their own.
    ///
    /// # Errors
    ///
    /// Returns [`SourceError`] if the directory cannot be read.
    fn enumerate(&self, root: &Path) -> Result<Vec<PathBuf>, SourceError>;

    /// Read the content of a single page file.
    ///
    /// # Errors
    ///
    /// Returns [`SourceError`] if the file does not exist or cannot be read.
    fn read(&self, path: &Path) -> Result<String, SourceError>;
}
