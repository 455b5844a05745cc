//! In-memory page source for tests.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use crate::source::{PageSource, SourceError};

/// In-memory page source.
///
/// Paths are stored verbatim; `map_root` is the identity mapping, so tests
/// register files under their logical paths (e.g. `/Views/Documentation/index.page`).
/// Enumeration order is the sorted path order, which keeps builds
/// deterministic without a real filesystem.
///
/// # Example
///
/// ```
/// use vx_source::{MockPageSource, PageSource};
///
/// let source = MockPageSource::new()
///     .with_file("/Views/Documentation/index.page", "Title = \"Home\";");
///
/// let files = source.enumerate(source.map_root("/Views").as_path()).unwrap();
/// assert_eq!(files.len(), 1);
/// ```
#[derive(Debug, Default)]
pub struct MockPageSource {
    files: BTreeMap<PathBuf, String>,
}

impl MockPageSource {
    /// Create an empty mock source.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a file with the given content.
    #[must_use]
    pub fn with_file(mut self, path: impl Into<PathBuf>, content: impl Into<String>) -> Self {
        self.files.insert(path.into(), content.into());
        self
    }
}

impl PageSource for MockPageSource {
    fn map_root(&self, logical_root: &str) -> PathBuf {
        PathBuf::from(logical_root)
    }

    fn enumerate(&self, root: &Path) -> Result<Vec<PathBuf>, SourceError> {
        Ok(self
            .files
            .keys()
            .filter(|path| path.starts_with(root))
            .cloned()
            .collect())
    }

    fn read(&self, path: &Path) -> Result<String, SourceError> {
        self.files
            .get(path)
            .cloned()
            .ok_or_else(|| SourceError::NotFound(path.to_path_buf()))
    }
}
