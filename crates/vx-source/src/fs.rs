//! Filesystem page source.

use std::fs;
use std::path::{Path, PathBuf};

use crate::source::{PAGE_FILE_EXTENSION, PageSource, SourceError};

/// Page source backed by a site directory on disk.
///
/// Logical roots are resolved relative to the site root, so
/// `/Views/Documentation` maps to `<site_root>/Views/Documentation`.
#[derive(Debug, Clone)]
pub struct FsPageSource {
    site_root: PathBuf,
}

impl FsPageSource {
    /// Create a source rooted at the given site directory.
    #[must_use]
    pub fn new(site_root: impl Into<PathBuf>) -> Self {
        Self {
            site_root: site_root.into(),
        }
    }

    /// Walk a directory and collect page files.
    ///
    /// Hidden files and directories (leading dot) are skipped entirely;
    /// anything else is kept if it carries the page extension.
    fn walk(dir: &Path, files: &mut Vec<PathBuf>) -> Result<(), SourceError> {
        let entries = fs::read_dir(dir).map_err(|e| SourceError::io(dir, e))?;

        for entry in entries {
            let entry = entry.map_err(|e| SourceError::io(dir, e))?;
            let name = entry.file_name();
            if name.to_string_lossy().starts_with('.') {
                continue;
            }

            let path = entry.path();
            let is_dir = entry
                .file_type()
                .map_err(|e| SourceError::io(&path, e))?
                .is_dir();

            if is_dir {
                Self::walk(&path, files)?;
            } else if name.to_string_lossy().ends_with(PAGE_FILE_EXTENSION) {
                files.push(path);
            } else {
                tracing::debug!(path = %path.display(), "skipping non-page file");
            }
        }

        Ok(())
    }
}

impl PageSource for FsPageSource {
    fn map_root(&self, logical_root: &str) -> PathBuf {
        let mut root = self.site_root.clone();
        for segment in logical_root.split('/').filter(|s| !s.is_empty()) {
            root.push(segment);
        }
        root
    }

    fn enumerate(&self, root: &Path) -> Result<Vec<PathBuf>, SourceError> {
        let mut files = Vec::new();
        Self::walk(root, &mut files)?;
        Ok(files)
    }

    fn read(&self, path: &Path) -> Result<String, SourceError> {
        fs::read_to_string(path).map_err(|e| match e.kind() {
            std::io::ErrorKind::NotFound => SourceError::NotFound(path.to_path_buf()),
            _ => SourceError::io(path, e),
        })
    }
}
