//! Registry error types.

use std::path::PathBuf;

use vx_source::SourceError;

use crate::consts::VIEWS_ROOT;

/// Error aborting a registry build.
///
/// A build is all-or-nothing: any of these leaves the previous snapshot (if
/// one exists) in place and publishes nothing.
#[derive(Debug, thiserror::Error)]
pub enum BuildError {
    /// The logical content root is not under [`VIEWS_ROOT`].
    #[error("view root '{0}' is not under {VIEWS_ROOT}")]
    Configuration(String),
    /// A page file violates the structural contract.
    #[error("{}: {reason}", .path.display())]
    MalformedSource {
        /// Offending page file.
        path: PathBuf,
        /// What was wrong with it.
        reason: String,
    },
    /// The page source failed to enumerate or read.
    #[error(transparent)]
    Source(#[from] SourceError),
}

impl BuildError {
    pub(crate) fn malformed(path: impl Into<PathBuf>, reason: impl Into<String>) -> Self {
        Self::MalformedSource {
            path: path.into(),
            reason: reason.into(),
        }
    }
}

/// Error raised by a registry query.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LookupError {
    /// No page is registered under this key.
    #[error("no view registered for key '{0}'")]
    KeyNotFound(String),
    /// No page is registered under this url.
    #[error("no view registered for url '{0}'")]
    UrlNotFound(String),
}
