//! CLI error types.

use vx_config::ConfigError;
use vx_registry::BuildError;
use vx_versions::VersionSetError;

/// CLI error type.
#[derive(Debug, thiserror::Error)]
pub(crate) enum CliError {
    #[error("{0}")]
    Config(#[from] ConfigError),

    #[error("{0}")]
    Build(#[from] BuildError),

    #[error("{0}")]
    Versions(#[from] VersionSetError),
}
