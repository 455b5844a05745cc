//! `check` command - build the registry and report problems.

use std::path::PathBuf;

use clap::Args;

use vx_registry::Registry;
use vx_source::FsPageSource;
use vx_versions::VersionSet;

use crate::commands::load_config;
use crate::error::CliError;
use crate::output::Output;

/// Arguments for the `check` command.
#[derive(Args)]
pub(crate) struct CheckArgs {
    /// Path to vx.toml. Discovered upward from the current directory when
    /// omitted.
    #[arg(long)]
    config: Option<PathBuf>,
}

impl CheckArgs {
    /// Build the registry once and report what it contains.
    ///
    /// A build failure surfaces as the command's error; the exit code tells
    /// CI the content is broken.
    pub(crate) fn execute(self, output: &Output) -> Result<(), CliError> {
        let config = load_config(self.config.as_deref())?;
        let versions = VersionSet::new(config.versions)?;

        let source = FsPageSource::new(&config.site.root_dir);
        let registry = Registry::load(config.site.views_root.as_str(), source)?;
        let snapshot = registry.snapshot();

        output.success(&format!(
            "{} pages indexed under {}",
            snapshot.len(),
            config.site.views_root
        ));

        if let Some(default) = versions.default_version() {
            output.info(&format!(
                "{} versions, default '{}'",
                versions.iter().count(),
                default.name
            ));
        }

        Ok(())
    }
}
