//! `tree` command - print the visible menu tree.

use std::path::PathBuf;

use clap::Args;

use vx_registry::Registry;
use vx_render::{MenuItem, menu};
use vx_source::FsPageSource;
use vx_versions::VersionSet;

use crate::commands::load_config;
use crate::error::CliError;
use crate::output::Output;

/// Arguments for the `tree` command.
#[derive(Args)]
pub(crate) struct TreeArgs {
    /// Path to vx.toml. Discovered upward from the current directory when
    /// omitted.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Version url name to render the tree for (e.g. "net").
    #[arg(long)]
    version: Option<String>,
}

impl TreeArgs {
    /// Print the menu tree the way a visitor of the given version sees it.
    pub(crate) fn execute(self, output: &Output) -> Result<(), CliError> {
        let config = load_config(self.config.as_deref())?;
        let versions = VersionSet::new(config.versions)?;
        let current_version = versions.current_name(self.version.as_deref());

        let source = FsPageSource::new(&config.site.root_dir);
        let registry = Registry::load(config.site.views_root.as_str(), source)?;
        let snapshot = registry.snapshot();

        let items = menu(&snapshot, "/", current_version);
        if items.is_empty() {
            output.info("(no visible pages)");
            return Ok(());
        }
        for item in &items {
            print_item(output, item);
        }

        Ok(())
    }
}

fn print_item(output: &Output, item: &MenuItem) {
    let indent = "  ".repeat(item.level);
    let title = if item.title.is_empty() {
        "(untitled)"
    } else {
        &item.title
    };
    output.info(&format!("{indent}{title}  {}", item.url));

    for child in &item.children {
        print_item(output, child);
    }
}
