//! CLI command implementations.

mod check;
mod tree;

pub(crate) use check::CheckArgs;
pub(crate) use tree::TreeArgs;

use std::path::{Path, PathBuf};

use vx_config::Config;

use crate::error::CliError;

/// Load configuration from an explicit path or by upward discovery.
pub(crate) fn load_config(explicit: Option<&Path>) -> Result<Config, CliError> {
    let config = match explicit {
        Some(path) => Config::load(path)?,
        None => Config::discover(&current_dir())?,
    };
    Ok(config)
}

fn current_dir() -> PathBuf {
    std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."))
}
