//! VX CLI - view registry engine.
//!
//! Provides commands for:
//! - `check`: Build the registry and report problems
//! - `tree`: Print the visible menu tree

mod commands;
mod error;
mod output;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use commands::{CheckArgs, TreeArgs};
use output::Output;

/// VX - view registry engine.
#[derive(Parser)]
#[command(name = "vx", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable info-level logging.
    #[arg(long, short, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Build the registry and report problems.
    Check(CheckArgs),
    /// Print the visible menu tree.
    Tree(TreeArgs),
}

fn main() {
    let cli = Cli::parse();
    let output = Output::new();

    // --verbose enables INFO level, otherwise use RUST_LOG or default to WARN
    let filter = if cli.verbose {
        EnvFilter::new("info")
    } else {
        EnvFilter::from_default_env()
    };
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let result = match cli.command {
        Commands::Check(args) => args.execute(&output),
        Commands::Tree(args) => args.execute(&output),
    };

    if let Err(err) = result {
        output.error(&format!("Error: {err}"));
        std::process::exit(1);
    }
}
