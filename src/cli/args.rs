//! Command-line interface definitions.

use clap::{ColorChoice, Parser, Subcommand};
use std::path::PathBuf;

/// mdblog CLI
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Control colored output (auto, always, never)
    #[arg(long, global = true, default_value = "auto")]
    pub color: ColorChoice,

    /// Config file path (default: mdblog.toml)
    #[arg(short = 'C', long, default_value = "mdblog.toml", value_hint = clap::ValueHint::FilePath)]
    pub config: PathBuf,

    /// subcommands; bare invocation just prints help
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Start the development server
    #[command(visible_alias = "s")]
    Serve {
        #[command(flatten)]
        serve_args: ServeArgs,
    },
}

/// Serve command arguments
#[derive(clap::Args, Debug, Clone)]
pub struct ServeArgs {
    /// Port number to listen on
    #[arg(short, long)]
    pub port: Option<u16>,

    /// Open the site in the default browser after startup
    #[arg(short, long, action = clap::ArgAction::Set, num_args = 0..=1, default_missing_value = "true", require_equals = false)]
    pub open: Option<bool>,

    /// Enable verbose output for debugging
    #[arg(short = 'V', long)]
    pub verbose: bool,
}
