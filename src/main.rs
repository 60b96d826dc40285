//! mdblog - a minimal markdown blog with a built-in development server.

mod cli;
mod config;
mod css;
mod logger;
mod render;
mod route;
mod serve;
mod site;
mod utils;

use anyhow::Result;
use clap::{ColorChoice, CommandFactory, Parser};
use cli::{Cli, Commands};
use config::BlogConfig;
use site::Site;

fn main() -> Result<()> {
    // Setup global Ctrl+C handler (before any blocking operations)
    serve::lifecycle::setup_shutdown_handler()?;

    let cli = Cli::parse();

    // Set global color override based on CLI option
    match cli.color {
        ColorChoice::Always => owo_colors::set_override(true),
        ColorChoice::Never => owo_colors::set_override(false),
        ColorChoice::Auto => {} // owo-colors auto-detects TTY
    }

    match &cli.command {
        Some(Commands::Serve { serve_args }) => {
            logger::set_verbose(serve_args.verbose);

            let mut config = BlogConfig::load(&cli.config)?;
            config.apply_serve_args(serve_args);

            let site = Site::build(config)?;
            serve::serve(site)
        }
        None => {
            Cli::command().print_help()?;
            Ok(())
        }
    }
}
