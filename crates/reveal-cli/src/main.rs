//! reveal-init CLI
//!
//! Copies a trimmed reveal.js skeleton into a new presentation directory.

mod cli;
mod commands;
mod defaults;
mod error;

use clap::Parser;
use colored::Colorize;
use tracing_subscriber::EnvFilter;

use cli::Cli;
use commands::InitOptions;
use error::{CliError, Result};

fn main() {
    if let Err(e) = run() {
        eprintln!("{}: {}", "error".red().bold(), e);
        let mut cause = std::error::Error::source(&e);
        while let Some(err) = cause {
            eprintln!("  {} {}", "caused by:".yellow(), err);
            cause = std::error::Error::source(err);
        }
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let defaults = match defaults::defaults_path() {
        Some(path) => defaults::load(&path)?,
        None => Vec::new(),
    };
    let cli = Cli::parse_from(defaults::merge(std::env::args_os(), defaults));

    if cli.verbose {
        init_logging()?;
        tracing::debug!("Verbose mode enabled");
    }

    let options = InitOptions::from_cli(cli)?;
    let report = commands::run_init(&options)?;
    tracing::debug!(
        destination = %options.destination.display(),
        copied = report.copied,
        "Done"
    );
    Ok(())
}

fn init_logging() -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new("debug"))
        .map_err(|e| CliError::Logging {
            message: e.to_string(),
        })?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|e| CliError::Logging {
            message: e.to_string(),
        })
}
