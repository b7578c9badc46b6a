//! Main application entry point (CLI binary).
//!
//! This is a thin wrapper around the `url_inspector` library that handles:
//! - Command-line argument parsing
//! - Logger initialization
//! - User-facing output formatting
//!
//! All core functionality is implemented in the library crate.

use anyhow::{Context, Result};
use clap::Parser;
use std::process;

use url_inspector::initialization::init_logger_with;
use url_inspector::{analyze, export, Opt};

fn main() -> Result<()> {
    // Parse command-line arguments
    let opt = Opt::parse();

    // Initialize logger based on options
    let log_level = opt.log_level.clone();
    let log_format = opt.log_format.clone();
    init_logger_with(log_level.into(), log_format).context("Failed to initialize logger")?;

    match analyze(&opt.url) {
        Ok(report) => {
            println!("{}", export::render(&report, &opt.output));
            Ok(())
        }
        Err(e) => {
            // The error's Display string is the exact user-facing message.
            eprintln!("{e}");
            process::exit(1);
        }
    }
}
