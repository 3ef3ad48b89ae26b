// pluck/src/main.rs
//! Pluck entry point.
//!
//! Parses the CLI, initializes logging, and dispatches to the requested
//! command.

use anyhow::Result;
use clap::Parser;

use pluck::cli::{Cli, Commands};
use pluck::commands::{extract, patterns, sample};
use pluck::logger;

fn main() -> Result<()> {
    let args = Cli::parse();

    if args.quiet {
        logger::init_logger(Some(log::LevelFilter::Off));
    } else if args.debug {
        logger::init_logger(Some(log::LevelFilter::Debug));
    } else {
        logger::init_logger(None);
    }

    match args.command {
        Commands::Extract(cmd) => extract::run(cmd),
        Commands::Sample => sample::run(),
        Commands::Patterns => patterns::run(),
    }
}
