// pluck/src/cli.rs
//! This file defines the command-line interface (CLI) for the pluck
//! application, including all available commands and their arguments.

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use pluck_core::Category;

/// Top-level CLI definition.
#[derive(Parser, Debug)]
#[command(
    name = "pluck",
    author,
    version = env!("CARGO_PKG_VERSION"),
    about = "Extract structured data from text",
    long_about = "Pluck is a command-line utility for extracting structured substrings from unstructured text. It applies a fixed set of pattern definitions (emails, URLs, phone numbers, times, HTML tags, currency amounts, credit-card-like numbers, hashtags) and reports all matches grouped by category.",
    arg_required_else_help = true,
)]
pub struct Cli {
    /// Disable informational messages
    #[arg(long, short = 'q', global = true, help = "Suppress all informational and debug messages.")]
    pub quiet: bool,

    /// Enable debug logging (overrides RUST_LOG for the 'pluck' crates to DEBUG)
    #[arg(long, short = 'd', global = true, help = "Enable debug logging.")]
    pub debug: bool,

    /// The subcommand to run
    #[command(subcommand)]
    pub command: Commands,
}

/// All available commands for the `pluck` CLI.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Extracts structured substrings from an input file or stdin.
    #[command(about = "Extracts structured substrings from an input file or stdin.")]
    Extract(ExtractCommand),

    /// Runs the extractor over the built-in sample text and prints the report.
    #[command(about = "Runs the extractor over the built-in sample text and prints the report.")]
    Sample,

    /// Lists the built-in pattern definitions.
    #[command(about = "Lists the built-in pattern definitions.")]
    Patterns,
}

/// Arguments for the `extract` command.
#[derive(Parser, Debug)]
pub struct ExtractCommand {
    /// Path to an input file (reads from stdin if not provided).
    #[arg(long, short = 'i', value_name = "FILE", help = "Read input from a specified file instead of stdin.")]
    pub input_file: Option<PathBuf>,

    /// Limit the report to these categories (comma-separated).
    #[arg(long = "category", short = 'c', value_name = "NAME", value_delimiter = ',', help = "Limit the report to these categories (comma-separated).")]
    pub category: Vec<CategoryChoice>,

    /// Export the extraction report to a JSON file.
    #[arg(long = "json-file", value_name = "FILE", help = "Export the extraction report to a JSON file.")]
    pub json_file: Option<PathBuf>,

    /// Print the extraction report as JSON to stdout (conflicts with --json-file).
    #[arg(long = "json-stdout", conflicts_with = "json_file", help = "Export the extraction report to stdout as JSON.")]
    pub json_stdout: bool,
}

/// Enum for selecting extraction categories on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum CategoryChoice {
    Emails,
    Urls,
    PhoneNumbers,
    Times,
    HtmlTags,
    Currency,
    CreditCards,
    Hashtags,
}

impl CategoryChoice {
    /// The core category this CLI choice selects.
    pub fn category(self) -> Category {
        match self {
            CategoryChoice::Emails => Category::Email,
            CategoryChoice::Urls => Category::Url,
            CategoryChoice::PhoneNumbers => Category::Phone,
            CategoryChoice::Times => Category::Time,
            CategoryChoice::HtmlTags => Category::HtmlTag,
            CategoryChoice::Currency => Category::Currency,
            CategoryChoice::CreditCards => Category::CreditCard,
            CategoryChoice::Hashtags => Category::Hashtag,
        }
    }
}
