// pluck/src/ui/output.rs
//! Human-readable report rendering.
//!
//! Prints the extraction report as a sequence of category headings with one
//! `  - item` line per match. Headings are colored only when requested
//! (stdout is a terminal).

use owo_colors::OwoColorize;
use std::io::{self, Write};

use pluck_core::{Category, ExtractionReport};

/// Whether stdout is attached to a terminal and should receive colors.
pub fn stdout_supports_color() -> bool {
    use is_terminal::IsTerminal;
    io::stdout().is_terminal()
}

/// Writes the report for the selected categories, in the order given.
pub fn print_report<W: Write>(
    out: &mut W,
    report: &ExtractionReport,
    categories: &[Category],
    colored: bool,
) -> io::Result<()> {
    writeln!(out, "Extraction Results:")?;
    for &category in categories {
        writeln!(out)?;
        if colored {
            writeln!(out, "{}:", category.title().cyan().bold())?;
        } else {
            writeln!(out, "{}:", category.title())?;
        }
        for item in report.get(category) {
            writeln!(out, "  - {item}")?;
        }
    }
    Ok(())
}
