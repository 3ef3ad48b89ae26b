// pluck/src/commands/sample.rs
//! The `sample` command: the reference driver. Runs `extract_all` over a
//! fixed sample text and prints the human-readable report.

use anyhow::Result;
use std::io;

use pluck_core::{Category, Extractor};

use crate::ui::output;

/// Fixed sample text exercising most of the built-in categories.
pub const SAMPLE_TEXT: &str = r#"
Contact us at user@example.com or firstname.lastname@company.co.uk
Visit our website at https://www.example.com or http://subdomain.example.org/page
Call us at (123) 456-7890 or 123-456-7890 or 123.456.7890
Meeting times: 14:30 or 2:30 PM
<div class="example">Hello</div>
<img src="image.jpg" alt="description">
Price: $19.99 or $1,234.56
"#;

pub fn run() -> Result<()> {
    let extractor = Extractor::new()?;
    let report = extractor.extract_all(SAMPLE_TEXT);

    let colored = output::stdout_supports_color();
    let mut stdout = io::stdout().lock();
    output::print_report(&mut stdout, &report, &Category::ALL, colored)?;
    Ok(())
}
