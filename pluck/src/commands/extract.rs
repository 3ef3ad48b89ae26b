// pluck/src/commands/extract.rs
//! The `extract` command: read input, run the extractor, emit the report.

use anyhow::{Context, Result};
use log::{debug, info};
use std::fs;
use std::io::{self, Read};
use std::path::Path;

use pluck_core::{Category, ExtractionReport, Extractor};

use crate::cli::{CategoryChoice, ExtractCommand};
use crate::ui::output;

pub fn run(cmd: ExtractCommand) -> Result<()> {
    let content = read_input(cmd.input_file.as_deref())?;
    debug!("Read {} bytes of input.", content.len());

    let extractor = Extractor::new()?;
    let report = extractor.extract_all(&content);
    let categories = selected_categories(&cmd.category);

    if cmd.json_stdout || cmd.json_file.is_some() {
        let json = report_json(&report, &categories)?;
        match &cmd.json_file {
            Some(path) => {
                fs::write(path, json)
                    .with_context(|| format!("Failed to write JSON report to {}", path.display()))?;
                info!("Wrote JSON report to {}.", path.display());
            }
            None => println!("{json}"),
        }
    } else {
        let colored = output::stdout_supports_color();
        let mut stdout = io::stdout().lock();
        output::print_report(&mut stdout, &report, &categories, colored)?;
    }

    let total: usize = categories.iter().map(|&c| report.get(c).len()).sum();
    if total == 0 {
        eprintln!("No matches found.");
    } else {
        info!(
            "Found {} match(es) across {} categor(ies).",
            total,
            categories.len()
        );
    }
    Ok(())
}

/// Reads the input text from a file, or from stdin when no file is given.
fn read_input(input_file: Option<&Path>) -> Result<String> {
    match input_file {
        Some(path) => fs::read_to_string(path)
            .with_context(|| format!("Failed to read input file {}", path.display())),
        None => {
            let mut content = String::new();
            io::stdin()
                .read_to_string(&mut content)
                .context("Failed to read from stdin")?;
            Ok(content)
        }
    }
}

/// Resolves the requested categories, defaulting to all eight in report
/// order. Explicit selections keep their order with duplicates removed.
fn selected_categories(choices: &[CategoryChoice]) -> Vec<Category> {
    if choices.is_empty() {
        return Category::ALL.to_vec();
    }
    let mut categories = Vec::new();
    for choice in choices {
        let category = choice.category();
        if !categories.contains(&category) {
            categories.push(category);
        }
    }
    categories
}

/// Serializes the report for the selected categories as a pretty JSON
/// object, keys in selection order.
fn report_json(report: &ExtractionReport, categories: &[Category]) -> Result<String> {
    let mut object = serde_json::Map::new();
    for &category in categories {
        object.insert(
            category.report_key().to_string(),
            serde_json::json!(report.get(category)),
        );
    }
    serde_json::to_string_pretty(&serde_json::Value::Object(object))
        .context("Failed to serialize extraction report")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_selection_is_all_categories_in_order() {
        assert_eq!(selected_categories(&[]), Category::ALL.to_vec());
    }

    #[test]
    fn explicit_selection_keeps_order_and_dedupes() {
        let choices = [
            CategoryChoice::Hashtags,
            CategoryChoice::Emails,
            CategoryChoice::Hashtags,
        ];
        assert_eq!(
            selected_categories(&choices),
            vec![Category::Hashtag, Category::Email]
        );
    }

    #[test]
    fn json_report_restricts_to_selection() {
        let extractor = Extractor::new().unwrap();
        let report = extractor.extract_all("ping admin@example.com #ok");
        let json = report_json(&report, &[Category::Email]).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        let object = value.as_object().unwrap();
        assert_eq!(object.len(), 1);
        assert_eq!(object["emails"][0], "admin@example.com");
    }
}
