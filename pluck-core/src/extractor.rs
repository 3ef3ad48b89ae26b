//! The extraction engine.
//!
//! `Extractor` applies the compiled built-in patterns to input text. It is
//! read-only after construction: every operation is a pure function of the
//! pattern set and the input, so a single instance may be shared freely
//! across threads.
//!
//! License: MIT OR Apache-2.0

use anyhow::{Context, Result};
use log::warn;
use std::sync::Arc;

use crate::category::Category;
use crate::compiler::{builtin_patterns, CompiledPatterns};
use crate::report::ExtractionReport;

/// Extracts structured substrings from unstructured text using the eight
/// built-in pattern definitions.
#[derive(Debug, Clone)]
pub struct Extractor {
    patterns: Arc<CompiledPatterns>,
}

impl Extractor {
    /// Creates an extractor holding the fixed built-in pattern set.
    ///
    /// Fails only if the embedded rule set is broken, which is a build
    /// defect rather than a runtime condition.
    pub fn new() -> Result<Self> {
        let patterns =
            builtin_patterns().context("Failed to compile built-in patterns for Extractor")?;
        Ok(Self { patterns })
    }

    /// Returns all non-overlapping matches for one category, scanned left to
    /// right, in order of occurrence. Duplicates are preserved and matches
    /// are returned verbatim, without normalization. Never errors: text with
    /// no matches (including the empty string) yields an empty vector.
    pub fn extract(&self, category: Category, text: &str) -> Vec<String> {
        let Some(pattern) = self.patterns.get(category) else {
            // Unreachable with the validated built-in set.
            warn!("No compiled pattern for category '{}'.", category);
            return Vec::new();
        };
        pattern
            .regex
            .find_iter(text)
            .map(|m| m.as_str().to_string())
            .collect()
    }

    /// Extracts email addresses.
    pub fn extract_emails(&self, text: &str) -> Vec<String> {
        self.extract(Category::Email, text)
    }

    /// Extracts HTTP and HTTPS URLs.
    pub fn extract_urls(&self, text: &str) -> Vec<String> {
        self.extract(Category::Url, text)
    }

    /// Extracts phone numbers.
    pub fn extract_phone_numbers(&self, text: &str) -> Vec<String> {
        self.extract(Category::Phone, text)
    }

    /// Extracts times of day.
    pub fn extract_times(&self, text: &str) -> Vec<String> {
        self.extract(Category::Time, text)
    }

    /// Extracts HTML tags.
    pub fn extract_html_tags(&self, text: &str) -> Vec<String> {
        self.extract(Category::HtmlTag, text)
    }

    /// Extracts currency amounts.
    pub fn extract_currency(&self, text: &str) -> Vec<String> {
        self.extract(Category::Currency, text)
    }

    /// Extracts credit-card-like digit groups.
    pub fn extract_credit_cards(&self, text: &str) -> Vec<String> {
        self.extract(Category::CreditCard, text)
    }

    /// Extracts hashtags.
    pub fn extract_hashtags(&self, text: &str) -> Vec<String> {
        self.extract(Category::Hashtag, text)
    }

    /// Runs every category's pattern over the text and returns the aggregate
    /// report. All eight category keys are always present.
    pub fn extract_all(&self, text: &str) -> ExtractionReport {
        let mut report = ExtractionReport::new();
        for category in Category::ALL {
            report.insert(category, self.extract(category, text));
        }
        report
    }
}
