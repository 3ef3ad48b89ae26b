//! Report types for extraction results.
//!
//! `ExtractionReport` is the aggregate result of running every category's
//! pattern over one input. It always carries all eight category keys, even
//! when a category produced no matches, and iterates in report order.

use serde::Serialize;
use std::collections::BTreeMap;

use crate::category::Category;

/// The aggregate result of `extract_all`: one ordered list of matched
/// substrings per category.
///
/// Serializes to a JSON object with exactly the eight report keys
/// (`emails`, `urls`, `phone_numbers`, `times`, `html_tags`, `currency`,
/// `credit_cards`, `hashtags`), in that order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ExtractionReport {
    categories: BTreeMap<Category, Vec<String>>,
}

impl ExtractionReport {
    /// Creates a report with all eight categories present and empty.
    pub fn new() -> Self {
        let categories = Category::ALL
            .iter()
            .map(|&category| (category, Vec::new()))
            .collect();
        Self { categories }
    }

    /// Replaces the match list for a category.
    pub fn insert(&mut self, category: Category, matches: Vec<String>) {
        self.categories.insert(category, matches);
    }

    /// The matches recorded for a category, in order of occurrence.
    pub fn get(&self, category: Category) -> &[String] {
        self.categories
            .get(&category)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Iterates `(category, matches)` pairs in report order.
    pub fn iter(&self) -> impl Iterator<Item = (Category, &[String])> {
        self.categories
            .iter()
            .map(|(&category, matches)| (category, matches.as_slice()))
    }

    /// Total number of matches across all categories.
    pub fn total_matches(&self) -> usize {
        self.categories.values().map(Vec::len).sum()
    }

    /// True when no category produced any match.
    pub fn is_empty(&self) -> bool {
        self.total_matches() == 0
    }
}

impl Default for ExtractionReport {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_report_has_all_eight_keys() {
        let report = ExtractionReport::new();
        assert_eq!(report.iter().count(), 8);
        assert!(report.is_empty());
        for category in Category::ALL {
            assert!(report.get(category).is_empty());
        }
    }

    #[test]
    fn serializes_with_report_keys_in_order() {
        let mut report = ExtractionReport::new();
        report.insert(Category::Email, vec!["a@b.co".to_string()]);
        let json = serde_json::to_string(&report).unwrap();

        // Key order in the serialized text follows report order.
        let positions: Vec<usize> = [
            "\"emails\"",
            "\"urls\"",
            "\"phone_numbers\"",
            "\"times\"",
            "\"html_tags\"",
            "\"currency\"",
            "\"credit_cards\"",
            "\"hashtags\"",
        ]
        .iter()
        .map(|key| json.find(key).expect(key))
        .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]), "json: {json}");

        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["emails"][0], "a@b.co");
    }

    #[test]
    fn total_matches_sums_categories() {
        let mut report = ExtractionReport::new();
        report.insert(Category::Hashtag, vec!["#a".to_string(), "#b".to_string()]);
        report.insert(Category::Time, vec!["14:30".to_string()]);
        assert_eq!(report.total_matches(), 3);
        assert!(!report.is_empty());
    }
}
