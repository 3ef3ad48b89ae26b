//! The fixed set of extraction categories.
//!
//! Every pattern in the built-in rule set belongs to exactly one of the
//! eight categories defined here. The set is closed: the extractor offers
//! no way to register additional categories at runtime.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::ExtractError;

/// One of the eight fixed extraction categories.
///
/// Variants are declared in report order, so ordered collections keyed by
/// `Category` iterate in the same order the aggregate report presents them.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub enum Category {
    #[serde(rename = "emails")]
    Email,
    #[serde(rename = "urls")]
    Url,
    #[serde(rename = "phone_numbers")]
    Phone,
    #[serde(rename = "times")]
    Time,
    #[serde(rename = "html_tags")]
    HtmlTag,
    #[serde(rename = "currency")]
    Currency,
    #[serde(rename = "credit_cards")]
    CreditCard,
    #[serde(rename = "hashtags")]
    Hashtag,
}

impl Category {
    /// All categories, in report order.
    pub const ALL: [Category; 8] = [
        Category::Email,
        Category::Url,
        Category::Phone,
        Category::Time,
        Category::HtmlTag,
        Category::Currency,
        Category::CreditCard,
        Category::Hashtag,
    ];

    /// The rule identifier used by the built-in pattern configuration.
    pub fn rule_name(&self) -> &'static str {
        match self {
            Category::Email => "email",
            Category::Url => "url",
            Category::Phone => "phone",
            Category::Time => "time",
            Category::HtmlTag => "html_tag",
            Category::Currency => "currency",
            Category::CreditCard => "credit_card",
            Category::Hashtag => "hashtag",
        }
    }

    /// The key under which this category appears in the aggregate report.
    pub fn report_key(&self) -> &'static str {
        match self {
            Category::Email => "emails",
            Category::Url => "urls",
            Category::Phone => "phone_numbers",
            Category::Time => "times",
            Category::HtmlTag => "html_tags",
            Category::Currency => "currency",
            Category::CreditCard => "credit_cards",
            Category::Hashtag => "hashtags",
        }
    }

    /// Human-readable heading for report output.
    pub fn title(&self) -> &'static str {
        match self {
            Category::Email => "Emails",
            Category::Url => "Urls",
            Category::Phone => "Phone Numbers",
            Category::Time => "Times",
            Category::HtmlTag => "Html Tags",
            Category::Currency => "Currency",
            Category::CreditCard => "Credit Cards",
            Category::Hashtag => "Hashtags",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.report_key())
    }
}

impl FromStr for Category {
    type Err = ExtractError;

    /// Accepts both the rule spelling (`"email"`) and the report spelling
    /// (`"emails"`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .iter()
            .find(|c| s == c.rule_name() || s == c.report_key())
            .copied()
            .ok_or_else(|| ExtractError::UnknownCategory(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_both_spellings() {
        assert_eq!("phone".parse::<Category>().unwrap(), Category::Phone);
        assert_eq!(
            "phone_numbers".parse::<Category>().unwrap(),
            Category::Phone
        );
        assert_eq!("html_tag".parse::<Category>().unwrap(), Category::HtmlTag);
        assert!("ssn".parse::<Category>().is_err());
    }

    #[test]
    fn report_keys_are_unique_and_ordered() {
        let keys: Vec<&str> = Category::ALL.iter().map(|c| c.report_key()).collect();
        assert_eq!(
            keys,
            vec![
                "emails",
                "urls",
                "phone_numbers",
                "times",
                "html_tags",
                "currency",
                "credit_cards",
                "hashtags"
            ]
        );
    }

    #[test]
    fn display_matches_report_key() {
        assert_eq!(Category::CreditCard.to_string(), "credit_cards");
    }
}
