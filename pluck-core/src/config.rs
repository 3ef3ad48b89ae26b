//! Configuration management for `pluck-core`.
//!
//! This module defines the data structures for the built-in pattern rules.
//! The rule set is fixed: it is embedded in the binary as YAML, deserialized
//! once, and validated before compilation. There is no mechanism for loading
//! user-supplied rule files.
//!
//! License: MIT OR Apache-2.0

use anyhow::{anyhow, Context, Result};
use log::debug;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::category::Category;

/// Maximum allowed length for a regex pattern string.
pub const MAX_PATTERN_LENGTH: usize = 500;

/// A single named pattern rule from the built-in configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct PatternRule {
    /// Rule identifier; must name one of the fixed categories (e.g. "email").
    pub name: String,
    /// Human-readable description of what the rule matches.
    pub description: Option<String>,
    /// The regex pattern string. This is the behavioral contract for the
    /// rule's category and is applied literally, without normalization.
    pub pattern: String,
    /// If true, enables multiline mode for the regex engine.
    pub multiline: bool,
    /// If true, the dot character `.` in regex will match newlines.
    pub dot_matches_new_line: bool,
}

impl Default for PatternRule {
    fn default() -> Self {
        Self {
            name: String::new(),
            description: None,
            pattern: String::new(),
            multiline: false,
            dot_matches_new_line: false,
        }
    }
}

/// The top-level configuration document holding the built-in rules.
#[derive(Debug, Default, Deserialize, Serialize, Clone, PartialEq)]
pub struct PatternConfig {
    pub rules: Vec<PatternRule>,
}

impl PatternConfig {
    /// Loads the built-in pattern rules from the embedded configuration.
    pub fn load_builtin_rules() -> Result<Self> {
        debug!("Loading built-in pattern rules from embedded string...");
        let builtin_yaml = include_str!("../config/builtin_patterns.yaml");
        let config: PatternConfig =
            serde_yml::from_str(builtin_yaml).context("Failed to parse built-in pattern rules")?;

        validate_rules(&config.rules)?;
        debug!("Loaded {} built-in pattern rules.", config.rules.len());
        Ok(config)
    }
}

/// Validates rule integrity: every fixed category covered exactly once,
/// patterns present, bounded, and compilable. All violations are collected
/// and reported together.
pub fn validate_rules(rules: &[PatternRule]) -> Result<()> {
    let mut rule_names = HashSet::new();
    let mut errors = Vec::new();

    for rule in rules {
        if rule.name.is_empty() {
            errors.push("A rule has an empty `name` field.".to_string());
            continue;
        }
        if !rule_names.insert(rule.name.clone()) {
            errors.push(format!("Duplicate rule name found: '{}'.", rule.name));
        }
        if rule.name.parse::<Category>().is_err() {
            errors.push(format!(
                "Rule '{}' does not name a known category.",
                rule.name
            ));
        }

        if rule.pattern.is_empty() {
            errors.push(format!("Rule '{}' has an empty `pattern` field.", rule.name));
            continue;
        }
        if rule.pattern.len() > MAX_PATTERN_LENGTH {
            errors.push(format!(
                "Rule '{}': pattern length ({}) exceeds maximum allowed ({}).",
                rule.name,
                rule.pattern.len(),
                MAX_PATTERN_LENGTH
            ));
        }
        if let Err(e) = Regex::new(&rule.pattern) {
            errors.push(format!(
                "Rule '{}' has an invalid regex pattern: {}",
                rule.name, e
            ));
        }
    }

    for category in Category::ALL {
        if !rule_names.contains(category.rule_name()) {
            errors.push(format!(
                "No rule defined for category '{}'.",
                category.rule_name()
            ));
        }
    }

    if !errors.is_empty() {
        let full_error_message = format!("Rule validation failed:\n{}", errors.join("\n"));
        Err(anyhow!(full_error_message))
    } else {
        Ok(())
    }
}
