//! compiler.rs - Manages the compilation and caching of pattern rules.
//!
//! This module converts validated `PatternRule`s into `CompiledPatterns`,
//! ready for efficient matching. Because the rule set is fixed, the compiled
//! built-in set is cached process-wide so that every `Extractor` shares one
//! compilation.
//!
//! License: MIT OR Apache-2.0

use anyhow::Result;
use log::debug;
use once_cell::sync::OnceCell;
use regex::{Regex, RegexBuilder};
use std::collections::HashMap;
use std::sync::Arc;

use crate::category::Category;
use crate::config::{PatternConfig, PatternRule, MAX_PATTERN_LENGTH};
use crate::errors::ExtractError;

/// A single compiled pattern rule.
///
/// Holds the compiled regular expression along with its category and
/// metadata, ready for application to input text.
#[derive(Debug)]
pub struct CompiledPattern {
    /// The compiled regular expression used for matching.
    pub regex: Regex,
    /// The category this pattern extracts.
    pub category: Category,
    /// The unique name of the rule.
    pub name: String,
    /// Human-readable description carried over from the rule.
    pub description: Option<String>,
}

/// The full set of compiled patterns, keyed by category.
#[derive(Debug)]
pub struct CompiledPatterns {
    by_category: HashMap<Category, CompiledPattern>,
}

impl CompiledPatterns {
    /// Looks up the compiled pattern for a category.
    pub fn get(&self, category: Category) -> Option<&CompiledPattern> {
        self.by_category.get(&category)
    }

    /// Iterates the compiled patterns in report order.
    pub fn iter(&self) -> impl Iterator<Item = &CompiledPattern> {
        Category::ALL
            .iter()
            .filter_map(move |c| self.by_category.get(c))
    }

    pub fn len(&self) -> usize {
        self.by_category.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_category.is_empty()
    }
}

/// Compiles a list of `PatternRule`s into `CompiledPatterns`.
///
/// All compilation failures are collected before erroring so that a broken
/// rule set reports every problem at once.
pub fn compile_rules(rules: Vec<PatternRule>) -> Result<CompiledPatterns, ExtractError> {
    debug!("Starting compilation of {} pattern rules.", rules.len());

    let mut by_category = HashMap::new();
    let mut compilation_errors = Vec::new();

    for rule in rules {
        debug!(
            "Attempting to compile rule: '{}' with pattern '{:?}'",
            &rule.name, &rule.pattern
        );

        if rule.pattern.len() > MAX_PATTERN_LENGTH {
            compilation_errors.push(ExtractError::PatternLengthExceeded(
                rule.name,
                rule.pattern.len(),
                MAX_PATTERN_LENGTH,
            ));
            continue;
        }

        let category = match rule.name.parse::<Category>() {
            Ok(category) => category,
            Err(e) => {
                compilation_errors.push(e);
                continue;
            }
        };

        let regex_result = RegexBuilder::new(&rule.pattern)
            .multi_line(rule.multiline)
            .dot_matches_new_line(rule.dot_matches_new_line)
            .size_limit(10 * (1 << 20)) // 10 MB limit for compiled regex
            .build();

        match regex_result {
            Ok(regex) => {
                debug!("Rule '{}' compiled successfully.", &rule.name);
                by_category.insert(
                    category,
                    CompiledPattern {
                        regex,
                        category,
                        name: rule.name,
                        description: rule.description,
                    },
                );
            }
            Err(e) => {
                compilation_errors.push(ExtractError::PatternCompilationError(rule.name, e));
            }
        }
    }

    if !compilation_errors.is_empty() {
        let error_message = compilation_errors
            .iter()
            .map(|e| e.to_string())
            .collect::<Vec<String>>()
            .join("\n");
        Err(ExtractError::Fatal(format!(
            "Failed to compile {} pattern(s):\n{}",
            compilation_errors.len(),
            error_message
        )))
    } else {
        debug!(
            "Finished compiling pattern rules. Total compiled: {}.",
            by_category.len()
        );
        Ok(CompiledPatterns { by_category })
    }
}

/// The process-wide cache for the compiled built-in pattern set.
static BUILTIN_PATTERNS: OnceCell<Arc<CompiledPatterns>> = OnceCell::new();

/// Returns the compiled built-in pattern set, compiling it on first use.
///
/// Returns an `Arc`, allowing extractors to share the compiled set cheaply.
pub fn builtin_patterns() -> Result<Arc<CompiledPatterns>> {
    let compiled = BUILTIN_PATTERNS.get_or_try_init(|| -> Result<Arc<CompiledPatterns>> {
        debug!("Built-in patterns not compiled yet. Compiling now.");
        let config = PatternConfig::load_builtin_rules()?;
        let compiled = compile_rules(config.rules)?;
        Ok(Arc::new(compiled))
    })?;
    Ok(Arc::clone(compiled))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test_log::test]
    fn compiles_builtin_rules_for_every_category() {
        let config = PatternConfig::load_builtin_rules().unwrap();
        let compiled = compile_rules(config.rules).unwrap();
        assert_eq!(compiled.len(), Category::ALL.len());
        for category in Category::ALL {
            let pattern = compiled.get(category).unwrap();
            assert_eq!(pattern.category, category);
            assert_eq!(pattern.name, category.rule_name());
        }
    }

    #[test]
    fn collects_all_compilation_errors() {
        let rules = vec![
            PatternRule {
                name: "email".to_string(),
                pattern: "[unclosed".to_string(),
                ..Default::default()
            },
            PatternRule {
                name: "url".to_string(),
                pattern: "(also[unclosed".to_string(),
                ..Default::default()
            },
        ];
        let err = compile_rules(rules).unwrap_err().to_string();
        assert!(err.contains("Failed to compile 2 pattern(s)"), "got: {err}");
        assert!(err.contains("email"), "got: {err}");
        assert!(err.contains("url"), "got: {err}");
    }

    #[test]
    fn builtin_patterns_are_shared() {
        let first = builtin_patterns().unwrap();
        let second = builtin_patterns().unwrap();
        assert!(Arc::ptr_eq(&first, &second));
    }

    #[test]
    fn iteration_follows_report_order() {
        let config = PatternConfig::load_builtin_rules().unwrap();
        let compiled = compile_rules(config.rules).unwrap();
        let order: Vec<Category> = compiled.iter().map(|p| p.category).collect();
        assert_eq!(order, Category::ALL.to_vec());
    }
}
