// pluck-core/src/lib.rs
//! # Pluck Core Library
//!
//! `pluck-core` provides the platform-independent logic for extracting
//! structured substrings (emails, URLs, phone numbers, times, HTML tags,
//! currency amounts, credit-card-like numbers, hashtags) from unstructured
//! text. It defines the fixed pattern rule set, compiles it once, and
//! exposes the `Extractor` that applies it.
//!
//! The library is pure and stateless: every extraction is a deterministic
//! function of the built-in pattern set and the input text, with no I/O and
//! no cross-call memory.
//!
//! ## Modules
//!
//! * `category`: The fixed set of eight extraction categories.
//! * `config`: `PatternRule`s and the embedded built-in rule configuration.
//! * `compiler`: Compilation and process-wide caching of the rule set.
//! * `extractor`: The `Extractor` and its per-category operations.
//! * `report`: The `ExtractionReport` aggregate result type.
//! * `errors`: The `ExtractError` library error type.
//!
//! ## Usage Example
//!
//! ```rust
//! use pluck_core::{Category, Extractor};
//! use anyhow::Result;
//!
//! fn main() -> Result<()> {
//!     let extractor = Extractor::new()?;
//!
//!     let input = "Reach us at team@example.com, or see https://www.example.com #support";
//!
//!     // Per-category extraction.
//!     let emails = extractor.extract_emails(input);
//!     assert_eq!(emails, vec!["team@example.com".to_string()]);
//!
//!     // Aggregate extraction: all eight categories, empty or not.
//!     let report = extractor.extract_all(input);
//!     assert_eq!(report.get(Category::Hashtag), ["#support"]);
//!     assert!(report.get(Category::CreditCard).is_empty());
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Error Handling
//!
//! Extraction itself never fails: any input string, including the empty
//! string, yields (possibly empty) match lists. Construction returns an
//! error only if the embedded rule set cannot be validated and compiled.
//! Fallible operations use `anyhow::Error` at the API surface, with
//! `ExtractError` carrying the specific failure.

pub mod category;
pub mod compiler;
pub mod config;
pub mod errors;
pub mod extractor;
pub mod report;

/// Re-exports the fixed extraction category enum.
pub use category::Category;

/// Re-exports the pattern configuration types for the built-in rule set.
pub use config::{validate_rules, PatternConfig, PatternRule, MAX_PATTERN_LENGTH};

/// Re-exports the custom error type for clear error reporting.
pub use errors::ExtractError;

/// Re-exports the extraction engine.
pub use extractor::Extractor;

/// Re-exports the aggregate report type returned by `extract_all`.
pub use report::ExtractionReport;

/// Re-exports compiled-pattern types for advanced usage.
pub use compiler::{builtin_patterns, compile_rules, CompiledPattern, CompiledPatterns};
