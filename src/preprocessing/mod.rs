//! # Meal Preprocessing Module
//!
//! This module turns a free-form meal description (Thai/Latin mixed script)
//! into a structured `PreprocessResult` the prompt builder and the fallback
//! estimator can consume.
//!
//! The module is organized into focused sub-modules:
//! - `normalizer`: whitespace/zero-width cleanup, number words, digit spacing
//! - `segmenter`: explicit separators plus the implicit egg-combination split
//! - `quantity`: ordered cascade resolving quantity and canonical unit
//! - `canonical`: name cleanup, filler capture, food-alias mapping
//! - `types`: shared result types

pub mod canonical;
pub mod normalizer;
pub mod quantity;
pub mod segmenter;
pub mod types;

// Re-export commonly used types and functions for convenience
pub use canonical::canonicalize_segment;
pub use normalizer::normalize_meal_text;
pub use quantity::{extract_quantity, QuantityMatch};
pub use segmenter::split_segments;
pub use types::{ParsedItem, PreprocessResult};

use std::time::Instant;

use tracing::{debug, warn};

use crate::config::PreprocessConfig;
use crate::errors::{error_logging, AppResult};
use crate::observability;

/// Natural-language meal parser composing the normalizer, segmenter,
/// quantity extractor, and name canonicalizer.
///
/// Stateless apart from its configuration; one instance can be shared across
/// threads and calls.
#[derive(Debug, Clone)]
pub struct MealParser {
    config: PreprocessConfig,
}

impl MealParser {
    /// Create a parser with the default configuration.
    pub fn new() -> Self {
        Self {
            config: PreprocessConfig::default(),
        }
    }

    /// Create a parser with a custom, validated configuration.
    pub fn with_config(config: PreprocessConfig) -> AppResult<Self> {
        if let Err(error) = config.validate() {
            error_logging::log_config_error(&error, "preprocess", "meal_parser_with_config");
            return Err(error);
        }
        Ok(Self { config })
    }

    /// Normalize and parse one meal description.
    ///
    /// Total: every input produces a result. An input yielding no items gets
    /// a warning instead of an error, as does a parse where two or more item
    /// quantities had to be defaulted.
    pub fn parse(&self, text: &str) -> PreprocessResult {
        let start = Instant::now();
        let normalized = normalize_meal_text(text);
        let segments = split_segments(&normalized);

        if segments.len() > self.config.max_items {
            debug!(
                segment_count = segments.len(),
                max_items = self.config.max_items,
                "Segment count exceeds max_items, truncating"
            );
        }

        let mut items: Vec<ParsedItem> = Vec::new();
        let mut defaulted_count = 0usize;
        for segment in segments.into_iter().take(self.config.max_items) {
            let quantity_match = extract_quantity(&segment);
            let (canonical_name, modifiers) =
                canonicalize_segment(&segment, self.config.enable_food_aliases);
            if quantity_match.defaulted {
                defaulted_count += 1;
            }
            items.push(ParsedItem {
                raw_segment: segment,
                canonical_name,
                quantity: quantity_match.quantity,
                unit: quantity_match.unit,
                modifiers,
            });
        }

        let mut warnings: Vec<String> = Vec::new();
        if items.is_empty() {
            warn!(input_length = text.len(), "No food items recognized");
            warnings.push("no food items recognized in the description".to_string());
        } else if defaulted_count >= 2 {
            warnings.push(format!(
                "quantities defaulted to 1 for {} items",
                defaulted_count
            ));
        }

        debug!(
            item_count = items.len(),
            warning_count = warnings.len(),
            defaulted_count,
            "Parsed meal description"
        );
        observability::record_preprocess_metrics(
            start.elapsed(),
            text.len(),
            items.len(),
            warnings.len(),
        );

        PreprocessResult {
            normalized_text: normalized,
            items,
            warnings,
        }
    }
}

impl Default for MealParser {
    fn default() -> Self {
        Self::new()
    }
}

/// Normalize and parse a meal description with the default parser.
///
/// # Examples
///
/// ```rust
/// use meal_parse::preprocessing::normalize_and_parse_meal;
///
/// let result = normalize_and_parse_meal("ไข่ดาว 2 ฟอง + ข้าวสวย");
/// assert_eq!(result.items.len(), 2);
/// assert_eq!(result.items[0].quantity, 2.0);
/// assert!(result.warnings.is_empty());
/// ```
pub fn normalize_and_parse_meal(text: &str) -> PreprocessResult {
    MealParser::new().parse(text)
}
