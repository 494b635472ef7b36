//! # Shared Types for Meal Preprocessing
//!
//! Value objects produced by the natural-language meal parser. All types are
//! immutable once constructed and safe to share across threads.

use serde::{Deserialize, Serialize};

use crate::lexicon::Unit;

/// One food item extracted from a free-form meal description
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParsedItem {
    /// The verbatim segment this item was parsed from (e.g., "ไข่ดาว 2 ฟอง")
    pub raw_segment: String,
    /// Canonical food name, never empty for a non-empty segment (e.g., "ไข่ดาว")
    pub canonical_name: String,
    /// Numeric quantity, always positive, 1.0 when nothing matched
    pub quantity: f64,
    /// Canonical unit when an alias was recognized (e.g., ฟอง resolves to the
    /// egg-count unit)
    pub unit: Option<Unit>,
    /// Free-text hint tokens stripped during canonicalization (e.g., "เพิ่ม")
    pub modifiers: Vec<String>,
}

/// Result of normalizing and parsing one meal description
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PreprocessResult {
    /// The normalized form of the input text
    pub normalized_text: String,
    /// Extracted items in input order
    pub items: Vec<ParsedItem>,
    /// Advisory warnings; empty unless no item could be produced or ≥2
    /// quantities were defaulted
    pub warnings: Vec<String>,
}

impl PreprocessResult {
    /// Whether parsing produced at least one item.
    pub fn has_items(&self) -> bool {
        !self.items.is_empty()
    }
}
