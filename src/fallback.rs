//! # Fallback Nutrition Estimator
//!
//! Deterministic macro estimates for a handful of well-known foods, used as a
//! safety net when the upstream model returns a structurally valid but
//! all-zero result. Estimates come from a fixed per-serving baseline table;
//! an unrecognized food yields *no* entry rather than a fabricated zero, so
//! absence stays a meaningful signal to the caller.

use std::time::Instant;

use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::lexicon::{self, Unit};
use crate::observability;
use crate::preprocessing::quantity::parse_positive;
use crate::preprocessing::{ParsedItem, PreprocessResult};

/// How much trust to place in an estimate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Confidence {
    Low,
    Medium,
    High,
}

/// One deterministic nutrition estimate for a parsed item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FallbackEstimate {
    /// Canonical food name the estimate applies to (e.g., "ข้าวกะเพรา")
    pub canonical_name: String,
    /// Human-readable serving the baseline describes (e.g., "1 จาน")
    pub assumed_serving_label: String,
    /// Estimated energy, kilocalories, clamped to >= 0
    pub calories_kcal: f64,
    /// Estimated protein in grams, clamped to >= 0
    pub protein_g: f64,
    /// Estimated carbohydrate in grams, clamped to >= 0
    pub carbs_g: f64,
    /// Estimated fat in grams, clamped to >= 0
    pub fat_g: f64,
    /// Trust level for this estimate
    pub confidence: Confidence,
    /// Which scaling path produced the numbers
    pub notes: Vec<String>,
}

/// Whether a baseline describes a countable single unit (an egg, a scoop) or
/// a composite dish whose serving size varies between vendors.
#[derive(Debug, Clone, Copy, PartialEq)]
enum ServingKind {
    SingleUnit,
    Composite,
}

/// One row of the fixed nutrition baseline table.
struct NutritionRow {
    canonical_name: &'static str,
    serving_label: &'static str,
    calories_kcal: f64,
    protein_g: f64,
    carbs_g: f64,
    fat_g: f64,
    /// Reference serving weight; present only for composite/plate foods so
    /// explicit gram quantities can be scaled against it
    reference_grams: Option<f64>,
    kind: ServingKind,
}

/// Per-serving macro baselines for the foods the estimator recognizes.
/// Values are typical Thai street-food portions rounded to label precision.
static NUTRITION_TABLE: &[NutritionRow] = &[
    NutritionRow {
        canonical_name: "ไข่ดาว",
        serving_label: "1 ฟอง",
        calories_kcal: 90.0,
        protein_g: 6.5,
        carbs_g: 0.5,
        fat_g: 7.0,
        reference_grams: None,
        kind: ServingKind::SingleUnit,
    },
    NutritionRow {
        canonical_name: "ไข่ต้ม",
        serving_label: "1 ฟอง",
        calories_kcal: 77.0,
        protein_g: 6.3,
        carbs_g: 0.6,
        fat_g: 5.3,
        reference_grams: None,
        kind: ServingKind::SingleUnit,
    },
    NutritionRow {
        canonical_name: "ไข่เจียว",
        serving_label: "1 ฟอง",
        calories_kcal: 150.0,
        protein_g: 7.0,
        carbs_g: 1.0,
        fat_g: 13.0,
        reference_grams: None,
        kind: ServingKind::SingleUnit,
    },
    NutritionRow {
        canonical_name: "เวย์โปรตีน",
        serving_label: "1 สกู๊ป",
        calories_kcal: 120.0,
        protein_g: 24.0,
        carbs_g: 3.0,
        fat_g: 1.5,
        reference_grams: None,
        kind: ServingKind::SingleUnit,
    },
    NutritionRow {
        canonical_name: "ข้าวสวย",
        serving_label: "1 จาน",
        calories_kcal: 325.0,
        protein_g: 6.5,
        carbs_g: 70.5,
        fat_g: 0.7,
        reference_grams: Some(250.0),
        kind: ServingKind::Composite,
    },
    NutritionRow {
        canonical_name: "ข้าวกะเพรา",
        serving_label: "1 จาน",
        calories_kcal: 630.0,
        protein_g: 26.0,
        carbs_g: 72.0,
        fat_g: 26.0,
        reference_grams: Some(350.0),
        kind: ServingKind::Composite,
    },
];

lazy_static! {
    /// Explicit weight mentioned anywhere in the free text ("ประมาณ 200 กรัม",
    /// "200g"); the boundary group keeps "g" from matching inside a word and
    /// the digits are ASCII-only so the capture always parses as f64.
    static ref FREE_TEXT_GRAMS: Regex = Regex::new(&format!(
        r"(?i)(?P<grams>[0-9]+(?:\.[0-9]+)?)\s*(?:{})(?:$|[^\p{{L}}\p{{N}}])",
        lexicon::gram_alias_alternation()
    ))
    .expect("free-text gram pattern should be valid");
}

/// Compute deterministic estimates for every parsed item with a known
/// baseline. Items without a table row produce no entry.
pub fn estimate_fallback_nutrition(
    parsed: &PreprocessResult,
    original_text: &str,
) -> Vec<FallbackEstimate> {
    let start = Instant::now();
    let free_text_grams = scan_free_text_grams(original_text);

    let estimates: Vec<FallbackEstimate> = parsed
        .items
        .iter()
        .filter_map(|item| estimate_item(item, free_text_grams))
        .collect();

    debug!(
        item_count = parsed.items.len(),
        estimate_count = estimates.len(),
        "Computed fallback nutrition estimates"
    );
    observability::record_fallback_metrics(start.elapsed(), parsed.items.len(), estimates.len());
    estimates
}

/// Estimate one item against the baseline table.
fn estimate_item(item: &ParsedItem, free_text_grams: Option<f64>) -> Option<FallbackEstimate> {
    let row = NUTRITION_TABLE
        .iter()
        .find(|row| row.canonical_name == item.canonical_name)?;

    let explicit_grams = item_grams(item).or(free_text_grams);
    let mut notes = Vec::new();

    let (factor, confidence) = match (row.reference_grams, explicit_grams) {
        (Some(reference), Some(grams)) => {
            trace!(
                canonical_name = %item.canonical_name,
                grams,
                reference,
                "Scaling baseline by explicit weight"
            );
            notes.push(format!(
                "scaled to {} g against a {} g reference serving",
                grams, reference
            ));
            (grams / reference, Confidence::High)
        }
        _ => {
            let confidence = match row.kind {
                ServingKind::SingleUnit => Confidence::High,
                ServingKind::Composite => Confidence::Medium,
            };
            notes.push(format!(
                "scaled by quantity {} of one standard serving ({})",
                item.quantity, row.serving_label
            ));
            (item.quantity, confidence)
        }
    };

    Some(FallbackEstimate {
        canonical_name: item.canonical_name.clone(),
        assumed_serving_label: row.serving_label.to_string(),
        calories_kcal: clamp_non_negative(row.calories_kcal * factor),
        protein_g: clamp_non_negative(row.protein_g * factor),
        carbs_g: clamp_non_negative(row.carbs_g * factor),
        fat_g: clamp_non_negative(row.fat_g * factor),
        confidence,
        notes,
    })
}

/// Gram quantity attached to the item itself by the extractor.
fn item_grams(item: &ParsedItem) -> Option<f64> {
    match item.unit {
        Some(Unit::Gram) => Some(item.quantity),
        _ => None,
    }
}

/// First explicit gram quantity mentioned in the original free text.
fn scan_free_text_grams(text: &str) -> Option<f64> {
    let caps = FREE_TEXT_GRAMS.captures(text)?;
    let grams = caps.name("grams").map(|m| m.as_str()).unwrap_or("");
    parse_positive(grams)
}

fn clamp_non_negative(value: f64) -> f64 {
    value.max(0.0)
}
