//! # Quantity and Unit Extractor
//!
//! Determines a numeric quantity and an optional canonical unit for one food
//! segment using an ordered cascade of pattern rules, first match wins:
//!
//! 1. Explicit number + unit-alias pair ("2 ฟอง", "30 g"), the least
//!    ambiguous signal
//! 2. Multiplier notation ("x2", "กะเพราx2")
//! 3. A leading number at the very start of the segment
//! 4. Any number anywhere (weakest numeric signal)
//! 5. A number word glued to a unit-alias ("สองฟอง"), a defensive rule for
//!    un-normalized Thai input the normalizer could not token-split
//!
//! A matched value must be finite and positive; otherwise the rule is skipped
//! and the cascade continues. When nothing matches, quantity defaults to 1
//! and the match is flagged as defaulted.

use lazy_static::lazy_static;
use regex::Regex;
use tracing::trace;

use crate::lexicon::{
    number_word_alternation, number_word_value, resolve_unit_alias, unit_alias_alternation, Unit,
};

/// Quantity and unit resolved for one segment
#[derive(Debug, Clone, PartialEq)]
pub struct QuantityMatch {
    /// Extracted quantity, always positive
    pub quantity: f64,
    /// Canonical unit when a unit alias matched
    pub unit: Option<Unit>,
    /// True when no rule matched and the quantity fell back to 1
    pub defaulted: bool,
}

lazy_static! {
    /// Rule 1: number adjacent to a unit alias, alias boundary-checked so it
    /// never matches inside a longer word. Digits are ASCII-only so every
    /// match is parseable as f64; `\d` would also take Thai numerals.
    static ref NUMBER_UNIT_PAIR: Regex = Regex::new(&format!(
        r"(?i)(?P<quantity>[0-9]+(?:\.[0-9]+)?)\s*(?P<unit>{})(?:$|[^\p{{L}}\p{{N}}])",
        unit_alias_alternation()
    ))
    .expect("number-unit pattern should be valid");

    /// Rule 2: multiplier marker at segment start or after space/Thai text,
    /// so Latin words ending in "x" do not trigger.
    static ref MULTIPLIER: Regex =
        Regex::new(r"(?:^|[\s\p{Thai}])[xX×]\s*(?P<quantity>[0-9]+(?:\.[0-9]+)?)")
            .expect("multiplier pattern should be valid");

    /// Rule 3: leading number.
    static ref LEADING_NUMBER: Regex =
        Regex::new(r"^\s*(?P<quantity>[0-9]+(?:\.[0-9]+)?)").expect("leading pattern should be valid");

    /// Rule 4: any number.
    static ref ANY_NUMBER: Regex =
        Regex::new(r"(?P<quantity>[0-9]+(?:\.[0-9]+)?)").expect("number pattern should be valid");

    /// Rule 5: number word glued (or spaced) to a unit alias.
    static ref NUMBER_WORD_UNIT: Regex = Regex::new(&format!(
        r"(?i)(?P<word>{})\s*(?P<unit>{})(?:$|[^\p{{L}}\p{{N}}])",
        number_word_alternation(),
        unit_alias_alternation()
    ))
    .expect("number-word pattern should be valid");
}

/// Parse a cascade capture as a usable quantity. Zero, negative, and
/// non-finite values are rejected so the positivity invariant holds.
pub(crate) fn parse_positive(text: &str) -> Option<f64> {
    text.parse::<f64>()
        .ok()
        .filter(|v| v.is_finite() && *v > 0.0)
}

/// Extract quantity and unit from one segment via the ordered cascade.
pub fn extract_quantity(segment: &str) -> QuantityMatch {
    if let Some(caps) = NUMBER_UNIT_PAIR.captures(segment) {
        let quantity_str = caps.name("quantity").map(|m| m.as_str()).unwrap_or("");
        if let Some(quantity) = parse_positive(quantity_str) {
            let unit = caps
                .name("unit")
                .and_then(|m| resolve_unit_alias(m.as_str()));
            trace!(segment = %segment, rule = "number_unit_pair", quantity, "Quantity matched");
            return QuantityMatch {
                quantity,
                unit,
                defaulted: false,
            };
        }
    }

    if let Some(caps) = MULTIPLIER.captures(segment) {
        let quantity_str = caps.name("quantity").map(|m| m.as_str()).unwrap_or("");
        if let Some(quantity) = parse_positive(quantity_str) {
            trace!(segment = %segment, rule = "multiplier", quantity, "Quantity matched");
            return QuantityMatch {
                quantity,
                unit: None,
                defaulted: false,
            };
        }
    }

    if let Some(caps) = LEADING_NUMBER.captures(segment) {
        let quantity_str = caps.name("quantity").map(|m| m.as_str()).unwrap_or("");
        if let Some(quantity) = parse_positive(quantity_str) {
            trace!(segment = %segment, rule = "leading_number", quantity, "Quantity matched");
            return QuantityMatch {
                quantity,
                unit: None,
                defaulted: false,
            };
        }
    }

    if let Some(caps) = ANY_NUMBER.captures(segment) {
        let quantity_str = caps.name("quantity").map(|m| m.as_str()).unwrap_or("");
        if let Some(quantity) = parse_positive(quantity_str) {
            trace!(segment = %segment, rule = "any_number", quantity, "Quantity matched");
            return QuantityMatch {
                quantity,
                unit: None,
                defaulted: false,
            };
        }
    }

    if let Some(caps) = NUMBER_WORD_UNIT.captures(segment) {
        let word = caps.name("word").map(|m| m.as_str()).unwrap_or("");
        if let Some(value) = number_word_value(word) {
            if value > 0 {
                let unit = caps
                    .name("unit")
                    .and_then(|m| resolve_unit_alias(m.as_str()));
                let quantity = f64::from(value);
                trace!(segment = %segment, rule = "number_word_unit", quantity, "Quantity matched");
                return QuantityMatch {
                    quantity,
                    unit,
                    defaulted: false,
                };
            }
        }
    }

    trace!(segment = %segment, "No quantity matched, defaulting to 1");
    QuantityMatch {
        quantity: 1.0,
        unit: None,
        defaulted: true,
    }
}
