//! # Name Canonicalizer
//!
//! Reduces one food segment to a canonical food name:
//!
//! - Strips multiplier tokens, number + unit pairs, standalone numbers, and
//!   standalone unit-alias tokens
//! - Strips filler words (quantity hedges like ประมาณ, "about"), returning
//!   them as item modifiers for the prompt builder
//! - Collapses whitespace and applies the food-alias table
//!
//! If cleanup empties the segment, the original trimmed segment is returned
//! verbatim; a non-empty segment never yields an empty canonical name.

use lazy_static::lazy_static;
use regex::Regex;
use tracing::trace;

use crate::lexicon::{canonical_food_name, is_filler_word, unit_alias_alternation};

lazy_static! {
    /// Multiplier tokens; the preceding context char is kept via `${pre}`.
    static ref MULTIPLIER_STRIP: Regex =
        Regex::new(r"(?P<pre>^|[\s\p{Thai}])[xX×]\s*[0-9]+(?:\.[0-9]+)?")
            .expect("multiplier strip pattern should be valid");

    /// Number + unit-alias pairs; the trailing boundary char is kept via
    /// `${b}`. ASCII digits only, matching what the quantity cascade consumes.
    static ref NUMBER_UNIT_STRIP: Regex = Regex::new(&format!(
        r"(?i)[0-9]+(?:\.[0-9]+)?\s*(?:{})(?P<b>$|[^\p{{L}}\p{{N}}])",
        unit_alias_alternation()
    ))
    .expect("number-unit strip pattern should be valid");

    /// Standalone numbers.
    static ref NUMBER_STRIP: Regex =
        Regex::new(r"[0-9]+(?:\.[0-9]+)?").expect("number strip pattern should be valid");

    /// Space-bounded unit-alias tokens left over once numbers are gone.
    static ref UNIT_TOKEN_STRIP: Regex = Regex::new(&format!(
        r"(?i)(?P<pre>^|\s)(?:{})(?P<b>$|[^\p{{L}}\p{{N}}])",
        unit_alias_alternation()
    ))
    .expect("unit token strip pattern should be valid");
}

/// Canonicalize one segment. Returns the canonical name and the filler
/// tokens removed from it.
pub fn canonicalize_segment(segment: &str, enable_food_aliases: bool) -> (String, Vec<String>) {
    let stripped = MULTIPLIER_STRIP.replace_all(segment, "${pre}");
    let stripped = NUMBER_UNIT_STRIP.replace_all(&stripped, "${b}");
    let stripped = NUMBER_STRIP.replace_all(&stripped, "");
    let stripped = UNIT_TOKEN_STRIP.replace_all(&stripped, "${pre}${b}");

    let mut modifiers: Vec<String> = Vec::new();
    let mut kept: Vec<&str> = Vec::new();
    for token in stripped.split_whitespace() {
        if is_filler_word(token) {
            modifiers.push(token.to_string());
        } else {
            kept.push(token);
        }
    }
    let cleaned = kept.join(" ");

    let name = if cleaned.is_empty() {
        // never emit an empty name; fall back to the verbatim segment
        segment.trim().to_string()
    } else if enable_food_aliases {
        match canonical_food_name(&cleaned) {
            Some(canonical) => canonical.to_string(),
            None => cleaned,
        }
    } else {
        cleaned
    };

    trace!(segment = %segment, name = %name, "Canonicalized segment");
    (name, modifiers)
}
