//! # Meal Segmenter
//!
//! Splits a normalized meal description into independent food-item segments.
//!
//! ## Splitting rules
//!
//! - Explicit separators: `+`, comma, slash, pipe, newline, and the connector
//!   words และ/กับ/and/with when bounded by spaces (Thai compounds such as
//!   กับข้าว must not be shredded, so unbounded connectors never split)
//! - Runs of two or more spaces (defensive; normalized input has none)
//! - An implicit-combination heuristic for egg dishes: short informal
//!   descriptions juxtapose a dish and an egg preparation without any
//!   separator ("ผัดกะเพราไก่ไข่ดาว 2 ฟอง" is two items), so an egg keyword
//!   found after the start of a segment splits it in two. The keyword at the
//!   very start is the subject itself and never splits.
//!
//! The keyword family is deliberately narrow (egg preparations only); see the
//! note on `EGG_KEYWORDS`.

use lazy_static::lazy_static;
use regex::Regex;
use tracing::trace;

/// Trigger keywords for the implicit-combination heuristic. Kept to the Thai
/// egg family on purpose: broader families would split legitimate dish names
/// that merely contain the keyword, and Latin phrasing separates items with
/// spaces and connector words instead of juxtaposition.
static EGG_KEYWORDS: &[&str] = &["ไข่"];

lazy_static! {
    static ref SEPARATOR_CHARS: Regex =
        Regex::new(r"[+,/|\n]").expect("separator pattern should be valid");
    static ref CONNECTOR_WORDS: Regex =
        Regex::new(r"(?i)\s+(?:และ|กับ|and|with)\s+").expect("connector pattern should be valid");
    static ref MULTI_SPACE: Regex = Regex::new(r"\s{2,}").expect("space pattern should be valid");
}

/// Split a normalized meal description into non-empty trimmed segments.
pub fn split_segments(text: &str) -> Vec<String> {
    let mut segments: Vec<String> = Vec::new();

    for piece in SEPARATOR_CHARS.split(text) {
        for connected in CONNECTOR_WORDS.split(piece) {
            for part in MULTI_SPACE.split(connected) {
                let trimmed = part.trim();
                if trimmed.is_empty() {
                    continue;
                }
                for segment in split_implicit_combination(trimmed) {
                    segments.push(segment);
                }
            }
        }
    }

    trace!(
        segment_count = segments.len(),
        "Split meal description into segments"
    );
    segments
}

/// Apply the egg-keyword implicit-combination heuristic to one segment.
///
/// Splits at the leftmost keyword occurrence after position 0 when both
/// halves are non-empty. Thai script has no word boundaries, so keywords
/// match anywhere past the start.
fn split_implicit_combination(segment: &str) -> Vec<String> {
    let mut split_at: Option<usize> = None;

    for keyword in EGG_KEYWORDS {
        for (pos, _) in segment.match_indices(keyword) {
            if pos == 0 {
                continue;
            }
            if segment[..pos].trim().is_empty() || segment[pos..].trim().is_empty() {
                continue;
            }
            split_at = Some(split_at.map_or(pos, |p| p.min(pos)));
        }
    }

    match split_at {
        Some(pos) => {
            trace!(segment = %segment, split_at = pos, "Implicit combination split");
            vec![
                segment[..pos].trim().to_string(),
                segment[pos..].trim().to_string(),
            ]
        }
        None => vec![segment.to_string()],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_explicit_separator_characters() {
        assert_eq!(split_segments("ไข่ดาว + ข้าวสวย"), vec!["ไข่ดาว", "ข้าวสวย"]);
        assert_eq!(
            split_segments("ข้าว, ไก่ / นม | น้ำ"),
            vec!["ข้าว", "ไก่", "นม", "น้ำ"]
        );
        assert_eq!(split_segments("ข้าว\nนม"), vec!["ข้าว", "นม"]);
    }

    #[test]
    fn test_connector_words_split_when_space_bounded() {
        assert_eq!(
            split_segments("ข้าวผัด และ หมูทอด"),
            vec!["ข้าวผัด", "หมูทอด"]
        );
        assert_eq!(split_segments("rice with chicken"), vec!["rice", "chicken"]);
    }

    #[test]
    fn test_glued_thai_connector_does_not_split() {
        // กับข้าว is a word, not a list of two items
        assert_eq!(split_segments("กับข้าว"), vec!["กับข้าว"]);
        assert_eq!(split_segments("ผัดกะเพรากับข้าว"), vec!["ผัดกะเพรากับข้าว"]);
    }

    #[test]
    fn test_double_space_splits() {
        assert_eq!(split_segments("ไข่ดาว  ข้าวเปล่า"), vec!["ไข่ดาว", "ข้าวเปล่า"]);
    }

    #[test]
    fn test_implicit_egg_combination_splits() {
        assert_eq!(
            split_segments("ผัดกะเพราไก่ไข่ดาว 2 ฟอง"),
            vec!["ผัดกะเพราไก่", "ไข่ดาว 2 ฟอง"]
        );
    }

    #[test]
    fn test_egg_keyword_at_start_is_subject_not_addition() {
        assert_eq!(split_segments("ไข่ดาว 2 ฟอง"), vec!["ไข่ดาว 2 ฟอง"]);
        assert_eq!(split_segments("ไข่เจียวหมูสับ"), vec!["ไข่เจียวหมูสับ"]);
    }

    #[test]
    fn test_two_egg_dishes_juxtaposed() {
        assert_eq!(
            split_segments("ไข่เจียวไข่ดาว"),
            vec!["ไข่เจียว", "ไข่ดาว"]
        );
    }

    #[test]
    fn test_latin_egg_phrases_stay_whole() {
        // the heuristic is Thai-script only; spaced Latin phrases are already
        // separable by connectors and must not be shredded
        assert_eq!(split_segments("fried egg"), vec!["fried egg"]);
        assert_eq!(split_segments("veggie bowl"), vec!["veggie bowl"]);
        assert_eq!(split_segments("krapow egg 2"), vec!["krapow egg 2"]);
    }

    #[test]
    fn test_empty_pieces_dropped() {
        assert_eq!(split_segments("ไข่,,ข้าว"), vec!["ไข่", "ข้าว"]);
        assert_eq!(split_segments(" + , "), Vec::<String>::new());
        assert_eq!(split_segments(""), Vec::<String>::new());
    }
}
