//! # Text Normalizer
//!
//! Canonicalizes raw meal descriptions before segmentation:
//!
//! - Removes zero-width characters (common paste artifacts in Thai text)
//! - Inserts a space between a digit and an immediately following Thai or
//!   Latin letter so unit matching stays boundary-safe ("2ฟอง" → "2 ฟอง")
//! - Collapses all whitespace runs (newlines, tabs) to single spaces and trims
//! - Replaces standalone number words (0-10, Thai and English, plus the
//!   informal นึง) with digits
//!
//! The steps run in that order: a number word that digit spacing detaches
//! ("2สอง") is already a standalone token when the replacement pass sees it,
//! so a single call reaches the fixpoint. The normalizer is total and
//! idempotent; it never fails.

use tracing::trace;

use crate::lexicon::number_word_value;

/// Zero-width characters stripped before any other step.
static ZERO_WIDTH_CHARS: &[char] = &['\u{200B}', '\u{200C}', '\u{200D}', '\u{FEFF}'];

/// Thai letters and combining vowel/tone marks, excluding Thai digits and
/// section symbols.
fn is_thai_letter(c: char) -> bool {
    ('\u{0E01}'..='\u{0E3A}').contains(&c) || ('\u{0E40}'..='\u{0E4E}').contains(&c)
}

fn follows_digit_needs_space(c: char) -> bool {
    c.is_ascii_alphabetic() || is_thai_letter(c)
}

/// Normalize a meal description for downstream segmentation and extraction.
///
/// # Examples
///
/// ```rust
/// use meal_parse::preprocessing::normalize_meal_text;
///
/// assert_eq!(normalize_meal_text("ไข่ดาว  2ฟอง"), "ไข่ดาว 2 ฟอง");
/// assert_eq!(normalize_meal_text("สอง ฟอง"), "2 ฟอง");
/// ```
pub fn normalize_meal_text(text: &str) -> String {
    let stripped: String = text
        .chars()
        .filter(|c| !ZERO_WIDTH_CHARS.contains(c))
        .collect();

    // Digit-to-letter boundary spacing; must run before the token pass
    let mut spaced = String::with_capacity(stripped.len() + 4);
    let mut prev: Option<char> = None;
    for c in stripped.chars() {
        if let Some(p) = prev {
            if p.is_ascii_digit() && follows_digit_needs_space(c) {
                spaced.push(' ');
            }
        }
        spaced.push(c);
        prev = Some(c);
    }

    // Whitespace collapse and token-bounded number-word replacement in one pass
    let tokens: Vec<String> = spaced
        .split_whitespace()
        .map(|token| match number_word_value(token) {
            Some(value) => value.to_string(),
            None => token.to_string(),
        })
        .collect();
    let normalized = tokens.join(" ");

    trace!(
        input_length = text.len(),
        output_length = normalized.len(),
        "Normalized meal text"
    );
    normalized
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_whitespace_collapse_and_trim() {
        assert_eq!(
            normalize_meal_text("  ไข่ดาว   กับ\n\tข้าว  "),
            "ไข่ดาว กับ ข้าว"
        );
    }

    #[test]
    fn test_zero_width_characters_removed() {
        assert_eq!(normalize_meal_text("ไข่\u{200B}ดาว"), "ไข่ดาว");
        assert_eq!(normalize_meal_text("\u{FEFF}ข้าว"), "ข้าว");
    }

    #[test]
    fn test_number_words_become_digits() {
        assert_eq!(normalize_meal_text("สอง ฟอง"), "2 ฟอง");
        assert_eq!(normalize_meal_text("นึง จาน"), "1 จาน");
        assert_eq!(normalize_meal_text("ten eggs"), "10 eggs");
        assert_eq!(normalize_meal_text("Two scoops"), "2 scoops");
    }

    #[test]
    fn test_glued_number_words_left_alone() {
        // not whitespace-bounded, so the normalizer must not touch it
        assert_eq!(normalize_meal_text("ไข่ต้มสองฟอง"), "ไข่ต้มสองฟอง");
    }

    #[test]
    fn test_digit_letter_spacing() {
        assert_eq!(normalize_meal_text("2ฟอง"), "2 ฟอง");
        assert_eq!(normalize_meal_text("500g"), "500 g");
        assert_eq!(normalize_meal_text("ไข่ดาว2ฟอง"), "ไข่ดาว2 ฟอง");
    }

    #[test]
    fn test_detached_number_word_converted_in_same_call() {
        // digit spacing makes the number word a standalone token; the token
        // pass must still catch it in the same call
        assert_eq!(normalize_meal_text("2สอง"), "2 2");
        assert_eq!(normalize_meal_text("2two"), "2 2");
        assert_eq!(normalize_meal_text("ข้าว2สอง จาน"), "ข้าว2 2 จาน");
    }

    #[test]
    fn test_thai_digits_not_spaced() {
        // Thai numerals are not letters; no space inserted
        assert_eq!(normalize_meal_text("2๓"), "2๓");
    }

    #[test]
    fn test_idempotence() {
        for input in [
            "ไข่ดาว  2ฟอง",
            "สอง ฟอง กับ ข้าว",
            "  whey   protein one scoop ",
            "",
            "กะเพรา\u{200B}ไก่ x2",
            "2สอง",
            "2two",
            "ไข่ดาว2สองฟอง",
        ] {
            let once = normalize_meal_text(input);
            let twice = normalize_meal_text(&once);
            assert_eq!(once, twice, "normalize must be idempotent for {:?}", input);
        }
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(normalize_meal_text(""), "");
        assert_eq!(normalize_meal_text("   \n "), "");
    }
}
