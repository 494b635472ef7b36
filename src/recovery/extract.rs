//! # Candidate Extraction
//!
//! Isolates the JSON-object candidate inside raw model output: strips a
//! Markdown-style code fence if one is present, then scans for the last
//! top-level balanced `{...}` span.
//!
//! The balanced scan is an explicit state machine (outside-string /
//! inside-string / inside-string-after-escape) with a brace-depth counter
//! that only moves outside strings. Regular expressions cannot balance
//! nested delimiters across quoted content, so this is not a regex job.

use tracing::trace;

/// Strip a triple-backtick fence (optionally tagged `json`) and return the
/// interior, trimmed. Without a fence the trimmed whole text is returned.
/// An unclosed fence takes everything after the opener.
pub fn strip_code_fence(text: &str) -> &str {
    let trimmed = text.trim();
    let Some(open) = trimmed.find("```") else {
        return trimmed;
    };
    let mut interior = &trimmed[open + 3..];
    if let Some(rest) = interior
        .strip_prefix("json")
        .or_else(|| interior.strip_prefix("JSON"))
    {
        interior = rest;
    }
    if let Some(close) = interior.find("```") {
        interior = &interior[..close];
    }
    interior.trim()
}

/// Scan for the last top-level balanced `{...}` object, string-aware.
///
/// Every return of the depth counter to zero records a candidate span; the
/// last one wins, since models emit example objects before the real answer
/// and commentary after it. Malformed nesting (depth going negative) aborts
/// the scan with no candidate.
pub fn extract_last_balanced_object(text: &str) -> Option<&str> {
    let mut in_string = false;
    let mut escaped = false;
    let mut depth: i32 = 0;
    let mut span_start: Option<usize> = None;
    let mut last_span: Option<(usize, usize)> = None;

    for (i, c) in text.char_indices() {
        if in_string {
            if escaped {
                escaped = false;
            } else if c == '\\' {
                escaped = true;
            } else if c == '"' {
                in_string = false;
            }
            continue;
        }
        match c {
            '"' => in_string = true,
            '{' => {
                if depth == 0 {
                    span_start = Some(i);
                }
                depth += 1;
            }
            '}' => {
                depth -= 1;
                if depth < 0 {
                    trace!(position = i, "Brace depth went negative, aborting extraction");
                    return None;
                }
                if depth == 0 {
                    if let Some(start) = span_start {
                        last_span = Some((start, i + 1));
                    }
                }
            }
            _ => {}
        }
    }

    match last_span {
        Some((start, end)) => {
            trace!(start, end, "Extracted last balanced object");
            Some(&text[start..end])
        }
        None => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_tagged_fence() {
        let text = "```json\n{\"a\": 1}\n```";
        assert_eq!(strip_code_fence(text), "{\"a\": 1}");
    }

    #[test]
    fn test_strip_untagged_fence() {
        let text = "```\n{\"a\": 1}\n```";
        assert_eq!(strip_code_fence(text), "{\"a\": 1}");
    }

    #[test]
    fn test_strip_unclosed_fence() {
        let text = "```json\n{\"a\": 1}";
        assert_eq!(strip_code_fence(text), "{\"a\": 1}");
    }

    #[test]
    fn test_no_fence_returns_trimmed_text() {
        assert_eq!(strip_code_fence("  {\"a\": 1}  "), "{\"a\": 1}");
    }

    #[test]
    fn test_fence_with_surrounding_prose() {
        let text = "Sure, here you go:\n```json\n{\"a\": 1}\n```\nLet me know!";
        assert_eq!(strip_code_fence(text), "{\"a\": 1}");
    }

    #[test]
    fn test_last_object_wins() {
        let extracted =
            extract_last_balanced_object("noise {\"a\":1} more {\"b\":2} trailing");
        assert_eq!(extracted, Some("{\"b\":2}"));
    }

    #[test]
    fn test_nested_object_extracted_whole() {
        let text = "x {\"a\": {\"b\": 2}} y";
        assert_eq!(extract_last_balanced_object(text), Some("{\"a\": {\"b\": 2}}"));
    }

    #[test]
    fn test_braces_inside_strings_ignored() {
        let text = "{\"note\": \"use } and { freely\"}";
        assert_eq!(extract_last_balanced_object(text), Some(text));
    }

    #[test]
    fn test_escaped_quote_does_not_toggle_string_state() {
        let text = "{\"quote\": \"she said \\\"hi\\\"\"}";
        assert_eq!(extract_last_balanced_object(text), Some(text));
    }

    #[test]
    fn test_unterminated_object_yields_no_candidate() {
        assert_eq!(extract_last_balanced_object("{\"a\": 1"), None);
    }

    #[test]
    fn test_negative_depth_aborts() {
        assert_eq!(extract_last_balanced_object("{\"a\":1} }"), None);
    }

    #[test]
    fn test_thai_content_in_strings() {
        let text = "คำตอบ: {\"ชื่อ\": \"ข้าวกะเพรา\", \"kcal\": 650}";
        assert_eq!(
            extract_last_balanced_object(text),
            Some("{\"ชื่อ\": \"ข้าวกะเพรา\", \"kcal\": 650}")
        );
    }
}
