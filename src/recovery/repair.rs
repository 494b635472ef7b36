//! # Bounded Repair Pass
//!
//! A fixed, ordered list of textual rewrites applied once before the second
//! parse attempt:
//!
//! 1. Delete lines holding only a single alphabetic token (an artifact of
//!    truncated streaming output)
//! 2. Remove trailing commas immediately before `}` or `]`
//! 3. Append one closing quote when the unescaped double-quote count is odd
//! 4. Append the missing closing braces when opens outnumber closes
//!
//! Deliberately not a loop: one pass, one re-parse, predictable behavior.

use lazy_static::lazy_static;
use regex::Regex;
use tracing::trace;

lazy_static! {
    static ref TRAILING_COMMA: Regex =
        Regex::new(r",\s*(?P<close>[}\]])").expect("trailing comma pattern should be valid");
}

/// Whether a line is a stray single-token artifact (e.g. a dangling "json"
/// or "Note" emitted mid-stream).
fn is_stray_token_line(line: &str) -> bool {
    let trimmed = line.trim();
    !trimmed.is_empty() && trimmed.chars().all(|c| c.is_alphabetic())
}

/// Count unescaped double quotes.
fn unescaped_quote_count(text: &str) -> usize {
    let mut count = 0;
    let mut escaped = false;
    for c in text.chars() {
        if escaped {
            escaped = false;
        } else if c == '\\' {
            escaped = true;
        } else if c == '"' {
            count += 1;
        }
    }
    count
}

/// Count opening and closing braces outside quoted strings.
fn brace_counts(text: &str) -> (usize, usize) {
    let mut in_string = false;
    let mut escaped = false;
    let mut opens = 0;
    let mut closes = 0;
    for c in text.chars() {
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
            '{' => opens += 1,
            '}' => closes += 1,
            _ => {}
        }
    }
    (opens, closes)
}

/// Apply the four repair fixes in order and return the rewritten candidate.
/// Idempotent; repairing an already-repaired string changes nothing further.
pub fn repair_candidate(text: &str) -> String {
    let kept: Vec<&str> = text
        .lines()
        .filter(|line| !is_stray_token_line(line))
        .collect();
    let dropped = text.lines().count() - kept.len();
    let mut repaired = kept.join("\n");

    repaired = TRAILING_COMMA
        .replace_all(&repaired, "${close}")
        .into_owned();

    if unescaped_quote_count(&repaired) % 2 == 1 {
        repaired.push('"');
    }

    let (opens, closes) = brace_counts(&repaired);
    if opens > closes {
        for _ in closes..opens {
            repaired.push('}');
        }
    }

    trace!(
        dropped_lines = dropped,
        appended_braces = opens.saturating_sub(closes),
        "Applied repair pass"
    );
    repaired
}
