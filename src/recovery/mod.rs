//! # Structured-Output Recovery Module
//!
//! Turns raw model text that is *supposed* to be a single JSON object into a
//! typed value, tolerating prose wrappers, code fences, example objects,
//! trailing commentary, truncation, and a handful of other observed failure
//! modes.
//!
//! Recovery paths, in order: direct parse of the best candidate, then one
//! bounded repair pass, then a tagged failure. Failure is a normal outcome
//! here, not a fault; callers branch on the result and escalate (retry
//! upstream, fall back to the deterministic estimator) as they see fit.
//!
//! The module is organized into focused sub-modules:
//! - `extract`: fence stripping and the last-balanced-object scan
//! - `repair`: the fixed list of textual fixes

pub mod extract;
pub mod repair;

// Re-export the extraction/repair primitives for direct use
pub use extract::{extract_last_balanced_object, strip_code_fence};
pub use repair::repair_candidate;

use std::time::Instant;

use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use crate::config::RecoveryConfig;
use crate::errors::{error_logging, AppResult};
use crate::observability;

/// Outcome of one recovery attempt. Exactly one variant; `Failure` is
/// expected control flow, not an error.
#[derive(Debug, Clone, PartialEq)]
pub enum RecoveryResult<T> {
    /// The text yielded a value of the expected shape
    Success {
        value: T,
        /// True when the repair pass ran before the successful parse
        used_repair: bool,
        /// True when the balanced-object scan isolated the parsed candidate
        /// out of surrounding text
        used_extraction: bool,
    },
    /// No parse succeeded even after repair
    Failure {
        reason: String,
        /// The last candidate string handed to the parser, truncated for
        /// logging; absent when nothing non-empty was isolated
        last_candidate: Option<String>,
    },
}

impl<T> RecoveryResult<T> {
    /// Whether this is the `Success` variant.
    pub fn is_success(&self) -> bool {
        matches!(self, RecoveryResult::Success { .. })
    }

    /// The recovered value, discarding diagnostics.
    pub fn ok(self) -> Option<T> {
        match self {
            RecoveryResult::Success { value, .. } => Some(value),
            RecoveryResult::Failure { .. } => None,
        }
    }
}

/// Shape-agnostic recovery engine for model output expected to be one JSON
/// object.
#[derive(Debug, Clone)]
pub struct RecoveryEngine {
    config: RecoveryConfig,
}

impl RecoveryEngine {
    /// Create an engine with the default configuration.
    pub fn new() -> Self {
        Self {
            config: RecoveryConfig::default(),
        }
    }

    /// Create an engine with a custom, validated configuration.
    pub fn with_config(config: RecoveryConfig) -> AppResult<Self> {
        if let Err(error) = config.validate() {
            error_logging::log_config_error(&error, "recovery", "recovery_engine_with_config");
            return Err(error);
        }
        Ok(Self { config })
    }

    /// Recover a value of shape `T` from raw model text.
    ///
    /// Runs fence stripping, balanced-object extraction, a direct parse, and
    /// (on failure) one bounded repair pass followed by one re-parse.
    pub fn recover<T: DeserializeOwned>(&self, raw: &str) -> RecoveryResult<T> {
        let start = Instant::now();
        let stripped = strip_code_fence(raw);
        let candidate = extract_last_balanced_object(stripped);
        let used_extraction = candidate.map(|c| c != stripped).unwrap_or(false);
        let target = candidate.unwrap_or(stripped);

        let direct_error = match serde_json::from_str::<T>(target) {
            Ok(value) => {
                debug!(used_extraction, "Recovered structured object directly");
                observability::record_recovery_metrics(start.elapsed(), "success", false);
                return RecoveryResult::Success {
                    value,
                    used_repair: false,
                    used_extraction,
                };
            }
            Err(err) => err,
        };
        debug!(error = %direct_error, used_extraction, "Direct parse failed");

        if !self.config.enable_repair {
            let last_candidate = self.candidate_preview(target);
            observability::record_recovery_metrics(start.elapsed(), "failure", false);
            return RecoveryResult::Failure {
                reason: direct_error.to_string(),
                last_candidate,
            };
        }

        let repaired = repair_candidate(target);
        match serde_json::from_str::<T>(&repaired) {
            Ok(value) => {
                debug!(used_extraction, "Recovered structured object after repair");
                observability::record_recovery_metrics(start.elapsed(), "success", true);
                RecoveryResult::Success {
                    value,
                    used_repair: true,
                    used_extraction,
                }
            }
            Err(repair_error) => {
                let last_candidate = self.candidate_preview(&repaired);
                warn!(
                    error = %repair_error,
                    input_length = raw.len(),
                    "Structured-output recovery exhausted"
                );
                error_logging::log_recovery_error(
                    &repair_error,
                    "recover_structured_object",
                    last_candidate.as_deref(),
                    raw.len(),
                );
                observability::record_recovery_metrics(start.elapsed(), "failure", true);
                RecoveryResult::Failure {
                    reason: repair_error.to_string(),
                    last_candidate,
                }
            }
        }
    }

    /// Char-safe truncation of the failing candidate for diagnostics.
    fn candidate_preview(&self, candidate: &str) -> Option<String> {
        if candidate.is_empty() {
            return None;
        }
        let budget = self.config.candidate_preview_chars;
        if candidate.chars().count() <= budget {
            Some(candidate.to_string())
        } else {
            let truncated: String = candidate.chars().take(budget).collect();
            Some(format!("{}...", truncated))
        }
    }
}

impl Default for RecoveryEngine {
    fn default() -> Self {
        Self::new()
    }
}

/// Recover a value of shape `T` from raw model text with the default engine.
///
/// # Examples
///
/// ```rust
/// use meal_parse::recovery::{recover_structured_object, RecoveryResult};
/// use serde_json::Value;
///
/// let raw = "Here is the estimate:\n```json\n{\"calories\": 540}\n```";
/// match recover_structured_object::<Value>(raw) {
///     RecoveryResult::Success { value, .. } => assert_eq!(value["calories"], 540),
///     RecoveryResult::Failure { .. } => panic!("expected success"),
/// }
/// ```
pub fn recover_structured_object<T: DeserializeOwned>(raw: &str) -> RecoveryResult<T> {
    RecoveryEngine::new().recover(raw)
}
