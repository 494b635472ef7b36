//! # Pipeline Configuration
//!
//! Configuration structs for the natural-language meal parser and the
//! structured-output recovery engine. Both carry sensible defaults; `validate()`
//! rejects degenerate values before a configured instance is built.

use crate::errors::{AppError, AppResult};

/// Configuration for the natural-language meal parser
#[derive(Debug, Clone, PartialEq)]
pub struct PreprocessConfig {
    /// Maximum number of items extracted from one description (guards against
    /// separator-heavy pathological input)
    pub max_items: usize,
    /// Whether to map spelling/phrasing variants to canonical food names
    pub enable_food_aliases: bool,
}

impl Default for PreprocessConfig {
    fn default() -> Self {
        Self {
            max_items: 16,
            enable_food_aliases: true,
        }
    }
}

impl PreprocessConfig {
    /// Validate parser configuration parameters
    pub fn validate(&self) -> AppResult<()> {
        if self.max_items == 0 {
            return Err(AppError::Config(
                "max_items must be greater than 0".to_string(),
            ));
        }
        Ok(())
    }
}

/// Configuration for the structured-output recovery engine
#[derive(Debug, Clone, PartialEq)]
pub struct RecoveryConfig {
    /// Character budget for the candidate preview carried by failures
    pub candidate_preview_chars: usize,
    /// Whether the bounded repair pass runs after a failed direct parse
    pub enable_repair: bool,
}

impl Default for RecoveryConfig {
    fn default() -> Self {
        Self {
            candidate_preview_chars: 200,
            enable_repair: true,
        }
    }
}

impl RecoveryConfig {
    /// Validate recovery configuration parameters
    pub fn validate(&self) -> AppResult<()> {
        if self.candidate_preview_chars == 0 {
            return Err(AppError::Config(
                "candidate_preview_chars must be greater than 0".to_string(),
            ));
        }
        Ok(())
    }
}
