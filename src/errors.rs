//! # Application Error Types
//!
//! This module defines common error types used throughout the meal-parse crate.
//! The parsing pipeline itself is total and returns tagged results instead of
//! errors; `AppError` surfaces only from configuration validation and interop.

use std::fmt;

/// General application error type for consistent error handling
#[derive(Debug, Clone, PartialEq)]
pub enum AppError {
    /// Configuration validation errors
    Config(String),
    /// Structured-text parsing errors (diagnostic interop, not control flow)
    Parse(String),
    /// Internal application errors
    Internal(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Config(msg) => write!(f, "[CONFIG] {}", msg),
            AppError::Parse(msg) => write!(f, "[PARSE] {}", msg),
            AppError::Internal(msg) => write!(f, "[INTERNAL] {}", msg),
        }
    }
}

impl std::error::Error for AppError {}

impl From<anyhow::Error> for AppError {
    fn from(err: anyhow::Error) -> Self {
        AppError::Internal(err.to_string())
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::Parse(err.to_string())
    }
}

/// Result type alias for convenience
pub type AppResult<T> = Result<T, AppError>;

/// Standardized error logging utilities for consistent error reporting across the crate
pub mod error_logging {
    use tracing::error;

    /// Log structured-output recovery failures with candidate context
    pub fn log_recovery_error(
        error: &impl std::fmt::Display,
        operation: &str,
        candidate_preview: Option<&str>,
        input_length: usize,
    ) {
        error!(
            error = %error,
            operation = %operation,
            candidate_preview = ?candidate_preview,
            input_length = %input_length,
            "Structured-output recovery failed"
        );
    }

    /// Log configuration errors rejected during component construction
    pub fn log_config_error(error: &impl std::fmt::Display, config_key: &str, operation: &str) {
        error!(
            error = %error,
            config_key = %config_key,
            operation = %operation,
            "Configuration error"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_prefixes() {
        assert_eq!(
            AppError::Config("bad value".to_string()).to_string(),
            "[CONFIG] bad value"
        );
        assert_eq!(
            AppError::Parse("unexpected token".to_string()).to_string(),
            "[PARSE] unexpected token"
        );
        assert_eq!(
            AppError::Internal("oops".to_string()).to_string(),
            "[INTERNAL] oops"
        );
    }

    #[test]
    fn test_from_serde_json_error() {
        let err = serde_json::from_str::<serde_json::Value>("{oops").unwrap_err();
        let app: AppError = err.into();
        assert!(matches!(app, AppError::Parse(_)));
    }

    #[test]
    fn test_from_anyhow_error() {
        let err = anyhow::anyhow!("wrapped");
        let app: AppError = err.into();
        assert_eq!(app, AppError::Internal("wrapped".to_string()));
    }
}
