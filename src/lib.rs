//! # Meal Parse
//!
//! Text-recovery pipeline for a meal tracking tool: a deterministic
//! natural-language parser for short Thai/English food descriptions, a
//! resilient JSON extraction-and-repair engine for upstream model output,
//! and a deterministic fallback nutrition estimator for degenerate results.

pub mod config;
pub mod errors;
pub mod fallback;
pub mod lexicon;
pub mod observability;
pub mod preprocessing;
pub mod recovery;
pub mod schema;

// Re-export types for easier access
pub use config::{PreprocessConfig, RecoveryConfig};
pub use errors::{AppError, AppResult};
pub use fallback::{estimate_fallback_nutrition, Confidence, FallbackEstimate};
pub use lexicon::Unit;
pub use preprocessing::{
    normalize_and_parse_meal, normalize_meal_text, MealParser, ParsedItem, PreprocessResult,
};
pub use recovery::{recover_structured_object, RecoveryEngine, RecoveryResult};
pub use schema::{AdviceResponse, NutritionAnalysis};
