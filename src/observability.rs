//! Observability helpers for the parsing pipeline.
//!
//! Thin wrappers over the `metrics` facade recording one counter/histogram
//! pair per public operation. The crate never installs a recorder or
//! exporter; the embedding application decides where these land.

use std::time::Duration;

/// Record metrics for one natural-language parse operation
pub fn record_preprocess_metrics(
    duration: Duration,
    input_length: usize,
    item_count: usize,
    warning_count: usize,
) {
    metrics::counter!("meal_preprocess_operations_total").increment(1);
    metrics::histogram!("meal_preprocess_duration_seconds").record(duration.as_secs_f64());
    metrics::histogram!("meal_preprocess_input_length").record(input_length as f64);
    metrics::histogram!("meal_preprocess_items_extracted").record(item_count as f64);
    if warning_count > 0 {
        metrics::counter!("meal_preprocess_warnings_total").increment(warning_count as u64);
    }
}

/// Record metrics for one structured-output recovery attempt
pub fn record_recovery_metrics(duration: Duration, outcome: &str, used_repair: bool) {
    metrics::counter!("recovery_operations_total", "outcome" => outcome.to_string()).increment(1);
    metrics::histogram!("recovery_duration_seconds", "outcome" => outcome.to_string())
        .record(duration.as_secs_f64());
    if used_repair {
        metrics::counter!("recovery_repairs_total").increment(1);
    }
}

/// Record metrics for one fallback estimation pass
pub fn record_fallback_metrics(duration: Duration, item_count: usize, estimate_count: usize) {
    metrics::counter!("fallback_estimations_total").increment(1);
    metrics::histogram!("fallback_duration_seconds").record(duration.as_secs_f64());
    metrics::histogram!("fallback_items_considered").record(item_count as f64);
    metrics::histogram!("fallback_estimates_produced").record(estimate_count as f64);
}
