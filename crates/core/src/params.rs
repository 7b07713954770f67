//! Total helper for reading integers out of a JSON parameter object.
//!
//! A missing key or a value of the wrong type yields the default. It never
//! fails; range checking is the caller's job.

use serde_json::Value;

/// Extracts an integer from `params[name]`.
///
/// Floats are accepted and rounded, so a slider that reports `30.0` still
/// works. Values outside `i64` fall back to `default`.
pub fn param_i64(params: &Value, name: &str, default: i64) -> i64 {
    match params.get(name) {
        Some(v) => v
            .as_i64()
            .or_else(|| {
                v.as_f64()
                    .filter(|f| f.is_finite() && f.abs() < i64::MAX as f64)
                    .map(|f| f.round() as i64)
            })
            .unwrap_or(default),
        None => default,
    }
}
