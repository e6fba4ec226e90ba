// Lenient coercion helpers for records read back from the store.
//
// Purpose
// - Old records were written by hand-rolled clients and may carry numbers as
//   strings, missing fields, or junk values. A malformed field degrades to a
//   default instead of failing the whole record.

use serde::{Deserialize, Deserializer};
use serde_json::Value as Json;

/// Number, or numeric string, or nothing.
pub fn lenient_f64<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value: Option<Json> = Option::deserialize(deserializer)?;
    Ok(match value {
        Some(Json::Number(number)) => number.as_f64(),
        Some(Json::String(raw)) => raw.trim().parse().ok(),
        _ => None,
    })
}

/// String, or nothing. Non-string values count as absent.
pub fn lenient_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value: Option<Json> = Option::deserialize(deserializer)?;
    Ok(match value {
        Some(Json::String(raw)) => Some(raw),
        _ => None,
    })
}

/// Numeric contribution of an optional field: absent, non-finite and negative
/// values all count as zero, so running totals never decrease.
pub fn non_negative_or_zero(value: Option<f64>) -> f64 {
    match value {
        Some(v) if v.is_finite() && v > 0.0 => v,
        _ => 0.0,
    }
}
