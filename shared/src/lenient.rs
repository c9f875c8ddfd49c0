//! Forgiving deserializers for numeric and choice fields
//!
//! Log records come from a web form and from a schemaless store, so a
//! numeric field may arrive as a number, a numeric string, `null`, or be
//! missing entirely. Aggregation treats anything that is not a finite
//! number as zero instead of failing the whole request.
//!
//! Choice fields the user skipped arrive as `""`; they read as unset.
//!
//! Use with `#[serde(default, deserialize_with = "...")]`.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Interpret a JSON value as a finite number
pub fn value_as_f64(value: &Value) -> Option<f64> {
    let n = match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    };
    n.filter(|v| v.is_finite())
}

/// Numeric field that falls back to `0.0`
pub fn number<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(value_as_f64(&value).unwrap_or(0.0))
}

/// Numeric field that stays `None` unless a usable number was given
pub fn optional_number<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(value_as_f64(&value))
}

/// Non-negative whole number that falls back to `0`
pub fn count<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(value_as_f64(&value).map(to_count).unwrap_or(0))
}

/// Non-negative whole number that stays `None` unless usable
pub fn optional_count<'de, D>(deserializer: D) -> Result<Option<u32>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(value_as_f64(&value).map(to_count))
}

/// Enum field that stays `None` for `""`, `null` or an unknown variant
pub fn optional_enum<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = Value::deserialize(deserializer)?;
    Ok(serde_json::from_value(value).ok())
}

fn to_count(v: f64) -> u32 {
    v.max(0.0).min(u32::MAX as f64) as u32
}
