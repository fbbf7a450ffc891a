//! Forgiving field deserializers for the archive's loosely typed JSON.
//!
//! The published resources are hand-assembled, so a field may be `null`, a
//! count may be written as `3.0` or `"3"`, and a text field may hold a number.
//! These helpers map such values onto defaults instead of rejecting the whole
//! document. Use them together with `#[serde(default)]` so absent keys default
//! too.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Text field: strings pass through, numbers and booleans are stringified,
/// anything else becomes empty.
pub fn text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(text_from(Option::<Value>::deserialize(deserializer)?).unwrap_or_default())
}

/// Optional text field: like [`text`], but `null` stays `None`.
pub fn optional_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(text_from(Option::<Value>::deserialize(deserializer)?))
}

/// Non-negative count: integers pass through, floats are floored, negative
/// values clamp to zero, numeric strings are parsed, anything else is zero.
pub fn count<'de, D>(deserializer: D) -> Result<u64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::Number(n)) => n.as_u64().unwrap_or_else(|| n.as_f64().map_or(0, clamp_count)),
        Some(Value::String(s)) => s.trim().parse::<f64>().map_or(0, clamp_count),
        _ => 0,
    })
}

/// Optional score: numbers and numeric strings are read as `f64`, anything
/// else is `None`.
pub fn score<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::Number(n)) => n.as_f64(),
        Some(Value::String(s)) => s.trim().parse::<f64>().ok().filter(|f| f.is_finite()),
        _ => None,
    })
}

/// List field: `null` reads as empty.
pub fn list<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
}

fn text_from(value: Option<Value>) -> Option<String> {
    match value? {
        Value::String(s) => Some(s),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn clamp_count(value: f64) -> u64 {
    if value.is_finite() && value > 0.0 {
        value.floor() as u64
    } else {
        0
    }
}
