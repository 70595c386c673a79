// src/utils/serialization.rs
//! JSON helpers shared by the normalizer and the payload builders.

use serde::de::{DeserializeOwned, Deserializer, Error};
use serde::Deserialize;
use serde_json::Value;

/// Deserializes a JSON value, flattening the error to its message.
///
/// # Returns
/// - `Ok(T)` with the decoded value
/// - `Err(String)` describing where decoding failed
pub fn decode<T: DeserializeOwned>(value: Value) -> Result<T, String> {
    serde_json::from_value(value).map_err(|e| e.to_string())
}

/// Returns the string at `value` if it is a non-blank JSON string.
pub fn non_empty_str(value: Option<&Value>) -> Option<String> {
    value
        .and_then(Value::as_str)
        .filter(|text| !text.trim().is_empty())
        .map(str::to_string)
}

/// Clones `value` unless it is missing or carries nothing (`null`, `""`,
/// `[]`, `{}`).
pub fn present(value: Option<&Value>) -> Option<Value> {
    match value? {
        Value::Null => None,
        Value::String(text) if text.is_empty() => None,
        Value::Array(items) if items.is_empty() => None,
        Value::Object(fields) if fields.is_empty() => None,
        other => Some(other.clone()),
    }
}

/// Clones `value` unless it is missing or `null`.
pub fn non_null(value: Option<&Value>) -> Option<Value> {
    match value? {
        Value::Null => None,
        other => Some(other.clone()),
    }
}

/// Field deserializer that reads an explicit `null` as `T::default()`.
///
/// Pair with `#[serde(default)]` so a missing key behaves the same way.
pub fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Reads a non-negative integer sent either as a JSON number or as a
/// numeric string.
pub fn number_or_string<E: Error>(value: &Value) -> Result<u32, E> {
    let parsed = match value {
        Value::Number(number) => number.as_u64().and_then(|n| u32::try_from(n).ok()),
        Value::String(text) => text.trim().parse().ok(),
        _ => None,
    };
    parsed.ok_or_else(|| E::custom(format!("expected a non-negative integer, got {}", value)))
}
