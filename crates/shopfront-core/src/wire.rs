//! # Lenient Wire Decoding
//!
//! The storefront backend is loosely typed: ids arrive as numbers or numeric
//! strings, booleans as `true`, `1` or `"1"`, and optional text as `null`,
//! `""` or a missing key. These helpers absorb that looseness so record types
//! can use plain Rust types.
//!
//! Every helper here is total: unexpected scalars decode to a neutral value
//! (`""`, `false`, `None`) instead of failing the enclosing record. Only
//! structurally wrong input (an object where a scalar belongs) is rejected.

use chrono::{DateTime, NaiveDateTime};
use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Timestamp layout used by the backend (`2024-05-01 09:30:00`).
const BACKEND_TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// A JSON scalar as the backend sends it.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum Scalar {
    Text(String),
    Integer(i64),
    Unsigned(u64),
    Float(f64),
    Bool(bool),
}

impl Scalar {
    /// Render the scalar the way the backend would print it.
    pub fn into_text(self) -> String {
        match self {
            Self::Text(s) => s,
            Self::Integer(n) => n.to_string(),
            Self::Unsigned(n) => n.to_string(),
            Self::Float(n) => n.to_string(),
            Self::Bool(b) => b.to_string(),
        }
    }

    /// Interpret the scalar as a PHP-style truthy flag.
    pub fn is_truthy(&self) -> bool {
        match self {
            Self::Bool(b) => *b,
            Self::Integer(n) => *n != 0,
            Self::Unsigned(n) => *n != 0,
            Self::Float(n) => *n != 0.0,
            Self::Text(s) => matches!(
                s.trim().to_ascii_lowercase().as_str(),
                "1" | "true" | "yes"
            ),
        }
    }
}

/// Extract non-empty text from a string or number JSON value.
///
/// Strings are trimmed; an empty string counts as absent. Numbers are
/// rendered with their JSON representation (`42` becomes `"42"`).
pub fn scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) if !s.trim().is_empty() => Some(s.trim().to_string()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

/// Extract a non-negative count from a number or numeric string.
pub fn scalar_count(value: &Value) -> Option<u64> {
    match value {
        Value::Number(n) => n.as_u64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

/// Parse a backend timestamp, accepting the backend layout or RFC 3339.
pub fn parse_timestamp(raw: &str) -> Option<NaiveDateTime> {
    let raw = raw.trim();
    NaiveDateTime::parse_from_str(raw, BACKEND_TIMESTAMP_FORMAT)
        .ok()
        .or_else(|| DateTime::parse_from_rfc3339(raw).ok().map(|dt| dt.naive_utc()))
}

/// Deserialize text that may arrive as a string, a number, or `null`.
pub fn text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Scalar>::deserialize(deserializer)?
        .map(Scalar::into_text)
        .unwrap_or_default())
}

/// Like [`text`], but empty or missing values become `None`.
pub fn optional_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Scalar>::deserialize(deserializer)?
        .map(Scalar::into_text)
        .filter(|s| !s.trim().is_empty()))
}

/// Deserialize a PHP-style flag (`true`, `1`, `"1"`, `"true"`).
pub fn flag<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Scalar>::deserialize(deserializer)?.is_some_and(|s| s.is_truthy()))
}

/// Deserialize an optional backend timestamp; unparseable values become `None`.
pub fn timestamp<'de, D>(deserializer: D) -> Result<Option<NaiveDateTime>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Scalar>::deserialize(deserializer)?
        .and_then(|s| parse_timestamp(&s.into_text())))
}
