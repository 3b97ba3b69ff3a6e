//! Field resolution over schema-less records.
//!
//! The upstream accounting API is inconsistent about field naming: the same
//! concept arrives as snake_case, camelCase, or one of several synonyms
//! depending on the record type and API version. Every shaper reads its
//! fields through these helpers so the precedence rules live in one place:
//! first present key from an ordered synonym list wins, numeric fields
//! coerce with 0.0 as the ultimate fallback, and absent optional strings
//! become `None` (never a missing output key).

use crate::error::{NormalizerError, Result};
use crate::numeric::coerce_num;
use serde_json::Value;

/// Returns the first present, non-null value among the given keys.
pub fn pick<'a>(record: &'a Value, keys: &[&str]) -> Option<&'a Value> {
    let map = record.as_object()?;
    for key in keys {
        match map.get(*key) {
            Some(Value::Null) | None => continue,
            Some(value) => return Some(value),
        }
    }
    None
}

/// Resolves a numeric field; absent or non-coercible values become 0.0.
pub fn num_field(record: &Value, keys: &[&str]) -> f64 {
    pick(record, keys).map(coerce_num).unwrap_or(0.0)
}

/// Resolves an optional string field.
pub fn str_field(record: &Value, keys: &[&str]) -> Option<String> {
    match pick(record, keys)? {
        Value::String(s) => Some(s.clone()),
        // Some endpoints hand back numeric identifiers where names belong
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

/// Resolves a string field with a semantic default such as "Unknown".
pub fn str_field_or(record: &Value, keys: &[&str], default: &str) -> String {
    str_field(record, keys).unwrap_or_else(|| default.to_string())
}

/// Resolves a boolean field; absent or non-boolean values become false.
pub fn bool_field(record: &Value, keys: &[&str]) -> bool {
    pick(record, keys).and_then(Value::as_bool).unwrap_or(false)
}

/// Borrows a raw response value as a record list. A JSON `null` is an absent
/// response field and shapes as an empty list; any other non-array is a
/// caller bug and propagates.
pub fn record_list<'a>(raw: &'a Value, entity: &'static str) -> Result<&'a [Value]> {
    match raw {
        Value::Array(items) => Ok(items),
        Value::Null => Ok(&[]),
        _ => Err(NormalizerError::ExpectedRecordList { entity }),
    }
}
