//! Record Value Helpers
//!
//! Records are schemaless JSON objects, so every stage of the pipeline works
//! against `serde_json::Value`. This module holds the three primitives the
//! stages share:
//!
//! - **Path resolution**: dot-delimited lookups that return `None` for a missing path.
//! - **String coercion**: the textual form used by equality, `like` and text search.
//! - **Relational comparison**: the single ordering policy used by `gt`/`lt` filters
//!   and by the sort stage.

use serde_json::{Map, Value};
use std::cmp::Ordering;

/// A single schemaless entry of a collection.
pub type Record = Map<String, Value>;

/// Resolves a dot-delimited path (`"owner.name"`, `"tags.0"`) against a record.
///
/// Returns `None` when any segment is missing or an intermediate value is `null`
/// or a scalar. Numeric segments index into arrays.
pub fn resolve_path<'a>(record: &'a Record, path: &str) -> Option<&'a Value> {
    let mut segments = path.split('.');
    let first = segments.next()?;
    let mut current = record.get(first)?;

    for segment in segments {
        current = match current {
            Value::Object(map) => map.get(segment)?,
            Value::Array(items) => items.get(segment.parse::<usize>().ok()?)?,
            _ => return None,
        };
    }

    Some(current)
}

/// Converts a value to the text form used for string matching.
///
/// Numbers drop a trailing `.0` (`1.0` → `"1"`), arrays join their elements
/// with commas (null elements become empty), objects collapse to
/// `"[object Object]"`.
pub fn coerce_string(value: &Value) -> String {
    match value {
        Value::Null => "null".to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => format_number(n),
        Value::String(s) => s.clone(),
        Value::Array(items) => join_values(items, ","),
        Value::Object(_) => "[object Object]".to_string(),
    }
}

/// Like [`coerce_string`], but a missing or null value becomes `""`.
pub fn coerce_string_or_empty(value: Option<&Value>) -> String {
    match value {
        None | Some(Value::Null) => String::new(),
        Some(v) => coerce_string(v),
    }
}

/// Joins array elements with `separator`; null elements contribute nothing.
pub fn join_values(items: &[Value], separator: &str) -> String {
    items
        .iter()
        .map(|item| coerce_string_or_empty(Some(item)))
        .collect::<Vec<_>>()
        .join(separator)
}

fn format_number(n: &serde_json::Number) -> String {
    if n.is_i64() || n.is_u64() {
        return n.to_string();
    }
    match n.as_f64() {
        Some(f) if f.fract() == 0.0 && f.abs() < 1e21 => format!("{}", f as i128),
        Some(f) if f != 0.0 && (f.abs() >= 1e21 || f.abs() < 1e-6) => format_exponent(f),
        Some(f) => f.to_string(),
        None => n.to_string(),
    }
}

/// Exponent form with an explicit sign: `1e-7`, `1.5e+21`.
fn format_exponent(f: f64) -> String {
    let formatted = format!("{:e}", f);
    match formatted.split_once('e') {
        Some((mantissa, exponent)) if !exponent.starts_with('-') => {
            format!("{}e+{}", mantissa, exponent)
        }
        _ => formatted,
    }
}

/// Numeric reading of a loosely typed value, as used for `limit`.
///
/// Numeric strings parse (blank is `0`), booleans are `0`/`1`, null is `0`;
/// anything else is `NaN`.
pub fn coerce_number(value: &Value) -> f64 {
    match value {
        Value::Number(n) => n.as_f64().unwrap_or(f64::NAN),
        Value::String(s) if s.trim().is_empty() => 0.0,
        Value::String(s) => s.trim().parse().unwrap_or(f64::NAN),
        Value::Bool(b) => f64::from(u8::from(*b)),
        Value::Null => 0.0,
        Value::Array(_) | Value::Object(_) => f64::NAN,
    }
}

/// Compares two values of the same kind.
///
/// Numbers compare numerically, strings lexicographically, booleans with
/// `false < true`. Any other pairing (mixed kinds, null, arrays, objects)
/// is incomparable and yields `None`.
pub fn compare_values(left: &Value, right: &Value) -> Option<Ordering> {
    match (left, right) {
        (Value::Number(a), Value::Number(b)) => a.as_f64()?.partial_cmp(&b.as_f64()?),
        (Value::String(a), Value::String(b)) => Some(a.cmp(b)),
        (Value::Bool(a), Value::Bool(b)) => Some(a.cmp(b)),
        _ => None,
    }
}

/// Total preorder used to sort records by a field.
///
/// Values of the same comparable kind use [`compare_values`]. Across kinds
/// the order is booleans, numbers, strings, then everything unorderable
/// (missing, null, arrays, objects), which all compare equal to each other.
pub fn sort_ordering(left: Option<&Value>, right: Option<&Value>) -> Ordering {
    let (lk, rk) = (sort_rank(left), sort_rank(right));
    if lk != rk {
        return lk.cmp(&rk);
    }
    match (left, right) {
        (Some(a), Some(b)) => compare_values(a, b).unwrap_or(Ordering::Equal),
        _ => Ordering::Equal,
    }
}

fn sort_rank(value: Option<&Value>) -> u8 {
    match value {
        Some(Value::Bool(_)) => 0,
        Some(Value::Number(_)) => 1,
        Some(Value::String(_)) => 2,
        _ => 3,
    }
}

/// Strict equality used by membership tests: primitives only, numbers by value.
pub fn primitive_eq(left: &Value, right: &Value) -> bool {
    match (left, right) {
        (Value::Null, Value::Null) => true,
        (Value::Number(_), Value::Number(_)) => compare_values(left, right) == Some(Ordering::Equal),
        (Value::String(a), Value::String(b)) => a == b,
        (Value::Bool(a), Value::Bool(b)) => a == b,
        _ => false,
    }
}
