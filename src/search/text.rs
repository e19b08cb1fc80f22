use super::value::{Record, coerce_string, coerce_string_or_empty, join_values};
use serde_json::Value;

/// Normalizes a free-text query. Returns `None` when there is nothing to search
/// for: absent, null, `false`, `0` or the empty string.
pub fn normalize_query(query: Option<&Value>) -> Option<String> {
    match query? {
        Value::Null | Value::Bool(false) => None,
        Value::String(s) if s.is_empty() => None,
        Value::Number(n) if n.as_f64() == Some(0.0) => None,
        other => Some(coerce_string(other).to_lowercase()),
    }
}

/// Text form of a searchable field: arrays are joined with single spaces.
pub fn searchable_text(value: Option<&Value>) -> String {
    match value {
        Some(Value::Array(items)) => join_values(items, " "),
        other => coerce_string_or_empty(other),
    }
}

/// Keeps records where any of `fields` contains `query` (already lowercased).
pub fn text_search<'a>(
    records: Vec<&'a Record>,
    query: &str,
    fields: &[String],
) -> Vec<&'a Record> {
    records
        .into_iter()
        .filter(|record| {
            fields.iter().any(|field| {
                searchable_text(record.get(field))
                    .to_lowercase()
                    .contains(query)
            })
        })
        .collect()
}
