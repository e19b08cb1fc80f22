//! Discovery Annotator
//!
//! Gives every surviving record a `foundAt` timestamp. Records that already
//! carry one keep it; the rest get the evaluation time advanced by one
//! millisecond per position, so discovery order is strictly increasing.

use super::value::Record;
use chrono::{DateTime, Duration, SecondsFormat, Utc};
use serde_json::Value;

pub const FOUND_AT: &str = "foundAt";

/// Formats a timestamp the way clients expect it: `2024-05-01T12:00:00.000Z`.
pub fn format_timestamp(at: DateTime<Utc>) -> String {
    at.to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Returns shallow copies of `records` with `foundAt` filled in.
pub fn annotate(records: Vec<&Record>, now: DateTime<Utc>) -> Vec<Record> {
    records
        .into_iter()
        .enumerate()
        .map(|(position, record)| {
            let mut annotated = record.clone();
            let missing = matches!(annotated.get(FOUND_AT), None | Some(Value::Null));
            if missing {
                let found_at = now + Duration::milliseconds(position as i64);
                annotated.insert(
                    FOUND_AT.to_string(),
                    Value::String(format_timestamp(found_at)),
                );
            }
            annotated
        })
        .collect()
}
