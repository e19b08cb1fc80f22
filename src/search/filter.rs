//! Filter Engine
//!
//! Turns the wire `filters` mapping into typed [`FieldFilter`]s and applies
//! them as a logical AND over a record sequence.
//!
//! Constraint shapes are resolved once, at parse time:
//! - an object becomes the first of `like`, `gt`, `gte`, `lt`, `lte` it contains
//!   (later keys are ignored, never combined); an object with none of them
//!   falls through to equality,
//! - an array becomes a membership test,
//! - anything else is a case-insensitive equality test on string forms.

use super::error::{Result, SearchError};
use super::value::{
    Record, coerce_string, coerce_string_or_empty, compare_values, primitive_eq, resolve_path,
};
use regex::{Regex, RegexBuilder};
use serde_json::{Map, Value};
use std::cmp::Ordering;

/// Relational operators honored inside a constraint object, in precedence order after `like`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompareOp {
    Gt,
    Gte,
    Lt,
    Lte,
}

impl CompareOp {
    fn key(self) -> &'static str {
        match self {
            CompareOp::Gt => "gt",
            CompareOp::Gte => "gte",
            CompareOp::Lt => "lt",
            CompareOp::Lte => "lte",
        }
    }

    fn accepts(self, ordering: Ordering) -> bool {
        match self {
            CompareOp::Gt => ordering == Ordering::Greater,
            CompareOp::Gte => ordering != Ordering::Less,
            CompareOp::Lt => ordering == Ordering::Less,
            CompareOp::Lte => ordering != Ordering::Greater,
        }
    }
}

const COMPARE_PRECEDENCE: [CompareOp; 4] =
    [CompareOp::Gt, CompareOp::Gte, CompareOp::Lt, CompareOp::Lte];

/// A single field-level matching rule.
#[derive(Debug, Clone)]
pub enum Constraint {
    /// Case-insensitive equality of string forms. Stores the lowercased target.
    Equals(String),
    /// Membership in a list of values, without coercion.
    OneOf(Vec<Value>),
    /// Case-insensitive regular-expression search.
    Matches(Regex),
    /// Relational comparison against the raw field value.
    Compare(CompareOp, Value),
}

impl Constraint {
    /// Builds a constraint from its wire form. `field` is only used for error messages.
    pub fn parse(field: &str, value: &Value) -> Result<Self> {
        match value {
            Value::Object(shape) => Self::parse_object(field, shape),
            Value::Array(items) => Ok(Constraint::OneOf(items.clone())),
            scalar => Ok(Constraint::Equals(coerce_string(scalar).to_lowercase())),
        }
    }

    fn parse_object(field: &str, shape: &Map<String, Value>) -> Result<Self> {
        if let Some(pattern) = shape.get("like") {
            let regex = RegexBuilder::new(&coerce_string(pattern))
                .case_insensitive(true)
                .build()
                .map_err(|source| SearchError::InvalidPattern {
                    field: field.to_string(),
                    source,
                })?;
            return Ok(Constraint::Matches(regex));
        }

        for op in COMPARE_PRECEDENCE {
            if let Some(bound) = shape.get(op.key()) {
                return Ok(Constraint::Compare(op, bound.clone()));
            }
        }

        Ok(Constraint::Equals(
            coerce_string(&Value::Object(shape.clone())).to_lowercase(),
        ))
    }

    /// Tests a resolved field value (`None` when the path is missing).
    pub fn matches(&self, field_value: Option<&Value>) -> bool {
        match self {
            Constraint::Equals(expected) => field_value
                .map(|v| coerce_string(v).to_lowercase() == *expected)
                .unwrap_or(false),
            Constraint::OneOf(candidates) => field_value
                .map(|v| candidates.iter().any(|c| primitive_eq(v, c)))
                .unwrap_or(false),
            Constraint::Matches(regex) => regex.is_match(&coerce_string_or_empty(field_value)),
            Constraint::Compare(op, bound) => field_value
                .and_then(|v| compare_values(v, bound))
                .map(|ordering| op.accepts(ordering))
                .unwrap_or(false),
        }
    }
}

/// A constraint bound to the dot-delimited path it applies to.
#[derive(Debug, Clone)]
pub struct FieldFilter {
    pub path: String,
    pub constraint: Constraint,
}

impl FieldFilter {
    pub fn matches(&self, record: &Record) -> bool {
        self.constraint.matches(resolve_path(record, &self.path))
    }
}

/// Parses the wire `filters` mapping, preserving request order.
pub fn parse_filters(filters: &Map<String, Value>) -> Result<Vec<FieldFilter>> {
    filters
        .iter()
        .map(|(path, value)| {
            Ok(FieldFilter {
                path: path.clone(),
                constraint: Constraint::parse(path, value)?,
            })
        })
        .collect()
}

/// Keeps the records that satisfy every filter. No filters keeps everything.
pub fn apply_filters<'a>(records: &'a [Record], filters: &[FieldFilter]) -> Vec<&'a Record> {
    records
        .iter()
        .filter(|record| filters.iter().all(|filter| filter.matches(record)))
        .collect()
}
