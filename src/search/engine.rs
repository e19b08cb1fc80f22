use super::discovery::{FOUND_AT, annotate};
use super::error::Result;
use super::filter::{apply_filters, parse_filters};
use super::text::{normalize_query, text_search};
use super::types::{SearchRequest, SearchResponse, SortOrder};
use super::value::{Record, coerce_number, sort_ordering};
use chrono::{DateTime, Utc};

pub const DEFAULT_LIMIT: usize = 50;
pub const DEFAULT_COLLECTION: &str = "records";
pub const SEARCHABLE_FIELDS: [&str; 3] = ["title", "description", "tags"];

/// Defaults applied when a request leaves a field out.
#[derive(Debug, Clone)]
pub struct SearchConfig {
    /// Collection the endpoint reads from.
    pub collection: String,
    pub default_sort_by: String,
    pub default_order: SortOrder,
    pub default_limit: usize,
    /// Fields scanned by the free-text query.
    pub searchable_fields: Vec<String>,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            collection: DEFAULT_COLLECTION.to_string(),
            default_sort_by: FOUND_AT.to_string(),
            default_order: SortOrder::Asc,
            default_limit: DEFAULT_LIMIT,
            searchable_fields: SEARCHABLE_FIELDS.iter().map(|f| f.to_string()).collect(),
        }
    }
}

impl SearchConfig {
    /// Resolves the requested limit. Non-positive limits yield no items;
    /// fractional limits are truncated.
    pub fn effective_limit(&self, requested: Option<f64>) -> usize {
        match requested {
            None => self.default_limit,
            Some(limit) if limit.is_nan() || limit <= 0.0 => 0,
            Some(limit) => limit.trunc() as usize,
        }
    }
}

/// Runs the pipeline with the current time as discovery base.
pub fn search(
    records: &[Record],
    request: &SearchRequest,
    config: &SearchConfig,
) -> Result<SearchResponse> {
    search_at(records, request, config, Utc::now())
}

/// Runs filter → text search → discovery → sort & limit over a snapshot.
///
/// Constraints are parsed before any record is visited, so a bad filter fails
/// the whole request without producing partial results.
pub fn search_at(
    records: &[Record],
    request: &SearchRequest,
    config: &SearchConfig,
    now: DateTime<Utc>,
) -> Result<SearchResponse> {
    let filters = match &request.filters {
        Some(filters) => parse_filters(filters)?,
        None => Vec::new(),
    };

    let mut matched = apply_filters(records, &filters);
    tracing::debug!("Filters kept {} of {} records", matched.len(), records.len());

    if let Some(query) = normalize_query(request.query.as_ref()) {
        matched = text_search(matched, &query, &config.searchable_fields);
        tracing::debug!("Query '{}' kept {} records", query, matched.len());
    }

    let annotated = annotate(matched, now);

    let sort_by = request.sort_by.as_deref().unwrap_or(&config.default_sort_by);
    let order = request.order.unwrap_or(config.default_order);
    let limit = config.effective_limit(request.limit.as_ref().map(coerce_number));

    Ok(sort_and_limit(annotated, sort_by, order, limit))
}

/// Stable sort by a top-level field, then truncation. Ties keep input order.
pub fn sort_and_limit(
    mut records: Vec<Record>,
    sort_by: &str,
    order: SortOrder,
    limit: usize,
) -> SearchResponse {
    records.sort_by(|a, b| {
        let ordering = sort_ordering(a.get(sort_by), b.get(sort_by));
        match order {
            SortOrder::Asc => ordering,
            SortOrder::Desc => ordering.reverse(),
        }
    });

    let count = records.len();
    records.truncate(limit);

    SearchResponse {
        count,
        items: records,
    }
}
