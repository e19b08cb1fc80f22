use super::engine::{SearchConfig, search};
use super::error::SearchError;
use super::types::{SearchErrorResponse, SearchRequest, SearchResponse};
use crate::storage::memory::RecordStore;
use axum::body::Bytes;
use axum::http::StatusCode;
use axum::{Extension, Json};
use std::sync::Arc;

pub type SearchReply = Result<Json<SearchResponse>, (StatusCode, Json<SearchErrorResponse>)>;

/// `POST /search`. An empty body is the same as `{}`.
pub async fn handle_search(
    Extension(store): Extension<Arc<RecordStore>>,
    Extension(config): Extension<Arc<SearchConfig>>,
    body: Bytes,
) -> SearchReply {
    match run_search(&store, &config, &body) {
        Ok(response) => {
            tracing::debug!(
                "Search returned {} of {} matches",
                response.items.len(),
                response.count
            );
            Ok(Json(response))
        }
        Err(e) => {
            tracing::error!("{}: {}", e.kind(), e);
            Err((
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(SearchErrorResponse {
                    error: e.kind().to_string(),
                    message: e.to_string(),
                }),
            ))
        }
    }
}

fn run_search(
    store: &RecordStore,
    config: &SearchConfig,
    body: &[u8],
) -> Result<SearchResponse, SearchError> {
    let request: SearchRequest = if body.iter().all(u8::is_ascii_whitespace) {
        SearchRequest::default()
    } else {
        serde_json::from_slice(body)?
    };

    let records = store
        .snapshot(&config.collection)
        .ok_or_else(|| SearchError::MissingCollection(config.collection.clone()))?;

    search(&records, &request, config)
}
