use axum::{
    Json,
    extract::{Extension, Path},
    http::StatusCode,
};
use serde_json::{Value, json};
use std::sync::Arc;

use super::memory::RecordStore;
use super::protocol::HealthResponse;
use crate::search::discovery::format_timestamp;

pub async fn handle_health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        time: format_timestamp(chrono::Utc::now()),
    })
}

pub async fn handle_list_collection(
    Extension(store): Extension<Arc<RecordStore>>,
    Path(collection): Path<String>,
) -> (StatusCode, Json<Value>) {
    match store.snapshot(&collection) {
        Some(records) => {
            let items: Vec<Value> = records.iter().cloned().map(Value::Object).collect();
            (StatusCode::OK, Json(Value::Array(items)))
        }
        None => {
            tracing::debug!("Unknown collection requested: {}", collection);
            (StatusCode::NOT_FOUND, Json(json!({})))
        }
    }
}

pub async fn handle_get_record(
    Extension(store): Extension<Arc<RecordStore>>,
    Path((collection, id)): Path<(String, String)>,
) -> (StatusCode, Json<Value>) {
    match store.find_by_id(&collection, &id) {
        Some(record) => (StatusCode::OK, Json(Value::Object(record))),
        None => {
            tracing::debug!("Record {}/{} not found", collection, id);
            (StatusCode::NOT_FOUND, Json(json!({})))
        }
    }
}
