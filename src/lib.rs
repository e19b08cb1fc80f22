//! Record Search Server Library
//!
//! A read-only JSON record server whose one piece of real logic is the
//! `POST /search` query pipeline. The binary (`main.rs`) loads a database
//! file and mounts these modules on an Axum router.
//!
//! ## Modules
//! - **`config`**: Command-line and environment configuration for the binary.
//! - **`search`**: Filter, text search, discovery annotation, sorting and truncation
//!   of records, plus the HTTP handler that exposes them.
//! - **`storage`**: The in-memory collection store loaded at startup, and the
//!   read-only default routes (health, list, get by id).

pub mod config;
pub mod search;
pub mod storage;

use axum::{
    Extension, Router,
    routing::{get, post},
};
use std::sync::Arc;

use search::engine::SearchConfig;
use search::handlers::handle_search;
use storage::handlers::{handle_get_record, handle_health, handle_list_collection};
use storage::memory::RecordStore;
use storage::protocol::{ENDPOINT_COLLECTION, ENDPOINT_HEALTH, ENDPOINT_RECORD, ENDPOINT_SEARCH};

/// Builds the HTTP router. `/search` is a static path and wins over `/:collection`.
pub fn build_router(store: Arc<RecordStore>, config: Arc<SearchConfig>) -> Router {
    Router::new()
        .route(ENDPOINT_HEALTH, get(handle_health))
        .route(ENDPOINT_SEARCH, post(handle_search))
        .route(ENDPOINT_COLLECTION, get(handle_list_collection))
        .route(ENDPOINT_RECORD, get(handle_get_record))
        .layer(Extension(store))
        .layer(Extension(config))
}
