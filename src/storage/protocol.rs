//! HTTP Surface
//!
//! Route paths and response bodies of the read-only server.

use serde::{Deserialize, Serialize};

// --- API Endpoints ---

/// Liveness probe.
pub const ENDPOINT_HEALTH: &str = "/";
/// Query endpoint over the configured collection.
pub const ENDPOINT_SEARCH: &str = "/search";
/// Lists every record of a collection.
pub const ENDPOINT_COLLECTION: &str = "/:collection";
/// Looks up a single record by its `id` field.
pub const ENDPOINT_RECORD: &str = "/:collection/:id";

// --- Data Transfer Objects ---

/// Response of the health route.
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Always `"ok"` while the process is serving.
    pub status: String,
    /// Server time as an ISO-8601 timestamp.
    pub time: String,
}
