//! Search Error Types
//!
//! Every failure inside the pipeline surfaces on the wire as the same
//! `SEARCH_ERROR` kind; the variants exist so the logs say what went wrong.

use thiserror::Error;

/// Wire identifier reported for every search failure.
pub const SEARCH_ERROR: &str = "SEARCH_ERROR";

#[derive(Debug, Error)]
pub enum SearchError {
    /// The request body was not a valid search request.
    #[error("invalid search request: {0}")]
    InvalidRequest(#[from] serde_json::Error),

    /// A `like` constraint could not be compiled as a regular expression.
    #[error("invalid pattern for field '{field}': {source}")]
    InvalidPattern {
        field: String,
        #[source]
        source: regex::Error,
    },

    /// The collection the endpoint reads from is not loaded.
    #[error("collection '{0}' not found")]
    MissingCollection(String),
}

impl SearchError {
    /// The error kind reported to clients.
    pub fn kind(&self) -> &'static str {
        SEARCH_ERROR
    }
}

pub type Result<T> = std::result::Result<T, SearchError>;
