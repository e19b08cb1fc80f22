//! Search Service Module
//!
//! The query endpoint over an in-memory record collection.
//!
//! ## Pipeline
//! Each request runs four pure stages over an immutable snapshot:
//! 1. **Filter** (`filter`): per-field constraints, ANDed together.
//! 2. **Text search** (`text`): case-insensitive substring match across the
//!    searchable fields, ORed.
//! 3. **Discovery** (`discovery`): stamps `foundAt` on records lacking one.
//! 4. **Sort & limit** (`engine`): stable ordering by a field, then truncation.
//!
//! ## Submodules
//! - **`engine`**: Pipeline driver, defaults and the sort/limit stage.
//! - **`error`**: The `SEARCH_ERROR` failure type.
//! - **`handlers`**: HTTP handler for the Axum web server.
//! - **`types`**: Request and response DTOs.
//! - **`value`**: Path resolution, string coercion and comparison of JSON values.

pub mod discovery;
pub mod engine;
pub mod error;
pub mod filter;
pub mod handlers;
pub mod text;
pub mod types;
pub mod value;
