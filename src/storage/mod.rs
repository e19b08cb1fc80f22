//! Record Storage Module
//!
//! Holds the collections loaded from the database file and serves them
//! read-only.
//!
//! ## Core Concepts
//! - **Loading**: A json-server style document; each array member becomes a named collection.
//! - **Snapshots**: Readers get an `Arc` to an immutable collection; nothing writes after startup.
//! - **Default routes**: Health check, collection listing and lookup by `id`.

pub mod handlers;
pub mod memory;
pub mod protocol;
