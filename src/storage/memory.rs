use crate::search::value::{Record, coerce_string};

use dashmap::DashMap;
use serde_json::Value;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("failed to read database file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse database: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("database root must be a JSON object")]
    NotAnObject,

    #[error("collection '{collection}' entry {index} is not a JSON object")]
    InvalidRecord { collection: String, index: usize },
}

/// Read-only, in-memory set of named record collections.
///
/// Each collection is held behind an `Arc`, so a search takes a cheap
/// snapshot and never observes a partially replaced collection.
pub struct RecordStore {
    collections: DashMap<String, Arc<Vec<Record>>>,
}

impl RecordStore {
    pub fn new() -> Self {
        Self {
            collections: DashMap::new(),
        }
    }

    /// Loads a json-server style database file: `{ "records": [ {...}, ... ] }`.
    pub async fn load(path: &Path) -> Result<Self, StoreError> {
        let raw = tokio::fs::read_to_string(path)
            .await
            .map_err(|source| StoreError::Io {
                path: path.to_path_buf(),
                source,
            })?;
        let root: Value = serde_json::from_str(&raw)?;
        Self::from_json(root)
    }

    /// Builds a store from a parsed database document.
    ///
    /// Array members become collections. Other members (singular resources)
    /// are skipped.
    pub fn from_json(root: Value) -> Result<Self, StoreError> {
        let Value::Object(members) = root else {
            return Err(StoreError::NotAnObject);
        };

        let store = Self::new();
        for (name, member) in members {
            let Value::Array(entries) = member else {
                tracing::warn!("Skipping non-collection database member '{}'", name);
                continue;
            };

            let mut records = Vec::with_capacity(entries.len());
            for (index, entry) in entries.into_iter().enumerate() {
                match entry {
                    Value::Object(record) => records.push(record),
                    _ => {
                        return Err(StoreError::InvalidRecord {
                            collection: name,
                            index,
                        });
                    }
                }
            }

            tracing::info!("Loaded collection '{}' ({} records)", name, records.len());
            store.insert_collection(&name, records);
        }

        Ok(store)
    }

    /// Installs a collection. Only called while the store is being built.
    pub fn insert_collection(&self, name: &str, records: Vec<Record>) {
        self.collections.insert(name.to_string(), Arc::new(records));
    }

    /// Immutable view of a collection for the duration of one request.
    pub fn snapshot(&self, name: &str) -> Option<Arc<Vec<Record>>> {
        self.collections.get(name).map(|entry| entry.value().clone())
    }

    pub fn collection_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self
            .collections
            .iter()
            .map(|entry| entry.key().clone())
            .collect();
        names.sort();
        names
    }

    /// First record whose `id` has the given string form.
    pub fn find_by_id(&self, collection: &str, id: &str) -> Option<Record> {
        let records = self.snapshot(collection)?;
        records
            .iter()
            .find(|record| record.get("id").map(coerce_string).as_deref() == Some(id))
            .cloned()
    }
}

impl Default for RecordStore {
    fn default() -> Self {
        Self::new()
    }
}
