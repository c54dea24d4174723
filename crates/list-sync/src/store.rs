//! Item Store
//!
//! One JSON array of items under one key.

use std::rc::Rc;

use crate::item::Item;
use crate::storage::{KeyValueStorage, StorageResult};

/// Persistence unit for a single list
#[derive(Clone)]
pub struct Store {
    key: String,
    backend: Rc<dyn KeyValueStorage>,
}

impl Store {
    pub fn new(key: impl Into<String>, backend: Rc<dyn KeyValueStorage>) -> Self {
        Self {
            key: key.into(),
            backend,
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    /// Stored items. Absent, malformed or unreadable data yields an empty list.
    pub fn load(&self) -> Vec<Item> {
        let raw = match self.backend.get(&self.key) {
            Ok(Some(raw)) => raw,
            Ok(None) => return Vec::new(),
            Err(err) => {
                tracing::warn!(key = %self.key, error = %err, "failed to read list");
                return Vec::new();
            }
        };

        match serde_json::from_str::<Vec<Item>>(&raw) {
            Ok(items) => items,
            Err(err) => {
                tracing::warn!(key = %self.key, error = %err, "discarding malformed list");
                Vec::new()
            }
        }
    }

    /// Replace the stored array with `items`
    pub fn save(&self, items: &[Item]) -> StorageResult<()> {
        let json = serde_json::to_string(items)?;
        self.backend.set(&self.key, &json)
    }
}
