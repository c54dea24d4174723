//! Storage Layer - Key-Value Backends
//!
//! Abstract string key-value persistence. The page uses `localStorage`;
//! tests and the fallback path use `MemoryStorage`.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use thiserror::Error;

/// Common result type for storage operations
pub type StorageResult<T> = Result<T, StorageError>;

/// Storage-level errors
#[derive(Debug, Error)]
pub enum StorageError {
    /// The backend could not be opened at all
    #[error("storage unavailable: {0}")]
    Unavailable(String),
    /// A read or write was rejected by the backend (quota, privacy mode)
    #[error("storage backend error on key `{key}`: {reason}")]
    Backend { key: String, reason: String },
    /// Items could not be serialized
    #[error("failed to encode items: {0}")]
    Encode(#[from] serde_json::Error),
}

/// Durable string key-value store
///
/// Writes are synchronous and visible to every later `get`.
pub trait KeyValueStorage {
    /// Raw value under `key`, `None` if absent
    fn get(&self, key: &str) -> StorageResult<Option<String>>;

    /// Overwrite the value under `key`
    fn set(&self, key: &str, value: &str) -> StorageResult<()>;
}

impl<T: KeyValueStorage + ?Sized> KeyValueStorage for Rc<T> {
    fn get(&self, key: &str) -> StorageResult<Option<String>> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> StorageResult<()> {
        (**self).set(key, value)
    }
}

/// In-process backend
#[derive(Debug, Default)]
pub struct MemoryStorage {
    entries: RefCell<HashMap<String, String>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a raw value, e.g. a corrupted document
    pub fn with_entry(self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.entries.borrow_mut().insert(key.into(), value.into());
        self
    }

    /// Raw value under `key`
    pub fn raw(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }
}

impl KeyValueStorage for MemoryStorage {
    fn get(&self, key: &str) -> StorageResult<Option<String>> {
        Ok(self.raw(key))
    }

    fn set(&self, key: &str, value: &str) -> StorageResult<()> {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}
