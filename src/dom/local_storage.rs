//! `localStorage` backend

use list_sync::{KeyValueStorage, StorageError, StorageResult};

pub struct LocalStorage {
    storage: web_sys::Storage,
}

impl LocalStorage {
    /// Origin's `localStorage`; fails in privacy modes that disable it
    pub fn open() -> StorageResult<Self> {
        let window = web_sys::window()
            .ok_or_else(|| StorageError::Unavailable("no global window".to_string()))?;
        let storage = window
            .local_storage()
            .map_err(|err| StorageError::Unavailable(format!("{:?}", err)))?
            .ok_or_else(|| StorageError::Unavailable("localStorage disabled".to_string()))?;
        Ok(Self { storage })
    }
}

impl KeyValueStorage for LocalStorage {
    fn get(&self, key: &str) -> StorageResult<Option<String>> {
        self.storage.get_item(key).map_err(|err| StorageError::Backend {
            key: key.to_string(),
            reason: format!("{:?}", err),
        })
    }

    fn set(&self, key: &str, value: &str) -> StorageResult<()> {
        self.storage.set_item(key, value).map_err(|err| StorageError::Backend {
            key: key.to_string(),
            reason: format!("{:?}", err),
        })
    }
}
