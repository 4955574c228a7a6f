//! Local Storage Token Store
//!
//! Persists the session tokens in `window.localStorage` under the
//! well-known keys.

use clinic::{StorageError, StorageResult, TokenStore};

/// `localStorage`-backed [`TokenStore`]
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalStorageTokenStore;

fn local_storage() -> StorageResult<web_sys::Storage> {
    web_sys::window()
        .and_then(|window| window.local_storage().ok().flatten())
        .ok_or(StorageError::Unavailable)
}

impl TokenStore for LocalStorageTokenStore {
    fn get(&self, key: &str) -> StorageResult<Option<String>> {
        local_storage()?
            .get_item(key)
            .map_err(|e| StorageError::Read {
                key: key.to_string(),
                reason: format!("{:?}", e),
            })
    }

    fn set(&self, key: &str, value: &str) -> StorageResult<()> {
        local_storage()?
            .set_item(key, value)
            .map_err(|e| StorageError::Write {
                key: key.to_string(),
                reason: format!("{:?}", e),
            })
    }

    fn remove(&self, key: &str) -> StorageResult<()> {
        local_storage()?
            .remove_item(key)
            .map_err(|e| StorageError::Write {
                key: key.to_string(),
                reason: format!("{:?}", e),
            })
    }
}
