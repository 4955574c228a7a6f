//! Token Pair and Stores
//!
//! Tokens are opaque strings. Nothing here validates, refreshes or expires
//! them; they are written on login, read once at dashboard load and removed
//! on logout.

use serde::{Deserialize, Serialize};
use std::cell::RefCell;
use std::collections::HashMap;

use super::error::StorageResult;

/// Storage key for the access token
pub const ACCESS_TOKEN_KEY: &str = "access_token";

/// Storage key for the refresh token
pub const REFRESH_TOKEN_KEY: &str = "refresh_token";

/// Access/refresh token pair
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionTokens {
    pub access_token: String,
    pub refresh_token: String,
}

impl SessionTokens {
    pub fn new(access_token: impl Into<String>, refresh_token: impl Into<String>) -> Self {
        Self {
            access_token: access_token.into(),
            refresh_token: refresh_token.into(),
        }
    }
}

/// Key-value persistence for the session tokens.
///
/// Methods take `&self`: browser storage is a shared handle and every caller
/// runs on the single UI thread.
pub trait TokenStore {
    /// Read a raw value
    fn get(&self, key: &str) -> StorageResult<Option<String>>;

    /// Write a raw value
    fn set(&self, key: &str, value: &str) -> StorageResult<()>;

    /// Remove a key (absent keys are not an error)
    fn remove(&self, key: &str) -> StorageResult<()>;

    /// Persist both tokens under their well-known keys.
    ///
    /// If the refresh token cannot be written, the access token is put back
    /// to its previous value so a failed save never leaves half a pair.
    fn save(&self, tokens: &SessionTokens) -> StorageResult<()> {
        let previous = self.get(ACCESS_TOKEN_KEY)?;
        self.set(ACCESS_TOKEN_KEY, &tokens.access_token)?;

        if let Err(e) = self.set(REFRESH_TOKEN_KEY, &tokens.refresh_token) {
            let restored = match previous.as_deref() {
                Some(access) => self.set(ACCESS_TOKEN_KEY, access),
                None => self.remove(ACCESS_TOKEN_KEY),
            };
            if let Err(rollback) = restored {
                tracing::error!(error = %rollback, "Failed to restore access token");
            }
            return Err(e);
        }

        Ok(())
    }

    /// Load the pair, `None` unless both keys are present
    fn load(&self) -> StorageResult<Option<SessionTokens>> {
        let access = self.get(ACCESS_TOKEN_KEY)?;
        let refresh = self.get(REFRESH_TOKEN_KEY)?;
        Ok(access.zip(refresh).map(|(a, r)| SessionTokens::new(a, r)))
    }

    /// Remove both tokens
    fn clear(&self) -> StorageResult<()> {
        self.remove(ACCESS_TOKEN_KEY)?;
        self.remove(REFRESH_TOKEN_KEY)
    }

    /// Whether a non-empty access token is stored
    fn has_access_token(&self) -> StorageResult<bool> {
        Ok(self
            .get(ACCESS_TOKEN_KEY)?
            .is_some_and(|token| !token.is_empty()))
    }
}

/// In-process store, used for native builds and tests
#[derive(Debug, Default)]
pub struct MemoryTokenStore {
    entries: RefCell<HashMap<String, String>>,
}

impl MemoryTokenStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-seeded with a token pair
    pub fn with_tokens(tokens: &SessionTokens) -> Self {
        let store = Self::new();
        {
            let mut entries = store.entries.borrow_mut();
            entries.insert(ACCESS_TOKEN_KEY.to_string(), tokens.access_token.clone());
            entries.insert(REFRESH_TOKEN_KEY.to_string(), tokens.refresh_token.clone());
        }
        store
    }

    /// Number of stored keys
    pub fn len(&self) -> usize {
        self.entries.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.borrow().is_empty()
    }
}

impl TokenStore for MemoryTokenStore {
    fn get(&self, key: &str) -> StorageResult<Option<String>> {
        Ok(self.entries.borrow().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> StorageResult<()> {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> StorageResult<()> {
        self.entries.borrow_mut().remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::error::StorageError;

    #[test]
    fn test_save_uses_well_known_keys() {
        let store = MemoryTokenStore::new();
        store.save(&SessionTokens::new("A", "B")).unwrap();

        assert_eq!(store.get("access_token").unwrap().as_deref(), Some("A"));
        assert_eq!(store.get("refresh_token").unwrap().as_deref(), Some("B"));
        assert_eq!(store.load().unwrap(), Some(SessionTokens::new("A", "B")));
    }

    #[test]
    fn test_clear_removes_both_tokens() {
        let store = MemoryTokenStore::with_tokens(&SessionTokens::new("A", "B"));
        store.set("unrelated", "kept").unwrap();

        store.clear().unwrap();

        assert_eq!(store.load().unwrap(), None);
        assert_eq!(store.get("unrelated").unwrap().as_deref(), Some("kept"));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_empty_access_token_counts_as_absent() {
        let store = MemoryTokenStore::new();
        assert!(!store.has_access_token().unwrap());

        store.set(ACCESS_TOKEN_KEY, "").unwrap();
        assert!(!store.has_access_token().unwrap());

        store.set(ACCESS_TOKEN_KEY, "token").unwrap();
        assert!(store.has_access_token().unwrap());
    }

    /// Memory store whose refresh-token writes fail
    #[derive(Default)]
    struct RefreshWriteFails {
        inner: MemoryTokenStore,
    }

    impl TokenStore for RefreshWriteFails {
        fn get(&self, key: &str) -> StorageResult<Option<String>> {
            self.inner.get(key)
        }

        fn set(&self, key: &str, value: &str) -> StorageResult<()> {
            if key == REFRESH_TOKEN_KEY {
                return Err(StorageError::Write {
                    key: key.to_string(),
                    reason: "quota exceeded".to_string(),
                });
            }
            self.inner.set(key, value)
        }

        fn remove(&self, key: &str) -> StorageResult<()> {
            self.inner.remove(key)
        }
    }

    #[test]
    fn test_failed_refresh_write_removes_new_access_token() {
        let store = RefreshWriteFails::default();

        let err = store.save(&SessionTokens::new("A", "B")).unwrap_err();

        assert!(matches!(err, StorageError::Write { ref key, .. } if key == REFRESH_TOKEN_KEY));
        assert_eq!(store.get(ACCESS_TOKEN_KEY).unwrap(), None);
        assert!(!store.has_access_token().unwrap());
    }

    #[test]
    fn test_failed_refresh_write_restores_previous_access_token() {
        let store = RefreshWriteFails {
            inner: MemoryTokenStore::with_tokens(&SessionTokens::new("old-a", "old-r")),
        };

        assert!(store.save(&SessionTokens::new("A", "B")).is_err());

        assert_eq!(store.load().unwrap(), Some(SessionTokens::new("old-a", "old-r")));
    }

    #[test]
    fn test_load_requires_both_keys() {
        let store = MemoryTokenStore::new();
        store.set(ACCESS_TOKEN_KEY, "A").unwrap();
        assert_eq!(store.load().unwrap(), None);
    }
}
