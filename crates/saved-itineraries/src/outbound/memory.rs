//! In-process `KeyValueStore` backed by a map.
//!
//! Suited to tests and previews; nothing survives the process.

use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard};

use async_trait::async_trait;

use crate::domain::StorageKey;
use crate::domain::ports::{KeyValueStore, KeyValueStoreError};

/// Map-backed key-value store.
#[derive(Debug, Default)]
pub struct InMemoryKeyValueStore {
    entries: Mutex<HashMap<StorageKey, String>>,
}

impl InMemoryKeyValueStore {
    /// Create a store pre-populated with `value` under `key`.
    #[must_use]
    pub fn with_entry(key: StorageKey, value: impl Into<String>) -> Self {
        Self {
            entries: Mutex::new(HashMap::from([(key, value.into())])),
        }
    }

    fn lock_entries(&self) -> MutexGuard<'_, HashMap<StorageKey, String>> {
        // A panic while holding the lock cannot leave a half-written value.
        self.entries
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
    }
}

#[async_trait]
impl KeyValueStore for InMemoryKeyValueStore {
    async fn get(&self, key: &StorageKey) -> Result<Option<String>, KeyValueStoreError> {
        Ok(self.lock_entries().get(key).cloned())
    }

    async fn set(&self, key: &StorageKey, value: &str) -> Result<(), KeyValueStoreError> {
        self.lock_entries().insert(key.clone(), value.to_owned());
        Ok(())
    }

    async fn delete(&self, key: &StorageKey) -> Result<(), KeyValueStoreError> {
        self.lock_entries().remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn set_then_get_returns_value() {
        let store = InMemoryKeyValueStore::default();
        let key = StorageKey::default();

        store.set(&key, "[]").await.expect("set succeeds");
        assert_eq!(store.get(&key).await.expect("get"), Some("[]".to_owned()));
    }

    #[tokio::test]
    async fn delete_missing_key_is_ok() {
        let store = InMemoryKeyValueStore::default();
        let key = StorageKey::new("other").expect("valid key");

        store.delete(&key).await.expect("delete succeeds");
        assert!(store.get(&key).await.expect("get").is_none());
    }

    #[tokio::test]
    async fn keys_are_isolated() {
        let key = StorageKey::default();
        let other = StorageKey::new("other").expect("valid key");
        let store = InMemoryKeyValueStore::with_entry(key.clone(), "a");

        store.set(&other, "b").await.expect("set succeeds");
        store.delete(&other).await.expect("delete succeeds");
        assert_eq!(store.get(&key).await.expect("get"), Some("a".to_owned()));
    }
}
