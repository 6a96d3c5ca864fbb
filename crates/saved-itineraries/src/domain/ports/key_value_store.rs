//! Port for the device-local key-value storage primitive.
//!
//! The [`KeyValueStore`] trait is the only storage contract the saved
//! itinerary store relies on: whole-value text reads, writes and deletes under
//! a single key. Adapters provide last-write-wins semantics; nothing here
//! offers cross-call transactions.

use async_trait::async_trait;

use crate::domain::StorageKey;

use super::define_port_error;

define_port_error! {
    /// Errors raised by key-value store adapters.
    pub enum KeyValueStoreError {
        /// The stored value could not be read.
        Read {
            /// Failure description.
            message: String,
        } => "key-value store read failed: {message}",
        /// The value could not be written.
        Write {
            /// Failure description.
            message: String,
        } => "key-value store write failed: {message}",
        /// The entry could not be deleted.
        Delete {
            /// Failure description.
            message: String,
        } => "key-value store delete failed: {message}",
    }
}

/// Port for text values stored under string keys.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    /// Fetch the value stored under `key`.
    ///
    /// Returns `None` when nothing has been stored yet.
    async fn get(&self, key: &StorageKey) -> Result<Option<String>, KeyValueStoreError>;

    /// Replace the value stored under `key` in a single write.
    async fn set(&self, key: &StorageKey, value: &str) -> Result<(), KeyValueStoreError>;

    /// Remove the entry for `key`. Deleting a missing entry succeeds.
    async fn delete(&self, key: &StorageKey) -> Result<(), KeyValueStoreError>;
}

/// Fixture implementation that stores nothing.
///
/// Reads always miss and writes are discarded. Useful where storage
/// behaviour is not under test.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureKeyValueStore;

#[async_trait]
impl KeyValueStore for FixtureKeyValueStore {
    async fn get(&self, _key: &StorageKey) -> Result<Option<String>, KeyValueStoreError> {
        Ok(None)
    }

    async fn set(&self, _key: &StorageKey, _value: &str) -> Result<(), KeyValueStoreError> {
        Ok(())
    }

    async fn delete(&self, _key: &StorageKey) -> Result<(), KeyValueStoreError> {
        Ok(())
    }
}
