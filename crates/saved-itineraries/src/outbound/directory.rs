//! Directory-backed `KeyValueStore` writing one JSON file per key.
//!
//! Each key maps to `<key>.json` inside a capability-scoped directory handle,
//! so no key can address a file outside that directory. Writes go through a
//! temporary file and a rename. File I/O runs inline on the calling task;
//! values are small single-user blobs.

use std::io;

use async_trait::async_trait;
use camino::{Utf8Path, Utf8PathBuf};
use cap_std::ambient_authority;
use cap_std::fs::Dir;
use tracing::debug;

use super::atomic_io::write_atomic;
use crate::domain::StorageKey;
use crate::domain::ports::{KeyValueStore, KeyValueStoreError};

const FILE_EXTENSION: &str = "json";

/// Key-value store persisting entries as files in one directory.
#[derive(Debug)]
pub struct DirectoryKeyValueStore {
    dir: Dir,
    root: Utf8PathBuf,
}

impl DirectoryKeyValueStore {
    /// Open (creating if needed) the directory at `root`.
    ///
    /// # Errors
    ///
    /// Returns any filesystem error raised while creating or opening the
    /// directory.
    pub fn open(root: &Utf8Path) -> io::Result<Self> {
        Dir::create_ambient_dir_all(root, ambient_authority())?;
        let dir = Dir::open_ambient_dir(root, ambient_authority())?;
        Ok(Self {
            dir,
            root: root.to_path_buf(),
        })
    }

    /// Directory the entries live in.
    #[must_use]
    pub fn root(&self) -> &Utf8Path {
        &self.root
    }

    fn file_name(key: &StorageKey) -> String {
        format!("{key}.{FILE_EXTENSION}")
    }
}

#[async_trait]
impl KeyValueStore for DirectoryKeyValueStore {
    async fn get(&self, key: &StorageKey) -> Result<Option<String>, KeyValueStoreError> {
        let file_name = Self::file_name(key);
        match self.dir.read_to_string(&file_name) {
            Ok(contents) => Ok(Some(contents)),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(err) => {
                debug!(root = %self.root, file_name = %file_name, error = %err, "read failed");
                Err(KeyValueStoreError::read(format!("{file_name}: {err}")))
            }
        }
    }

    async fn set(&self, key: &StorageKey, value: &str) -> Result<(), KeyValueStoreError> {
        let file_name = Self::file_name(key);
        write_atomic(&self.dir, &file_name, value).map_err(|err| {
            debug!(root = %self.root, file_name = %file_name, error = %err, "write failed");
            KeyValueStoreError::write(format!("{file_name}: {err}"))
        })
    }

    async fn delete(&self, key: &StorageKey) -> Result<(), KeyValueStoreError> {
        let file_name = Self::file_name(key);
        match self.dir.remove_file(&file_name) {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(err) => {
                debug!(root = %self.root, file_name = %file_name, error = %err, "delete failed");
                Err(KeyValueStoreError::delete(format!("{file_name}: {err}")))
            }
        }
    }
}
