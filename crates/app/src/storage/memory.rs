//! In-memory document store.

use std::sync::Mutex;

use rustc_hash::FxHashMap;

use super::{DocumentStore, StorageError};

/// Process-local store, used by tests and `--in-memory` runs.
#[derive(Debug, Default)]
pub struct MemoryStore {
    documents: Mutex<FxHashMap<String, String>>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl DocumentStore for MemoryStore {
    fn read(&self, key: &str) -> Result<Option<String>, StorageError> {
        let documents = self.documents.lock().map_err(|_| StorageError::Poisoned)?;

        Ok(documents.get(key).cloned())
    }

    fn write(&self, key: &str, document: &str) -> Result<(), StorageError> {
        let mut documents = self.documents.lock().map_err(|_| StorageError::Poisoned)?;

        documents.insert(key.to_string(), document.to_string());

        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        let mut documents = self.documents.lock().map_err(|_| StorageError::Poisoned)?;

        documents.remove(key);

        Ok(())
    }
}
