//! Typed JSON-array documents.

use std::{fmt, marker::PhantomData, sync::Arc, sync::Mutex};

use serde::{Serialize, de::DeserializeOwned};

use super::{DocumentStore, StorageError};

/// A `Vec<T>` persisted as one JSON array under a fixed key.
///
/// [`Collection::modify`] runs load, mutate and write while holding a
/// collection-wide lock, so two operations in the same process never
/// interleave. Separate processes still race with last-write-wins.
pub struct Collection<T> {
    store: Arc<dyn DocumentStore>,
    key: &'static str,
    initial: Option<Vec<T>>,
    lock: Mutex<()>,
    _marker: PhantomData<fn() -> T>,
}

impl<T> fmt::Debug for Collection<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Collection")
            .field("key", &self.key)
            .field("seeded", &self.initial.is_some())
            .finish_non_exhaustive()
    }
}

impl<T> Collection<T>
where
    T: Clone + Serialize + DeserializeOwned,
{
    /// Collection that starts out empty.
    pub fn new(store: Arc<dyn DocumentStore>, key: &'static str) -> Self {
        Self {
            store,
            key,
            initial: None,
            lock: Mutex::new(()),
            _marker: PhantomData,
        }
    }

    /// Collection that writes `initial` the first time the document is found
    /// absent.
    pub fn seeded(store: Arc<dyn DocumentStore>, key: &'static str, initial: Vec<T>) -> Self {
        Self {
            initial: Some(initial),
            ..Self::new(store, key)
        }
    }

    /// Current contents, writing the seed first if the document was never
    /// initialised.
    ///
    /// # Errors
    ///
    /// Returns an error if the document cannot be read, decoded or seeded.
    pub fn load(&self) -> Result<Vec<T>, StorageError> {
        let _guard = self.lock.lock().map_err(|_| StorageError::Poisoned)?;

        self.load_unlocked()
    }

    /// Replace the whole collection.
    ///
    /// # Errors
    ///
    /// Returns an error if the document cannot be encoded or written.
    pub fn save(&self, items: &[T]) -> Result<(), StorageError> {
        let _guard = self.lock.lock().map_err(|_| StorageError::Poisoned)?;

        self.save_unlocked(items)
    }

    /// Read-all, apply `f`, write-all, as one operation.
    ///
    /// The collection is written back even when `f` leaves it unchanged.
    ///
    /// # Errors
    ///
    /// Returns an error if the document cannot be read, decoded or written.
    pub fn modify<R>(&self, f: impl FnOnce(&mut Vec<T>) -> R) -> Result<R, StorageError> {
        let _guard = self.lock.lock().map_err(|_| StorageError::Poisoned)?;

        let mut items = self.load_unlocked()?;
        let result = f(&mut items);

        self.save_unlocked(&items)?;

        Ok(result)
    }

    fn load_unlocked(&self) -> Result<Vec<T>, StorageError> {
        match self.store.read(self.key)? {
            Some(document) => {
                serde_json::from_str(&document).map_err(|source| StorageError::Malformed {
                    key: self.key.to_string(),
                    source,
                })
            }
            None => match &self.initial {
                Some(initial) => {
                    self.save_unlocked(initial)?;

                    Ok(initial.clone())
                }
                None => Ok(Vec::new()),
            },
        }
    }

    fn save_unlocked(&self, items: &[T]) -> Result<(), StorageError> {
        let document = serde_json::to_string(items).map_err(|source| StorageError::Encode {
            key: self.key.to_string(),
            source,
        })?;

        self.store.write(self.key, &document)
    }
}
