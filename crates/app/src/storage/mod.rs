//! Document Storage
//!
//! Key to JSON-document storage. Every write replaces the whole document;
//! nothing is merged and no two keys are written together.

use mockall::automock;

mod collection;
mod errors;
mod file;
mod memory;

pub use collection::Collection;
pub use errors::StorageError;
pub use file::FileStore;
pub use memory::MemoryStore;

/// Offers collection key.
pub const OFFERS_KEY: &str = "voyagevista_offers";

/// Client requests collection key.
pub const REQUESTS_KEY: &str = "voyagevista_requests";

/// Favorite offer ids key.
pub const FAVORITES_KEY: &str = "voyagevista_favorites";

/// Reviews collection key.
pub const REVIEWS_KEY: &str = "voyagevista_reviews";

/// Admin session flag key.
pub const AUTH_KEY: &str = "voyagevista_auth";

#[automock]
/// Durable key/document storage backend.
pub trait DocumentStore: Send + Sync {
    /// Read the document stored under `key`, if any.
    fn read(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Replace the document stored under `key`.
    fn write(&self, key: &str, document: &str) -> Result<(), StorageError>;

    /// Remove the document stored under `key`. Absent keys are not an error.
    fn remove(&self, key: &str) -> Result<(), StorageError>;
}
