//! Favorites service errors.

use thiserror::Error;

use crate::storage::StorageError;

#[derive(Debug, Error)]
pub enum FavoritesServiceError {
    #[error("storage error")]
    Storage(#[from] StorageError),
}
