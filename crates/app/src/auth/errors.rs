//! Auth service errors.

use thiserror::Error;

use crate::storage::StorageError;

#[derive(Debug, Error)]
pub enum AuthServiceError {
    #[error("storage error")]
    Storage(#[from] StorageError),
}
