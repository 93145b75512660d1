//! Requests service errors.

use thiserror::Error;
use voyage::requests::RequestDraftError;

use crate::storage::StorageError;

#[derive(Debug, Error)]
pub enum RequestsServiceError {
    #[error("invalid request")]
    InvalidDraft(#[from] RequestDraftError),

    #[error("storage error")]
    Storage(#[from] StorageError),
}
