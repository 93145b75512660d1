//! Reviews service errors.

use thiserror::Error;
use voyage::reviews::ReviewDraftError;

use crate::storage::StorageError;

#[derive(Debug, Error)]
pub enum ReviewsServiceError {
    #[error("invalid review")]
    InvalidDraft(#[from] ReviewDraftError),

    #[error("storage error")]
    Storage(#[from] StorageError),
}
