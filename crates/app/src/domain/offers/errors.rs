//! Offers service errors.

use thiserror::Error;
use voyage::{offers::OfferDraftError, seed::SeedError};

use crate::storage::StorageError;

#[derive(Debug, Error)]
pub enum OffersServiceError {
    #[error("invalid offer")]
    InvalidDraft(#[from] OfferDraftError),

    #[error("seed catalog unavailable")]
    Seed(#[from] SeedError),

    #[error("storage error")]
    Storage(#[from] StorageError),
}
