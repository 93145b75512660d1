//! Reviews service.

use std::sync::Arc;

use jiff::Timestamp;
use mockall::automock;
use tracing::info;
use voyage::{
    offers::OfferId,
    reviews::{RatingSummary, Review, ReviewDraft, ReviewId},
};

use crate::{
    domain::reviews::{errors::ReviewsServiceError, repository::StoreReviewsRepository},
    storage::DocumentStore,
};

#[derive(Debug)]
pub struct StoreReviewsService {
    repository: StoreReviewsRepository,
}

impl StoreReviewsService {
    #[must_use]
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self {
            repository: StoreReviewsRepository::new(store),
        }
    }
}

impl ReviewsService for StoreReviewsService {
    fn list_reviews_for_offer(
        &self,
        offer_id: &OfferId,
    ) -> Result<Vec<Review>, ReviewsServiceError> {
        Ok(self.repository.list_for_offer(offer_id)?)
    }

    fn add_review(&self, review: Review) -> Result<(), ReviewsServiceError> {
        let (id, offer) = (review.id.clone(), review.offer_id.clone());

        self.repository.append(review)?;

        info!(review = %id, %offer, "review added");

        Ok(())
    }

    fn submit_review(&self, draft: ReviewDraft) -> Result<Review, ReviewsServiceError> {
        let review = draft.into_review(ReviewId::new(), Timestamp::now())?;

        self.add_review(review.clone())?;

        Ok(review)
    }

    fn rating_summary(&self, offer_id: &OfferId) -> Result<RatingSummary, ReviewsServiceError> {
        Ok(RatingSummary::from_reviews(&self.repository.list_for_offer(offer_id)?))
    }
}

#[automock]
pub trait ReviewsService: Send + Sync {
    /// Reviews of one offer, newest first.
    fn list_reviews_for_offer(&self, offer_id: &OfferId)
    -> Result<Vec<Review>, ReviewsServiceError>;

    /// Appends a review. Reviews are never edited or deleted.
    fn add_review(&self, review: Review) -> Result<(), ReviewsServiceError>;

    /// Validates a visitor's review form and appends it.
    fn submit_review(&self, draft: ReviewDraft) -> Result<Review, ReviewsServiceError>;

    /// Review count and one-decimal average for an offer.
    fn rating_summary(&self, offer_id: &OfferId) -> Result<RatingSummary, ReviewsServiceError>;
}
