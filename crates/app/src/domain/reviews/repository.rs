//! Reviews Repository

use std::sync::Arc;

use voyage::{
    offers::OfferId,
    reviews::{Review, newest_first},
};

use crate::storage::{Collection, DocumentStore, REVIEWS_KEY, StorageError};

#[derive(Debug)]
pub(crate) struct StoreReviewsRepository {
    reviews: Collection<Review>,
}

impl StoreReviewsRepository {
    pub(crate) fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self {
            reviews: Collection::new(store, REVIEWS_KEY),
        }
    }

    /// Reviews of one offer, newest first. Reviews sharing a timestamp are
    /// listed latest-appended first.
    pub(crate) fn list_for_offer(&self, offer_id: &OfferId) -> Result<Vec<Review>, StorageError> {
        let mut reviews: Vec<Review> = self
            .reviews
            .load()?
            .into_iter()
            .rev()
            .filter(|review| &review.offer_id == offer_id)
            .collect();

        newest_first(&mut reviews);

        Ok(reviews)
    }

    pub(crate) fn append(&self, review: Review) -> Result<(), StorageError> {
        self.reviews.modify(|reviews| reviews.push(review))
    }
}
