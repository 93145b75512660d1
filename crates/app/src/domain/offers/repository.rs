//! Offers Repository

use std::sync::Arc;

use voyage::offers::{Offer, OfferId};

use crate::storage::{Collection, DocumentStore, OFFERS_KEY, StorageError};

#[derive(Debug)]
pub(crate) struct StoreOffersRepository {
    offers: Collection<Offer>,
}

impl StoreOffersRepository {
    pub(crate) fn new(store: Arc<dyn DocumentStore>, seed: Vec<Offer>) -> Self {
        Self {
            offers: Collection::seeded(store, OFFERS_KEY, seed),
        }
    }

    pub(crate) fn list_offers(&self) -> Result<Vec<Offer>, StorageError> {
        self.offers.load()
    }

    /// Replace in place when the id exists, append otherwise. Returns whether
    /// an existing offer was replaced.
    pub(crate) fn upsert_offer(&self, offer: Offer) -> Result<bool, StorageError> {
        self.offers.modify(|offers| {
            if let Some(existing) = offers.iter_mut().find(|o| o.id == offer.id) {
                *existing = offer;
                true
            } else {
                offers.push(offer);
                false
            }
        })
    }

    /// Replace only when the id exists.
    pub(crate) fn replace_offer(&self, offer: Offer) -> Result<bool, StorageError> {
        self.offers.modify(|offers| {
            offers
                .iter_mut()
                .find(|o| o.id == offer.id)
                .map(|existing| *existing = offer)
                .is_some()
        })
    }

    /// Returns whether an offer was removed.
    pub(crate) fn delete_offer(&self, id: &OfferId) -> Result<bool, StorageError> {
        self.offers.modify(|offers| {
            let before = offers.len();

            offers.retain(|o| &o.id != id);

            offers.len() != before
        })
    }
}
