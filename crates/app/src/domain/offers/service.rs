//! Offers service.

use std::sync::Arc;

use mockall::automock;
use tracing::{debug, info};
use voyage::{
    offers::{Offer, OfferDraft, OfferId},
    search::{self, SearchFilters},
    seed::seed_catalog,
};

use crate::{
    domain::offers::{errors::OffersServiceError, repository::StoreOffersRepository},
    storage::DocumentStore,
};

#[derive(Debug)]
pub struct StoreOffersService {
    repository: StoreOffersRepository,
}

impl StoreOffersService {
    /// Build the service, seeding from the built-in catalog on first access.
    ///
    /// # Errors
    ///
    /// Returns an error if the embedded seed catalog cannot be parsed.
    pub fn new(store: Arc<dyn DocumentStore>) -> Result<Self, OffersServiceError> {
        Ok(Self::with_seed(store, seed_catalog()?))
    }

    /// Build the service with a custom seed catalog.
    #[must_use]
    pub fn with_seed(store: Arc<dyn DocumentStore>, seed: Vec<Offer>) -> Self {
        Self {
            repository: StoreOffersRepository::new(store, seed),
        }
    }
}

impl OffersService for StoreOffersService {
    fn list_offers(&self) -> Result<Vec<Offer>, OffersServiceError> {
        let offers = self.repository.list_offers()?;

        debug!(count = offers.len(), "offers listed");

        Ok(offers)
    }

    fn get_offer(&self, id: &OfferId) -> Result<Option<Offer>, OffersServiceError> {
        Ok(self
            .repository
            .list_offers()?
            .into_iter()
            .find(|offer| &offer.id == id))
    }

    fn save_offer(&self, offer: Offer) -> Result<(), OffersServiceError> {
        let id = offer.id.clone();
        let replaced = self.repository.upsert_offer(offer)?;

        info!(offer = %id, replaced, "offer saved");

        Ok(())
    }

    fn create_offer(&self, draft: OfferDraft) -> Result<Offer, OffersServiceError> {
        let offer = draft.into_offer(OfferId::new())?;

        self.repository.upsert_offer(offer.clone())?;

        info!(offer = %offer.id, title = %offer.title, "offer created");

        Ok(offer)
    }

    fn update_offer(
        &self,
        id: &OfferId,
        draft: OfferDraft,
    ) -> Result<Option<Offer>, OffersServiceError> {
        let offer = draft.into_offer(id.clone())?;

        if !self.repository.replace_offer(offer.clone())? {
            debug!(offer = %id, "update skipped, offer not found");

            return Ok(None);
        }

        info!(offer = %id, "offer updated");

        Ok(Some(offer))
    }

    fn delete_offer(&self, id: &OfferId) -> Result<(), OffersServiceError> {
        let removed = self.repository.delete_offer(id)?;

        info!(offer = %id, removed, "offer deleted");

        Ok(())
    }

    fn special_offers(&self) -> Result<Vec<Offer>, OffersServiceError> {
        Ok(search::special_offers(&self.repository.list_offers()?))
    }

    fn search(&self, filters: &SearchFilters) -> Result<Vec<Offer>, OffersServiceError> {
        let offers = self.repository.list_offers()?;
        let results = search::search(&offers, filters);

        debug!(total = offers.len(), matched = results.len(), "offers searched");

        Ok(results)
    }
}

#[automock]
pub trait OffersService: Send + Sync {
    /// Retrieves all offers, seeding the catalog on first access.
    fn list_offers(&self) -> Result<Vec<Offer>, OffersServiceError>;

    /// Retrieve a single offer.
    fn get_offer(&self, id: &OfferId) -> Result<Option<Offer>, OffersServiceError>;

    /// Replaces the offer with the same id in place, or appends it.
    fn save_offer(&self, offer: Offer) -> Result<(), OffersServiceError>;

    /// Validates a draft and appends it under a fresh id.
    fn create_offer(&self, draft: OfferDraft) -> Result<Offer, OffersServiceError>;

    /// Validates a draft and replaces the offer with the given id.
    ///
    /// Returns `None` when no such offer exists.
    fn update_offer(
        &self,
        id: &OfferId,
        draft: OfferDraft,
    ) -> Result<Option<Offer>, OffersServiceError>;

    /// Deletes an offer. Unknown ids are a no-op; favorites and reviews
    /// referencing the offer are left alone.
    fn delete_offer(&self, id: &OfferId) -> Result<(), OffersServiceError>;

    /// Promoted offers for the home page.
    fn special_offers(&self) -> Result<Vec<Offer>, OffersServiceError>;

    /// Filtered, sorted offers for the search page.
    fn search(&self, filters: &SearchFilters) -> Result<Vec<Offer>, OffersServiceError>;
}
