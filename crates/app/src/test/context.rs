//! Test context for service-level tests.

use std::sync::Arc;

use zeroize::Zeroizing;

use crate::{
    auth::StoreAuthService,
    domain::{
        favorites::StoreFavoritesService,
        offers::{OffersServiceError, StoreOffersService},
        requests::StoreRequestsService,
        reviews::StoreReviewsService,
    },
    storage::{DocumentStore, MemoryStore},
};

/// Every service wired over one shared in-memory store.
pub(crate) struct TestContext {
    pub store: Arc<MemoryStore>,
    pub offers: StoreOffersService,
    pub requests: StoreRequestsService,
    pub favorites: StoreFavoritesService,
    pub reviews: StoreReviewsService,
    pub auth: StoreAuthService,
}

impl TestContext {
    pub const ADMIN_PASSWORD: &'static str = "admin123";

    pub fn new() -> Result<Self, OffersServiceError> {
        let store = Arc::new(MemoryStore::new());
        let shared: Arc<dyn DocumentStore> = store.clone();

        Ok(Self {
            offers: StoreOffersService::new(shared.clone())?,
            requests: StoreRequestsService::new(shared.clone()),
            favorites: StoreFavoritesService::new(shared.clone()),
            reviews: StoreReviewsService::new(shared.clone()),
            auth: StoreAuthService::new(shared, Zeroizing::new(Self::ADMIN_PASSWORD.to_string())),
            store,
        })
    }
}
