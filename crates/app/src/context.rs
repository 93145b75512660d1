//! App Context

use std::sync::Arc;

use thiserror::Error;
use tracing::{debug, info};
use zeroize::Zeroizing;

use crate::{
    assistant::{Assistant, GeminiClient},
    auth::{AuthService, StoreAuthService},
    config::AppConfig,
    domain::{
        favorites::{FavoritesService, StoreFavoritesService},
        offers::{OffersService, OffersServiceError, StoreOffersService},
        requests::{RequestsService, StoreRequestsService},
        reviews::{ReviewsService, StoreReviewsService},
    },
    storage::{DocumentStore, FileStore, MemoryStore},
};

#[derive(Debug, Error)]
pub enum AppInitError {
    #[error("failed to prepare offers service")]
    Offers(#[source] OffersServiceError),
}

#[derive(Clone)]
pub struct AppContext {
    pub offers: Arc<dyn OffersService>,
    pub requests: Arc<dyn RequestsService>,
    pub favorites: Arc<dyn FavoritesService>,
    pub reviews: Arc<dyn ReviewsService>,
    pub auth: Arc<dyn AuthService>,
    pub assistant: Assistant,
}

impl AppContext {
    /// Build application context from configuration.
    ///
    /// # Errors
    ///
    /// Returns an error when the embedded seed catalog cannot be loaded.
    pub fn from_config(config: &AppConfig) -> Result<Self, AppInitError> {
        let store: Arc<dyn DocumentStore> = if config.storage.in_memory {
            debug!("using in-memory document store");

            Arc::new(MemoryStore::default())
        } else {
            debug!(path = %config.storage.data_dir.display(), "using file document store");

            Arc::new(FileStore::new(config.storage.data_dir.clone()))
        };

        let assistant = config.assistant.gemini().map_or_else(Assistant::disabled, |gemini| {
            info!(model = %gemini.model, "generative assistant enabled");

            Assistant::new(Arc::new(GeminiClient::new(gemini)))
        });

        Self::from_store(
            store,
            Zeroizing::new(config.auth.admin_password.clone()),
            assistant,
        )
    }

    /// Build application context over an existing document store.
    ///
    /// # Errors
    ///
    /// Returns an error when the embedded seed catalog cannot be loaded.
    pub fn from_store(
        store: Arc<dyn DocumentStore>,
        admin_password: Zeroizing<String>,
        assistant: Assistant,
    ) -> Result<Self, AppInitError> {
        let offers = StoreOffersService::new(store.clone()).map_err(AppInitError::Offers)?;

        Ok(Self {
            offers: Arc::new(offers),
            requests: Arc::new(StoreRequestsService::new(store.clone())),
            favorites: Arc::new(StoreFavoritesService::new(store.clone())),
            reviews: Arc::new(StoreReviewsService::new(store.clone())),
            auth: Arc::new(StoreAuthService::new(store, admin_password)),
            assistant,
        })
    }
}
