//! Favorites service.

use std::sync::Arc;

use mockall::automock;
use rustc_hash::FxHashSet;
use tracing::info;
use voyage::offers::OfferId;

use crate::{
    domain::favorites::errors::FavoritesServiceError,
    storage::{Collection, DocumentStore, FAVORITES_KEY},
};

/// Favorite offer ids, stored independently of the offers themselves.
#[derive(Debug)]
pub struct StoreFavoritesService {
    favorites: Collection<OfferId>,
}

impl StoreFavoritesService {
    #[must_use]
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self {
            favorites: Collection::new(store, FAVORITES_KEY),
        }
    }
}

impl FavoritesService for StoreFavoritesService {
    fn list_favorite_ids(&self) -> Result<FxHashSet<OfferId>, FavoritesServiceError> {
        Ok(self.favorites.load()?.into_iter().collect())
    }

    fn toggle_favorite(&self, offer_id: &OfferId) -> Result<bool, FavoritesServiceError> {
        let favorited = self.favorites.modify(|favorites| {
            let before = favorites.len();

            favorites.retain(|id| id != offer_id);

            if favorites.len() == before {
                favorites.push(offer_id.clone());
                true
            } else {
                false
            }
        })?;

        info!(offer = %offer_id, favorited, "favorite toggled");

        Ok(favorited)
    }

    fn is_favorite(&self, offer_id: &OfferId) -> Result<bool, FavoritesServiceError> {
        Ok(self.favorites.load()?.contains(offer_id))
    }
}

#[automock]
pub trait FavoritesService: Send + Sync {
    /// All favorited offer ids, including ids whose offer no longer exists.
    fn list_favorite_ids(&self) -> Result<FxHashSet<OfferId>, FavoritesServiceError>;

    /// Flip membership of `offer_id`. Returns `true` when it is now a
    /// favorite.
    fn toggle_favorite(&self, offer_id: &OfferId) -> Result<bool, FavoritesServiceError>;

    /// Whether `offer_id` is a favorite.
    fn is_favorite(&self, offer_id: &OfferId) -> Result<bool, FavoritesServiceError>;
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use crate::{
        domain::offers::OffersService,
        storage::{FAVORITES_KEY, OFFERS_KEY},
        test::TestContext,
    };

    use super::*;

    #[test]
    fn toggle_twice_round_trips() -> TestResult {
        let ctx = TestContext::new()?;
        let id = OfferId::from_string("2");

        assert!(ctx.favorites.toggle_favorite(&id)?);
        assert!(ctx.favorites.is_favorite(&id)?);

        assert!(!ctx.favorites.toggle_favorite(&id)?);
        assert!(!ctx.favorites.is_favorite(&id)?);

        Ok(())
    }

    #[test]
    fn list_contains_each_id_once() -> TestResult {
        let ctx = TestContext::new()?;
        ctx.store.write(FAVORITES_KEY, r#"["1", "3", "1"]"#)?;

        let ids = ctx.favorites.list_favorite_ids()?;

        assert_eq!(ids.len(), 2);
        assert!(ids.contains(&OfferId::from_string("1")));
        assert!(ids.contains(&OfferId::from_string("3")));

        Ok(())
    }

    #[test]
    fn toggle_off_clears_duplicated_entries() -> TestResult {
        let ctx = TestContext::new()?;
        ctx.store.write(FAVORITES_KEY, r#"["1", "1"]"#)?;

        let id = OfferId::from_string("1");

        assert!(!ctx.favorites.toggle_favorite(&id)?);
        assert!(!ctx.favorites.is_favorite(&id)?);

        Ok(())
    }

    #[test]
    fn deleting_an_offer_keeps_its_favorite() -> TestResult {
        let ctx = TestContext::new()?;
        let id = OfferId::from_string("3");

        ctx.favorites.toggle_favorite(&id)?;
        ctx.offers.delete_offer(&id)?;

        assert!(ctx.favorites.is_favorite(&id)?);
        assert!(ctx.offers.get_offer(&id)?.is_none());

        Ok(())
    }

    #[test]
    fn favorites_are_independent_of_seeding() -> TestResult {
        let ctx = TestContext::new()?;

        ctx.favorites.toggle_favorite(&OfferId::from_string("unknown"))?;

        assert_eq!(ctx.store.read(OFFERS_KEY)?, None);

        Ok(())
    }
}
