//! Voyage prelude.
//!
//! Convenience exports for common library consumers.

pub use crate::{
    ids::TypedId,
    offers::{Category, Offer, OfferDraft, OfferDraftError, OfferId, UnknownCategory},
    requests::{
        ClientRequest, OfferRef, RequestDraft, RequestDraftError, RequestId, RequestOrigin,
        RequestStats, RequestStatus, UnknownStatus,
    },
    reviews::{Rating, RatingError, RatingSummary, Review, ReviewDraft, ReviewDraftError, ReviewId},
    search::{
        PRICE_CEILING, SearchFilters, SortKey, UnknownSortKey, favorite_offers, filter_catalog,
        search, special_offers,
    },
    seed::{SeedError, seed_catalog},
};
