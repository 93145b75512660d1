//! Voyage
//!
//! Domain model and pure catalog logic for a travel-offer storefront: offers,
//! client requests, reviews, the built-in seed catalog and the search/filter
//! engine. Persistence lives in `voyage-app`.

pub mod ids;
pub mod offers;
pub mod prelude;
pub mod requests;
pub mod reviews;
pub mod search;
pub mod seed;
