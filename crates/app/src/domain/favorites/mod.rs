//! Favorites

pub mod errors;
pub mod service;

pub use errors::FavoritesServiceError;
pub use service::*;
