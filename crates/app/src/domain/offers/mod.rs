//! Offers

pub mod errors;
mod repository;
pub mod service;

pub use errors::OffersServiceError;
pub use service::*;
