//! Client Requests

pub mod errors;
mod repository;
pub mod service;

pub use errors::RequestsServiceError;
pub use service::*;
