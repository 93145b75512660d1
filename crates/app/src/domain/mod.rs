//! Voyage Domain Concerns

pub mod favorites;
pub mod offers;
pub mod requests;
pub mod reviews;
