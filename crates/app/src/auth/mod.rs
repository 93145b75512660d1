//! Admin Authentication
//!
//! A single shared admin password guards the management commands. The
//! session is a persisted flag, with no expiry and no hashing.

mod errors;
mod service;

pub use errors::*;
pub use service::*;
