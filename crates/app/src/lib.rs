//! Storage, services and integrations for the Voyage storefront.

pub mod assistant;
pub mod auth;
pub mod config;
pub mod context;
pub mod domain;
pub mod observability;
pub mod storage;

#[cfg(test)]
mod test;
