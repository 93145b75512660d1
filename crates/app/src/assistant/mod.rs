//! Generative Assistant
//!
//! Narrow boundary to an external generative-language service. The rest of
//! the crate only sees [`GenerativeClient`] and the fallback-string contract
//! of [`Assistant`].

mod client;
mod errors;
pub mod gemini;
mod prompts;
mod service;

pub use client::*;
pub use errors::AssistantError;
pub use gemini::{GeminiClient, GeminiConfig};
pub use service::*;
