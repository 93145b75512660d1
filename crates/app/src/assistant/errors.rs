//! Assistant errors.

use thiserror::Error;

/// Errors that can occur when talking to the generative service.
#[derive(Debug, Error)]
pub enum AssistantError {
    /// An HTTP transport or serialization error occurred.
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),

    /// The service returned a non-2xx response or an unexpected body.
    #[error("unexpected response from generative service: {0}")]
    UnexpectedResponse(String),

    /// The service answered without any content.
    #[error("generative service returned no content")]
    Empty,

    /// Audio payload was not valid base64.
    #[error("invalid audio payload")]
    Audio(#[from] base64::DecodeError),
}
