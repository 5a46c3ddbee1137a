//! Transport error types.

use thiserror::Error;

/// Errors that can occur when talking to the commerce backend.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum FetchError {
    /// The request never produced a response (DNS, connect, reset).
    #[error("Request failed: {0}")]
    Transport(String),

    /// Request timeout.
    #[error("Request timed out")]
    Timeout,

    /// The backend rejected the session (HTTP 401).
    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    /// The backend answered with an error envelope.
    #[error("API error {code} (HTTP {status}): {message}")]
    Api {
        status: u16,
        code: String,
        message: String,
    },

    /// Failed to decode the response body.
    #[error("Failed to decode response: {0}")]
    Decode(String),

    /// The request could not be built.
    #[error("Invalid request: {0}")]
    InvalidRequest(String),
}

impl FetchError {
    /// Whether the failure happened below the API layer and the same call may
    /// succeed when repeated.
    pub fn is_retryable(&self) -> bool {
        matches!(self, FetchError::Transport(_) | FetchError::Timeout)
    }

    /// Whether the backend itself reported the failure.
    pub fn is_api(&self) -> bool {
        matches!(self, FetchError::Api { .. } | FetchError::Unauthorized(_))
    }
}

impl From<serde_json::Error> for FetchError {
    fn from(e: serde_json::Error) -> Self {
        FetchError::Decode(e.to_string())
    }
}

impl From<reqwest::Error> for FetchError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            FetchError::Timeout
        } else if e.is_builder() {
            FetchError::InvalidRequest(e.to_string())
        } else if e.is_decode() {
            FetchError::Decode(e.to_string())
        } else {
            FetchError::Transport(e.to_string())
        }
    }
}
