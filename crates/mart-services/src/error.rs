//! Service error types.

use mart_commerce::CommerceError;
use mart_data::FetchError;
use thiserror::Error;

/// Failure of a service call.
///
/// `Validation` is raised before the transport is touched. `Fetch` carries
/// transport and backend failures unchanged.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ServiceError {
    #[error(transparent)]
    Validation(#[from] CommerceError),

    #[error(transparent)]
    Fetch(#[from] FetchError),
}

impl ServiceError {
    /// True when the request never left the client.
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }

    /// True for network failures and timeouts.
    pub fn is_retryable(&self) -> bool {
        matches!(self, Self::Fetch(e) if e.is_retryable())
    }

    /// True when the backend rejected the session.
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, Self::Fetch(FetchError::Unauthorized(_)))
    }

    /// Backend error code, if the backend answered with one.
    pub fn api_code(&self) -> Option<&str> {
        match self {
            Self::Fetch(FetchError::Api { code, .. }) => Some(code),
            _ => None,
        }
    }
}

/// Result alias for service calls.
pub type ServiceResult<T> = Result<T, ServiceError>;
