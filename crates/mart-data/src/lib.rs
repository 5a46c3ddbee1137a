//! Transport layer for the mart commerce client.
//!
//! Every backend call is described by a [`RequestSpec`] and sent through a
//! [`Transport`], which answers with the backend's `{code, msg, result}`
//! [`Envelope`] or a [`FetchError`] that keeps network failures and
//! backend-reported failures apart.
//!
//! # Example
//!
//! ```rust,ignore
//! use mart_data::{ClientConfig, HttpTransport, RequestSpec, TransportExt};
//!
//! let transport = HttpTransport::new(ClientConfig::default())?;
//!
//! let banners: Vec<serde_json::Value> = transport
//!     .request(RequestSpec::get("/home/banner").data(&serde_json::json!({"distributionSite": 1}))?)
//!     .await?;
//! ```

mod client;
mod config;
mod error;
mod request;
mod response;
mod transport;

#[cfg(any(test, feature = "mock"))]
mod mock;

pub use client::{HttpTransport, SOURCE_CLIENT_HEADER};
pub use config::{ClientConfig, BASE_URL_ENV, TOKEN_ENV};
pub use error::FetchError;
pub use request::{Method, RequestSpec};
pub use response::{Envelope, Response, SUCCESS_CODE};
pub use transport::{Transport, TransportExt};

#[cfg(any(test, feature = "mock"))]
pub use mock::MockTransport;

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::{
        ClientConfig, Envelope, FetchError, Method, RequestSpec, Transport, TransportExt,
    };
}
