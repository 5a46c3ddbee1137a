//! The transport capability the service layer is written against.

use crate::{Envelope, FetchError, RequestSpec};
use async_trait::async_trait;
use serde::de::DeserializeOwned;
use std::sync::Arc;

/// Performs one backend call and returns the decoded envelope.
///
/// Implementations own base URL resolution, auth headers and timeouts.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn send(&self, spec: RequestSpec) -> Result<Envelope, FetchError>;
}

#[async_trait]
impl<T: Transport + ?Sized> Transport for Arc<T> {
    async fn send(&self, spec: RequestSpec) -> Result<Envelope, FetchError> {
        (**self).send(spec).await
    }
}

/// Typed helpers on top of [`Transport::send`].
#[async_trait]
pub trait TransportExt: Transport {
    /// Send a request and decode its `result` payload.
    async fn request<T>(&self, spec: RequestSpec) -> Result<T, FetchError>
    where
        T: DeserializeOwned + Send,
    {
        let envelope = self.send(spec).await?;
        Ok(envelope.decode::<T>()?.result)
    }

    /// Send a request whose `result` carries nothing of interest.
    async fn execute(&self, spec: RequestSpec) -> Result<(), FetchError> {
        self.send(spec).await.map(|_| ())
    }
}

impl<T: Transport + ?Sized> TransportExt for T {}
