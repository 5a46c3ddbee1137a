//! Hot recommendation lists.

use crate::error::ServiceResult;
use mart_commerce::catalog::{HotParams, HotResult};
use mart_data::{RequestSpec, Transport, TransportExt};
use std::sync::Arc;
use tracing::instrument;

/// Typed wrapper over the hot-list endpoints. The path is chosen by the
/// caller, one per hot list.
#[derive(Clone)]
pub struct HotService {
    transport: Arc<dyn Transport>,
}

impl HotService {
    pub fn new(transport: Arc<dyn Transport>) -> Self {
        Self { transport }
    }

    /// One page of the list at `url`.
    #[instrument(skip(self))]
    pub async fn page(&self, url: &str, params: &HotParams) -> ServiceResult<HotResult> {
        let spec = RequestSpec::get(url).data(params)?;
        Ok(self.transport.request(spec).await?)
    }
}
