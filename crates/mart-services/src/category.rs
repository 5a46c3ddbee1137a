//! Category tree.

use crate::error::ServiceResult;
use mart_commerce::catalog::CategoryTopItem;
use mart_data::{RequestSpec, Transport, TransportExt};
use std::sync::Arc;
use tracing::instrument;

pub const CATEGORY_TOP_PATH: &str = "/category/top";

#[derive(Clone)]
pub struct CategoryService {
    transport: Arc<dyn Transport>,
}

impl CategoryService {
    pub fn new(transport: Arc<dyn Transport>) -> Self {
        Self { transport }
    }

    /// Top-level categories with their children and goods.
    #[instrument(skip(self))]
    pub async fn top(&self) -> ServiceResult<Vec<CategoryTopItem>> {
        Ok(self
            .transport
            .request(RequestSpec::get(CATEGORY_TOP_PATH))
            .await?)
    }
}
