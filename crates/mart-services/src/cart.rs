//! Cart service.
//!
//! Every mutation is a single round trip and none of them touch local state.
//! Callers re-fetch with [`CartService::list_items`] afterwards, or reconcile
//! a [`CartSnapshot`] they already hold.

use crate::error::ServiceResult;
use mart_commerce::cart::{
    AddCartParams, CartItem, CartPatch, CartSnapshot, RemoveCartParams, SelectAllParams,
};
use mart_commerce::SkuId;
use mart_data::{RequestSpec, Transport, TransportExt};
use std::sync::Arc;
use tracing::instrument;

/// Cart collection path.
pub const CART_PATH: &str = "/member/cart";
/// Select-all toggle path.
pub const CART_SELECTED_PATH: &str = "/member/cart/selected";

/// Path of a single cart line.
pub fn cart_item_path(sku_id: &SkuId) -> String {
    format!("{CART_PATH}/{sku_id}")
}

/// Typed wrapper over the cart endpoints.
#[derive(Clone)]
pub struct CartService {
    transport: Arc<dyn Transport>,
}

impl CartService {
    pub fn new(transport: Arc<dyn Transport>) -> Self {
        Self { transport }
    }

    /// Add `count` units of a SKU. The backend merges into an existing line.
    #[instrument(skip(self), fields(sku_id = %sku_id))]
    pub async fn add_item(&self, sku_id: SkuId, count: i64) -> ServiceResult<()> {
        let params = AddCartParams::new(sku_id, count)?;
        let spec = RequestSpec::post(CART_PATH).data(&params)?;
        self.transport.execute(spec).await?;
        Ok(())
    }

    /// Authoritative cart contents, in backend order.
    #[instrument(skip(self))]
    pub async fn list_items(&self) -> ServiceResult<Vec<CartItem>> {
        Ok(self.transport.request(RequestSpec::get(CART_PATH)).await?)
    }

    /// [`CartService::list_items`] wrapped for local reconciliation.
    pub async fn snapshot(&self) -> ServiceResult<CartSnapshot> {
        self.list_items().await.map(CartSnapshot::new)
    }

    /// Remove one or many lines in one call.
    #[instrument(skip(self, ids))]
    pub async fn remove_items(
        &self,
        ids: impl IntoIterator<Item = SkuId> + Send,
    ) -> ServiceResult<()> {
        let params = RemoveCartParams::new(ids)?;
        let spec = RequestSpec::delete(CART_PATH).data(&params)?;
        self.transport.execute(spec).await?;
        Ok(())
    }

    /// Patch one line. Only fields present in `patch` are sent.
    #[instrument(skip(self), fields(sku_id = %sku_id))]
    pub async fn update_item(&self, sku_id: &SkuId, patch: CartPatch) -> ServiceResult<()> {
        patch.validate()?;
        let spec = RequestSpec::put(cart_item_path(sku_id)).data(&patch)?;
        self.transport.execute(spec).await?;
        Ok(())
    }

    /// Set the selection flag of every line.
    #[instrument(skip(self))]
    pub async fn set_all_selected(&self, selected: bool) -> ServiceResult<()> {
        let spec = RequestSpec::put(CART_SELECTED_PATH).data(&SelectAllParams { selected })?;
        self.transport.execute(spec).await?;
        Ok(())
    }
}
