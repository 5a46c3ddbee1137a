//! Member orders.

use crate::error::ServiceResult;
use mart_commerce::checkout::{OrderListParams, OrderResult};
use mart_commerce::{OrderId, PageResult};
use mart_data::{RequestSpec, Transport, TransportExt};
use std::sync::Arc;
use tracing::instrument;

pub const ORDER_PATH: &str = "/member/order";

#[derive(Clone)]
pub struct OrderService {
    transport: Arc<dyn Transport>,
}

impl OrderService {
    pub fn new(transport: Arc<dyn Transport>) -> Self {
        Self { transport }
    }

    /// Order detail. An unknown `orderState` in the reply fails decoding.
    #[instrument(skip(self), fields(order_id = %order_id))]
    pub async fn detail(&self, order_id: &OrderId) -> ServiceResult<OrderResult> {
        let spec = RequestSpec::get(format!("{ORDER_PATH}/{order_id}"));
        Ok(self.transport.request(spec).await?)
    }

    /// One page of the member's orders, optionally filtered by state.
    #[instrument(skip(self))]
    pub async fn list(&self, params: &OrderListParams) -> ServiceResult<PageResult<OrderResult>> {
        let spec = RequestSpec::get(ORDER_PATH).data(params)?;
        Ok(self.transport.request(spec).await?)
    }
}
