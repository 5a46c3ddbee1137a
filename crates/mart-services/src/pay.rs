//! Payment parameters.

use crate::error::ServiceResult;
use mart_commerce::pay::{OrderIdParams, PaymentOptions};
use mart_commerce::OrderId;
use mart_data::{RequestSpec, Transport, TransportExt};
use std::sync::Arc;
use tracing::instrument;

pub const MINI_PAY_PATH: &str = "/pay/wxPay/miniPay";
pub const MOCK_PAY_PATH: &str = "/pay/mock";

/// Typed wrapper over the payment endpoints. The returned options are passed
/// to the host payment API untouched.
#[derive(Clone)]
pub struct PayService {
    transport: Arc<dyn Transport>,
}

impl PayService {
    pub fn new(transport: Arc<dyn Transport>) -> Self {
        Self { transport }
    }

    /// Platform payment parameters for an order.
    #[instrument(skip(self), fields(order_id = %order_id))]
    pub async fn wx_pay_params(&self, order_id: &OrderId) -> ServiceResult<PaymentOptions> {
        self.get(MINI_PAY_PATH, order_id).await
    }

    /// Mark an order paid on a development backend.
    #[instrument(skip(self), fields(order_id = %order_id))]
    pub async fn mock_pay(&self, order_id: &OrderId) -> ServiceResult<PaymentOptions> {
        self.get(MOCK_PAY_PATH, order_id).await
    }

    async fn get(&self, path: &str, order_id: &OrderId) -> ServiceResult<PaymentOptions> {
        let spec = RequestSpec::get(path).data(&OrderIdParams::new(order_id.clone()))?;
        let options: Option<PaymentOptions> = self.transport.request(spec).await?;
        Ok(options.unwrap_or_default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mart_data::{Method, MockTransport};
    use serde_json::{json, Value};

    #[tokio::test]
    async fn test_payment_params_are_passed_through() {
        let mock = Arc::new(MockTransport::new().respond(
            Method::Get,
            MINI_PAY_PATH,
            json!({"timeStamp": "1", "nonceStr": "n", "package": "p", "paySign": "s"}),
        ));
        let pay = PayService::new(mock.clone());

        let options = pay.wx_pay_params(&OrderId::new("o1")).await.unwrap();
        assert_eq!(options.get("paySign"), Some(&json!("s")));
        assert_eq!(mock.calls()[0].data, Some(json!({"orderId": "o1"})));
    }

    #[tokio::test]
    async fn test_mock_pay_accepts_empty_result() {
        let mock = Arc::new(MockTransport::new().respond(Method::Get, MOCK_PAY_PATH, Value::Null));
        let pay = PayService::new(mock);

        let options = pay.mock_pay(&OrderId::new("o1")).await.unwrap();
        assert!(options.is_empty());
    }
}
