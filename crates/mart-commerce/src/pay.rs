//! Payment payloads.

use crate::ids::OrderId;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Order reference sent to the payment endpoints.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct OrderIdParams {
    pub order_id: OrderId,
}

impl OrderIdParams {
    pub fn new(order_id: impl Into<OrderId>) -> Self {
        Self {
            order_id: order_id.into(),
        }
    }
}

/// Platform payment parameters, handed to the host payment API as-is.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(transparent)]
pub struct PaymentOptions(Map<String, Value>);

impl PaymentOptions {
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    pub fn into_inner(self) -> Map<String, Value> {
        self.0
    }
}

impl From<Map<String, Value>> for PaymentOptions {
    fn from(map: Map<String, Value>) -> Self {
        Self(map)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_order_id_params_shape() {
        let params = OrderIdParams::new("1640998656427667457");
        assert_eq!(
            serde_json::to_value(params).unwrap(),
            json!({"orderId": "1640998656427667457"})
        );
    }

    #[test]
    fn test_payment_options_are_opaque() {
        let raw = json!({
            "timeStamp": "1680000000",
            "nonceStr": "abc",
            "package": "prepay_id=wx1",
            "signType": "RSA",
            "paySign": "sig"
        });
        let options: PaymentOptions = serde_json::from_value(raw.clone()).unwrap();
        assert_eq!(options.get("package"), Some(&json!("prepay_id=wx1")));
        assert_eq!(options.keys().count(), 5);
        assert_eq!(serde_json::to_value(options).unwrap(), raw);
    }
}
