//! Order types.

use crate::error::CommerceError;
use crate::ids::{GoodsId, OrderId, SkuId};
use crate::page::PageParams;
use crate::price::Price;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Order lifecycle state as encoded by the backend (1-6).
///
/// The happy path runs `PendingPay` through `Finished`; `Canceled` is reachable
/// from `PendingPay` or `PendingDeliver`. Transitions happen on the backend
/// only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "i64")]
pub enum OrderState {
    PendingPay = 1,
    PendingDeliver = 2,
    PendingReceive = 3,
    PendingEvaluate = 4,
    Finished = 5,
    Canceled = 6,
}

impl OrderState {
    /// Every state, in code order.
    pub const ALL: [OrderState; 6] = [
        OrderState::PendingPay,
        OrderState::PendingDeliver,
        OrderState::PendingReceive,
        OrderState::PendingEvaluate,
        OrderState::Finished,
        OrderState::Canceled,
    ];

    pub fn code(self) -> i64 {
        self as i64
    }

    /// Resolve a backend code. Codes outside 1-6 are an error.
    pub fn from_code(code: i64) -> Result<Self, CommerceError> {
        match code {
            1 => Ok(OrderState::PendingPay),
            2 => Ok(OrderState::PendingDeliver),
            3 => Ok(OrderState::PendingReceive),
            4 => Ok(OrderState::PendingEvaluate),
            5 => Ok(OrderState::Finished),
            6 => Ok(OrderState::Canceled),
            other => Err(CommerceError::UnknownOrderState(other)),
        }
    }

    /// Display label shown to the member.
    pub fn label(self) -> &'static str {
        match self {
            OrderState::PendingPay => "待付款",
            OrderState::PendingDeliver => "待发货",
            OrderState::PendingReceive => "待收货",
            OrderState::PendingEvaluate => "待评价",
            OrderState::Finished => "已完成",
            OrderState::Canceled => "已取消",
        }
    }

    /// Label for a raw backend code.
    pub fn label_of(code: i64) -> Result<&'static str, CommerceError> {
        Self::from_code(code).map(Self::label)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            OrderState::PendingPay => "pending_pay",
            OrderState::PendingDeliver => "pending_deliver",
            OrderState::PendingReceive => "pending_receive",
            OrderState::PendingEvaluate => "pending_evaluate",
            OrderState::Finished => "finished",
            OrderState::Canceled => "canceled",
        }
    }

    /// Check if order is in a terminal state.
    pub fn is_terminal(self) -> bool {
        matches!(self, OrderState::Finished | OrderState::Canceled)
    }

    /// Check if the backend allows cancelling from this state.
    pub fn can_cancel(self) -> bool {
        matches!(self, OrderState::PendingPay | OrderState::PendingDeliver)
    }
}

impl TryFrom<i64> for OrderState {
    type Error = CommerceError;

    fn try_from(code: i64) -> Result<Self, Self::Error> {
        Self::from_code(code)
    }
}

impl From<OrderState> for i64 {
    fn from(state: OrderState) -> i64 {
        state.code()
    }
}

impl fmt::Display for OrderState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// An order as returned by the order detail endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct OrderResult {
    pub id: OrderId,
    pub order_state: OrderState,
    /// Seconds left to pay; negative once expired.
    #[serde(default)]
    pub countdown: i64,
    #[serde(default)]
    pub skus: Vec<OrderSkuItem>,
    #[serde(default)]
    pub receiver_contact: String,
    #[serde(default)]
    pub receiver_mobile: String,
    #[serde(default)]
    pub receiver_address: String,
    #[serde(default)]
    pub create_time: String,
    pub total_money: Price,
    #[serde(default)]
    pub post_fee: Price,
    pub pay_money: Price,
    #[serde(default)]
    pub total_num: i64,
}

impl OrderResult {
    /// Total quantity across SKUs.
    pub fn item_count(&self) -> i64 {
        self.skus.iter().map(|s| s.quantity).sum()
    }

    /// Whether the payment window is still open.
    pub fn awaiting_payment(&self) -> bool {
        self.order_state == OrderState::PendingPay && self.countdown > 0
    }
}

/// One SKU line of an order.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct OrderSkuItem {
    pub id: SkuId,
    pub spu_id: GoodsId,
    pub name: String,
    #[serde(default)]
    pub attrs_text: String,
    pub quantity: i64,
    #[serde(default)]
    pub image: String,
    pub cur_price: Price,
    #[serde(default)]
    pub real_pay: Price,
    #[serde(default)]
    pub total_money: Price,
}

/// Query for the member's order list; `order_state` 0 means every state.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct OrderListParams {
    #[serde(flatten)]
    pub page: PageParams,
    pub order_state: i64,
}

impl OrderListParams {
    pub fn new(page: PageParams, state: Option<OrderState>) -> Self {
        Self {
            page,
            order_state: state.map_or(0, OrderState::code),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    // === State Model Tests ===

    #[test]
    fn test_every_code_has_its_label() {
        let expected = [
            (1, "待付款"),
            (2, "待发货"),
            (3, "待收货"),
            (4, "待评价"),
            (5, "已完成"),
            (6, "已取消"),
        ];
        for (code, label) in expected {
            assert_eq!(OrderState::label_of(code), Ok(label));
        }
    }

    #[test]
    fn test_out_of_range_codes_fail() {
        for code in [0, 7, -1, i64::MAX] {
            assert_eq!(
                OrderState::label_of(code),
                Err(CommerceError::UnknownOrderState(code))
            );
        }
    }

    #[test]
    fn test_labels_are_injective() {
        let mut labels: Vec<&str> = OrderState::ALL.iter().map(|s| s.label()).collect();
        labels.sort_unstable();
        labels.dedup();
        assert_eq!(labels.len(), OrderState::ALL.len());
    }

    #[test]
    fn test_codes_round_trip_and_order() {
        for state in OrderState::ALL {
            assert_eq!(OrderState::from_code(state.code()), Ok(state));
        }
        assert!(OrderState::PendingPay < OrderState::Finished);
    }

    #[test]
    fn test_cancel_side_exit() {
        assert!(OrderState::PendingPay.can_cancel());
        assert!(OrderState::PendingDeliver.can_cancel());
        assert!(!OrderState::PendingReceive.can_cancel());
        assert!(!OrderState::Finished.can_cancel());
        assert!(OrderState::Canceled.is_terminal());
    }

    #[test]
    fn test_state_serde_uses_integers() {
        assert_eq!(serde_json::to_string(&OrderState::Finished).unwrap(), "5");
        let state: OrderState = serde_json::from_str("3").unwrap();
        assert_eq!(state, OrderState::PendingReceive);
        assert!(serde_json::from_str::<OrderState>("9").is_err());
    }

    // === Payload Tests ===

    #[test]
    fn test_order_result_from_backend_json() {
        let order: OrderResult = serde_json::from_value(json!({
            "id": "1640998656427667457",
            "orderState": 1,
            "countdown": 1790,
            "skus": [{
                "id": "300",
                "spuId": "g1",
                "name": "Mug",
                "attrsText": "白色",
                "quantity": 2,
                "image": "m.png",
                "curPrice": "29.00",
                "realPay": 58.0,
                "totalMoney": 58
            }],
            "createTime": "2023-03-29 15:30:00",
            "totalMoney": 58,
            "postFee": 0,
            "payMoney": 58,
            "totalNum": 2
        }))
        .unwrap();

        assert_eq!(order.order_state, OrderState::PendingPay);
        assert_eq!(order.item_count(), 2);
        assert!(order.awaiting_payment());
        assert_eq!(order.pay_money.fen(), 5800);
    }

    #[test]
    fn test_order_result_rejects_unknown_state() {
        let result = serde_json::from_value::<OrderResult>(json!({
            "id": "1", "orderState": 0, "totalMoney": 1, "payMoney": 1
        }));
        assert!(result.is_err());
    }

    #[test]
    fn test_order_list_params() {
        let all = OrderListParams::new(PageParams::page(1), None);
        assert_eq!(
            serde_json::to_value(all).unwrap(),
            json!({"page": 1, "orderState": 0})
        );
        let paying = OrderListParams::new(PageParams::default(), Some(OrderState::PendingPay));
        assert_eq!(paying.order_state, 1);
    }
}
