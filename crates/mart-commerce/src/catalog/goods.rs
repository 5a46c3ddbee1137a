//! Goods snapshot type.

use crate::ids::GoodsId;
use crate::price::Price;
use serde::{Deserialize, Serialize};

/// A good as listed by the backend. Never mutated on the client.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct GoodsItem {
    pub id: GoodsId,
    pub name: String,
    /// Picture URL.
    pub picture: String,
    pub price: Price,
    /// Discount ratio; absent when the good is not discounted.
    #[serde(default)]
    pub discount: Option<f64>,
    #[serde(default)]
    pub desc: String,
    /// Number of orders placed for this good.
    #[serde(default)]
    pub order_num: i64,
}

/// Item of the "guess you like" recommendation feed.
pub type GuessItem = GoodsItem;

impl GoodsItem {
    /// Whether a discount applies.
    pub fn is_discounted(&self) -> bool {
        self.discount.is_some_and(|d| d > 0.0 && d < 1.0)
    }
}
