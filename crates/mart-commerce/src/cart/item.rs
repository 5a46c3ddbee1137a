//! Cart line items and mutation payloads.

use crate::error::CommerceError;
use crate::ids::{GoodsId, SkuId};
use crate::price::Price;
use serde::{Deserialize, Serialize};

/// A line in the member's cart. One line per `sku_id`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CartItem {
    /// Goods the SKU belongs to.
    pub id: GoodsId,
    pub sku_id: SkuId,
    pub name: String,
    /// Variant description (e.g., "颜色:白色 尺寸:L").
    #[serde(default)]
    pub attrs_text: String,
    pub picture: String,
    /// Price when the item was added.
    pub price: Price,
    /// Current price.
    pub now_price: Price,
    #[serde(default = "default_selected")]
    pub selected: bool,
    /// Quantity, at least 1.
    pub count: i64,
    #[serde(default)]
    pub stock: i64,
    #[serde(default)]
    pub discount: Option<f64>,
    /// Whether the SKU can still be bought.
    #[serde(default = "default_effective")]
    pub is_effective: bool,
    #[serde(default)]
    pub is_collect: bool,
}

fn default_selected() -> bool {
    true
}

fn default_effective() -> bool {
    true
}

impl CartItem {
    /// Current line total (`now_price * count`).
    pub fn line_total(&self) -> Price {
        self.now_price.times(self.count)
    }
}

/// Reject non-positive quantities before they reach the backend.
pub fn validate_count(count: i64) -> Result<i64, CommerceError> {
    if count <= 0 {
        return Err(CommerceError::InvalidQuantity(count));
    }
    Ok(count)
}

/// Payload of "add to cart".
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct AddCartParams {
    pub sku_id: SkuId,
    pub count: i64,
}

impl AddCartParams {
    pub fn new(sku_id: impl Into<SkuId>, count: i64) -> Result<Self, CommerceError> {
        Ok(Self {
            sku_id: sku_id.into(),
            count: validate_count(count)?,
        })
    }
}

/// Payload of "remove cart items".
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RemoveCartParams {
    pub ids: Vec<SkuId>,
}

impl RemoveCartParams {
    /// Build from one or many SKU IDs. Duplicates are dropped, first occurrence
    /// order is kept.
    pub fn new(ids: impl IntoIterator<Item = SkuId>) -> Result<Self, CommerceError> {
        let mut unique: Vec<SkuId> = Vec::new();
        for id in ids {
            if !unique.contains(&id) {
                unique.push(id);
            }
        }
        if unique.is_empty() {
            return Err(CommerceError::EmptySelection(
                "no cart items to remove".to_string(),
            ));
        }
        Ok(Self { ids: unique })
    }
}

/// Partial update of one cart line. Only present fields are sent.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct CartPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub selected: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub count: Option<i64>,
}

impl CartPatch {
    pub fn selected(selected: bool) -> Self {
        Self {
            selected: Some(selected),
            count: None,
        }
    }

    pub fn count(count: i64) -> Self {
        Self {
            selected: None,
            count: Some(count),
        }
    }

    pub fn with_selected(mut self, selected: bool) -> Self {
        self.selected = Some(selected);
        self
    }

    pub fn with_count(mut self, count: i64) -> Self {
        self.count = Some(count);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.selected.is_none() && self.count.is_none()
    }

    /// Check the patch is sendable: non-empty and, if a count is present,
    /// positive.
    pub fn validate(&self) -> Result<(), CommerceError> {
        if self.is_empty() {
            return Err(CommerceError::ValidationError(
                "cart patch changes nothing".to_string(),
            ));
        }
        if let Some(count) = self.count {
            validate_count(count)?;
        }
        Ok(())
    }
}

/// Payload of the select-all toggle.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct SelectAllParams {
    pub selected: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_cart_item_defaults() {
        let item: CartItem = serde_json::from_value(json!({
            "id": "g1",
            "skuId": "s1",
            "name": "Mug",
            "picture": "mug.png",
            "price": "10.00",
            "nowPrice": "8.50",
            "count": 2
        }))
        .unwrap();

        assert!(item.selected);
        assert!(item.is_effective);
        assert_eq!(item.line_total().fen(), 1700);
    }

    #[test]
    fn test_add_params_validation() {
        assert!(AddCartParams::new("s1", 1).is_ok());
        assert_eq!(
            AddCartParams::new("s1", 0),
            Err(CommerceError::InvalidQuantity(0))
        );
        assert_eq!(
            AddCartParams::new("s1", -3),
            Err(CommerceError::InvalidQuantity(-3))
        );
    }

    #[test]
    fn test_add_params_wire_shape() {
        let params = AddCartParams::new("s1", 2).unwrap();
        assert_eq!(
            serde_json::to_value(&params).unwrap(),
            json!({"skuId": "s1", "count": 2})
        );
    }

    #[test]
    fn test_remove_params_single_and_many() {
        let one = RemoveCartParams::new([SkuId::new("a")]).unwrap();
        assert_eq!(one.ids.len(), 1);

        let many =
            RemoveCartParams::new([SkuId::new("a"), SkuId::new("b"), SkuId::new("a")]).unwrap();
        assert_eq!(many.ids, vec![SkuId::new("a"), SkuId::new("b")]);
        assert_eq!(
            serde_json::to_value(&many).unwrap(),
            json!({"ids": ["a", "b"]})
        );
    }

    #[test]
    fn test_remove_params_empty() {
        assert!(matches!(
            RemoveCartParams::new(Vec::new()),
            Err(CommerceError::EmptySelection(_))
        ));
    }

    #[test]
    fn test_patch_only_sends_present_fields() {
        assert_eq!(
            serde_json::to_value(CartPatch::selected(false)).unwrap(),
            json!({"selected": false})
        );
        assert_eq!(
            serde_json::to_value(CartPatch::count(3)).unwrap(),
            json!({"count": 3})
        );
        assert_eq!(
            serde_json::to_value(CartPatch::count(3).with_selected(true)).unwrap(),
            json!({"selected": true, "count": 3})
        );
    }

    #[test]
    fn test_patch_validation() {
        assert!(CartPatch::selected(true).validate().is_ok());
        assert!(CartPatch::count(1).validate().is_ok());
        assert_eq!(
            CartPatch::count(0).validate(),
            Err(CommerceError::InvalidQuantity(0))
        );
        assert!(CartPatch::default().validate().is_err());
    }
}
