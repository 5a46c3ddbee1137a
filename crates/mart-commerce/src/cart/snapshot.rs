//! Local view of a fetched cart.

use crate::cart::{CartItem, CartPatch};
use crate::error::CommerceError;
use crate::ids::SkuId;
use crate::price::Price;
use serde::{Deserialize, Serialize};

/// The cart list as last fetched, in backend order.
///
/// The reconcile methods mirror each remote mutation so a view can update
/// what it shows after the call succeeds, without a re-fetch. They never talk
/// to the backend.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(transparent)]
pub struct CartSnapshot {
    items: Vec<CartItem>,
}

impl CartSnapshot {
    /// Wrap a fetched list. A repeated `sku_id` keeps its first line only.
    pub fn new(items: Vec<CartItem>) -> Self {
        let mut unique: Vec<CartItem> = Vec::with_capacity(items.len());
        for item in items {
            if !unique.iter().any(|i| i.sku_id == item.sku_id) {
                unique.push(item);
            }
        }
        Self { items: unique }
    }

    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    pub fn into_items(self) -> Vec<CartItem> {
        self.items
    }

    /// Get a line by SKU.
    pub fn get(&self, sku_id: &SkuId) -> Option<&CartItem> {
        self.items.iter().find(|i| &i.sku_id == sku_id)
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Number of lines.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Sum of quantities over all lines.
    pub fn total_count(&self) -> i64 {
        self.items.iter().map(|i| i.count).sum()
    }

    pub fn selected_items(&self) -> impl Iterator<Item = &CartItem> {
        self.items.iter().filter(|i| i.selected)
    }

    /// Sum of quantities over selected lines.
    pub fn selected_count(&self) -> i64 {
        self.selected_items().map(|i| i.count).sum()
    }

    /// Checkout amount of the selected lines at current prices.
    pub fn selected_total(&self) -> Price {
        self.selected_items().map(CartItem::line_total).sum()
    }

    /// True when the cart is non-empty and every line is selected.
    pub fn is_all_selected(&self) -> bool {
        !self.items.is_empty() && self.items.iter().all(|i| i.selected)
    }

    /// Apply a successful `update_item` locally.
    ///
    /// Returns whether a line with that SKU was present.
    pub fn apply_patch(
        &mut self,
        sku_id: &SkuId,
        patch: &CartPatch,
    ) -> Result<bool, CommerceError> {
        patch.validate()?;
        let Some(item) = self.items.iter_mut().find(|i| &i.sku_id == sku_id) else {
            return Ok(false);
        };
        if let Some(selected) = patch.selected {
            item.selected = selected;
        }
        if let Some(count) = patch.count {
            item.count = count;
        }
        Ok(true)
    }

    /// Apply a successful `remove_items` locally. Returns how many lines went.
    pub fn remove(&mut self, ids: &[SkuId]) -> usize {
        let len_before = self.items.len();
        self.items.retain(|i| !ids.contains(&i.sku_id));
        len_before - self.items.len()
    }

    /// Apply a successful `set_all_selected` locally.
    pub fn set_all_selected(&mut self, selected: bool) {
        for item in &mut self.items {
            item.selected = selected;
        }
    }
}

impl From<Vec<CartItem>> for CartSnapshot {
    fn from(items: Vec<CartItem>) -> Self {
        Self::new(items)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ids::GoodsId;

    fn item(sku: &str, count: i64, selected: bool, fen: i64) -> CartItem {
        CartItem {
            id: GoodsId::new(format!("g-{}", sku)),
            sku_id: SkuId::new(sku),
            name: format!("Item {}", sku),
            attrs_text: String::new(),
            picture: String::new(),
            price: Price::from_fen(fen),
            now_price: Price::from_fen(fen),
            selected,
            count,
            stock: 100,
            discount: None,
            is_effective: true,
            is_collect: false,
        }
    }

    fn snapshot() -> CartSnapshot {
        CartSnapshot::new(vec![
            item("a", 2, true, 1000),
            item("b", 1, false, 2500),
            item("c", 3, true, 100),
        ])
    }

    #[test]
    fn test_duplicate_sku_keeps_first_line() {
        let cart = CartSnapshot::new(vec![item("a", 1, true, 100), item("a", 5, true, 100)]);
        assert_eq!(cart.len(), 1);
        assert_eq!(cart.get(&SkuId::new("a")).unwrap().count, 1);
    }

    #[test]
    fn test_counts_and_totals() {
        let cart = snapshot();
        assert_eq!(cart.total_count(), 6);
        assert_eq!(cart.selected_count(), 5);
        assert_eq!(cart.selected_total().fen(), 2 * 1000 + 3 * 100);
        assert!(!cart.is_all_selected());
    }

    #[test]
    fn test_order_is_preserved() {
        let cart = snapshot();
        let skus: Vec<&str> = cart.items().iter().map(|i| i.sku_id.as_str()).collect();
        assert_eq!(skus, vec!["a", "b", "c"]);
    }

    #[test]
    fn test_apply_patch() {
        let mut cart = snapshot();
        let b = SkuId::new("b");

        assert!(cart.apply_patch(&b, &CartPatch::selected(true)).unwrap());
        assert!(cart.is_all_selected());

        assert!(cart.apply_patch(&b, &CartPatch::count(4)).unwrap());
        assert_eq!(cart.get(&b).unwrap().count, 4);

        assert!(!cart
            .apply_patch(&SkuId::new("zzz"), &CartPatch::count(1))
            .unwrap());
    }

    #[test]
    fn test_apply_patch_rejects_zero_count() {
        let mut cart = snapshot();
        let a = SkuId::new("a");
        assert_eq!(
            cart.apply_patch(&a, &CartPatch::count(0)),
            Err(CommerceError::InvalidQuantity(0))
        );
        assert_eq!(cart.get(&a).unwrap().count, 2);
    }

    #[test]
    fn test_remove() {
        let mut cart = snapshot();
        let removed = cart.remove(&[SkuId::new("a"), SkuId::new("c"), SkuId::new("x")]);
        assert_eq!(removed, 2);
        assert_eq!(cart.len(), 1);
        assert!(cart.get(&SkuId::new("a")).is_none());
    }

    #[test]
    fn test_set_all_selected() {
        let mut cart = snapshot();
        cart.set_all_selected(true);
        assert!(cart.is_all_selected());
        cart.set_all_selected(false);
        assert_eq!(cart.selected_count(), 0);
        assert!(cart.selected_total().is_zero());
    }

    #[test]
    fn test_empty_cart_is_not_all_selected() {
        assert!(!CartSnapshot::default().is_all_selected());
    }
}
