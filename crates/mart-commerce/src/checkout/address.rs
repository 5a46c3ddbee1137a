//! Shipping addresses and the selected-address store.

use crate::ids::AddressId;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tokio::sync::watch;

/// A member's shipping address.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Address {
    pub id: AddressId,
    /// Receiver name.
    pub receiver: String,
    /// Receiver phone.
    pub contact: String,
    #[serde(default)]
    pub province_code: String,
    #[serde(default)]
    pub city_code: String,
    #[serde(default)]
    pub county_code: String,
    /// Street-level detail.
    pub address: String,
    /// 1 when this is the member's default address.
    #[serde(default)]
    pub is_default: i32,
    /// Province, city and county joined for display.
    #[serde(default)]
    pub full_location: String,
}

impl Address {
    pub fn is_default(&self) -> bool {
        self.is_default == 1
    }

    /// Location followed by street detail.
    pub fn display_line(&self) -> String {
        if self.full_location.is_empty() {
            self.address.clone()
        } else {
            format!("{} {}", self.full_location, self.address)
        }
    }
}

/// Holds the address chosen for the next order.
///
/// Clones share one slot. Readers either poll [`AddressStore::selected`] or
/// subscribe for changes.
#[derive(Debug, Clone)]
pub struct AddressStore {
    tx: Arc<watch::Sender<Option<Address>>>,
}

impl AddressStore {
    /// Create an empty store.
    pub fn new() -> Self {
        let (tx, _rx) = watch::channel(None);
        Self { tx: Arc::new(tx) }
    }

    /// Currently selected address, if any.
    pub fn selected(&self) -> Option<Address> {
        self.tx.borrow().clone()
    }

    /// Replace the selection. Later reads observe the new value.
    pub fn set_selected(&self, address: Address) {
        self.tx.send_replace(Some(address));
    }

    /// Subscribe to selection changes.
    pub fn subscribe(&self) -> watch::Receiver<Option<Address>> {
        self.tx.subscribe()
    }
}

impl Default for AddressStore {
    fn default() -> Self {
        Self::new()
    }
}
