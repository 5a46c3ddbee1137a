//! Checkout module.
//!
//! Contains the order state model, order payloads and the selected shipping
//! address.

mod address;
mod order;

pub use address::{Address, AddressStore};
pub use order::{OrderListParams, OrderResult, OrderSkuItem, OrderState};
