//! Shopping cart module.
//!
//! Contains the cart line type, the request payloads of cart mutations and a
//! snapshot type for reconciling a fetched list locally.

mod item;
mod snapshot;

pub use item::{
    validate_count, AddCartParams, CartItem, CartPatch, RemoveCartParams, SelectAllParams,
};
pub use snapshot::CartSnapshot;
