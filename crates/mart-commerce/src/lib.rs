//! Commerce domain types for the mart client.
//!
//! This crate holds the data the storefront exchanges with its backend:
//!
//! - **Catalog**: goods, banners, categories, hot recommendations
//! - **Cart**: cart lines, mutation payloads, local reconciliation
//! - **Checkout**: order state model, orders, selected address
//! - **Member / Pay**: login and payment payloads
//! - **Page**: paged result envelope shared by every feed
//!
//! # Example
//!
//! ```rust
//! use mart_commerce::prelude::*;
//!
//! let state = OrderState::from_code(2).unwrap();
//! assert_eq!(state.label(), "待发货");
//!
//! let params = AddCartParams::new(SkuId::new("300"), 2).unwrap();
//! assert_eq!(params.count, 2);
//! ```

pub mod error;
pub mod ids;
pub mod page;
pub mod price;

pub mod cart;
pub mod catalog;
pub mod checkout;
pub mod member;
pub mod pay;

pub use error::CommerceError;
pub use ids::*;
pub use page::{FeedPage, PageParams, PageResult, DEFAULT_PAGE_SIZE};
pub use price::Price;

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::error::CommerceError;
    pub use crate::ids::*;
    pub use crate::page::{FeedPage, PageParams, PageResult, DEFAULT_PAGE_SIZE};
    pub use crate::price::Price;

    // Catalog
    pub use crate::catalog::{
        BannerItem, CategoryChildItem, CategoryItem, CategoryTopItem, DistributionSite,
        GoodsItem, GuessItem, HotItem, HotParams, HotResult, HotSubType,
    };

    // Cart
    pub use crate::cart::{
        AddCartParams, CartItem, CartPatch, CartSnapshot, RemoveCartParams, SelectAllParams,
    };

    // Checkout
    pub use crate::checkout::{
        Address, AddressStore, OrderListParams, OrderResult, OrderSkuItem, OrderState,
    };

    // Member / Pay
    pub use crate::member::{LoginParams, LoginResult, SimpleLoginParams};
    pub use crate::pay::{OrderIdParams, PaymentOptions};
}
