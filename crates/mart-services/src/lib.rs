//! Typed backend services for the mart storefront.
//!
//! This crate provides:
//! - `MartClient` - One handle bundling every service over a transport
//! - Service modules - cart, home, hot lists, category, login, orders, pay
//! - `FeedLoader` - Append-only, restartable page walk over a `PageSource`
//! - `FeedBridge` - Forwards "reached the end" events to a mounted feed
//!
//! Services never hold state. Validation failures are returned before the
//! transport is called; transport and backend failures pass through
//! unchanged inside [`ServiceError`].

pub mod bridge;
pub mod cart;
pub mod category;
mod client;
mod error;
pub mod feed;
pub mod home;
pub mod hot;
pub mod login;
pub mod orders;
pub mod pay;

pub use bridge::FeedBridge;
pub use cart::CartService;
pub use category::CategoryService;
pub use client::MartClient;
pub use error::{ServiceError, ServiceResult};
pub use feed::{
    FeedLoader, FeedState, GuessFeed, GuessFeedSource, HotFeed, HotFeedSource, LoadMore,
    LoadOutcome, PageSource,
};
pub use home::HomeService;
pub use hot::HotService;
pub use login::LoginService;
pub use orders::OrderService;
pub use pay::PayService;

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::{
        CartService, FeedBridge, FeedLoader, FeedState, LoadMore, LoadOutcome, MartClient,
        PageSource, ServiceError, ServiceResult,
    };
    pub use mart_commerce::prelude::*;
    pub use mart_data::{ClientConfig, FetchError, Transport};
}
