//! Catalog module.
//!
//! Goods snapshots and the home-page content blocks that reference them.

mod category;
mod goods;
mod home;
mod hot;

pub use category::{CategoryChildItem, CategoryTopItem};
pub use goods::{GoodsItem, GuessItem};
pub use home::{BannerItem, CategoryItem, DistributionSite, HotItem};
pub use hot::{HotParams, HotResult, HotSubType};
