//! Category tree types.

use crate::catalog::GoodsItem;
use crate::ids::CategoryId;
use serde::{Deserialize, Serialize};

/// A top-level category with its children.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CategoryTopItem {
    pub id: CategoryId,
    pub name: String,
    pub picture: String,
    #[serde(default)]
    pub image_banners: Vec<String>,
    #[serde(default)]
    pub children: Vec<CategoryChildItem>,
}

/// A second-level category and the goods it showcases.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CategoryChildItem {
    pub id: CategoryId,
    pub name: String,
    pub picture: String,
    #[serde(default)]
    pub goods: Vec<GoodsItem>,
}

impl CategoryTopItem {
    /// Find a child category by ID.
    pub fn child(&self, id: &CategoryId) -> Option<&CategoryChildItem> {
        self.children.iter().find(|c| &c.id == id)
    }

    /// Total number of showcased goods across children.
    pub fn goods_count(&self) -> usize {
        self.children.iter().map(|c| c.goods.len()).sum()
    }
}
