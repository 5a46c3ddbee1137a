//! Hot recommendation lists.

use crate::catalog::GoodsItem;
use crate::ids::HotId;
use crate::page::{PageParams, PageResult};
use serde::{Deserialize, Serialize};

/// A hot list with one paged goods list per tab.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct HotResult {
    pub id: HotId,
    pub title: String,
    #[serde(default)]
    pub banner_picture: String,
    #[serde(default)]
    pub sub_types: Vec<HotSubType>,
}

/// One tab of a hot list.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct HotSubType {
    pub id: String,
    pub title: String,
    pub goods_items: PageResult<GoodsItem>,
}

impl HotResult {
    /// Find a tab by ID.
    pub fn sub_type(&self, id: &str) -> Option<&HotSubType> {
        self.sub_types.iter().find(|s| s.id == id)
    }
}

/// Query for one page of a hot list. Without `sub_type` the backend returns
/// page 1 of every tab.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct HotParams {
    #[serde(flatten)]
    pub page: PageParams,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sub_type: Option<String>,
}

impl HotParams {
    pub fn new(page: PageParams) -> Self {
        Self {
            page,
            sub_type: None,
        }
    }

    pub fn with_sub_type(mut self, sub_type: impl Into<String>) -> Self {
        self.sub_type = Some(sub_type.into());
        self
    }
}
