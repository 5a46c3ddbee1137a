//! Home page content blocks.

use crate::ids::{BannerId, CategoryId, HotId};
use serde::{Deserialize, Serialize};

/// Where a banner set is displayed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(into = "u8", try_from = "u8")]
pub enum DistributionSite {
    /// Home page.
    #[default]
    Home,
    /// Category page.
    Category,
}

impl DistributionSite {
    pub fn code(self) -> u8 {
        match self {
            DistributionSite::Home => 1,
            DistributionSite::Category => 2,
        }
    }
}

impl From<DistributionSite> for u8 {
    fn from(site: DistributionSite) -> u8 {
        site.code()
    }
}

impl TryFrom<u8> for DistributionSite {
    type Error = String;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        match code {
            1 => Ok(DistributionSite::Home),
            2 => Ok(DistributionSite::Category),
            other => Err(format!("unknown distribution site: {}", other)),
        }
    }
}

/// A carousel banner.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct BannerItem {
    pub id: BannerId,
    /// Link target.
    pub href_url: String,
    pub img_url: String,
    /// Link type.
    #[serde(default)]
    pub r#type: i32,
}

/// A front-page category shortcut.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CategoryItem {
    pub id: CategoryId,
    pub name: String,
    pub icon: String,
}

/// A "hot recommendation" tile on the home page.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct HotItem {
    pub id: HotId,
    pub title: String,
    /// Caption.
    #[serde(default)]
    pub alt: String,
    #[serde(default)]
    pub pictures: Vec<String>,
    /// Path of the hot list this tile opens.
    pub target: String,
    /// Recommendation type.
    #[serde(default)]
    pub r#type: String,
}
