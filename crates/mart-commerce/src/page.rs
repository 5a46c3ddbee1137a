//! Page-based pagination.

use serde::{Deserialize, Serialize};

/// Default page size the backend applies when none is given.
pub const DEFAULT_PAGE_SIZE: u32 = 10;

/// Page query. Absent fields are left to backend defaults (page 1, size 10).
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct PageParams {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page_size: Option<u32>,
}

impl PageParams {
    pub fn new(page: u32, page_size: u32) -> Self {
        Self {
            page: Some(page),
            page_size: Some(page_size),
        }
    }

    /// Query for a page with the backend's default size.
    pub fn page(page: u32) -> Self {
        Self {
            page: Some(page),
            page_size: None,
        }
    }
}

/// One page of results.
///
/// `pages` is the total page count and `counts` the total item count.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PageResult<T> {
    pub items: Vec<T>,
    pub page: u32,
    pub page_size: u32,
    pub pages: u32,
    pub counts: u64,
}

/// A page of a recommendation feed.
pub type FeedPage<T> = PageResult<T>;

impl<T> PageResult<T> {
    /// Create a page.
    pub fn new(items: Vec<T>, page: u32, page_size: u32, pages: u32, counts: u64) -> Self {
        Self {
            items,
            page,
            page_size,
            pages,
            counts,
        }
    }

    pub fn total_pages(&self) -> u32 {
        self.pages
    }

    pub fn total_count(&self) -> u64 {
        self.counts
    }

    /// Whether a page after this one exists.
    pub fn has_more(&self) -> bool {
        self.page < self.pages
    }

    /// Check if on last page (an empty result counts as last).
    pub fn is_last(&self) -> bool {
        !self.has_more()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }
}
