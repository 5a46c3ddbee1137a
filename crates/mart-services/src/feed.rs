//! Page-based lazy loading for recommendation feeds.
//!
//! A [`FeedLoader`] walks a [`PageSource`] one page at a time:
//!
//! ```text
//! Idle ──load──▶ Loading(k+1) ──ok──▶ Loaded(k+1) ──load──▶ Loading(k+2) ...
//!                     │                    │
//!                     │ err                └── k+1 == pages ──▶ Exhausted
//!                     ▼
//!              previous state
//! ```
//!
//! Loads are strictly sequential: a call made while a page is in flight, or
//! after the last page, returns without touching the source. Items are only
//! ever appended, and [`FeedLoader::reset`] is the one way to clear them.

use crate::error::{ServiceError, ServiceResult};
use crate::home::HomeService;
use crate::hot::HotService;
use async_trait::async_trait;
use mart_commerce::catalog::{GoodsItem, HotParams};
use mart_commerce::{PageParams, PageResult, DEFAULT_PAGE_SIZE};
use mart_data::FetchError;
use parking_lot::{Mutex, MutexGuard};
use tracing::{debug, warn};

/// Something that can produce page `n` of a feed.
#[async_trait]
pub trait PageSource<T: Send>: Send + Sync {
    async fn fetch_page(&self, page: u32) -> ServiceResult<PageResult<T>>;
}

/// The home page "guess you like" feed.
#[derive(Clone)]
pub struct GuessFeedSource {
    home: HomeService,
    page_size: u32,
}

impl GuessFeedSource {
    pub fn new(home: HomeService) -> Self {
        Self {
            home,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }

    pub fn with_page_size(mut self, page_size: u32) -> Self {
        self.page_size = page_size;
        self
    }
}

#[async_trait]
impl PageSource<GoodsItem> for GuessFeedSource {
    async fn fetch_page(&self, page: u32) -> ServiceResult<PageResult<GoodsItem>> {
        self.home.guess(PageParams::new(page, self.page_size)).await
    }
}

/// One tab of a hot list, paged through the hot-list endpoint.
#[derive(Clone)]
pub struct HotFeedSource {
    hot: HotService,
    url: String,
    sub_type: String,
    page_size: u32,
}

impl HotFeedSource {
    pub fn new(hot: HotService, url: impl Into<String>, sub_type: impl Into<String>) -> Self {
        Self {
            hot,
            url: url.into(),
            sub_type: sub_type.into(),
            page_size: DEFAULT_PAGE_SIZE,
        }
    }

    pub fn with_page_size(mut self, page_size: u32) -> Self {
        self.page_size = page_size;
        self
    }
}

#[async_trait]
impl PageSource<GoodsItem> for HotFeedSource {
    async fn fetch_page(&self, page: u32) -> ServiceResult<PageResult<GoodsItem>> {
        let params =
            HotParams::new(PageParams::new(page, self.page_size)).with_sub_type(&self.sub_type);
        let mut result = self.hot.page(&self.url, &params).await?;

        let index = result
            .sub_types
            .iter()
            .position(|s| s.id == self.sub_type)
            .ok_or_else(|| {
                ServiceError::from(FetchError::Decode(format!(
                    "hot list {} has no sub type {}",
                    self.url, self.sub_type
                )))
            })?;
        Ok(result.sub_types.swap_remove(index).goods_items)
    }
}

/// Where a feed is in its page walk.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FeedState {
    /// Nothing loaded yet.
    #[default]
    Idle,
    /// Page `page` is in flight.
    Loading { page: u32 },
    /// Page `page` of `total_pages` is loaded and more remain.
    Loaded { page: u32, total_pages: u32 },
    /// The last page is loaded.
    Exhausted { page: u32 },
}

impl FeedState {
    /// Last page successfully loaded (0 before the first).
    pub fn page(&self) -> u32 {
        match self {
            FeedState::Idle => 0,
            FeedState::Loading { page } => page - 1,
            FeedState::Loaded { page, .. } | FeedState::Exhausted { page } => *page,
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, FeedState::Loading { .. })
    }

    /// Whether another load could fetch anything.
    pub fn has_more(&self) -> bool {
        !matches!(self, FeedState::Exhausted { .. })
    }
}

/// What a load request did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadOutcome {
    /// A page was fetched and its items appended.
    Loaded { page: u32, appended: usize },
    /// A page was already in flight.
    Busy,
    /// Every page is already loaded.
    Exhausted,
    /// The feed was reset while the page was in flight; its items were dropped.
    Stale,
    /// No feed is attached to the bridge yet.
    Unmounted,
}

impl LoadOutcome {
    /// Whether the call reached the backend and kept its result.
    pub fn is_loaded(&self) -> bool {
        matches!(self, LoadOutcome::Loaded { .. })
    }
}

/// The "load next page" capability a feed exposes to its host.
#[async_trait]
pub trait LoadMore: Send + Sync {
    async fn load_next_page(&self) -> ServiceResult<LoadOutcome>;
}

struct FeedInner<T> {
    state: FeedState,
    items: Vec<T>,
    total_count: u64,
    generation: u64,
}

/// Append-only, restartable feed over a [`PageSource`].
pub struct FeedLoader<T, S> {
    source: S,
    inner: Mutex<FeedInner<T>>,
}

impl<T, S> FeedLoader<T, S>
where
    T: Send,
    S: PageSource<T>,
{
    pub fn new(source: S) -> Self {
        Self {
            source,
            inner: Mutex::new(FeedInner {
                state: FeedState::Idle,
                items: Vec::new(),
                total_count: 0,
                generation: 0,
            }),
        }
    }

    fn lock(&self) -> MutexGuard<'_, FeedInner<T>> {
        self.inner.lock()
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    pub fn state(&self) -> FeedState {
        self.lock().state
    }

    pub fn has_more(&self) -> bool {
        self.state().has_more()
    }

    /// Number of items loaded so far.
    pub fn len(&self) -> usize {
        self.lock().items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Item count reported by the backend with the latest page.
    pub fn total_count(&self) -> u64 {
        self.lock().total_count
    }

    /// Copy of the loaded items, in append order.
    pub fn items(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.lock().items.clone()
    }

    /// Back to `Idle` with no items. A page still in flight is discarded
    /// when it lands.
    pub fn reset(&self) {
        let mut inner = self.lock();
        inner.state = FeedState::Idle;
        inner.items.clear();
        inner.total_count = 0;
        inner.generation += 1;
        debug!(generation = inner.generation, "feed reset");
    }

    /// Fetch and append the next page.
    ///
    /// On failure the feed returns to its previous state so the next call
    /// retries the same page, and the error is returned.
    pub async fn load_next_page(&self) -> ServiceResult<LoadOutcome> {
        let (page, previous, generation) = {
            let mut inner = self.lock();
            let page = match inner.state {
                FeedState::Loading { .. } => {
                    debug!("feed page already in flight");
                    return Ok(LoadOutcome::Busy);
                }
                FeedState::Exhausted { .. } => {
                    debug!("feed exhausted");
                    return Ok(LoadOutcome::Exhausted);
                }
                FeedState::Idle => 1,
                FeedState::Loaded { page, .. } => page + 1,
            };
            let previous = inner.state;
            inner.state = FeedState::Loading { page };
            (page, previous, inner.generation)
        };

        debug!(page, "loading feed page");
        let result = self.source.fetch_page(page).await;

        let mut inner = self.lock();
        if inner.generation != generation {
            debug!(page, "dropping page fetched before reset");
            return Ok(LoadOutcome::Stale);
        }

        match result {
            Ok(fetched) => {
                let total_pages = fetched.pages;
                let appended = fetched.items.len();
                inner.total_count = fetched.counts;
                inner.items.extend(fetched.items);
                inner.state = if page >= total_pages {
                    FeedState::Exhausted { page }
                } else {
                    FeedState::Loaded { page, total_pages }
                };
                debug!(page, total_pages, appended, state = ?inner.state, "feed page loaded");
                Ok(LoadOutcome::Loaded { page, appended })
            }
            Err(e) => {
                inner.state = previous;
                warn!(page, error = %e, "feed page failed");
                Err(e)
            }
        }
    }
}

#[async_trait]
impl<T, S> LoadMore for FeedLoader<T, S>
where
    T: Send,
    S: PageSource<T>,
{
    async fn load_next_page(&self) -> ServiceResult<LoadOutcome> {
        FeedLoader::load_next_page(self).await
    }
}

/// Feed of the home page "guess you like" goods.
pub type GuessFeed = FeedLoader<GoodsItem, GuessFeedSource>;

/// Feed of one hot-list tab.
pub type HotFeed = FeedLoader<GoodsItem, HotFeedSource>;
