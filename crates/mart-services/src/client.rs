//! Entry point bundling every service over one transport.

use crate::bridge::FeedBridge;
use crate::cart::CartService;
use crate::category::CategoryService;
use crate::feed::{FeedLoader, GuessFeed, GuessFeedSource, HotFeed, HotFeedSource};
use crate::home::HomeService;
use crate::hot::HotService;
use crate::login::LoginService;
use crate::orders::OrderService;
use crate::pay::PayService;
use mart_commerce::checkout::AddressStore;
use mart_commerce::DEFAULT_PAGE_SIZE;
use mart_data::{ClientConfig, FetchError, HttpTransport, Transport};
use std::fmt;
use std::sync::Arc;

/// Services, feeds and the selected-address store over one transport.
///
/// Cloning is cheap; clones share the transport and the address store.
#[derive(Clone)]
pub struct MartClient {
    transport: Arc<dyn Transport>,
    addresses: AddressStore,
    page_size: u32,
}

impl MartClient {
    pub fn new(transport: Arc<dyn Transport>) -> Self {
        Self {
            transport,
            addresses: AddressStore::new(),
            page_size: DEFAULT_PAGE_SIZE,
        }
    }

    /// Build a client over HTTP from configuration.
    pub fn from_config(config: ClientConfig) -> Result<Self, FetchError> {
        let page_size = config.page_size;
        let transport = HttpTransport::new(config)?;
        Ok(Self::new(Arc::new(transport)).with_page_size(page_size))
    }

    /// Page size used by feeds built from this client.
    pub fn with_page_size(mut self, page_size: u32) -> Self {
        self.page_size = page_size;
        self
    }

    pub fn page_size(&self) -> u32 {
        self.page_size
    }

    pub fn transport(&self) -> &Arc<dyn Transport> {
        &self.transport
    }

    pub fn cart(&self) -> CartService {
        CartService::new(self.transport.clone())
    }

    pub fn home(&self) -> HomeService {
        HomeService::new(self.transport.clone())
    }

    pub fn hot(&self) -> HotService {
        HotService::new(self.transport.clone())
    }

    pub fn category(&self) -> CategoryService {
        CategoryService::new(self.transport.clone())
    }

    pub fn login(&self) -> LoginService {
        LoginService::new(self.transport.clone())
    }

    pub fn pay(&self) -> PayService {
        PayService::new(self.transport.clone())
    }

    pub fn orders(&self) -> OrderService {
        OrderService::new(self.transport.clone())
    }

    /// The shared selected-address store.
    pub fn addresses(&self) -> &AddressStore {
        &self.addresses
    }

    /// A fresh "guess you like" feed.
    pub fn guess_feed(&self) -> GuessFeed {
        FeedLoader::new(GuessFeedSource::new(self.home()).with_page_size(self.page_size))
    }

    /// A fresh feed over one hot-list tab.
    pub fn hot_feed(&self, url: impl Into<String>, sub_type: impl Into<String>) -> HotFeed {
        let source = HotFeedSource::new(self.hot(), url, sub_type).with_page_size(self.page_size);
        FeedLoader::new(source)
    }

    /// A "guess you like" feed already attached to a new bridge.
    pub fn mounted_guess_feed(&self) -> (Arc<GuessFeed>, FeedBridge) {
        let feed = Arc::new(self.guess_feed());
        let bridge = FeedBridge::new();
        bridge.register(feed.clone());
        (feed, bridge)
    }
}

impl fmt::Debug for MartClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MartClient")
            .field("page_size", &self.page_size)
            .field("addresses", &self.addresses)
            .finish_non_exhaustive()
    }
}
