//! Home page service.

use crate::error::ServiceResult;
use mart_commerce::catalog::{BannerItem, CategoryItem, DistributionSite, GoodsItem, HotItem};
use mart_commerce::{PageParams, PageResult};
use mart_data::{RequestSpec, Transport, TransportExt};
use serde::Serialize;
use std::sync::Arc;
use tracing::instrument;

pub const BANNER_PATH: &str = "/home/banner";
pub const CATEGORY_PATH: &str = "/home/category/mutli";
pub const HOT_PATH: &str = "/home/hot/mutli";
pub const GUESS_LIKE_PATH: &str = "/home/goods/guessLike";

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct BannerParams {
    distribution_site: DistributionSite,
}

/// Typed wrapper over the home page endpoints.
#[derive(Clone)]
pub struct HomeService {
    transport: Arc<dyn Transport>,
}

impl HomeService {
    pub fn new(transport: Arc<dyn Transport>) -> Self {
        Self { transport }
    }

    /// Carousel banners for a site.
    #[instrument(skip(self))]
    pub async fn banner(&self, site: DistributionSite) -> ServiceResult<Vec<BannerItem>> {
        let spec = RequestSpec::get(BANNER_PATH).data(&BannerParams {
            distribution_site: site,
        })?;
        Ok(self.transport.request(spec).await?)
    }

    /// Category shortcuts shown under the banner.
    #[instrument(skip(self))]
    pub async fn category(&self) -> ServiceResult<Vec<CategoryItem>> {
        Ok(self.transport.request(RequestSpec::get(CATEGORY_PATH)).await?)
    }

    /// Hot recommendation panels.
    #[instrument(skip(self))]
    pub async fn hot(&self) -> ServiceResult<Vec<HotItem>> {
        Ok(self.transport.request(RequestSpec::get(HOT_PATH)).await?)
    }

    /// One page of the "guess you like" feed.
    #[instrument(skip(self))]
    pub async fn guess(&self, params: PageParams) -> ServiceResult<PageResult<GoodsItem>> {
        let spec = RequestSpec::get(GUESS_LIKE_PATH).data(&params)?;
        Ok(self.transport.request(spec).await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mart_data::{Method, MockTransport};
    use serde_json::json;

    #[tokio::test]
    async fn test_banner_defaults_to_home_site() {
        let mock = Arc::new(MockTransport::new().respond(
            Method::Get,
            BANNER_PATH,
            json!([{"id": "1", "hrefUrl": "/goods/1", "imgUrl": "b.png", "type": 1}]),
        ));
        let home = HomeService::new(mock.clone());

        let banners = home.banner(DistributionSite::default()).await.unwrap();
        assert_eq!(banners.len(), 1);
        assert_eq!(mock.calls()[0].data, Some(json!({"distributionSite": 1})));
    }

    #[tokio::test]
    async fn test_guess_omits_absent_page_fields() {
        let mock = Arc::new(MockTransport::new().respond(
            Method::Get,
            GUESS_LIKE_PATH,
            json!({"counts": 0, "items": [], "page": 1, "pageSize": 10, "pages": 0}),
        ));
        let home = HomeService::new(mock.clone());

        let page = home.guess(PageParams::default()).await.unwrap();
        assert!(page.is_empty());
        assert_eq!(mock.calls()[0].data, Some(json!({})));
    }

    #[tokio::test]
    async fn test_category_and_hot_blocks() {
        let mock = Arc::new(
            MockTransport::new()
                .respond(
                    Method::Get,
                    CATEGORY_PATH,
                    json!([{"id": "c1", "name": "居家", "icon": "i.png"}]),
                )
                .respond(
                    Method::Get,
                    HOT_PATH,
                    json!([{
                        "id": "h1", "title": "特惠推荐", "alt": "",
                        "pictures": ["a.png", "b.png"], "target": "1", "type": "1"
                    }]),
                ),
        );
        let home = HomeService::new(mock);

        assert_eq!(home.category().await.unwrap()[0].name, "居家");
        assert_eq!(home.hot().await.unwrap()[0].pictures.len(), 2);
    }
}
