// listing-client/src/service.rs
// 列表服务 - 控制器的 HTTP 边界

//! Listings service - the HTTP boundary of the controller

use async_trait::async_trait;
use shared::{ListingCriteria, ListingsRequest, PageResult};

use crate::http::{HttpClient, NetworkHttpClient};
use crate::{ClientConfig, ClientResult};

/// Source of listing pages
#[async_trait]
pub trait ListingsService: Send + Sync {
    /// Fetch one page of listings matching `criteria`.
    async fn fetch_page(&self, criteria: &ListingCriteria) -> ClientResult<PageResult>;
}

/// Listings service backed by the HTTP endpoint
#[derive(Debug, Clone)]
pub struct HttpListingsService<C = NetworkHttpClient> {
    http: C,
    path: String,
}

impl HttpListingsService<NetworkHttpClient> {
    pub fn from_config(config: &ClientConfig) -> ClientResult<Self> {
        Ok(Self::new(
            NetworkHttpClient::new(config)?,
            config.listings_path.clone(),
        ))
    }
}

impl<C: HttpClient> HttpListingsService<C> {
    pub fn new(http: C, path: impl Into<String>) -> Self {
        Self {
            http,
            path: path.into(),
        }
    }
}

#[async_trait]
impl<C: HttpClient> ListingsService for HttpListingsService<C> {
    async fn fetch_page(&self, criteria: &ListingCriteria) -> ClientResult<PageResult> {
        let body = ListingsRequest::from(criteria.clone());
        let page: PageResult = self.http.post(&self.path, &body).await?;
        tracing::debug!(
            base_url = self.http.base_url(),
            page = criteria.page,
            listings = page.listings.len(),
            total_records = page.total_records,
            "Fetched listings page"
        );
        Ok(page)
    }
}
