//! Page fetching
//!
//! The [`PageFetcher`] trait is the seam between the pagination engine
//! and the network: [`HttpFetcher`] talks to the real listing endpoint,
//! [`PageCache`] wraps any fetcher with memoization and request
//! coalescing, and tests substitute scripted fetchers.

mod cache;

pub use cache::PageCache;

use std::future::Future;

use reqwest::Client;

use crate::constants::REALMS_ENDPOINT;
use crate::error::FetchError;
use crate::realm::RealmsPage;

/// Identity of one page request. Two requests with equal keys are the
/// same fetch and may share one cached result.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PageKey {
    /// 1-based page number.
    pub page: u32,
    /// Entries per page.
    pub per_page: u32,
    /// Active type filter, if any.
    pub filter: Option<String>,
}

impl PageKey {
    pub fn new(page: u32, per_page: u32, filter: Option<String>) -> Self {
        Self {
            page,
            per_page,
            filter,
        }
    }

    /// Query parameters for the listing endpoint. The filter parameter
    /// is present only when a filter is active.
    pub fn query(&self) -> Vec<(&'static str, String)> {
        let mut params = vec![
            ("page", self.page.to_string()),
            ("per_page", self.per_page.to_string()),
        ];
        if let Some(filter) = &self.filter {
            params.push(("type", filter.clone()));
        }
        params
    }
}

/// Source of raw listing pages.
///
/// Implementations issue exactly one request per call; memoization and
/// in-flight coalescing live in [`PageCache`], not here.
pub trait PageFetcher: Send + Sync {
    fn fetch_page(
        &self,
        key: &PageKey,
    ) -> impl Future<Output = Result<RealmsPage, FetchError>> + Send;
}

/// Fetcher backed by the realm listing HTTP endpoint.
#[derive(Clone)]
pub struct HttpFetcher {
    client: Client,
    base_url: String,
}

impl HttpFetcher {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into(),
        }
    }

    fn endpoint(&self) -> String {
        format!("{}{}", self.base_url.trim_end_matches('/'), REALMS_ENDPOINT)
    }
}

impl PageFetcher for HttpFetcher {
    async fn fetch_page(&self, key: &PageKey) -> Result<RealmsPage, FetchError> {
        let url = self.endpoint();
        tracing::debug!("Fetching realms page {} from {}", key.page, url);

        let response = self
            .client
            .get(&url)
            .query(&key.query())
            .send()
            .await
            .map_err(|e| FetchError::transport(format!("request to {url} failed: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!("Realm listing request failed with status {}", status);
            return Err(FetchError::transport(format!(
                "realm listing returned {status}"
            )));
        }

        let body = response
            .text()
            .await
            .map_err(|e| FetchError::transport(format!("failed to read page body: {e}")))?;

        RealmsPage::from_json(&body)
    }
}
