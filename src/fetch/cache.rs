//! Page caching with request coalescing.
//!
//! Every distinct [`PageKey`] maps to one of: an in-flight fetch, a
//! resolved page, or nothing. A second request for an in-flight or
//! resolved key joins the existing fetch or returns the cached page
//! instead of hitting the endpoint again. Failed fetches are handed to
//! every coalesced waiter but never stored, so the next request retries.

use std::sync::Arc;
use std::time::Duration;

use crate::config::CacheConfig;
use crate::error::FetchError;
use crate::fetch::{PageFetcher, PageKey};
use crate::realm::RealmsPage;

/// Memoizing front for a [`PageFetcher`].
pub struct PageCache<F> {
    fetcher: F,
    pages: moka::future::Cache<PageKey, RealmsPage>,
}

impl<F: PageFetcher> PageCache<F> {
    pub fn new(fetcher: F, max_pages: u64, ttl: Duration) -> Self {
        Self {
            fetcher,
            pages: moka::future::Cache::builder()
                .max_capacity(max_pages)
                .time_to_live(ttl)
                .build(),
        }
    }

    pub fn from_config(fetcher: F, config: &CacheConfig) -> Self {
        Self::new(
            fetcher,
            config.max_pages,
            Duration::from_secs(config.ttl_secs),
        )
    }

    /// Drop every cached page. In-flight fetches are unaffected.
    pub fn invalidate_all(&self) {
        self.pages.invalidate_all();
    }
}

impl<F: PageFetcher> PageFetcher for PageCache<F> {
    async fn fetch_page(&self, key: &PageKey) -> Result<RealmsPage, FetchError> {
        self.pages
            .try_get_with(key.clone(), self.fetcher.fetch_page(key))
            .await
            .map_err(|e: Arc<FetchError>| (*e).clone())
    }
}
