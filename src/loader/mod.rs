//! Pagination engine for the realm listing
//!
//! [`RealmsLoader`] owns the accumulation state for the active filter:
//! the pages resolved so far, the merged deduplicated item list, and the
//! load-more/reset protocol. Pages are requested strictly one at a time
//! and in order; items keep the position of the page they were first
//! seen on, and an id returned again by a later page is dropped.
//!
//! Changing the filter discards the whole accumulation and starts over
//! at page 1. A fetch that was still in flight when the filter changed
//! is allowed to finish, but its result is thrown away: every state
//! incarnation carries a generation number and a resolution is applied
//! only if its generation still matches.
//!
//! Every transition publishes an immutable [`RealmsSnapshot`] on a watch
//! channel; hosts either [`subscribe`](RealmsLoader::subscribe) or poll
//! [`snapshot`](RealmsLoader::snapshot) each frame.

mod snapshot;

pub use snapshot::{LoadPhase, RealmsSnapshot};

use std::collections::HashSet;
use std::sync::{Mutex, MutexGuard};

use tokio::sync::watch;

use crate::config::Config;
use crate::error::FetchError;
use crate::fetch::{HttpFetcher, PageCache, PageFetcher, PageKey};
use crate::realm::{RealmCard, RealmId, RealmsPage};

/// Accumulation state for one filter incarnation.
#[derive(Debug)]
struct LoadState {
    /// Bumped on every reset; a fetch resolution carrying an older value
    /// belongs to a discarded incarnation and is dropped.
    generation: u64,
    filter: Option<String>,
    phase: LoadPhase,
    /// Pages the caller has asked for. Never rolled back on failure, so
    /// the next load_more() retries the page that failed.
    requested_pages: u32,
    /// Resolved pages in order; entry i holds page i + 1.
    pages_loaded: Vec<RealmsPage>,
    /// Deduplicated items in first-seen order.
    merged: Vec<RealmCard>,
    /// Ids already merged; mirrors `merged` exactly.
    seen_ids: HashSet<RealmId>,
    /// Fixed from the first resolved page; None until then.
    total_pages: Option<u32>,
    error: Option<String>,
    in_flight: bool,
}

impl LoadState {
    fn new(generation: u64, filter: Option<String>) -> Self {
        Self {
            generation,
            filter,
            phase: LoadPhase::Idle,
            requested_pages: 1,
            pages_loaded: Vec::new(),
            merged: Vec::new(),
            seen_ids: HashSet::new(),
            total_pages: None,
            error: None,
            in_flight: false,
        }
    }

    /// Discard everything and start a fresh incarnation for `filter`.
    fn reset(&mut self, filter: Option<String>) {
        *self = Self::new(self.generation + 1, filter);
    }

    /// Append a page, skipping ids already merged. Returns the number of
    /// newly merged items.
    fn merge(&mut self, page: RealmsPage) -> usize {
        let mut added = 0;
        for item in &page.items {
            if self.seen_ids.insert(item.id.clone()) {
                self.merged.push(item.clone());
                added += 1;
            }
        }
        self.pages_loaded.push(page);
        added
    }

    fn merged_page_count(&self) -> u32 {
        self.pages_loaded.len() as u32
    }

    fn last_page_empty(&self) -> bool {
        self.pages_loaded.last().is_some_and(RealmsPage::is_empty)
    }

    fn total_pages(&self) -> u32 {
        self.total_pages.unwrap_or(1)
    }

    fn current_page(&self) -> u32 {
        self.merged_page_count().max(1)
    }

    fn is_initial_loading(&self) -> bool {
        self.pages_loaded.is_empty() && self.error.is_none()
    }

    fn is_loading_more(&self) -> bool {
        self.in_flight && self.requested_pages > 1
    }

    /// Whether another page is worth requesting: either a failed page is
    /// awaiting retry or the listing claims pages beyond those requested.
    /// False until page 1 resolves and false once a page comes back empty.
    fn has_more(&self) -> bool {
        let merged_pages = self.merged_page_count();
        if merged_pages == 0 || self.last_page_empty() {
            return false;
        }
        merged_pages < self.requested_pages || self.requested_pages < self.total_pages()
    }

    fn snapshot(&self) -> RealmsSnapshot {
        RealmsSnapshot {
            phase: self.phase,
            data: if self.merged.is_empty() {
                None
            } else {
                Some(self.merged.clone())
            },
            loading: self.is_initial_loading(),
            is_loading_more: self.is_loading_more(),
            error: self.error.clone(),
            current_page: self.current_page(),
            total_pages: self.total_pages(),
            has_more: self.has_more(),
        }
    }
}

/// One dispatched fetch: which incarnation asked for it and what for.
struct Dispatch {
    generation: u64,
    target: u32,
    filter: Option<String>,
}

/// Incremental load/merge engine for the realm listing.
pub struct RealmsLoader<F> {
    fetcher: F,
    per_page: u32,
    state: Mutex<LoadState>,
    snapshot_tx: watch::Sender<RealmsSnapshot>,
}

impl RealmsLoader<PageCache<HttpFetcher>> {
    /// Loader wired to the live endpoint through a caching fetcher.
    pub fn from_config(config: &Config) -> Self {
        let fetcher = PageCache::from_config(
            HttpFetcher::new(config.base_url.clone()),
            &config.cache,
        );
        Self::new(fetcher, config.per_page)
    }
}

impl<F: PageFetcher> RealmsLoader<F> {
    pub fn new(fetcher: F, per_page: u32) -> Self {
        let state = LoadState::new(0, None);
        let (snapshot_tx, _) = watch::channel(state.snapshot());
        Self {
            fetcher,
            per_page,
            state: Mutex::new(state),
            snapshot_tx,
        }
    }

    /// Fetch page 1 for the current filter if nothing has resolved yet.
    /// A no-op once data is present or while a fetch is in flight; after
    /// a failed first page this retries it.
    pub async fn load_initial(&self) {
        let dispatch = {
            let mut state = self.state();
            if state.in_flight || !state.pages_loaded.is_empty() {
                None
            } else {
                Some(self.begin_fetch(&mut state, 1))
            }
        };
        self.run(dispatch).await;
    }

    /// Request one additional page.
    ///
    /// While a fetch is in flight this coalesces into it and issues
    /// nothing. If the previous attempt failed, the same page is fetched
    /// again; otherwise the next page is requested, unless the listing is
    /// exhausted. On a loader that has never dispatched anything this is
    /// a no-op; use [`load_initial`](Self::load_initial) for that.
    pub async fn load_more(&self) {
        let dispatch = {
            let mut state = self.state();
            let merged_pages = state.merged_page_count();
            if state.in_flight {
                None
            } else if merged_pages == 0 {
                // Nothing resolved yet: retry a failed first page, but
                // leave the initial fetch to load_initial()
                if state.error.is_some() {
                    Some(self.begin_fetch(&mut state, 1))
                } else {
                    None
                }
            } else if merged_pages < state.requested_pages {
                let target = state.requested_pages;
                Some(self.begin_fetch(&mut state, target))
            } else if state.has_more() {
                state.requested_pages += 1;
                let target = state.requested_pages;
                Some(self.begin_fetch(&mut state, target))
            } else {
                None
            }
        };
        self.run(dispatch).await;
    }

    /// Switch the active filter, discarding all accumulated pages, and
    /// fetch page 1 under the new filter. Setting the filter it already
    /// has is a no-op, except on a loader that has never fetched.
    pub async fn set_filter(&self, filter: Option<String>) {
        let dispatch = {
            let mut state = self.state();
            if state.filter == filter && state.phase != LoadPhase::Idle {
                None
            } else {
                tracing::info!("Realm filter set to {:?}, resetting pages", filter);
                state.reset(filter);
                Some(self.begin_fetch(&mut state, 1))
            }
        };
        self.run(dispatch).await;
    }

    /// Merged, deduplicated items. `None` until the first page of the
    /// active filter resolves; a resolved-but-empty listing is `Some`
    /// with an empty vec.
    pub fn current_items(&self) -> Option<Vec<RealmCard>> {
        let state = self.state();
        if state.pages_loaded.is_empty() {
            None
        } else {
            Some(state.merged.clone())
        }
    }

    /// True until the first page of the active filter resolves or errors.
    pub fn is_initial_loading(&self) -> bool {
        self.state().is_initial_loading()
    }

    /// True while a page beyond the first is in flight.
    pub fn is_loading_more(&self) -> bool {
        self.state().is_loading_more()
    }

    /// Failure message of the most recent fetch, kept until one resolves.
    pub fn error(&self) -> Option<String> {
        self.state().error.clone()
    }

    pub fn has_more(&self) -> bool {
        self.state().has_more()
    }

    /// 1-based number of the latest merged page; 1 before anything loads.
    pub fn current_page(&self) -> u32 {
        self.state().current_page()
    }

    /// Total pages reported by the first response; 1 until then.
    pub fn total_pages(&self) -> u32 {
        self.state().total_pages()
    }

    pub fn phase(&self) -> LoadPhase {
        self.state().phase
    }

    pub fn filter(&self) -> Option<String> {
        self.state().filter.clone()
    }

    /// Latest published snapshot.
    pub fn snapshot(&self) -> RealmsSnapshot {
        self.snapshot_tx.borrow().clone()
    }

    /// Receiver that observes every published snapshot.
    pub fn subscribe(&self) -> watch::Receiver<RealmsSnapshot> {
        self.snapshot_tx.subscribe()
    }

    /// Mark a fetch as started under the lock and describe it for `run`.
    fn begin_fetch(&self, state: &mut LoadState, target: u32) -> Dispatch {
        state.in_flight = true;
        state.phase = if target == 1 {
            LoadPhase::LoadingInitial
        } else {
            LoadPhase::LoadingMore
        };
        self.publish(state);
        Dispatch {
            generation: state.generation,
            target,
            filter: state.filter.clone(),
        }
    }

    async fn run(&self, dispatch: Option<Dispatch>) {
        let Some(dispatch) = dispatch else {
            return;
        };
        tracing::debug!("Requesting realms page {}", dispatch.target);
        let key = PageKey::new(dispatch.target, self.per_page, dispatch.filter);
        let result = self.fetcher.fetch_page(&key).await;
        self.apply(dispatch.generation, dispatch.target, result);
    }

    /// Fold a fetch outcome back into the state, unless the filter
    /// changed while the fetch was in flight.
    fn apply(&self, generation: u64, target: u32, result: Result<RealmsPage, FetchError>) {
        let mut state = self.state();
        if state.generation != generation {
            tracing::debug!(
                "Discarding stale response for page {} (filter changed)",
                target
            );
            return;
        }

        state.in_flight = false;
        match result {
            Ok(page) => {
                if state.total_pages.is_none() {
                    state.total_pages = Some(page.total_pages);
                }
                let added = state.merge(page);
                state.error = None;
                state.phase = LoadPhase::Ready;
                tracing::info!(
                    "Merged realms page {} ({} new items, {} total)",
                    target,
                    added,
                    state.merged.len()
                );
            }
            Err(e) => {
                tracing::error!("Realms page {} fetch failed: {}", target, e);
                state.error = Some(format!("Failed to load realms: {e}"));
                state.phase = LoadPhase::Errored;
            }
        }
        self.publish(&state);
    }

    fn publish(&self, state: &LoadState) {
        self.snapshot_tx.send_replace(state.snapshot());
    }

    fn state(&self) -> MutexGuard<'_, LoadState> {
        self.state.lock().unwrap_or_else(|e| e.into_inner())
    }
}
