//! Incremental load/merge engine for paginated realm listings.
//!
//! A client progressively loads a remote collection of realms one page
//! at a time, merging every page into a single deduplicated, stably
//! ordered result set. A type filter resets the accumulation and starts
//! back at page 1; responses of a discarded filter incarnation are
//! ignored even if they arrive late.
//!
//! The moving parts, leaves first:
//! - [`fetch::HttpFetcher`] retrieves one page per request key.
//! - [`fetch::PageCache`] memoizes pages per key and coalesces
//!   concurrent requests for the same key into one fetch.
//! - [`loader::RealmsLoader`] owns the pagination state machine: the
//!   load-more/reset protocol, merge-with-dedup, error surfacing, and
//!   snapshot publication.
//!
//! ```no_run
//! use realmfeed::config::Config;
//! use realmfeed::loader::RealmsLoader;
//!
//! # async fn example() {
//! let loader = RealmsLoader::from_config(&Config::default());
//!
//! loader.load_initial().await;
//! if loader.has_more() {
//!     loader.load_more().await;
//! }
//!
//! let snapshot = loader.snapshot();
//! for realm in snapshot.data.unwrap_or_default() {
//!     println!("{} ({})", realm.title, realm.id);
//! }
//! # }
//! ```

pub mod config;
pub mod constants;
pub mod error;
pub mod fetch;
pub mod loader;
pub mod realm;

pub use config::Config;
pub use error::FetchError;
pub use fetch::{HttpFetcher, PageCache, PageFetcher, PageKey};
pub use loader::{LoadPhase, RealmsLoader, RealmsSnapshot};
pub use realm::{RealmCard, RealmId, RealmsPage};
