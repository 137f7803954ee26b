//! Crate-wide constants for tuning and configuration
//!
//! Centralizes magic numbers to make them discoverable and configurable.

/// Number of realms requested per page from the listing endpoint.
/// Matches the server's expected window size; not derived from input.
pub const REALMS_PER_PAGE: u32 = 6;

/// Maximum number of resolved pages kept in the page cache.
/// One entry per distinct (page, per_page, filter) key.
pub const PAGE_CACHE_MAX_CAPACITY: u64 = 128;

/// Time-to-live in seconds for cached pages before refetch.
/// Listing data goes stale quickly; keep this short.
pub const PAGE_CACHE_TTL_SECS: u64 = 300;

/// Default base URL of the realm listing service.
pub const DEFAULT_BASE_URL: &str = "http://localhost:3000";

/// Path of the realm listing endpoint, relative to the base URL.
pub const REALMS_ENDPOINT: &str = "/api/realms";
