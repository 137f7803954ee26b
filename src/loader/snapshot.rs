//! Immutable views of the loader state.

use crate::realm::RealmCard;

/// Where the engine stands for the active filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoadPhase {
    /// No fetch has been issued for the active filter yet.
    #[default]
    Idle,
    /// Page 1 of the active filter is in flight.
    LoadingInitial,
    /// At least one page has resolved and nothing is in flight.
    Ready,
    /// A page beyond the first is in flight.
    LoadingMore,
    /// The most recent fetch failed and nothing is in flight.
    Errored,
}

/// Read-only snapshot published every time the underlying state changes.
///
/// `data` mirrors the endpoint contract for UI consumers: it stays `None`
/// until at least one item has merged, so a successful page of zero items
/// still reads as `None` here. Use
/// [`RealmsLoader::current_items`](crate::loader::RealmsLoader::current_items)
/// to tell "nothing loaded yet" apart from "loaded, zero items".
#[derive(Debug, Clone, PartialEq)]
pub struct RealmsSnapshot {
    pub phase: LoadPhase,
    /// Merged, deduplicated entries in first-seen order.
    pub data: Option<Vec<RealmCard>>,
    /// True until the first page of the active filter resolves or errors.
    pub loading: bool,
    /// True while a page beyond the first is in flight.
    pub is_loading_more: bool,
    /// Human-readable failure message, kept until a fetch resolves.
    pub error: Option<String>,
    /// 1-based number of the latest merged page; 1 before anything loads.
    pub current_page: u32,
    /// Total pages reported by the first response; 1 until then.
    pub total_pages: u32,
    /// Whether a further `load_more()` call would fetch anything.
    pub has_more: bool,
}
