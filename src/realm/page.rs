//! Decoding of one listing page from its wire form.
//!
//! The endpoint is loose about shape: `data` arrives either as a bare
//! array of entries or nested one level under a `realms` field, and
//! `totalPages` is a decimal string that may be missing, empty, or
//! non-numeric. Everything unexpected normalizes to "no items" or "one
//! page" rather than failing the fetch; only malformed JSON is an error.

use serde_json::Value;

use crate::error::FetchError;
use crate::realm::types::RealmCard;

/// Decoded content of one listing page.
#[derive(Debug, Clone, PartialEq)]
pub struct RealmsPage {
    /// Entries in endpoint order. May contain ids seen on earlier pages;
    /// de-duplication happens at merge time, not here.
    pub items: Vec<RealmCard>,
    /// Total page count reported by this response, floored at 1.
    pub total_pages: u32,
}

impl RealmsPage {
    /// Decode a raw response body. Fails only on malformed JSON; any
    /// syntactically valid body yields a page, however odd its shape.
    pub fn from_json(body: &str) -> Result<Self, FetchError> {
        let value: Value = serde_json::from_str(body)
            .map_err(|e| FetchError::decode(format!("invalid JSON in page response: {e}")))?;
        Ok(Self::from_value(value))
    }

    /// Normalize an already-parsed JSON value into a page.
    pub fn from_value(value: Value) -> Self {
        let (data, total_pages) = match value {
            Value::Object(mut fields) => (fields.remove("data"), fields.remove("totalPages")),
            _ => (None, None),
        };

        Self {
            items: extract_items(data),
            total_pages: normalize_total_pages(total_pages),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Pull the entry array out of the `data` field, accepting both layouts.
/// Entries that fail to decode individually are skipped, not fatal.
fn extract_items(data: Option<Value>) -> Vec<RealmCard> {
    let raw_items = match data {
        Some(Value::Array(items)) => items,
        Some(Value::Object(mut fields)) => match fields.remove("realms") {
            Some(Value::Array(items)) => items,
            _ => Vec::new(),
        },
        _ => Vec::new(),
    };

    let mut items = Vec::with_capacity(raw_items.len());
    for raw in raw_items {
        match serde_json::from_value::<RealmCard>(raw) {
            Ok(card) => items.push(card),
            Err(e) => tracing::warn!("Skipping undecodable realm entry: {e}"),
        }
    }
    items
}

/// `totalPages` is only honored when it is a decimal string parsing to a
/// positive integer; anything else (missing, empty, non-numeric, zero, or
/// a non-string JSON type) counts as a single page.
fn normalize_total_pages(raw: Option<Value>) -> u32 {
    match raw {
        Some(Value::String(s)) => s
            .trim()
            .parse::<u32>()
            .ok()
            .filter(|&n| n >= 1)
            .unwrap_or(1),
        _ => 1,
    }
}
