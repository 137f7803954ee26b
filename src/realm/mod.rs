//! Realm listing data model
//!
//! Wire-facing types for the listing endpoint: the realm entries
//! themselves and the per-page envelope they arrive in.

mod page;
mod types;

pub use page::RealmsPage;
pub use types::{ImageRatio, RealmCard, RealmId, RealmImage, RealmTypeTag};
