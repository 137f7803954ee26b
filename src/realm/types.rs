//! Typed model for realm listing entries.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier of a realm. The listing endpoint emits numeric and string
/// ids interchangeably; both compare and hash as distinct values.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RealmId {
    Number(i64),
    Text(String),
}

impl fmt::Display for RealmId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RealmId::Number(n) => write!(f, "{n}"),
            RealmId::Text(s) => write!(f, "{s}"),
        }
    }
}

impl From<i64> for RealmId {
    fn from(n: i64) -> Self {
        RealmId::Number(n)
    }
}

impl From<&str> for RealmId {
    fn from(s: &str) -> Self {
        RealmId::Text(s.to_string())
    }
}

/// One realm entry as returned by the listing endpoint.
///
/// Only `id` and `title` are required; everything else is display payload
/// that may be absent or null. Unknown fields are ignored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RealmCard {
    pub id: RealmId,
    pub title: String,
    #[serde(default)]
    pub realm_type: Option<RealmTypeTag>,
    #[serde(default)]
    pub realm_house: Option<String>,
    #[serde(default)]
    pub featured_image: Option<RealmImage>,
    #[serde(default)]
    pub realm_logo: Option<RealmImage>,
    #[serde(default)]
    pub hood_tags_data: Option<Vec<String>>,
    #[serde(default)]
    pub is_under_construction: bool,
}

/// Category tag attached to a realm (e.g. "castle").
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RealmTypeTag {
    pub id: RealmId,
    pub name: String,
}

/// Image descriptor for a realm card or logo.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RealmImage {
    pub image_src: String,
    #[serde(default)]
    pub image_src_set: Option<String>,
    #[serde(default)]
    pub image_alt: Option<String>,
    #[serde(default)]
    pub image_ratio: Option<ImageRatio>,
}

/// Aspect ratio as emitted by the endpoint: either a string like "16/9"
/// or a bare number.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ImageRatio {
    Number(f64),
    Text(String),
}
