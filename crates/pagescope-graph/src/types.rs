//! Graph API response types.
//!
//! All types model the JSON structures returned by the Facebook Graph API.
//! List endpoints wrap their payload in a `{"data": [...]}` envelope;
//! [`DataEnvelope`] captures that pattern generically. Node fields are sparse:
//! the API omits any field the page has not filled in, so everything beyond
//! `id` and `name` is an `Option` with `#[serde(default)]`.

use pagescope_core::PageLocation;
use serde::Deserialize;

/// List envelope for Graph collection endpoints: `{"data": [...], "paging": {...}}`.
///
/// A missing `data` key deserializes as an empty list, matching how the API
/// responds for accounts with nothing to return.
#[derive(Debug, Deserialize)]
pub struct DataEnvelope<T> {
    // An explicit path keeps the derive from demanding `T: Default`.
    #[serde(default = "Vec::new")]
    pub data: Vec<T>,
}

/// Minimal identity for one page from `me/accounts`.
#[derive(Debug, Clone, Deserialize)]
pub struct PageHandle {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub username: Option<String>,
}

/// Sparse page detail from `GET /{page_id}`.
#[derive(Debug, Clone, Deserialize)]
pub struct PageDetail {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub link: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub emails: Option<Vec<String>>,
    #[serde(default)]
    pub website: Option<String>,
    #[serde(default)]
    pub about: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub location: Option<PageLocation>,
    /// Structured mailing address; shape varies by page type, kept opaque.
    #[serde(default)]
    pub contact_address: Option<serde_json::Value>,
    #[serde(default)]
    pub single_line_address: Option<String>,
    /// Opening hours; shape varies by page type, kept opaque.
    #[serde(default)]
    pub hours: Option<serde_json::Value>,
    #[serde(default)]
    pub fan_count: Option<i64>,
    #[serde(default)]
    pub verification_status: Option<String>,
}

/// One post from `GET /{page_id}/posts`.
///
/// `message` is author-written text, `story` is the activity line Facebook
/// generates ("Acme updated their cover photo"). Either or both may be absent.
#[derive(Debug, Clone, Deserialize)]
pub struct Post {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub story: Option<String>,
    /// Graph timestamp string, e.g. `2024-03-04T12:30:00+0000`.
    #[serde(default)]
    pub created_time: Option<String>,
}
