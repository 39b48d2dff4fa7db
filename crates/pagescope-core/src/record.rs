//! Canonical per-page output records.
//!
//! A [`PageRecord`] is the single unit of output for one remote page: identity
//! fields, the fields the page declares about itself, and the contact signals
//! inferred from its recent posts. Declared and inferred values live under
//! separate keys so one can never masquerade as the other.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Street address block as declared by a page, all parts optional.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageLocation {
    #[serde(default)]
    pub street: Option<String>,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub state: Option<String>,
    #[serde(default)]
    pub country: Option<String>,
    #[serde(default)]
    pub zip: Option<String>,
}

/// One consolidated record per page.
///
/// `None` means the remote API did not return the field or the fetch for it
/// failed — "unknown", never "empty". Post-derived signal lists are always
/// present (possibly empty) and sorted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageRecord {
    pub page_id: String,
    pub page_name: String,
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub page_link: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub location: Option<PageLocation>,
    /// Structured mailing address, kept verbatim; shape varies by page type.
    #[serde(default)]
    pub contact_address: Option<Value>,
    #[serde(default)]
    pub single_line_address: Option<String>,
    /// Phone number the page declares on its profile.
    #[serde(default)]
    pub official_phone: Option<String>,
    /// Email addresses the page declares on its profile.
    #[serde(default)]
    pub official_emails: Option<Vec<String>>,
    #[serde(default)]
    pub website: Option<String>,
    #[serde(default)]
    pub about: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub fan_count: Option<i64>,
    #[serde(default)]
    pub verification_status: Option<String>,
    /// Opening hours, kept verbatim; shape varies by page type.
    #[serde(default)]
    pub hours: Option<Value>,
    /// Emails extracted from recent post text, lowercased and deduplicated.
    #[serde(default)]
    pub emails_from_posts: Vec<String>,
    /// Phone numbers extracted from recent post text, in canonical digit form.
    #[serde(default)]
    pub phones_from_posts: Vec<String>,
    /// Raw insights payload (impressions, engagement), kept verbatim.
    #[serde(default)]
    pub insights: Option<Value>,
}

impl PageRecord {
    /// Returns the page name with its @username when one is known.
    #[must_use]
    pub fn display_name(&self) -> String {
        match &self.username {
            Some(u) => format!("{} (@{u})", self.page_name),
            None => self.page_name.clone(),
        }
    }
}
