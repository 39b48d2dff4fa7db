//! Merging declared page data with post-derived signals.

use pagescope_core::PageRecord;
use pagescope_graph::{PageDetail, PageHandle};
use serde_json::Value;

use crate::extract::SignalSet;

/// Builds the canonical record for one page.
///
/// Identity always comes from `page`; declared profile fields come from
/// `detail` when its fetch succeeded. Post-derived signals land under their
/// own keys and never replace a declared value. `None` means "unknown", so a
/// page whose every fetch failed still aggregates to a valid record.
///
/// Pure and deterministic: the same inputs always produce the same record,
/// with signal lists emitted in sorted order.
#[must_use]
pub fn aggregate_page(
    page: &PageHandle,
    detail: Option<PageDetail>,
    signals: SignalSet,
    insights: Option<Value>,
) -> PageRecord {
    let mut record = PageRecord {
        page_id: page.id.clone(),
        page_name: page.name.clone(),
        username: page.username.clone(),
        page_link: None,
        category: None,
        location: None,
        contact_address: None,
        single_line_address: None,
        official_phone: None,
        official_emails: None,
        website: None,
        about: None,
        description: None,
        fan_count: None,
        verification_status: None,
        hours: None,
        emails_from_posts: signals.emails.into_iter().collect(),
        phones_from_posts: signals.phones.into_iter().collect(),
        insights,
    };

    if let Some(detail) = detail {
        if record.username.is_none() {
            record.username = detail.username;
        }
        record.page_link = detail.link;
        record.category = detail.category;
        record.location = detail.location;
        record.contact_address = detail.contact_address;
        record.single_line_address = detail.single_line_address;
        record.official_phone = detail.phone;
        record.official_emails = detail.emails;
        record.website = detail.website;
        record.about = detail.about;
        record.description = detail.description;
        record.fan_count = detail.fan_count;
        record.verification_status = detail.verification_status;
        record.hours = detail.hours;
    }

    record
}
