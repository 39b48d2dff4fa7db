//! Console rendering for collected page records.
//!
//! One banner-framed summary per run, one block per record. Absent optional
//! fields are skipped rather than printed as placeholders, so a sparse page
//! renders as a short block instead of a wall of empty labels.

use pagescope_core::{PageLocation, PageRecord};

/// Print the summary report for a set of records.
pub(crate) fn render_records(records: &[PageRecord]) {
    if records.is_empty() {
        println!("no data collected");
        return;
    }

    println!();
    println!("{}", "=".repeat(60));
    println!("PAGE CONTACT SUMMARY");
    println!("{}", "=".repeat(60));

    for record in records {
        println!();
        println!("Page: {}", record.display_name());
        println!("ID: {}", record.page_id);
        if let Some(link) = &record.page_link {
            println!("Link: {link}");
        }
        if let Some(category) = &record.category {
            println!("Category: {category}");
        }
        if let Some(line) = record.location.as_ref().and_then(location_line) {
            println!("Location: {line}");
        }
        if let Some(address) = &record.single_line_address {
            println!("Address: {address}");
        }
        if let Some(phone) = &record.official_phone {
            println!("Official Phone: {phone}");
        }
        if let Some(emails) = &record.official_emails {
            if !emails.is_empty() {
                println!("Official Emails: {}", emails.join(", "));
            }
        }
        if let Some(website) = &record.website {
            println!("Website: {website}");
        }
        if !record.emails_from_posts.is_empty() {
            println!("Emails from posts: {}", record.emails_from_posts.join(", "));
        }
        if !record.phones_from_posts.is_empty() {
            println!("Phones from posts: {}", record.phones_from_posts.join(", "));
        }
        if let Some(fan_count) = record.fan_count {
            println!("Followers: {fan_count}");
        }
        if let Some(status) = &record.verification_status {
            println!("Verification: {status}");
        }
        println!("{}", "-".repeat(40));
    }
}

/// Join the filled-in parts of a location into one display line.
fn location_line(location: &PageLocation) -> Option<String> {
    let parts: Vec<&str> = [
        location.street.as_deref(),
        location.city.as_deref(),
        location.state.as_deref(),
        location.zip.as_deref(),
        location.country.as_deref(),
    ]
    .into_iter()
    .flatten()
    .collect();

    if parts.is_empty() {
        None
    } else {
        Some(parts.join(", "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn location_line_joins_present_parts_in_order() {
        let location = PageLocation {
            street: Some("1 Main St".to_string()),
            city: Some("Columbia".to_string()),
            state: Some("SC".to_string()),
            country: None,
            zip: Some("29201".to_string()),
        };
        assert_eq!(
            location_line(&location).as_deref(),
            Some("1 Main St, Columbia, SC, 29201")
        );
    }

    #[test]
    fn location_line_is_none_when_every_part_is_missing() {
        let location = PageLocation {
            street: None,
            city: None,
            state: None,
            country: None,
            zip: None,
        };
        assert!(location_line(&location).is_none());
    }

    #[test]
    fn location_line_with_city_only() {
        let location = PageLocation {
            street: None,
            city: Some("Columbia".to_string()),
            state: None,
            country: None,
            zip: None,
        };
        assert_eq!(location_line(&location).as_deref(), Some("Columbia"));
    }
}
