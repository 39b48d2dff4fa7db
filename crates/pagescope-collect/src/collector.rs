//! Per-page signal collection from recent posts.

use pagescope_graph::{PageHandle, Post};

use crate::extract::{extract_signals, SignalSet};
use crate::source::PageSource;

/// Scans a page's recent posts and extracts contact signals from their text.
///
/// Each post's `message` and `story` are joined with a single space and run
/// through the extractor; per-post results are unioned, so a signal repeated
/// across posts appears once. A failed post fetch degrades to an empty set
/// with a warning rather than an error.
pub async fn collect_post_signals(
    source: &dyn PageSource,
    page: &PageHandle,
    post_limit: u32,
) -> SignalSet {
    let posts = match source.get_recent_posts(&page.id, post_limit).await {
        Ok(posts) => posts,
        Err(e) => {
            tracing::warn!(
                page = %page.id,
                error = %e,
                "post fetch failed, skipping signal scan"
            );
            return SignalSet::default();
        }
    };

    let mut signals = SignalSet::default();
    for post in &posts {
        let text = post_text(post);
        if text.is_empty() {
            continue;
        }
        signals.merge(extract_signals(&text));
    }

    tracing::debug!(
        page = %page.id,
        posts = posts.len(),
        emails = signals.emails.len(),
        phones = signals.phones.len(),
        "scanned posts for contact signals"
    );
    signals
}

/// Joins a post's author text and activity line into one extraction input.
fn post_text(post: &Post) -> String {
    match (&post.message, &post.story) {
        (Some(message), Some(story)) => format!("{message} {story}"),
        (Some(message), None) => message.clone(),
        (None, Some(story)) => story.clone(),
        (None, None) => String::new(),
    }
}
