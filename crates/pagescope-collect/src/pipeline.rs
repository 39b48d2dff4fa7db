//! Sequential page-collection driver.

use pagescope_core::PageRecord;

use crate::aggregate::aggregate_page;
use crate::collector::collect_post_signals;
use crate::source::PageSource;

/// Collects one record per discovered page, in discovery order.
///
/// Pages are processed one at a time; within a page, detail, posts, and
/// insights are fetched in that order. Every per-page fetch is best-effort:
/// a page whose every fetch fails still yields a record carrying its
/// identity fields, and no page is ever dropped from the output because of
/// upstream errors.
///
/// Discovery failure, or an empty listing, produces an empty result rather
/// than an error. Fetch failures are counted and reported in the run
/// summary log line.
pub async fn collect_all_pages(source: &dyn PageSource, post_limit: u32) -> Vec<PageRecord> {
    let pages = match source.list_managed_pages().await {
        Ok(pages) => pages,
        Err(e) => {
            tracing::error!(error = %e, "page discovery failed, nothing to collect");
            return Vec::new();
        }
    };
    if pages.is_empty() {
        tracing::info!("no managed pages discovered");
        return Vec::new();
    }

    tracing::info!(pages = pages.len(), post_limit, "starting page collection");

    let mut records = Vec::with_capacity(pages.len());
    let mut detail_failures = 0u32;
    let mut insight_failures = 0u32;

    for page in &pages {
        tracing::info!(page = %page.id, name = %page.name, "collecting page");

        let detail = match source.get_page_detail(&page.id).await {
            Ok(detail) => Some(detail),
            Err(e) => {
                detail_failures += 1;
                tracing::warn!(
                    page = %page.id,
                    error = %e,
                    "detail fetch failed, keeping identity fields only"
                );
                None
            }
        };

        let signals = collect_post_signals(source, page, post_limit).await;

        let insights = match source.get_insights(&page.id).await {
            Ok(value) => Some(value),
            Err(e) => {
                insight_failures += 1;
                tracing::warn!(page = %page.id, error = %e, "insight fetch failed");
                None
            }
        };

        records.push(aggregate_page(page, detail, signals, insights));
    }

    tracing::info!(
        records = records.len(),
        detail_failures,
        insight_failures,
        "page collection finished"
    );

    records
}

#[cfg(test)]
#[path = "pipeline_test.rs"]
mod tests;
