//! Command handlers for the CLI.
//!
//! `main` parses arguments first and loads configuration only for the
//! commands that reach the Graph API; `run_report` works offline. Per-page
//! failures inside a collect run are logged and degrade the affected record
//! rather than aborting the run.

use std::path::Path;

use pagescope_collect::aggregate::aggregate_page;
use pagescope_collect::collect_all_pages;
use pagescope_collect::collector::collect_post_signals;
use pagescope_core::AppConfig;
use pagescope_graph::{GraphClient, PageHandle};

use crate::{report, sink};

fn build_graph_client(config: &AppConfig) -> anyhow::Result<GraphClient> {
    GraphClient::new(
        &config.access_token,
        &config.graph_version,
        config.request_timeout_secs,
        &config.user_agent,
        config.max_retries,
        config.retry_backoff_base_ms,
        &config.graph_base_url,
    )
    .map_err(|e| anyhow::anyhow!("failed to build Graph client: {e}"))
}

/// Run the full pipeline over every managed page, render the report, and
/// write one record per page to the output file.
///
/// When `dry_run` is `true` the report is rendered and the write is skipped.
///
/// # Errors
///
/// Returns an error if the Graph client cannot be constructed or the record
/// file cannot be written. Per-page fetch failures are logged and degrade
/// individual records, not the run.
pub(crate) async fn run_collect(
    config: &AppConfig,
    post_limit: Option<u32>,
    output: Option<&Path>,
    dry_run: bool,
) -> anyhow::Result<()> {
    let client = build_graph_client(config)?;
    let post_limit = post_limit.unwrap_or(config.post_limit);

    let records = collect_all_pages(&client, post_limit).await;
    if records.is_empty() {
        println!("no managed pages found; nothing to report");
        return Ok(());
    }

    report::render_records(&records);

    if dry_run {
        println!(
            "dry-run: skipped writing {} record(s) to disk",
            records.len()
        );
        return Ok(());
    }

    let path = output.unwrap_or(&config.output_path);
    sink::write_records(path, &records)
        .map_err(|e| anyhow::anyhow!("failed to write records to {}: {e}", path.display()))?;
    println!("Results saved to {}", path.display());
    Ok(())
}

/// Look up one page by ID or username and render its record.
///
/// The detail fetch is required here since it is the only source of identity
/// for an arbitrary ID; post signals and insights stay best-effort. With
/// `output` set, the record is also written as a one-record file that
/// `pagescope report` can read back.
///
/// # Errors
///
/// Returns an error if the Graph client cannot be constructed, the page
/// detail fetch fails, or the record file cannot be written.
pub(crate) async fn run_page(
    config: &AppConfig,
    page_id: &str,
    post_limit: Option<u32>,
    output: Option<&Path>,
) -> anyhow::Result<()> {
    let client = build_graph_client(config)?;
    let post_limit = post_limit.unwrap_or(config.post_limit);

    let detail = client.get_page_detail(page_id).await?;
    let page = PageHandle {
        id: detail.id.clone(),
        name: detail.name.clone(),
        username: detail.username.clone(),
    };

    let signals = collect_post_signals(&client, &page, post_limit).await;
    let insights = match client.get_page_insights(&page.id).await {
        Ok(value) => Some(value),
        Err(e) => {
            tracing::warn!(page_id = %page.id, error = %e, "insights fetch failed");
            None
        }
    };

    let records = [aggregate_page(&page, Some(detail), signals, insights)];
    report::render_records(&records);

    if let Some(path) = output {
        sink::write_records(path, &records)
            .map_err(|e| anyhow::anyhow!("failed to write record to {}: {e}", path.display()))?;
        println!("Results saved to {}", path.display());
    }
    Ok(())
}

/// Render a previously collected record file.
///
/// Needs no configuration, so it runs without an access token in the
/// environment.
///
/// # Errors
///
/// Returns an error if the file cannot be read or parsed.
pub(crate) fn run_report(input: &Path) -> anyhow::Result<()> {
    let records = sink::read_records(input)
        .map_err(|e| anyhow::anyhow!("failed to read records from {}: {e}", input.display()))?;

    if records.is_empty() {
        println!(
            "no records in {}; run `pagescope collect` first",
            input.display()
        );
        return Ok(());
    }

    report::render_records(&records);
    Ok(())
}

#[cfg(test)]
#[path = "commands_test.rs"]
mod tests;
