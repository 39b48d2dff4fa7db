//! Read seam over the remote page API.

use anyhow::Result;
use async_trait::async_trait;
use pagescope_graph::{GraphClient, PageDetail, PageHandle, Post};

/// Read-only access to pages, their profiles, posts, and insight metrics.
///
/// All methods are idempotent reads and independently fallible; the pipeline
/// treats any failure as "data unavailable", never as fatal to the run.
/// Implemented by [`GraphClient`] for production and by scripted stubs in
/// tests.
#[async_trait]
pub trait PageSource: Send + Sync {
    /// Lists the pages available to this source.
    async fn list_managed_pages(&self) -> Result<Vec<PageHandle>>;

    /// Fetches one page's declared profile fields.
    async fn get_page_detail(&self, page_id: &str) -> Result<PageDetail>;

    /// Fetches up to `limit` most-recent posts for a page, newest first.
    async fn get_recent_posts(&self, page_id: &str, limit: u32) -> Result<Vec<Post>>;

    /// Fetches daily insight metrics for a page as an opaque JSON value.
    async fn get_insights(&self, page_id: &str) -> Result<serde_json::Value>;
}

#[async_trait]
impl PageSource for GraphClient {
    async fn list_managed_pages(&self) -> Result<Vec<PageHandle>> {
        Ok(GraphClient::list_managed_pages(self).await?)
    }

    async fn get_page_detail(&self, page_id: &str) -> Result<PageDetail> {
        Ok(GraphClient::get_page_detail(self, page_id).await?)
    }

    async fn get_recent_posts(&self, page_id: &str, limit: u32) -> Result<Vec<Post>> {
        Ok(GraphClient::get_recent_posts(self, page_id, limit).await?)
    }

    async fn get_insights(&self, page_id: &str) -> Result<serde_json::Value> {
        Ok(GraphClient::get_page_insights(self, page_id).await?)
    }
}
