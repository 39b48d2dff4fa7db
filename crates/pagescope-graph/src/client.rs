//! HTTP client for the Facebook Graph API.
//!
//! Wraps `reqwest` with Graph-specific error handling, access-token
//! management, and typed response deserialization. Every response body is
//! checked for the `{"error": {...}}` envelope regardless of HTTP status,
//! because Graph reports application errors with a 4xx status and the useful
//! detail in the body. Each request is retried on transient failures per
//! [`crate::retry`].

use std::time::Duration;

use reqwest::{Client, Url};

use crate::error::GraphError;
use crate::retry::retry_with_backoff;
use crate::types::{DataEnvelope, PageDetail, PageHandle, Post};

/// Fields requested when listing pages the token can manage.
const PAGE_LIST_FIELDS: &str = "id,name,username";

/// Fields requested for a single page's profile.
const PAGE_DETAIL_FIELDS: &str = "id,name,username,link,category,phone,emails,website,\
about,description,location,contact_address,single_line_address,hours,fan_count,\
verification_status";

/// Fields requested per post when scanning a page's feed.
const POST_FIELDS: &str = "message,story,created_time";

/// Daily reach/engagement metrics fetched per page.
const INSIGHT_METRICS: &str = "page_impressions,page_engaged_users";

/// Client for the Facebook Graph API.
///
/// Manages the HTTP client, access token, API version, and base URL. The
/// base URL comes from configuration, which is also how tests point a
/// client at a mock server.
pub struct GraphClient {
    client: Client,
    access_token: String,
    version: String,
    base_url: Url,
    /// Maximum number of retry attempts after the first failure.
    max_retries: u32,
    /// Base delay in milliseconds for exponential back-off.
    backoff_base_ms: u64,
}

impl GraphClient {
    /// Creates a new client for the Graph endpoint at `base_url`.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed, or [`GraphError::InvalidUrl`] if `base_url`
    /// is not a valid URL.
    pub fn new(
        access_token: &str,
        version: &str,
        timeout_secs: u64,
        user_agent: &str,
        max_retries: u32,
        backoff_base_ms: u64,
        base_url: &str,
    ) -> Result<Self, GraphError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(user_agent)
            .build()?;

        // Normalise: ensure the base URL ends with exactly one slash so the
        // version segment appends to the root path rather than replacing the
        // last path segment.
        let normalised = format!("{}/", base_url.trim_end_matches('/'));
        let base_url = Url::parse(&normalised).map_err(|e| GraphError::InvalidUrl {
            url: base_url.to_owned(),
            reason: e.to_string(),
        })?;

        Ok(Self {
            client,
            access_token: access_token.to_owned(),
            version: version.to_owned(),
            base_url,
            max_retries,
            backoff_base_ms,
        })
    }

    /// Lists the pages the access token can manage, via `me/accounts`.
    ///
    /// Returns an empty list when the account manages no pages.
    ///
    /// # Errors
    ///
    /// - [`GraphError::Api`] if the API returns an error envelope.
    /// - [`GraphError::Http`] on network failure or an envelope-free non-2xx.
    /// - [`GraphError::Deserialize`] if the response does not match the
    ///   expected shape.
    pub async fn list_managed_pages(&self) -> Result<Vec<PageHandle>, GraphError> {
        let url = self.build_url("me/accounts", &[("fields", PAGE_LIST_FIELDS)])?;
        let body = self.get_json(&url, "me/accounts").await?;

        let envelope: DataEnvelope<PageHandle> =
            serde_json::from_value(body).map_err(|e| GraphError::Deserialize {
                context: "me/accounts".to_owned(),
                source: e,
            })?;

        Ok(envelope.data)
    }

    /// Fetches one page's profile fields by ID or username.
    ///
    /// # Errors
    ///
    /// - [`GraphError::Api`] if the API returns an error envelope (including
    ///   unknown IDs).
    /// - [`GraphError::Http`] on network failure.
    /// - [`GraphError::Deserialize`] if the response does not match the
    ///   expected shape.
    pub async fn get_page_detail(&self, page_id: &str) -> Result<PageDetail, GraphError> {
        let url = self.build_url(page_id, &[("fields", PAGE_DETAIL_FIELDS)])?;
        let body = self.get_json(&url, &format!("page({page_id})")).await?;

        serde_json::from_value(body).map_err(|e| GraphError::Deserialize {
            context: format!("page({page_id})"),
            source: e,
        })
    }

    /// Fetches up to `limit` most-recent posts for a page.
    ///
    /// The API returns posts newest-first; ordering is preserved. A page with
    /// no posts yields an empty list.
    ///
    /// # Errors
    ///
    /// - [`GraphError::Api`] if the API returns an error envelope.
    /// - [`GraphError::Http`] on network failure.
    /// - [`GraphError::Deserialize`] if the response does not match the
    ///   expected shape.
    pub async fn get_recent_posts(
        &self,
        page_id: &str,
        limit: u32,
    ) -> Result<Vec<Post>, GraphError> {
        let url = self.build_url(
            &format!("{page_id}/posts"),
            &[("fields", POST_FIELDS), ("limit", &limit.to_string())],
        )?;
        let body = self.get_json(&url, &format!("posts({page_id})")).await?;

        let envelope: DataEnvelope<Post> =
            serde_json::from_value(body).map_err(|e| GraphError::Deserialize {
                context: format!("posts({page_id})"),
                source: e,
            })?;

        Ok(envelope.data)
    }

    /// Fetches daily impression/engagement metrics for a page.
    ///
    /// Returns the `data` array of the insights response verbatim; metric
    /// shapes vary by page type and API version, so no typed model is
    /// imposed. A page with no insight data yields an empty array.
    ///
    /// # Errors
    ///
    /// - [`GraphError::Api`] if the API returns an error envelope (common for
    ///   pages without insight permissions).
    /// - [`GraphError::Http`] on network failure.
    pub async fn get_page_insights(&self, page_id: &str) -> Result<serde_json::Value, GraphError> {
        let url = self.build_url(
            &format!("{page_id}/insights"),
            &[("metric", INSIGHT_METRICS), ("period", "day")],
        )?;
        let body = self.get_json(&url, &format!("insights({page_id})")).await?;

        Ok(body
            .get("data")
            .cloned()
            .unwrap_or_else(|| serde_json::Value::Array(Vec::new())))
    }

    /// Builds the full request URL with properly percent-encoded query
    /// parameters.
    ///
    /// Joins the version segment and `path` onto the base URL, then appends
    /// `access_token` and any additional parameters via
    /// [`Url::query_pairs_mut`], ensuring all values are safely encoded.
    fn build_url(&self, path: &str, extra: &[(&str, &str)]) -> Result<Url, GraphError> {
        let raw = format!("{}{}/{path}", self.base_url, self.version);
        let mut url = Url::parse(&raw).map_err(|e| GraphError::InvalidUrl {
            url: raw.clone(),
            reason: e.to_string(),
        })?;
        {
            let mut pairs = url.query_pairs_mut();
            pairs.append_pair("access_token", &self.access_token);
            for (k, v) in extra {
                pairs.append_pair(k, v);
            }
        }
        Ok(url)
    }

    /// Sends a GET request with retry on transient failures and parses the
    /// response body as JSON.
    ///
    /// `context` is a short operation label used in error messages instead of
    /// the URL, which carries the access token.
    async fn get_json(&self, url: &Url, context: &str) -> Result<serde_json::Value, GraphError> {
        retry_with_backoff(self.max_retries, self.backoff_base_ms, || {
            let url = url.clone();
            let context = context.to_owned();
            async move { self.request_json(&url, &context).await }
        })
        .await
    }

    /// Sends one GET request and parses the response body as JSON.
    ///
    /// The Graph error envelope takes precedence over a bare HTTP status:
    /// a 4xx/5xx with `{"error": {...}}` in the body surfaces as
    /// [`GraphError::Api`] so callers (and the retry policy) see the Graph
    /// error code, not just the status line.
    async fn request_json(
        &self,
        url: &Url,
        context: &str,
    ) -> Result<serde_json::Value, GraphError> {
        let response = self.client.get(url.clone()).send().await?;
        let status_error = response.error_for_status_ref().err();
        let body = response.text().await?;

        match serde_json::from_str::<serde_json::Value>(&body) {
            Ok(value) => {
                Self::check_api_error(&value)?;
                match status_error {
                    Some(e) => Err(GraphError::Http(e)),
                    None => Ok(value),
                }
            }
            Err(e) => match status_error {
                Some(status_error) => Err(GraphError::Http(status_error)),
                None => Err(GraphError::Deserialize {
                    context: context.to_owned(),
                    source: e,
                }),
            },
        }
    }

    /// Checks for the Graph error envelope and converts it to an error.
    fn check_api_error(body: &serde_json::Value) -> Result<(), GraphError> {
        let Some(error) = body.get("error") else {
            return Ok(());
        };
        let message = error
            .get("message")
            .and_then(serde_json::Value::as_str)
            .unwrap_or("unknown error")
            .to_string();
        let kind = error
            .get("type")
            .and_then(serde_json::Value::as_str)
            .unwrap_or("GraphApiException")
            .to_string();
        let code = error
            .get("code")
            .and_then(serde_json::Value::as_i64)
            .unwrap_or(0);
        Err(GraphError::Api {
            code,
            kind,
            message,
        })
    }
}
