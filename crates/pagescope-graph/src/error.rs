use thiserror::Error;

/// Errors returned by the Graph API client.
#[derive(Debug, Error)]
pub enum GraphError {
    /// Network or TLS failure from the underlying HTTP client, or a non-2xx
    /// status with no Graph error envelope in the body.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The Graph API returned an error envelope (`{"error": {...}}`).
    #[error("Graph API error ({kind}, code {code}): {message}")]
    Api {
        code: i64,
        kind: String,
        message: String,
    },

    /// The response body could not be deserialized into the expected type.
    #[error("JSON deserialization error for {context}: {source}")]
    Deserialize {
        context: String,
        #[source]
        source: serde_json::Error,
    },

    /// The configured base URL (or a URL derived from it) is not parseable.
    #[error("invalid Graph URL '{url}': {reason}")]
    InvalidUrl { url: String, reason: String },
}
