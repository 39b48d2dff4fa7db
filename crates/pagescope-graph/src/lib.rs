//! Client for the Facebook Graph API.
//!
//! Wraps `reqwest` with Graph-specific error handling, access-token
//! management, and typed response deserialization. Transient failures are
//! retried with exponential back-off; Graph error envelopes are surfaced as
//! [`GraphError::Api`].

pub mod client;
pub mod error;
mod retry;
pub mod types;

pub use client::GraphClient;
pub use error::GraphError;
pub use types::{PageDetail, PageHandle, Post};
