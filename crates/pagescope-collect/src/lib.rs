//! Contact-signal collection pipeline.
//!
//! Discovers pages through a [`source::PageSource`], scans their recent posts
//! for contact signals, and merges everything into per-page
//! [`pagescope_core::PageRecord`]s. Every remote fetch past discovery is
//! best-effort: a failure degrades the record, never the run. See
//! [`pipeline::collect_all_pages`] for the driver.

pub mod aggregate;
pub mod collector;
pub mod extract;
pub mod pipeline;
pub mod source;

pub use extract::{extract_signals, SignalSet};
pub use pipeline::collect_all_pages;
pub use source::PageSource;
