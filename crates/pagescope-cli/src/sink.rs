//! JSON file persistence for collected records.

use std::fs;
use std::path::Path;

use pagescope_core::PageRecord;
use thiserror::Error;

/// Errors from reading or writing the record file.
#[derive(Debug, Error)]
pub(crate) enum SinkError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Write records to `path` as a pretty-printed JSON array.
///
/// # Errors
///
/// Returns [`SinkError::Json`] if serialization fails and [`SinkError::Io`]
/// if the file cannot be written.
pub(crate) fn write_records(path: &Path, records: &[PageRecord]) -> Result<(), SinkError> {
    let json = serde_json::to_string_pretty(records)?;
    fs::write(path, json)?;
    Ok(())
}

/// Read records back from a file written by [`write_records`].
///
/// # Errors
///
/// Returns [`SinkError::Io`] if the file cannot be read and
/// [`SinkError::Json`] if its contents do not parse as a record array.
pub(crate) fn read_records(path: &Path) -> Result<Vec<PageRecord>, SinkError> {
    let json = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&json)?)
}
