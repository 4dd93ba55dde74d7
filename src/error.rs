//! Structured error types for mnrdesk.
//!
//! One enum covers the whole crate: validation rejections (merge
//! selection, duplicate checklist date) are recoverable values surfaced
//! to the UI layer; store I/O and JSON errors propagate with `?`.

use chrono::NaiveDate;

use crate::grid::MergeError;
use crate::settings::SettingsError;
use crate::store::StoreName;

/// All errors that can occur in mnrdesk.
#[derive(Debug, thiserror::Error)]
pub enum MnrdeskError {
    /// I/O error at the store or settings boundary.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON (de)serialization error.
    #[error("JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// Merge selection rejected.
    #[error(transparent)]
    Merge(#[from] MergeError),

    /// A checklist already exists for this recorder and date.
    #[error("Duplicate Entry: checklist for NVR {nvr_id} on {date} already exists")]
    DuplicateEntry { nvr_id: u64, date: NaiveDate },

    /// Record lookup failed.
    #[error("not found: {store} id {id}")]
    NotFound { store: StoreName, id: u64 },

    /// Settings file rejected.
    #[error(transparent)]
    Settings(#[from] SettingsError),

    /// A cell edit carried a value the field cannot accept.
    #[error("invalid field value: {0}")]
    InvalidField(String),

    /// Catch-all for string errors.
    #[error("{0}")]
    Other(String),
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, MnrdeskError>;

impl From<String> for MnrdeskError {
    fn from(s: String) -> Self {
        Self::Other(s)
    }
}

impl From<&str> for MnrdeskError {
    fn from(s: &str) -> Self {
        Self::Other(s.to_string())
    }
}
