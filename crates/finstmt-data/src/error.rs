//! Error types for data operations.

use thiserror::Error;

/// Result type for data operations.
pub type Result<T> = std::result::Result<T, DataError>;

/// Errors that can occur while fetching or decoding company facts.
///
/// Conditions the normalizer tolerates (unparseable dates or fiscal years,
/// accounts without USD units, a document without `facts`/`us-gaap`) never
/// surface here; they become null fields or missing rows instead.
#[derive(Debug, Error)]
pub enum DataError {
    /// The SEC API answered with a non-success status.
    #[error("HTTP error: {url} returned status {status}")]
    Http {
        /// Response status code
        status: u16,
        /// Requested URL
        url: String,
    },

    /// The response body was not valid JSON.
    #[error("Decode error: {0}")]
    Decode(#[from] serde_json::Error),

    /// Transport failure before a response status was available.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// Company identifier is not a numeric CIK.
    #[error("Invalid CIK: {0:?}")]
    InvalidCik(String),

    /// Polars error
    #[error("Polars error: {0}")]
    Polars(#[from] polars::prelude::PolarsError),
}

impl DataError {
    /// Returns the HTTP status code if this is an [`DataError::Http`] error.
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Http { status, .. } => Some(*status),
            _ => None,
        }
    }
}
