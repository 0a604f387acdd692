//! Upstream failure type.

use thiserror::Error;

/// Anything that goes wrong while building, sending or decoding an
/// upstream call. Callers do not distinguish between variants; the HTTP
/// layer turns every one into a 500.
#[derive(Debug, Error)]
pub enum UpstreamError {
    /// The configured base URL plus path did not form a valid URL.
    #[error("invalid upstream URL '{url}': {source}")]
    InvalidUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },

    /// Transport, header or body-decoding failure.
    #[error("upstream request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The configured per-call timeout elapsed.
    #[error("upstream request timed out after {0} seconds")]
    Timeout(u64),
}

/// Result type for upstream operations.
pub type UpstreamResult<T> = Result<T, UpstreamError>;
