//! Fetch error type for retry classification.

use thiserror::Error;

/// Error returned by a fetch attempt (curl failure, HTTP error, or storage failure).
/// Classified by the retry loop before it decides whether to try again.
#[derive(Debug, Error)]
pub enum FetchError {
    /// Source is not an absolute http(s) URL.
    #[error("invalid source URL {url:?}: {reason}")]
    InvalidUrl { url: String, reason: String },
    /// Curl reported an error (timeout, connection, read, etc.).
    #[error("{0}")]
    Network(#[from] curl::Error),
    /// HTTP response had a non-2xx status.
    #[error("HTTP {0}")]
    Http(u32),
    /// Writing the artifact failed (e.g. disk full, permission denied). Not retried.
    #[error("storage: {0}")]
    Storage(#[source] std::io::Error),
    /// Every attempt failed with a retryable error.
    #[error("gave up after {attempts} attempts: {last}")]
    RetriesExhausted {
        attempts: u32,
        #[source]
        last: Box<FetchError>,
    },
}

impl FetchError {
    /// HTTP status carried by this error, looking through `RetriesExhausted`.
    pub fn status(&self) -> Option<u32> {
        match self {
            FetchError::Http(code) => Some(*code),
            FetchError::RetriesExhausted { last, .. } => last.status(),
            _ => None,
        }
    }
}
