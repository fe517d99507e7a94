//! Retry and backoff policy for the sheet fetch.
//!
//! This module encapsulates error classification (timeouts, connection and
//! read failures, retryable HTTP statuses) and exponential backoff decisions
//! so the fetcher and its tests share one policy.

mod classify;
mod error;
mod policy;
mod run;

pub use classify::{classify, classify_curl_error};
pub use error::FetchError;
pub use policy::{ErrorKind, RetryDecision, RetryPolicy};
pub use run::run_with_retry;
