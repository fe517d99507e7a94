//! Classify HTTP status and curl errors into retry policy error kinds.

use super::error::FetchError;
use super::policy::{ErrorKind, RetryPolicy};

/// Classify a curl error for retry decisions.
pub fn classify_curl_error(e: &curl::Error) -> ErrorKind {
    if e.is_operation_timedout() {
        return ErrorKind::Timeout;
    }
    if e.is_couldnt_connect()
        || e.is_couldnt_resolve_host()
        || e.is_couldnt_resolve_proxy()
        || e.is_ssl_connect_error()
    {
        return ErrorKind::Connection;
    }
    if e.is_read_error()
        || e.is_recv_error()
        || e.is_send_error()
        || e.is_got_nothing()
        || e.is_partial_file()
    {
        return ErrorKind::Read;
    }
    ErrorKind::Other
}

/// Classify a fetch error into an ErrorKind, using the policy's status set.
pub fn classify(e: &FetchError, policy: &RetryPolicy) -> ErrorKind {
    match e {
        FetchError::Network(ce) => classify_curl_error(ce),
        FetchError::Http(code) => policy.classify_status(*code),
        FetchError::InvalidUrl { .. }
        | FetchError::Storage(_)
        | FetchError::RetriesExhausted { .. } => ErrorKind::Other,
    }
}
