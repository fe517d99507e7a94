use std::time::Duration;

/// High-level classification of an error for retry purposes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Operation timed out (connect/read).
    Timeout,
    /// Could not establish the connection (refused, DNS, TLS handshake).
    Connection,
    /// Connection dropped or failed while reading the response.
    Read,
    /// HTTP status listed in the policy's retry set.
    RetryableStatus(u32),
    /// Any other error (not retried).
    Other,
}

/// Decision returned by the retry policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RetryDecision {
    /// Do not retry this error.
    NoRetry,
    /// Retryable, but the attempt budget is spent.
    Exhausted,
    /// Retry after the given delay.
    RetryAfter(Duration),
}

/// Exponential backoff policy with a shared attempt budget.
///
/// Connect, read, and status failures all draw from the same `max_attempts`.
#[derive(Debug, Clone, PartialEq)]
pub struct RetryPolicy {
    /// Maximum number of attempts (including the first).
    pub max_attempts: u32,
    /// Backoff factor: the n-th retry waits `base_delay * 2^(n-1)`.
    pub base_delay: Duration,
    /// Upper bound on backoff delay.
    pub max_delay: Duration,
    /// HTTP statuses that are worth retrying.
    pub retry_statuses: Vec<u32>,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: 10,
            base_delay: Duration::from_secs(1),
            max_delay: Duration::from_secs(120),
            retry_statuses: vec![500, 502, 504],
        }
    }
}

impl RetryPolicy {
    pub fn classify_status(&self, code: u32) -> ErrorKind {
        if self.retry_statuses.contains(&code) {
            ErrorKind::RetryableStatus(code)
        } else {
            ErrorKind::Other
        }
    }

    /// Backoff before retry number `retry` (1-based): base * 2^(retry-1), capped.
    pub fn backoff(&self, retry: u32) -> Duration {
        let exp = 1u32 << retry.saturating_sub(1).min(16);
        self.base_delay.saturating_mul(exp).min(self.max_delay)
    }

    /// Decide what to do after `attempt` (1-based) failed with `kind`.
    pub fn decide(&self, attempt: u32, kind: ErrorKind) -> RetryDecision {
        match kind {
            ErrorKind::Other => RetryDecision::NoRetry,
            ErrorKind::Timeout
            | ErrorKind::Connection
            | ErrorKind::Read
            | ErrorKind::RetryableStatus(_) => {
                if attempt >= self.max_attempts {
                    RetryDecision::Exhausted
                } else {
                    RetryDecision::RetryAfter(self.backoff(attempt))
                }
            }
        }
    }
}
