//! Retry loop: run a closure until success or policy says stop.

use super::classify;
use super::error::FetchError;
use super::policy::{RetryDecision, RetryPolicy};
use crate::scheduler::Sleeper;

/// Runs `f` until it succeeds or the retry policy says to stop.
/// `f` receives the 1-based attempt number. On retryable failure, sleeps for the
/// backoff duration then tries again; when the budget runs out the last error is
/// wrapped in `FetchError::RetriesExhausted`.
pub fn run_with_retry<T, S, F>(policy: &RetryPolicy, sleeper: &S, mut f: F) -> Result<T, FetchError>
where
    S: Sleeper + ?Sized,
    F: FnMut(u32) -> Result<T, FetchError>,
{
    let mut attempt = 1u32;
    loop {
        match f(attempt) {
            Ok(v) => return Ok(v),
            Err(e) => {
                let kind = classify::classify(&e, policy);
                match policy.decide(attempt, kind) {
                    RetryDecision::NoRetry => return Err(e),
                    RetryDecision::Exhausted => {
                        return Err(FetchError::RetriesExhausted {
                            attempts: attempt,
                            last: Box::new(e),
                        })
                    }
                    RetryDecision::RetryAfter(d) => {
                        tracing::warn!(
                            attempt,
                            max_attempts = policy.max_attempts,
                            error = %e,
                            delay_ms = d.as_millis() as u64,
                            "fetch attempt failed, retrying"
                        );
                        sleeper.sleep(d);
                        attempt += 1;
                    }
                }
            }
        }
    }
}
