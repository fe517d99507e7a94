//! Sheet fetcher: streamed HTTP GET of the published CSV into the local artifact.
//!
//! One `fetch` call is one cycle's download. Each attempt is a single curl GET
//! (redirects followed); failures are classified and retried by the shared
//! retry policy. Non-2xx bodies never reach the artifact.

mod attempt;
mod sink;

pub use sink::ArtifactWriter;

use crate::config::LadderConfig;
use crate::retry::{run_with_retry, FetchError, RetryPolicy};
use crate::scheduler::Sleeper;
use std::path::PathBuf;
use std::time::Duration;
use url::Url;

/// The local copy of the remote sheet produced by a successful fetch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Artifact {
    pub path: PathBuf,
    /// Body bytes written.
    pub bytes: u64,
    /// Attempts used, including the successful one.
    pub attempts: u32,
}

/// Parses and checks the source URL: non-empty, absolute, http or https, with a host.
pub fn parse_source_url(raw: &str) -> Result<Url, FetchError> {
    let invalid = |reason: &str| FetchError::InvalidUrl {
        url: raw.to_string(),
        reason: reason.to_string(),
    };
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(invalid("empty"));
    }
    let url = Url::parse(trimmed).map_err(|e| invalid(&e.to_string()))?;
    match url.scheme() {
        "http" | "https" => {}
        other => return Err(invalid(&format!("unsupported scheme {other}"))),
    }
    if url.host_str().map_or(true, str::is_empty) {
        return Err(invalid("missing host"));
    }
    Ok(url)
}

/// Downloads the sheet to a fixed destination with bounded retry.
#[derive(Debug, Clone)]
pub struct Fetcher {
    policy: RetryPolicy,
    dest: PathBuf,
    chunk_size: usize,
    connect_timeout: Duration,
}

impl Fetcher {
    pub fn new(dest: impl Into<PathBuf>, policy: RetryPolicy) -> Self {
        Self {
            policy,
            dest: dest.into(),
            chunk_size: 8192,
            connect_timeout: Duration::from_secs(30),
        }
    }

    pub fn from_config(cfg: &LadderConfig) -> Self {
        Self::new(cfg.local_path.clone(), cfg.retry.policy())
            .with_chunk_size(cfg.chunk_size)
            .with_connect_timeout(cfg.connect_timeout())
    }

    pub fn with_chunk_size(mut self, chunk_size: usize) -> Self {
        self.chunk_size = chunk_size.max(1);
        self
    }

    pub fn with_connect_timeout(mut self, timeout: Duration) -> Self {
        self.connect_timeout = timeout;
        self
    }

    /// Fetch `url` into the destination, overwriting it. Backoff waits go through `sleeper`.
    ///
    /// On error the destination may hold a partial body and must not be read this cycle.
    pub fn fetch<S: Sleeper + ?Sized>(&self, url: &str, sleeper: &S) -> Result<Artifact, FetchError> {
        let url = parse_source_url(url)?;
        let mut attempts = 0u32;
        let bytes = run_with_retry(&self.policy, sleeper, |attempt| {
            attempts = attempt;
            tracing::debug!(attempt, url = %url, "GET sheet");
            attempt::get_once(url.as_str(), &self.dest, self.chunk_size, self.connect_timeout)
        })?;
        tracing::info!(
            bytes,
            attempts,
            path = %self.dest.display(),
            "sheet downloaded"
        );
        Ok(Artifact {
            path: self.dest.clone(),
            bytes,
            attempts,
        })
    }
}
