//! One fetch → build → render cycle.
//!
//! Console output goes to the writer passed in (stdout in the CLI); diagnostics
//! go to tracing. A failed fetch skips the build: the previous artifact is never
//! re-rendered.

use anyhow::Result;
use chrono::Local;
use std::io::Write;
use std::path::Path;
use std::time::Duration;

use crate::checksum::{ArtifactChange, DigestTracker};
use crate::config::{LadderConfig, MalformedPolicy};
use crate::fetch::Fetcher;
use crate::leaderboard::{self, BuildError};
use crate::scheduler::Sleeper;

pub const TITLE: &str = "=== Stairs leaderboard ===";

/// What a cycle ended with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CycleOutcome {
    /// Table printed with this many rows.
    Rendered { rows: usize },
    /// Nothing to show (no data rows, or empty/unreadable artifact).
    Empty,
    FetchFailed,
    BuildFailed,
}

/// Human form of the wait between cycles ("10 minutes", "45 seconds").
pub fn format_interval(d: Duration) -> String {
    let secs = d.as_secs();
    match secs {
        60 => "1 minute".to_string(),
        s if s > 0 && s % 60 == 0 => format!("{} minutes", s / 60),
        1 => "1 second".to_string(),
        s => format!("{} seconds", s),
    }
}

/// Carries config, the fetcher, and the previous artifact digest across cycles.
pub struct CycleRunner {
    cfg: LadderConfig,
    fetcher: Fetcher,
    digests: DigestTracker,
    next_cycle_in: Option<Duration>,
}

impl CycleRunner {
    pub fn new(cfg: LadderConfig) -> Self {
        let fetcher = Fetcher::from_config(&cfg);
        Self {
            cfg,
            fetcher,
            digests: DigestTracker::new(),
            next_cycle_in: None,
        }
    }

    /// Mention the scheduled delay in the fetch-failure message.
    pub fn with_schedule(mut self, interval: Duration) -> Self {
        self.next_cycle_in = Some(interval);
        self
    }

    /// Run a single cycle, writing console output to `out`. Only write errors on
    /// `out` are returned; fetch and build failures become outcomes.
    pub fn run_cycle<W, S>(&mut self, out: &mut W, sleeper: &S) -> Result<CycleOutcome>
    where
        W: Write,
        S: Sleeper + ?Sized,
    {
        writeln!(out, "{}", TITLE)?;
        writeln!(out, "Downloading file from Google Sheets...")?;
        out.flush()?;

        let artifact = match self.fetcher.fetch(&self.cfg.source_url, sleeper) {
            Ok(a) => a,
            Err(e) => {
                tracing::error!("fetch failed: {}", e);
                match self.next_cycle_in {
                    Some(d) => writeln!(
                        out,
                        "Failed to download file: {}. Retrying in {}...",
                        e,
                        format_interval(d)
                    )?,
                    None => writeln!(out, "Failed to download file: {}", e)?,
                }
                return Ok(CycleOutcome::FetchFailed);
            }
        };

        match self.digests.observe(&artifact.path) {
            Ok(ArtifactChange::Unchanged) => tracing::debug!("sheet unchanged since last cycle"),
            Ok(change) => tracing::debug!(?change, digest = ?self.digests.last(), "sheet digest"),
            Err(e) => tracing::warn!("could not hash artifact: {:#}", e),
        }

        render_artifact(&artifact.path, self.cfg.on_malformed, out)
    }
}

/// Build the leaderboard from `path` and print it with a "last updated" line.
pub fn render_artifact<W: Write>(path: &Path, policy: MalformedPolicy, out: &mut W) -> Result<CycleOutcome> {
    let board = match leaderboard::build(path, policy) {
        Ok(b) => b,
        Err(e @ BuildError::EmptyOrUnreadable { .. }) => {
            tracing::warn!("{}", e);
            return Ok(CycleOutcome::Empty);
        }
        Err(e) => {
            tracing::error!("leaderboard build failed: {}", e);
            writeln!(out, "Could not build leaderboard: {}", e)?;
            return Ok(CycleOutcome::BuildFailed);
        }
    };
    if board.skipped > 0 {
        tracing::warn!(skipped = board.skipped, "rows skipped");
    }

    writeln!(
        out,
        "Leaderboard (last updated: {}):",
        Local::now().format("%Y-%m-%d %H:%M:%S")
    )?;
    writeln!(out)?;
    let outcome = match board.render() {
        Some(table) => {
            writeln!(out, "{}", table)?;
            CycleOutcome::Rendered { rows: board.len() }
        }
        None => CycleOutcome::Empty,
    };
    out.flush()?;
    Ok(outcome)
}
