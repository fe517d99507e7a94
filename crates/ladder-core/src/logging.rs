//! Log sinks. Stdout carries the rendered leaderboard, so tracing output goes
//! to `~/.local/state/ladder/ladder.log`, or to stderr when that file cannot be
//! opened.

use anyhow::{Context, Result};
use std::fs::OpenOptions;
use std::io;
use std::path::PathBuf;
use std::sync::Mutex;
use tracing_subscriber::fmt::writer::BoxMakeWriter;
use tracing_subscriber::EnvFilter;

const DEFAULT_FILTER: &str = "info,ladder_core=debug,ladder=debug";

/// Where log lines end up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogSink {
    /// Append to this file.
    File(PathBuf),
    Stderr,
}

impl LogSink {
    /// `ladder.log` under the XDG state dir; the directory is created.
    pub fn state_file() -> Result<Self> {
        let dirs = xdg::BaseDirectories::with_prefix("ladder")?;
        Ok(Self::File(dirs.place_state_file("ladder.log")?))
    }

    fn make_writer(&self) -> Result<BoxMakeWriter> {
        match self {
            Self::File(path) => {
                let file = OpenOptions::new()
                    .create(true)
                    .append(true)
                    .open(path)
                    .with_context(|| format!("cannot open log file {}", path.display()))?;
                Ok(BoxMakeWriter::new(Mutex::new(file)))
            }
            Self::Stderr => Ok(BoxMakeWriter::new(io::stderr)),
        }
    }
}

/// `RUST_LOG`-style directives, or the crate default when absent or unparsable.
fn filter_from(directives: Option<&str>) -> EnvFilter {
    directives
        .and_then(|d| EnvFilter::try_new(d).ok())
        .unwrap_or_else(|| EnvFilter::new(DEFAULT_FILTER))
}

/// Install the global subscriber writing to `sink`. Fails if the sink cannot be
/// opened or a subscriber is already set.
pub fn init(sink: &LogSink) -> Result<()> {
    let directives = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    tracing_subscriber::fmt()
        .with_env_filter(filter_from(directives.as_deref()))
        .with_writer(sink.make_writer()?)
        .with_ansi(false)
        .try_init()
        .map_err(|e| anyhow::anyhow!("logging already initialized: {}", e))?;
    tracing::debug!(?sink, "logging initialized");
    Ok(())
}

/// Log to the state file, falling back to stderr. Returns the sink in use.
pub fn init_or_stderr() -> LogSink {
    let preferred = LogSink::state_file().and_then(|sink| init(&sink).map(|()| sink));
    match preferred {
        Ok(sink) => sink,
        Err(e) => {
            let _ = init(&LogSink::Stderr);
            tracing::warn!("log file unavailable, using stderr: {:#}", e);
            LogSink::Stderr
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tracing_subscriber::filter::LevelFilter;

    #[test]
    fn default_filter_enables_crate_debug() {
        assert_eq!(filter_from(None).max_level_hint(), Some(LevelFilter::DEBUG));
    }

    #[test]
    fn explicit_directives_win() {
        assert_eq!(filter_from(Some("warn")).max_level_hint(), Some(LevelFilter::WARN));
    }

    #[test]
    fn unparsable_directives_fall_back() {
        assert_eq!(
            filter_from(Some("ladder=loud")).max_level_hint(),
            Some(LevelFilter::DEBUG)
        );
    }

    #[test]
    fn file_sink_opens_for_append() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("ladder.log");
        std::fs::write(&path, "earlier\n").unwrap();
        LogSink::File(path.clone()).make_writer().unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "earlier\n");

        let missing = LogSink::File(dir.path().join("no-dir").join("ladder.log"));
        assert!(missing.make_writer().is_err());
    }
}
