//! Build-stage errors.

use std::path::PathBuf;
use thiserror::Error;

/// Why a leaderboard could not be built from the artifact this cycle.
#[derive(Debug, Error)]
pub enum BuildError {
    /// Artifact missing, unreadable, or zero bytes. The cycle renders nothing.
    #[error("artifact {} is empty or unreadable: {reason}", path.display())]
    EmptyOrUnreadable { path: PathBuf, reason: String },
    /// Header has no room for both a name and a time column.
    #[error("header has {found} column(s) after the timestamp; need name and time")]
    MissingColumns { found: usize },
    /// Time field is not `MM:SS`.
    #[error("line {line}: malformed time {value:?} (expected MM:SS)")]
    MalformedTime { line: u64, value: String },
    /// Data row too short to hold the name and time fields.
    #[error("line {line}: row has {fields} field(s) after the timestamp; need name and time")]
    MalformedRow { line: u64, fields: usize },
    #[error("csv: {0}")]
    Csv(#[from] csv::Error),
}

impl BuildError {
    /// True for the errors a per-row skip policy can step over.
    pub fn is_row_error(&self) -> bool {
        matches!(
            self,
            BuildError::MalformedTime { .. } | BuildError::MalformedRow { .. }
        )
    }
}
