//! Leaderboard builder: artifact CSV → best time per name → aligned table.
//!
//! Row 0 is the header, column 0 (the form timestamp) is dropped everywhere.
//! Rows are parsed into `Record`s once, deduplicated by normalized name keeping
//! the strictly fastest time, sorted ascending (stable), then rendered.

mod error;
mod rank;
mod record;
mod render;
mod time;

pub use error::BuildError;
pub use rank::{best_per_name, sort_by_time};
pub use record::{normalize_name, Columns, Record};
pub use render::{column_widths, format_line, render_table, SEPARATOR};
pub use time::{parse_time, MalformedTime};

use crate::config::MalformedPolicy;
use std::fs;
use std::io::Read;
use std::path::Path;

/// Deduplicated, time-ordered results plus the header they render under.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Leaderboard {
    pub header: Vec<String>,
    pub entries: Vec<Record>,
    /// Rows dropped under `MalformedPolicy::Skip`.
    pub skipped: usize,
}

impl Leaderboard {
    fn empty(header: Vec<String>) -> Self {
        Self {
            header,
            entries: Vec::new(),
            skipped: 0,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Aligned table text, or `None` when there are no entries (the header is
    /// never printed on its own).
    pub fn render(&self) -> Option<String> {
        if self.entries.is_empty() {
            return None;
        }
        let rows: Vec<&[String]> = self.entries.iter().map(|r| r.fields.as_slice()).collect();
        Some(render_table(&self.header, &rows))
    }

    /// Parse CSV text from `rdr` and build the leaderboard.
    pub fn from_reader<R: Read>(rdr: R, policy: MalformedPolicy) -> Result<Self, BuildError> {
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .from_reader(rdr);
        let mut rows = reader.records();

        let header: Vec<String> = match rows.next() {
            Some(first) => first?.iter().skip(1).map(str::to_string).collect(),
            None => return Ok(Self::empty(Vec::new())),
        };

        let mut records = Vec::new();
        let mut skipped = 0usize;
        let mut resolved: Option<Columns> = None;
        for row in rows {
            let row = row?;
            // Columns are only required once there is a data row to read.
            let cols = match resolved {
                Some(c) => c,
                None => *resolved.insert(Columns::resolve(&header)?),
            };
            let line = row.position().map_or(0, |p| p.line());
            let fields: Vec<String> = row.iter().skip(1).map(str::to_string).collect();
            match Record::from_fields(fields, &cols, line) {
                Ok(record) => records.push(record),
                Err(e) if policy == MalformedPolicy::Skip && e.is_row_error() => {
                    tracing::warn!("skipping row: {}", e);
                    skipped += 1;
                }
                Err(e) => return Err(e),
            }
        }

        let mut entries = best_per_name(records);
        sort_by_time(&mut entries);
        tracing::debug!(
            entries = entries.len(),
            skipped,
            "leaderboard built"
        );
        Ok(Self {
            header,
            entries,
            skipped,
        })
    }
}

/// Build the leaderboard from the artifact at `path`.
///
/// Missing, unreadable, or zero-byte files are `BuildError::EmptyOrUnreadable`;
/// a header with no data rows is an empty leaderboard.
pub fn build(path: &Path, policy: MalformedPolicy) -> Result<Leaderboard, BuildError> {
    let unreadable = |reason: String| BuildError::EmptyOrUnreadable {
        path: path.to_path_buf(),
        reason,
    };
    let bytes = fs::read(path).map_err(|e| unreadable(e.to_string()))?;
    if bytes.is_empty() {
        return Err(unreadable("zero-length file".to_string()));
    }
    Leaderboard::from_reader(bytes.as_slice(), policy)
}
