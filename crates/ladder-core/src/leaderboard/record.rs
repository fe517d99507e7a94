//! Typed data rows.

use super::error::BuildError;
use super::time::parse_time;

/// Where the name and time live in a row (indices after the timestamp column is dropped).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Columns {
    pub name: usize,
    pub time: usize,
    /// Header width; every record is normalized to this many fields.
    pub width: usize,
}

impl Columns {
    /// Positional layout: name is the first field, time the second. Header
    /// labels are only display text.
    pub fn resolve(header: &[String]) -> Result<Self, BuildError> {
        if header.len() < 2 {
            return Err(BuildError::MissingColumns {
                found: header.len(),
            });
        }
        Ok(Self {
            name: 0,
            time: 1,
            width: header.len(),
        })
    }
}

/// Normalized uniqueness key for a participant name.
pub fn normalize_name(name: &str) -> String {
    name.trim().to_lowercase()
}

/// One data row, parsed once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    /// Name exactly as entered.
    pub name: String,
    /// Normalized name (dedup key).
    pub key: String,
    /// Lap time in seconds.
    pub seconds: u32,
    /// All fields after the timestamp, padded or truncated to the header width.
    pub fields: Vec<String>,
    /// Line in the artifact the row came from.
    pub line: u64,
}

impl Record {
    /// Build a record from a row that already had its timestamp column removed.
    pub fn from_fields(mut fields: Vec<String>, cols: &Columns, line: u64) -> Result<Self, BuildError> {
        if fields.len() <= cols.name.max(cols.time) {
            return Err(BuildError::MalformedRow {
                line,
                fields: fields.len(),
            });
        }
        let seconds = parse_time(&fields[cols.time]).map_err(|e| BuildError::MalformedTime {
            line,
            value: e.0,
        })?;
        fields.resize(cols.width, String::new());
        let name = fields[cols.name].clone();
        Ok(Self {
            key: normalize_name(&name),
            name,
            seconds,
            fields,
            line,
        })
    }
}
