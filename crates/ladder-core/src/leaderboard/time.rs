//! `MM:SS` lap times.

use std::fmt;

/// A time field that is not `MM:SS`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MalformedTime(pub String);

impl fmt::Display for MalformedTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "malformed time {:?}", self.0)
    }
}

impl std::error::Error for MalformedTime {}

/// Convert `MM:SS` text to total seconds.
///
/// Exactly one `:`; both sides (whitespace-trimmed) must be non-negative integers.
/// Seconds are not range-checked, so `1:75` is 135.
pub fn parse_time(text: &str) -> Result<u32, MalformedTime> {
    let bad = || MalformedTime(text.to_string());
    let mut parts = text.split(':');
    let (minutes, seconds) = match (parts.next(), parts.next(), parts.next()) {
        (Some(m), Some(s), None) => (m.trim(), s.trim()),
        _ => return Err(bad()),
    };
    let minutes: u32 = minutes.parse().map_err(|_| bad())?;
    let seconds: u32 = seconds.parse().map_err(|_| bad())?;
    minutes
        .checked_mul(60)
        .and_then(|m| m.checked_add(seconds))
        .ok_or_else(bad)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_minutes_and_seconds() {
        assert_eq!(parse_time("05:09"), Ok(309));
        assert_eq!(parse_time("00:00"), Ok(0));
        assert_eq!(parse_time("1:20"), Ok(80));
        assert_eq!(parse_time("12:05"), Ok(725));
    }

    #[test]
    fn tolerates_surrounding_whitespace() {
        assert_eq!(parse_time(" 00:59"), Ok(59));
        assert_eq!(parse_time("01 : 02 "), Ok(62));
    }

    #[test]
    fn seconds_are_not_range_checked() {
        assert_eq!(parse_time("1:75"), Ok(135));
    }

    #[test]
    fn rejects_malformed() {
        for bad in ["1:2a", "", "5", "1:2:3", ":30", "1:", "-1:00", "aa:bb", "1.5:00"] {
            assert_eq!(parse_time(bad), Err(MalformedTime(bad.to_string())), "{bad:?}");
        }
    }

    #[test]
    fn rejects_overflow() {
        assert!(parse_time("4294967295:00").is_err());
    }
}
