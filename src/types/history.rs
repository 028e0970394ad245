use chrono::{DateTime, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// Timestamp layout used in the history file, e.g. `2024-01-01 10:00:00`.
pub const HISTORY_TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Layouts accepted when reading. `%.f` also matches an absent fraction.
const ACCEPTED_TIMESTAMP_FORMATS: [&str; 2] = ["%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M:%S%.f"];

/// Reads a record timestamp: the written layout, its `T`-separated and
/// fractional-second variants, or RFC 3339 with an offset (kept as local wall time).
fn parse_timestamp(raw: &str) -> Option<NaiveDateTime> {
    ACCEPTED_TIMESTAMP_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(raw, fmt).ok())
        .or_else(|| DateTime::parse_from_rfc3339(raw).ok().map(|dt| dt.naive_local()))
}

/// Represents a single visit in the browsing history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub url: String,
    pub timestamp: NaiveDateTime,
}

impl HistoryEntry {
    pub fn new(url: impl Into<String>, timestamp: NaiveDateTime) -> Self {
        Self {
            url: url.into(),
            timestamp,
        }
    }

    /// Formats the entry as one `timestamp|url` history file record.
    pub fn to_record(&self) -> String {
        format!(
            "{}|{}",
            self.timestamp.format(HISTORY_TIMESTAMP_FORMAT),
            self.url
        )
    }

    /// Parses one `timestamp|url` record.
    ///
    /// Returns `None` when the line does not split into exactly two fields
    /// or the timestamp cannot be read. URLs are not escaped, so a URL
    /// containing `|` yields a record that is rejected here.
    pub fn from_record(line: &str) -> Option<Self> {
        let parts: Vec<&str> = line.split('|').collect();
        if parts.len() != 2 {
            return None;
        }
        let timestamp = parse_timestamp(parts[0].trim())?;
        Some(Self::new(parts[1], timestamp))
    }
}
