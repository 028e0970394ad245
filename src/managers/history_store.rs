//! History Store for SimpleBrowser.
//!
//! Implements `HistoryStoreTrait`: a capacity-bounded, linear log of visited
//! URLs with a back/forward cursor, persisted to an append-only
//! `timestamp|url` text file.

use std::collections::HashSet;
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::PathBuf;

use chrono::{Local, NaiveDateTime, Timelike};
use log::{debug, info, warn};

use crate::types::errors::HistoryError;
use crate::types::history::HistoryEntry;

/// Maximum number of entries kept in memory.
pub const MAX_HISTORY_ENTRIES: usize = 1000;

/// Trait defining history navigation operations.
pub trait HistoryStoreTrait {
    fn visit(&mut self, url: &str) -> Result<(), HistoryError>;
    fn move_back(&mut self) -> Option<String>;
    fn move_forward(&mut self) -> Option<String>;
    fn matching_urls(&self, query: &str) -> Vec<String>;
    fn load(&mut self) -> Result<usize, HistoryError>;
    fn entries(&self) -> &[HistoryEntry];
    fn cursor(&self) -> Option<usize>;
    fn current_url(&self) -> Option<&str>;
}

/// History store owning its entries and the file they are appended to.
pub struct HistoryStore {
    path: PathBuf,
    entries: Vec<HistoryEntry>,
    cursor: Option<usize>,
}

impl HistoryStore {
    /// Creates an empty store persisting to `path`. Nothing is read until [`load`](HistoryStoreTrait::load).
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            entries: Vec::new(),
            cursor: None,
        }
    }

    /// Local wall-clock time truncated to whole seconds, as it is written to disk.
    fn now() -> NaiveDateTime {
        let now = Local::now().naive_local();
        now.with_nanosecond(0).unwrap_or(now)
    }

    /// Drops entries from the front until the cap holds, shifting the cursor with them.
    fn evict_overflow(&mut self) {
        let overflow = self.entries.len().saturating_sub(MAX_HISTORY_ENTRIES);
        if overflow == 0 {
            return;
        }
        self.entries.drain(..overflow);
        self.cursor = self.cursor.map(|c| c.saturating_sub(overflow));
        debug!("Evicted {} oldest history entries", overflow);
    }

    fn append_record(&self, entry: &HistoryEntry) -> Result<(), HistoryError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(|e| HistoryError::IoError(e.to_string()))?;
            }
        }
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .map_err(|e| HistoryError::IoError(e.to_string()))?;
        writeln!(file, "{}", entry.to_record()).map_err(|e| HistoryError::IoError(e.to_string()))
    }
}

impl HistoryStoreTrait for HistoryStore {
    /// Records a visit unless `url` is the entry under the cursor.
    ///
    /// The in-memory log is updated before the record is appended, so a
    /// write failure leaves navigation intact and only loses the file line.
    fn visit(&mut self, url: &str) -> Result<(), HistoryError> {
        if self.current_url() == Some(url) {
            return Ok(());
        }

        let entry = HistoryEntry::new(url, Self::now());
        self.entries.push(entry.clone());
        self.cursor = Some(self.entries.len() - 1);
        self.evict_overflow();

        debug!("Visited {} (cursor {:?})", url, self.cursor);
        self.append_record(&entry)
    }

    fn move_back(&mut self) -> Option<String> {
        match self.cursor {
            Some(c) if c > 0 => {
                self.cursor = Some(c - 1);
                Some(self.entries[c - 1].url.clone())
            }
            _ => None,
        }
    }

    fn move_forward(&mut self) -> Option<String> {
        match self.cursor {
            Some(c) if c + 1 < self.entries.len() => {
                self.cursor = Some(c + 1);
                Some(self.entries[c + 1].url.clone())
            }
            _ => None,
        }
    }

    /// Case-insensitive substring search over stored URLs, de-duplicated in visit order.
    fn matching_urls(&self, query: &str) -> Vec<String> {
        if query.trim().is_empty() {
            return Vec::new();
        }

        let needle = query.to_lowercase();
        let mut seen = HashSet::new();
        self.entries
            .iter()
            .map(|e| e.url.as_str())
            .filter(|url| url.to_lowercase().contains(&needle))
            .filter(|url| seen.insert(*url))
            .map(str::to_string)
            .collect()
    }

    /// Appends the records of the history file to the log and moves the
    /// cursor to the last entry. Returns the number of records accepted.
    ///
    /// A missing file loads nothing. Lines that are not exactly
    /// `timestamp|url` are skipped. Invalid UTF-8 is replaced, not rejected.
    fn load(&mut self) -> Result<usize, HistoryError> {
        if !self.path.exists() {
            return Ok(0);
        }

        let bytes = fs::read(&self.path).map_err(|e| HistoryError::IoError(e.to_string()))?;
        let content = String::from_utf8_lossy(&bytes);

        let mut loaded = 0;
        for line in content.lines() {
            match HistoryEntry::from_record(line) {
                Some(entry) => {
                    self.entries.push(entry);
                    loaded += 1;
                }
                None => warn!("Skipping malformed history line: {:?}", line),
            }
        }

        self.cursor = self.entries.len().checked_sub(1);
        self.evict_overflow();
        info!("Loaded {} history entries from {}", loaded, self.path.display());
        Ok(loaded)
    }

    fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }

    fn cursor(&self) -> Option<usize> {
        self.cursor
    }

    fn current_url(&self) -> Option<&str> {
        self.cursor.map(|c| self.entries[c].url.as_str())
    }
}
