//! Unit tests for the HistoryStore public API.
//!
//! These tests exercise visiting, back/forward navigation, suggestions and
//! the `timestamp|url` history file through `HistoryStoreTrait`, using a
//! temporary directory per test.

use std::fs;

use tempfile::TempDir;

use simplebrowser::managers::history_store::{
    HistoryStore, HistoryStoreTrait, MAX_HISTORY_ENTRIES,
};

/// Helper: create a HistoryStore writing into a fresh temp directory.
fn setup() -> (HistoryStore, TempDir) {
    let tmp = TempDir::new().expect("Failed to create temp dir");
    let store = HistoryStore::new(tmp.path().join("history.txt"));
    (store, tmp)
}

#[test]
fn test_empty_store_has_no_cursor() {
    let (mut store, _tmp) = setup();
    assert!(store.entries().is_empty());
    assert_eq!(store.cursor(), None);
    assert_eq!(store.current_url(), None);
    assert_eq!(store.move_back(), None);
    assert_eq!(store.move_forward(), None);
}

#[test]
fn test_visit_appends_and_moves_cursor() {
    let (mut store, _tmp) = setup();
    store.visit("http://a").unwrap();
    store.visit("http://b").unwrap();

    assert_eq!(store.entries().len(), 2);
    assert_eq!(store.cursor(), Some(1));
    assert_eq!(store.current_url(), Some("http://b"));
}

/// Visiting the URL under the cursor again is a no-op.
#[test]
fn test_consecutive_duplicate_is_suppressed() {
    let (mut store, tmp) = setup();
    store.visit("http://a").unwrap();
    store.visit("http://a").unwrap();

    assert_eq!(store.entries().len(), 1);
    let content = fs::read_to_string(tmp.path().join("history.txt")).unwrap();
    assert_eq!(content.lines().count(), 1);
}

/// Only the entry under the cursor is compared, not the whole history.
#[test]
fn test_non_consecutive_duplicate_is_recorded() {
    let (mut store, _tmp) = setup();
    store.visit("http://a").unwrap();
    store.visit("http://b").unwrap();
    store.visit("http://a").unwrap();

    let urls: Vec<&str> = store.entries().iter().map(|e| e.url.as_str()).collect();
    assert_eq!(urls, vec!["http://a", "http://b", "http://a"]);
}

#[test]
fn test_back_and_forward() {
    let (mut store, _tmp) = setup();
    for url in ["http://a", "http://b", "http://c"] {
        store.visit(url).unwrap();
    }

    assert_eq!(store.move_back().as_deref(), Some("http://b"));
    assert_eq!(store.move_back().as_deref(), Some("http://a"));
    assert_eq!(store.move_back(), None);
    assert_eq!(store.cursor(), Some(0));

    assert_eq!(store.move_forward().as_deref(), Some("http://b"));
    assert_eq!(store.move_forward().as_deref(), Some("http://c"));
    assert_eq!(store.move_forward(), None);
    assert_eq!(store.cursor(), Some(2));
}

/// Re-visiting the entry reached by going back does not add an entry,
/// which is how page loads after back/forward behave.
#[test]
fn test_visit_after_back_is_noop_for_current_url() {
    let (mut store, _tmp) = setup();
    store.visit("http://a").unwrap();
    store.visit("http://b").unwrap();

    let back = store.move_back().unwrap();
    store.visit(&back).unwrap();
    assert_eq!(store.entries().len(), 2);
    assert_eq!(store.cursor(), Some(0));
}

/// A new visit after going back is appended at the end and the cursor moves there.
#[test]
fn test_new_visit_after_back_goes_to_end() {
    let (mut store, _tmp) = setup();
    store.visit("http://a").unwrap();
    store.visit("http://b").unwrap();
    store.move_back();

    store.visit("http://c").unwrap();
    assert_eq!(store.entries().len(), 3);
    assert_eq!(store.cursor(), Some(2));
    assert_eq!(store.current_url(), Some("http://c"));
    assert_eq!(store.move_forward(), None);
}

#[test]
fn test_capacity_evicts_oldest() {
    let (mut store, _tmp) = setup();
    for i in 0..=MAX_HISTORY_ENTRIES {
        store.visit(&format!("http://site{}", i)).unwrap();
    }

    assert_eq!(store.entries().len(), MAX_HISTORY_ENTRIES);
    assert_eq!(store.entries()[0].url, "http://site1");
    assert_eq!(store.cursor(), Some(MAX_HISTORY_ENTRIES - 1));
    assert_eq!(
        store.current_url(),
        Some(format!("http://site{}", MAX_HISTORY_ENTRIES).as_str())
    );
}

#[test]
fn test_matching_urls() {
    let (mut store, _tmp) = setup();
    for url in [
        "https://Example.com/a",
        "https://rust-lang.org",
        "https://example.com/b",
        "https://Example.com/a",
    ] {
        store.visit(url).unwrap();
    }

    assert!(store.matching_urls("").is_empty());
    assert!(store.matching_urls("   ").is_empty());
    assert_eq!(
        store.matching_urls("EXAMPLE"),
        vec!["https://Example.com/a", "https://example.com/b"]
    );
    assert!(store.matching_urls("python").is_empty());
}

#[test]
fn test_visit_writes_timestamp_url_records() {
    let (mut store, tmp) = setup();
    store.visit("http://a").unwrap();
    store.visit("http://b").unwrap();

    let content = fs::read_to_string(tmp.path().join("history.txt")).unwrap();
    let lines: Vec<&str> = content.lines().collect();
    assert_eq!(lines.len(), 2);
    assert!(lines[0].ends_with("|http://a"));
    assert!(lines[1].ends_with("|http://b"));
    assert_eq!(lines[0].split('|').count(), 2);
}

/// Loading the two-line file, then navigating back and forward.
#[test]
fn test_load_then_navigate() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("history.txt");
    fs::write(
        &path,
        "2024-01-01 10:00:00|http://a\n2024-01-01 10:01:00|http://b\n",
    )
    .unwrap();

    let mut store = HistoryStore::new(&path);
    assert_eq!(store.load().unwrap(), 2);
    assert_eq!(store.cursor(), Some(1));

    assert_eq!(store.move_back().as_deref(), Some("http://a"));
    assert_eq!(store.move_forward().as_deref(), Some("http://b"));
    assert_eq!(store.move_forward(), None);
}

#[test]
fn test_load_skips_malformed_lines() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("history.txt");
    fs::write(
        &path,
        "garbage\n\
         2024-01-01 10:00:00|http://a\n\
         2024-01-01 10:00:30|http://x/?q=a|b\n\
         not a date|http://c\n\
         2024-01-01 10:01:00|http://b\n",
    )
    .unwrap();

    let mut store = HistoryStore::new(&path);
    assert_eq!(store.load().unwrap(), 2);
    let urls: Vec<&str> = store.entries().iter().map(|e| e.url.as_str()).collect();
    assert_eq!(urls, vec!["http://a", "http://b"]);
}

#[test]
fn test_load_survives_invalid_utf8_line() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("history.txt");
    let mut content = b"2024-01-01 10:00:00|http://a\n2024-01-01 10:00:30|http://caf".to_vec();
    content.extend_from_slice(b"\xe9\n2024-01-01 10:01:00|http://b\n");
    fs::write(&path, content).unwrap();

    let mut store = HistoryStore::new(&path);
    assert_eq!(store.load().unwrap(), 3);
    let urls: Vec<&str> = store.entries().iter().map(|e| e.url.as_str()).collect();
    assert_eq!(urls, vec!["http://a", "http://caf\u{FFFD}", "http://b"]);
    assert_eq!(store.current_url(), Some("http://b"));
}

#[test]
fn test_load_accepts_rfc3339_timestamps() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("history.txt");
    fs::write(
        &path,
        "2024-01-01T10:00:00|http://a\n2024-01-01 10:01:00.123|http://b\n",
    )
    .unwrap();

    let mut store = HistoryStore::new(&path);
    assert_eq!(store.load().unwrap(), 2);
}

/// A URL containing `|` is written unescaped and cannot be read back.
#[test]
fn test_pipe_in_url_does_not_survive_reload() {
    let (mut store, tmp) = setup();
    store.visit("http://a/?x=1|2").unwrap();
    store.visit("http://b").unwrap();

    let mut reloaded = HistoryStore::new(tmp.path().join("history.txt"));
    assert_eq!(reloaded.load().unwrap(), 1);
    assert_eq!(reloaded.entries()[0].url, "http://b");
}

#[test]
fn test_load_missing_file_is_empty() {
    let (mut store, _tmp) = setup();
    assert_eq!(store.load().unwrap(), 0);
    assert_eq!(store.cursor(), None);
}

#[test]
fn test_load_caps_to_max_entries() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("history.txt");
    let content: String = (0..MAX_HISTORY_ENTRIES + 5)
        .map(|i| format!("2024-01-01 10:00:00|http://site{}\n", i))
        .collect();
    fs::write(&path, content).unwrap();

    let mut store = HistoryStore::new(&path);
    store.load().unwrap();
    assert_eq!(store.entries().len(), MAX_HISTORY_ENTRIES);
    assert_eq!(store.entries()[0].url, "http://site5");
    assert_eq!(store.cursor(), Some(MAX_HISTORY_ENTRIES - 1));
}

#[test]
fn test_visit_reports_unwritable_file_but_keeps_entry() {
    let tmp = TempDir::new().unwrap();
    // The history path is a directory, so appending fails.
    let mut store = HistoryStore::new(tmp.path());
    let result = store.visit("http://a");
    assert!(result.is_err());
    assert_eq!(store.current_url(), Some("http://a"));
}
