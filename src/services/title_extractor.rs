//! Title extraction for fetched pages.
//!
//! Finds the first `<title>…</title>` span in raw HTML, case-insensitively,
//! and returns the whole matched tag text (markers included).

use std::sync::OnceLock;

use regex::Regex;

/// Returned when the document is blank or has no title tag.
pub const DEFAULT_TITLE: &str = "No title";

fn title_regex() -> Option<&'static Regex> {
    static RE: OnceLock<Option<Regex>> = OnceLock::new();
    RE.get_or_init(|| {
        // `.` does not cross newlines, so only single-line titles match.
        Regex::new(r"(?i)<title>\s*.+?\s*</title>").ok()
    })
    .as_ref()
}

/// Returns the first `<title>` tag of `html` verbatim, or [`DEFAULT_TITLE`].
pub fn extract_title(html: &str) -> String {
    if html.trim().is_empty() {
        return DEFAULT_TITLE.to_string();
    }

    title_regex()
        .and_then(|re| re.find(html))
        .map(|m| m.as_str().to_string())
        .unwrap_or_else(|| DEFAULT_TITLE.to_string())
}
