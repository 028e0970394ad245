use serde::{Deserialize, Serialize};

/// What the shell shows after loading an address.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageView {
    pub url: String,
    /// Matched `<title>` tag text, or the default title.
    pub title: String,
    pub status_code: u16,
    /// Status bar text, e.g. `Status: 404 Not Found`.
    pub status_text: String,
    /// Display buffer: title, a blank line, then the raw body.
    pub content: String,
}

impl PageView {
    pub fn status_line(status_code: u16) -> String {
        match reqwest::StatusCode::from_u16(status_code)
            .ok()
            .and_then(|s| s.canonical_reason())
        {
            Some(reason) => format!("Status: {} {}", status_code, reason),
            None => format!("Status: {}", status_code),
        }
    }
}
