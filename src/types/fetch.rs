use serde::{Deserialize, Serialize};

/// Status code reported when a fetch fails without an HTTP response.
pub const FALLBACK_STATUS_CODE: u16 = 500;

/// Body text and status code of one fetch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FetchResult {
    pub body: String,
    pub status_code: u16,
}

impl FetchResult {
    pub fn new(body: impl Into<String>, status_code: u16) -> Self {
        Self {
            body: body.into(),
            status_code,
        }
    }

    /// Builds the synthetic result for a failed fetch.
    ///
    /// `status_code` is kept when the failure came with an HTTP status,
    /// otherwise [`FALLBACK_STATUS_CODE`] is used.
    pub fn failure(message: impl std::fmt::Display, status_code: Option<u16>) -> Self {
        Self {
            body: format!("Error fetching content: {}", message),
            status_code: status_code.unwrap_or(FALLBACK_STATUS_CODE),
        }
    }

    /// Size of the body in UTF-8 bytes.
    pub fn byte_len(&self) -> usize {
        self.body.len()
    }
}
