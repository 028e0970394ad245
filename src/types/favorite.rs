use serde::{Deserialize, Serialize};

/// Separator between title and URL in the favorites file.
pub const FAVORITE_SEPARATOR: &str = "||";

/// Represents a saved favorite page.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FavoriteEntry {
    pub title: String,
    pub url: String,
}

impl FavoriteEntry {
    pub fn new(title: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            url: url.into(),
        }
    }

    pub fn to_record(&self) -> String {
        format!("{}{}{}", self.title, FAVORITE_SEPARATOR, self.url)
    }

    /// Parses a `title||url` line. Lines without exactly two fields yield `None`.
    pub fn from_record(line: &str) -> Option<Self> {
        let parts: Vec<&str> = line.split(FAVORITE_SEPARATOR).collect();
        match parts.as_slice() {
            [title, url] => Some(Self::new(*title, *url)),
            _ => None,
        }
    }
}
