//! Favorites Store for SimpleBrowser.
//!
//! Implements `FavoritesStoreTrait`: an unordered list of (title, url)
//! pairs saved on demand to a `title||url` text file.

use std::fs;
use std::path::PathBuf;

use log::{info, warn};

use crate::types::errors::FavoritesError;
use crate::types::favorite::FavoriteEntry;

/// Trait defining favorites management operations.
pub trait FavoritesStoreTrait {
    fn add(&mut self, title: &str, url: &str) -> Result<(), FavoritesError>;
    fn remove(&mut self, title: &str, url: &str) -> usize;
    fn list(&self) -> &[FavoriteEntry];
    fn save(&self) -> Result<(), FavoritesError>;
    fn load(&mut self) -> Result<usize, FavoritesError>;
}

/// Favorites store owning its entries and the file they are saved to.
pub struct FavoritesStore {
    path: PathBuf,
    favorites: Vec<FavoriteEntry>,
}

impl FavoritesStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            favorites: Vec::new(),
        }
    }
}

impl FavoritesStoreTrait for FavoritesStore {
    /// Adds a favorite. Duplicates are allowed; blank titles or URLs are rejected.
    fn add(&mut self, title: &str, url: &str) -> Result<(), FavoritesError> {
        if title.trim().is_empty() {
            return Err(FavoritesError::EmptyField("title"));
        }
        if url.trim().is_empty() {
            return Err(FavoritesError::EmptyField("url"));
        }
        self.favorites.push(FavoriteEntry::new(title, url));
        Ok(())
    }

    /// Removes every favorite matching both `title` and `url`. Returns how many were removed.
    fn remove(&mut self, title: &str, url: &str) -> usize {
        let before = self.favorites.len();
        self.favorites.retain(|f| !(f.title == title && f.url == url));
        before - self.favorites.len()
    }

    fn list(&self) -> &[FavoriteEntry] {
        &self.favorites
    }

    /// Overwrites the favorites file with one line per favorite.
    fn save(&self) -> Result<(), FavoritesError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)
                    .map_err(|e| FavoritesError::IoError(e.to_string()))?;
            }
        }

        let content: String = self
            .favorites
            .iter()
            .map(|f| f.to_record() + "\n")
            .collect();
        fs::write(&self.path, content).map_err(|e| FavoritesError::IoError(e.to_string()))?;

        info!("Saved {} favorites to {}", self.favorites.len(), self.path.display());
        Ok(())
    }

    /// Appends the favorites found in the file to the in-memory list.
    ///
    /// A missing file loads nothing. Lines without exactly two `||`
    /// fields, or with a blank field, are skipped. Invalid UTF-8 is replaced.
    fn load(&mut self) -> Result<usize, FavoritesError> {
        if !self.path.exists() {
            return Ok(0);
        }

        let bytes = fs::read(&self.path).map_err(|e| FavoritesError::IoError(e.to_string()))?;
        let content = String::from_utf8_lossy(&bytes);

        let mut loaded = 0;
        for line in content.lines() {
            let added = FavoriteEntry::from_record(line)
                .map(|f| self.add(&f.title, &f.url).is_ok())
                .unwrap_or(false);
            if added {
                loaded += 1;
            } else {
                warn!("Skipping malformed favorites line: {:?}", line);
            }
        }

        info!("Loaded {} favorites from {}", loaded, self.path.display());
        Ok(loaded)
    }
}
