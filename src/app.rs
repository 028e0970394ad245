//! App Core for SimpleBrowser.
//!
//! Central struct owning settings, the fetcher, history and favorites. Its
//! methods are the command handlers a presentation layer calls in response to
//! address-bar, button and menu events.

use std::path::PathBuf;

use log::{info, warn};

use crate::managers::bulk_downloader::BulkDownloader;
use crate::managers::favorites_store::{FavoritesStore, FavoritesStoreTrait};
use crate::managers::history_store::{HistoryStore, HistoryStoreTrait};
use crate::services::http_fetcher::{HttpFetcher, HttpFetcherTrait};
use crate::services::settings_engine::{SettingsEngine, SettingsEngineTrait};
use crate::services::title_extractor::extract_title;
use crate::types::errors::{AppError, FavoritesError, SettingsError};
use crate::types::favorite::FavoriteEntry;
use crate::types::history::HistoryEntry;
use crate::types::page::PageView;

/// Central application struct, generic over the fetcher so tests can stub the network.
///
/// BulkDownloader is not stored; it borrows the fetcher and is created per run.
pub struct App<F: HttpFetcherTrait = HttpFetcher> {
    pub settings_engine: SettingsEngine,
    pub fetcher: F,
    pub history: HistoryStore,
    pub favorites: FavoritesStore,
    address: String,
}

impl App<HttpFetcher> {
    /// Creates the app from the settings file (or defaults), building the
    /// HTTP client from the network settings and loading history and favorites.
    pub fn new(settings_path: Option<PathBuf>) -> Result<Self, AppError> {
        let mut settings_engine = SettingsEngine::new(settings_path);
        settings_engine.load()?;
        let fetcher = HttpFetcher::new(&settings_engine.get_settings().network)?;
        Self::with_fetcher(settings_engine, fetcher)
    }
}

impl<F: HttpFetcherTrait> App<F> {
    /// Creates the app around an already loaded settings engine and a fetcher.
    pub fn with_fetcher(settings_engine: SettingsEngine, fetcher: F) -> Result<Self, AppError> {
        let mut history = HistoryStore::new(settings_engine.history_path());
        let mut favorites = FavoritesStore::new(settings_engine.favorites_path());
        if let Err(e) = favorites.load() {
            warn!("Starting without stored favorites: {}", e);
        }
        if let Err(e) = history.load() {
            warn!("Starting without stored history: {}", e);
        }

        let address = settings_engine.get_settings().general.homepage.clone();
        info!(
            "Browser ready: {} history entries, {} favorites",
            history.entries().len(),
            favorites.list().len()
        );

        Ok(Self {
            settings_engine,
            fetcher,
            history,
            favorites,
            address,
        })
    }

    /// Text currently in the address bar.
    pub fn address(&self) -> &str {
        &self.address
    }

    /// Fetches `url`, renders it and records the visit.
    ///
    /// The visit is recorded even when the fetch failed. A failed history
    /// append is logged and does not affect the returned page.
    pub fn load_url(&mut self, url: &str) -> PageView {
        self.address = url.to_string();
        let result = self.fetcher.fetch(url);
        let title = extract_title(&result.body);

        let page = PageView {
            url: url.to_string(),
            content: format!("{}\n\n{}", title, result.body),
            title,
            status_code: result.status_code,
            status_text: PageView::status_line(result.status_code),
        };

        if let Err(e) = self.history.visit(url) {
            warn!("Could not record visit to {}: {}", url, e);
        }
        page
    }

    /// Reloads the address bar contents.
    pub fn refresh(&mut self) -> PageView {
        let url = self.address.clone();
        self.load_url(&url)
    }

    /// Loads the previous history entry, if any.
    pub fn back(&mut self) -> Option<PageView> {
        let url = self.history.move_back()?;
        Some(self.load_url(&url))
    }

    /// Loads the next history entry, if any.
    pub fn forward(&mut self) -> Option<PageView> {
        let url = self.history.move_forward()?;
        Some(self.load_url(&url))
    }

    pub fn home_page(&self) -> &str {
        &self.settings_engine.get_settings().general.homepage
    }

    /// Loads the configured home page.
    pub fn go_home(&mut self) -> PageView {
        let url = self.home_page().to_string();
        self.load_url(&url)
    }

    /// Makes the current address the home page and saves the settings.
    pub fn set_home_page(&mut self) -> Result<(), SettingsError> {
        let url = self.address.clone();
        self.settings_engine.set_homepage(&url)?;
        info!("Home page set to {}", url);
        Ok(())
    }

    /// Adds the current address as a favorite and saves the list.
    pub fn add_favorite(&mut self, title: &str) -> Result<FavoriteEntry, FavoritesError> {
        let url = self.address.clone();
        self.favorites.add(title, &url)?;
        self.favorites.save()?;
        Ok(FavoriteEntry::new(title, url))
    }

    /// Removes matching favorites and saves the list. Returns how many were removed.
    pub fn remove_favorite(&mut self, title: &str, url: &str) -> Result<usize, FavoritesError> {
        let removed = self.favorites.remove(title, url);
        self.favorites.save()?;
        Ok(removed)
    }

    pub fn favorites(&self) -> &[FavoriteEntry] {
        self.favorites.list()
    }

    pub fn history_entries(&self) -> &[HistoryEntry] {
        self.history.entries()
    }

    /// History URLs matching what has been typed so far.
    pub fn suggestions(&self, typed: &str) -> Vec<String> {
        self.history.matching_urls(typed)
    }

    /// Runs a bulk download for the URL list at `path` and returns the report text.
    pub fn bulk_download(&self, path: &str) -> String {
        BulkDownloader::new(&self.fetcher).run(path)
    }
}
