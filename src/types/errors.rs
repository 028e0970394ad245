use thiserror::Error;

// === HistoryError ===

/// Errors related to the browsing history log.
#[derive(Debug, Error)]
pub enum HistoryError {
    /// Reading or appending the history file failed.
    #[error("History I/O error: {0}")]
    IoError(String),
}

// === FavoritesError ===

/// Errors related to favorites management.
#[derive(Debug, Error)]
pub enum FavoritesError {
    /// A favorite needs both a non-blank title and a non-blank URL.
    #[error("Favorite {0} must not be empty")]
    EmptyField(&'static str),
    /// Reading or writing the favorites file failed.
    #[error("Favorites I/O error: {0}")]
    IoError(String),
}

// === BulkDownloadError ===

/// Reasons a bulk download is refused before any URL is fetched.
///
/// The `Display` text is the report shown to the user in place of results.
#[derive(Debug, Error)]
pub enum BulkDownloadError {
    /// The URL list file is missing.
    #[error("Error: File does not exist.")]
    FileNotFound(String),
    /// The URL list holds more entries than a single run may process.
    #[error("Error: Too many URLs in file. Please limit to {limit} URLs.")]
    TooManyUrls { count: usize, limit: usize },
    /// The URL list exists but could not be read.
    #[error("Error: Failed to read file: {0}")]
    ReadFailed(String),
}

// === FetchError ===

/// Errors raised while setting up the HTTP client.
///
/// Individual fetches never fail; this only covers client construction.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("HTTP client build failed: {0}")]
    ClientBuild(String),
}

// === SettingsError ===

/// Errors related to settings management.
#[derive(Debug, Error)]
pub enum SettingsError {
    /// An I/O error occurred while reading or writing settings.
    #[error("Settings I/O error: {0}")]
    IoError(String),
    /// Failed to serialize or deserialize settings.
    #[error("Settings serialization error: {0}")]
    SerializationError(String),
}

// === AppError ===

/// Startup failures of the browser shell.
#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Settings(#[from] SettingsError),
    #[error(transparent)]
    Fetch(#[from] FetchError),
    #[error(transparent)]
    History(#[from] HistoryError),
    #[error(transparent)]
    Favorites(#[from] FavoritesError),
}
