// SimpleBrowser state managers
// Managers own browsing state: history, favorites, and bulk download runs.

pub mod bulk_downloader;
pub mod favorites_store;
pub mod history_store;
