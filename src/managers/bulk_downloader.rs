//! Bulk Downloader for SimpleBrowser.
//!
//! Reads a list of URLs (one per line) and fetches them one after another,
//! producing a `<status> <bytes> <url>` report line for each.

use std::fs;
use std::path::Path;

use log::info;

use crate::services::http_fetcher::HttpFetcherTrait;
use crate::types::errors::BulkDownloadError;

/// Maximum number of URLs accepted in one list file.
pub const MAX_BULK_URLS: usize = 1000;

/// Bulk downloader borrowing the fetcher it reports on.
pub struct BulkDownloader<'a, F: HttpFetcherTrait + ?Sized> {
    fetcher: &'a F,
}

impl<'a, F: HttpFetcherTrait + ?Sized> BulkDownloader<'a, F> {
    pub fn new(fetcher: &'a F) -> Self {
        Self { fetcher }
    }

    /// Runs the list at `file_path` and returns the report, or the error text
    /// when the list is refused. No URL is fetched for a refused list.
    pub fn run(&self, file_path: impl AsRef<Path>) -> String {
        match self.try_run(file_path) {
            Ok(report) => report,
            Err(e) => e.to_string(),
        }
    }

    /// Same as [`run`](Self::run) but keeps the refusal reason typed.
    ///
    /// Lines are used as-is, without trimming or validation. Bytes that are
    /// not UTF-8 are replaced rather than refusing the list. Fetch failures
    /// are not errors here: they appear as their status and error body size.
    pub fn try_run(&self, file_path: impl AsRef<Path>) -> Result<String, BulkDownloadError> {
        let path = file_path.as_ref();
        if !path.is_file() {
            return Err(BulkDownloadError::FileNotFound(path.display().to_string()));
        }

        let bytes = fs::read(path).map_err(|e| BulkDownloadError::ReadFailed(e.to_string()))?;
        let content = String::from_utf8_lossy(&bytes);
        let urls: Vec<&str> = content.lines().collect();

        if urls.len() > MAX_BULK_URLS {
            return Err(BulkDownloadError::TooManyUrls {
                count: urls.len(),
                limit: MAX_BULK_URLS,
            });
        }

        info!("Bulk downloading {} URLs from {}", urls.len(), path.display());

        let mut report = String::new();
        for url in urls {
            let result = self.fetcher.fetch(url);
            report.push_str(&format!(
                "{} {} {}\n",
                result.status_code,
                result.byte_len(),
                url
            ));
        }
        Ok(report)
    }
}
