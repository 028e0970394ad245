//! HTTP fetcher for SimpleBrowser.
//!
//! Issues one blocking GET per call and always hands back a [`FetchResult`]:
//! transport errors and non-success statuses are folded into an error body
//! instead of being returned as `Err`.

use std::time::Duration;

use log::{debug, warn};
use reqwest::blocking::Client;

use crate::types::errors::FetchError;
use crate::types::fetch::FetchResult;
use crate::types::settings::NetworkSettings;

/// Trait defining the page fetch operation.
pub trait HttpFetcherTrait {
    /// Fetches `url` and returns its body text and status code. Never fails.
    fn fetch(&self, url: &str) -> FetchResult;
}

/// Blocking HTTP fetcher backed by `reqwest`.
pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    /// Builds a fetcher from the network settings.
    ///
    /// # Errors
    /// Returns `FetchError::ClientBuild` if the TLS backend or client cannot be initialised.
    pub fn new(settings: &NetworkSettings) -> Result<Self, FetchError> {
        let mut builder = Client::builder();
        if let Some(agent) = &settings.user_agent {
            builder = builder.user_agent(agent.clone());
        }
        if let Some(secs) = settings.request_timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        if !settings.use_system_proxy {
            builder = builder.no_proxy();
        }
        let client = builder
            .build()
            .map_err(|e| FetchError::ClientBuild(e.to_string()))?;
        Ok(Self { client })
    }
}

impl HttpFetcherTrait for HttpFetcher {
    fn fetch(&self, url: &str) -> FetchResult {
        debug!("GET {}", url);

        let response = match self.client.get(url).send() {
            Ok(r) => r,
            Err(e) => {
                warn!("Fetch of {} failed: {}", url, e);
                return FetchResult::failure(&e, e.status().map(|s| s.as_u16()));
            }
        };

        // 4xx/5xx responses are reported like transport failures, keeping their status.
        let response = match response.error_for_status() {
            Ok(r) => r,
            Err(e) => {
                warn!("Fetch of {} returned an error status: {}", url, e);
                return FetchResult::failure(&e, e.status().map(|s| s.as_u16()));
            }
        };

        let status = response.status().as_u16();
        match response.text() {
            Ok(body) => {
                debug!("GET {} -> {} ({} bytes)", url, status, body.len());
                FetchResult::new(body, status)
            }
            Err(e) => {
                warn!("Reading body of {} failed: {}", url, e);
                FetchResult::failure(&e, Some(status))
            }
        }
    }
}
