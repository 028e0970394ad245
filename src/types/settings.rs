use serde::{Deserialize, Serialize};

/// Top-level browser settings container.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct BrowserSettings {
    pub general: GeneralSettings,
    pub storage: StorageSettings,
    pub network: NetworkSettings,
}

/// General browser settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct GeneralSettings {
    pub homepage: String,
}

impl Default for GeneralSettings {
    fn default() -> Self {
        Self {
            homepage: "https://www.hw.ac.uk/dubai/".to_string(),
        }
    }
}

/// Where history and favorites are kept.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct StorageSettings {
    /// Directory for the history and favorites files. `None` uses the platform data dir.
    pub data_dir: Option<String>,
    pub history_file: String,
    pub favorites_file: String,
}

impl Default for StorageSettings {
    fn default() -> Self {
        Self {
            data_dir: None,
            history_file: "history.txt".to_string(),
            favorites_file: "favorites.txt".to_string(),
        }
    }
}

/// HTTP client settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct NetworkSettings {
    pub user_agent: Option<String>,
    /// Per-request timeout. `None` keeps the HTTP client's own default.
    pub request_timeout_secs: Option<u64>,
    /// Honour `HTTP_PROXY`/`HTTPS_PROXY` style environment settings.
    pub use_system_proxy: bool,
}

impl Default for NetworkSettings {
    fn default() -> Self {
        Self {
            user_agent: None,
            request_timeout_secs: None,
            use_system_proxy: true,
        }
    }
}
