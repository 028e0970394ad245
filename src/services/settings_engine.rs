// SimpleBrowser Settings Engine
// Loads and saves user settings as a JSON file and resolves the storage paths they describe.

use std::fs;
use std::path::{Path, PathBuf};

use log::info;

use crate::platform;
use crate::types::errors::SettingsError;
use crate::types::settings::BrowserSettings;

/// Trait defining the settings engine interface.
pub trait SettingsEngineTrait {
    fn load(&mut self) -> Result<BrowserSettings, SettingsError>;
    fn save(&self) -> Result<(), SettingsError>;
    fn get_settings(&self) -> &BrowserSettings;
    fn set_homepage(&mut self, url: &str) -> Result<(), SettingsError>;
    fn get_config_path(&self) -> &Path;
}

/// Settings engine implementation that persists settings as JSON on disk.
pub struct SettingsEngine {
    config_path: PathBuf,
    settings: BrowserSettings,
}

impl SettingsEngine {
    /// Creates a new SettingsEngine.
    ///
    /// If `path_override` is `Some`, uses that path for the config file.
    /// Otherwise, uses `settings.json` in the platform config directory.
    pub fn new(path_override: Option<PathBuf>) -> Self {
        let config_path =
            path_override.unwrap_or_else(|| platform::get_config_dir().join("settings.json"));

        Self {
            config_path,
            settings: BrowserSettings::default(),
        }
    }

    /// Directory holding the history and favorites files.
    pub fn data_dir(&self) -> PathBuf {
        self.settings
            .storage
            .data_dir
            .as_ref()
            .map(PathBuf::from)
            .unwrap_or_else(platform::get_data_dir)
    }

    pub fn history_path(&self) -> PathBuf {
        self.data_dir().join(&self.settings.storage.history_file)
    }

    pub fn favorites_path(&self) -> PathBuf {
        self.data_dir().join(&self.settings.storage.favorites_file)
    }
}

impl SettingsEngineTrait for SettingsEngine {
    /// Loads settings from the JSON config file.
    ///
    /// A missing file yields defaults; a malformed one is a serialization error.
    fn load(&mut self) -> Result<BrowserSettings, SettingsError> {
        if !self.config_path.exists() {
            self.settings = BrowserSettings::default();
            return Ok(self.settings.clone());
        }

        let content = fs::read_to_string(&self.config_path)
            .map_err(|e| SettingsError::IoError(format!("Failed to read config file: {}", e)))?;

        self.settings = serde_json::from_str(&content).map_err(|e| {
            SettingsError::SerializationError(format!("Failed to parse config file: {}", e))
        })?;

        info!("Loaded settings from {}", self.config_path.display());
        Ok(self.settings.clone())
    }

    /// Saves the current settings, creating the parent directory if needed.
    fn save(&self) -> Result<(), SettingsError> {
        if let Some(parent) = self.config_path.parent() {
            fs::create_dir_all(parent).map_err(|e| {
                SettingsError::IoError(format!("Failed to create config directory: {}", e))
            })?;
        }

        let json = serde_json::to_string_pretty(&self.settings).map_err(|e| {
            SettingsError::SerializationError(format!("Failed to serialize settings: {}", e))
        })?;

        fs::write(&self.config_path, json)
            .map_err(|e| SettingsError::IoError(format!("Failed to write config file: {}", e)))
    }

    fn get_settings(&self) -> &BrowserSettings {
        &self.settings
    }

    /// Updates the home page and saves to disk.
    fn set_homepage(&mut self, url: &str) -> Result<(), SettingsError> {
        self.settings.general.homepage = url.to_string();
        self.save()
    }

    fn get_config_path(&self) -> &Path {
        &self.config_path
    }
}
