// SimpleBrowser platform paths
// Resolves per-user config and data directories through `dirs`, falling back
// to the working directory where the platform reports none.

use std::path::PathBuf;

const APP_DIR: &str = "simplebrowser";

/// Returns the configuration directory, e.g. `~/.config/simplebrowser` on Linux.
pub fn get_config_dir() -> PathBuf {
    dirs::config_dir()
        .map(|d| d.join(APP_DIR))
        .unwrap_or_else(|| PathBuf::from("."))
}

/// Returns the data directory, e.g. `~/.local/share/simplebrowser` on Linux.
pub fn get_data_dir() -> PathBuf {
    dirs::data_dir()
        .map(|d| d.join(APP_DIR))
        .unwrap_or_else(|| PathBuf::from("."))
}
