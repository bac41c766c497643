//! Platform-specific config and log locations.

use std::path::PathBuf;

const APP_DIR: &str = "survivor_pool";

/// Absolute path of the TOML config file. Falls back to the current
/// directory when no platform config directory is available.
pub fn get_config_path() -> String {
    let base = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
    base.join(APP_DIR)
        .join("config.toml")
        .to_string_lossy()
        .to_string()
}

/// Absolute path of the default log directory.
pub fn get_log_dir_path() -> String {
    let base = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
    base.join(APP_DIR).join("logs").to_string_lossy().to_string()
}
