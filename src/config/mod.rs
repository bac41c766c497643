//! Application configuration
//!
//! TOML file in the platform config directory, with environment variable
//! overrides. Holds only ambient settings (feed domain, log location,
//! HTTP timeout); contest state lives in the snapshot file.

use serde::{Deserialize, Serialize};
use std::path::Path;
use tokio::fs;

pub mod paths;
pub mod validation;

use crate::constants::{DEFAULT_HTTP_TIMEOUT_SECONDS, env_vars};
use crate::error::AppError;
use paths::{get_config_path, get_log_dir_path};
use validation::validate_config;

/// Configuration structure for the application.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Config {
    /// Scoreboard feed domain, including the https:// prefix. Empty until
    /// configured; fetch commands refuse to run without it.
    #[serde(default)]
    pub api_domain: String,
    /// Path to the log file. If not specified, logs go to the default
    /// location under the platform config directory.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub log_file_path: Option<String>,
    /// HTTP timeout in seconds for feed requests.
    #[serde(default = "default_http_timeout")]
    pub http_timeout_seconds: u64,
}

fn default_http_timeout() -> u64 {
    DEFAULT_HTTP_TIMEOUT_SECONDS
}

impl Default for Config {
    fn default() -> Self {
        Config {
            api_domain: String::new(),
            log_file_path: None,
            http_timeout_seconds: default_http_timeout(),
        }
    }
}

impl Config {
    /// Loads configuration from the default location, falling back to
    /// defaults when no file exists yet. Environment variables
    /// (`SURVIVOR_API_DOMAIN`, `SURVIVOR_LOG_FILE`, `SURVIVOR_HTTP_TIMEOUT`)
    /// override file values.
    pub async fn load() -> Result<Self, AppError> {
        Self::load_from_path(&get_config_path()).await
    }

    /// Same as [`Config::load`] but from an explicit path (tests).
    pub async fn load_from_path(config_path: &str) -> Result<Self, AppError> {
        let mut config = if Path::new(config_path).exists() {
            let content = fs::read_to_string(config_path).await?;
            toml::from_str(&content)?
        } else {
            Config::default()
        };

        if let Ok(api_domain) = std::env::var(env_vars::API_DOMAIN) {
            config.api_domain = api_domain;
        }
        if let Ok(log_file_path) = std::env::var(env_vars::LOG_FILE) {
            config.log_file_path = Some(log_file_path);
        }
        if let Some(timeout) = std::env::var(env_vars::HTTP_TIMEOUT)
            .ok()
            .and_then(|s| s.parse::<u64>().ok())
        {
            config.http_timeout_seconds = timeout;
        }

        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), AppError> {
        validate_config(&self.api_domain, &self.log_file_path)
    }

    /// Saves to the default config file location, creating the directory
    /// if needed.
    pub async fn save(&self) -> Result<(), AppError> {
        self.save_to_path(&get_config_path()).await
    }

    pub async fn save_to_path(&self, config_path: &str) -> Result<(), AppError> {
        if let Some(parent) = Path::new(config_path).parent() {
            if !parent.exists() {
                fs::create_dir_all(parent).await?;
            }
        }
        let content = toml::to_string_pretty(self)?;
        fs::write(config_path, content).await?;
        Ok(())
    }

    pub fn get_config_path() -> String {
        get_config_path()
    }

    pub fn get_log_dir_path() -> String {
        get_log_dir_path()
    }

    /// Prints the current configuration to stdout.
    pub async fn display() -> Result<(), AppError> {
        let config_path = get_config_path();
        let log_dir = get_log_dir_path();

        if Path::new(&config_path).exists() {
            let config = Config::load().await?;
            println!("\nCurrent Configuration");
            println!("────────────────────────────────────");
            println!("Config Location:");
            println!("{config_path}");
            println!("────────────────────────────────────");
            println!("Scoreboard API Domain:");
            if config.api_domain.is_empty() {
                println!("(not configured)");
            } else {
                println!("{}", config.api_domain);
            }
            println!("────────────────────────────────────");
            println!("HTTP Timeout:");
            println!("{} seconds", config.http_timeout_seconds);
            println!("────────────────────────────────────");
            println!("Log File Location:");
            if let Some(custom_path) = &config.log_file_path {
                println!("{custom_path}");
            } else {
                println!("{log_dir}/survivor_pool.log");
                println!("(Default location)");
            }
        } else {
            println!("\nNo configuration file found at:");
            println!("{config_path}");
        }

        Ok(())
    }
}
