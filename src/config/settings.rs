//! Application settings management
//!
//! This module defines the configuration structure and provides methods
//! for loading settings from TOML files and environment variables.

use serde::{Deserialize, Serialize};

/// Main application configuration structure
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Settings {
    pub storage: StorageConfig,
    pub logging: LoggingConfig,
}

/// Snapshot storage configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct StorageConfig {
    /// Directory the snapshot file lives in
    pub path: String,
    /// Fixed storage key; the snapshot file is `<key>.json`
    pub key: String,
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LoggingConfig {
    pub level: String,
    pub file_path: String,
}

impl Settings {
    /// Load settings from configuration file and environment variables
    pub fn new() -> Result<Self, config::ConfigError> {
        let settings = config::Config::builder()
            .add_source(config::File::with_name("config").required(false))
            .add_source(config::Environment::with_prefix("SPORTSDESK"))
            .build()?;

        settings.try_deserialize()
    }

    /// Validate configuration settings
    pub fn validate(&self) -> Result<(), crate::utils::errors::SportsDeskError> {
        super::validation::validate_settings(self)
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            storage: StorageConfig {
                path: "./data".to_string(),
                key: "sportsRegistrations".to_string(),
            },
            logging: LoggingConfig {
                level: "info".to_string(),
                file_path: "/var/log/sportsdesk".to_string(),
            },
        }
    }
}
