//! Configuration validation module
//!
//! This module provides validation functions for application configuration
//! to ensure all required settings are properly configured.

use super::Settings;
use crate::utils::errors::{Result, SportsDeskError};

/// Validate all configuration settings
pub fn validate_settings(settings: &Settings) -> Result<()> {
    validate_storage_config(&settings.storage)?;
    validate_logging_config(&settings.logging)?;

    Ok(())
}

/// Validate snapshot storage configuration
fn validate_storage_config(config: &super::StorageConfig) -> Result<()> {
    if config.path.is_empty() {
        return Err(SportsDeskError::Config(
            "Storage path is required".to_string(),
        ));
    }

    if config.key.is_empty() {
        return Err(SportsDeskError::Config(
            "Storage key is required".to_string(),
        ));
    }

    if config.key.contains(std::path::MAIN_SEPARATOR) {
        return Err(SportsDeskError::Config(
            "Storage key must not contain path separators".to_string(),
        ));
    }

    Ok(())
}

/// Validate logging configuration
fn validate_logging_config(config: &super::LoggingConfig) -> Result<()> {
    if config.level.is_empty() {
        return Err(SportsDeskError::Config("Log level is required".to_string()));
    }

    let valid_levels = ["trace", "debug", "info", "warn", "error"];
    if !valid_levels.contains(&config.level.as_str()) {
        return Err(SportsDeskError::Config(format!(
            "Invalid log level: {}. Valid levels: {:?}",
            config.level, valid_levels
        )));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{LoggingConfig, StorageConfig};

    #[test]
    fn default_settings_are_valid() {
        let settings = Settings::default();
        assert!(validate_settings(&settings).is_ok());
    }

    #[test]
    fn empty_storage_key_is_rejected() {
        let settings = Settings {
            storage: StorageConfig {
                path: "./data".to_string(),
                key: String::new(),
            },
            ..Settings::default()
        };
        assert!(validate_settings(&settings).is_err());
    }

    #[test]
    fn unknown_log_level_is_rejected() {
        let settings = Settings {
            logging: LoggingConfig {
                level: "verbose".to_string(),
                file_path: "/tmp".to_string(),
            },
            ..Settings::default()
        };
        assert!(validate_settings(&settings).is_err());
    }
}
