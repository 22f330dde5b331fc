//! Configuration management for the `roundtrip` application
//!
//! Handles loading configuration from files and environment variables,
//! and provides validation for all configuration settings.

use crate::RouteError;
use anyhow::{Context, Result};
use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Root configuration structure for the `roundtrip` application
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct RoundtripConfig {
    /// Location catalog settings
    #[serde(default)]
    pub catalog: CatalogConfig,
    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Location catalog settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogConfig {
    /// Path to a locations file; the built-in map is used when unset
    pub locations_file: Option<PathBuf>,
    /// Default start/end location used when the prompt is left blank
    #[serde(default = "default_start_name")]
    pub default_start: String,
}

/// Logging configuration settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level (error, warn, info, debug, trace)
    #[serde(default = "default_log_level")]
    pub level: String,
}

// Default value functions
fn default_start_name() -> String {
    "Root".to_string()
}

fn default_log_level() -> String {
    "warn".to_string()
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            locations_file: None,
            default_start: default_start_name(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

impl RoundtripConfig {
    /// Load configuration from file and environment variables
    pub fn load() -> Result<Self> {
        Self::load_from_path(None)
    }

    /// Load configuration from specified path
    pub fn load_from_path(config_path: Option<PathBuf>) -> Result<Self> {
        let mut builder = Config::builder();

        // Load from file if path is provided or use default location
        let config_file = config_path.unwrap_or_else(|| {
            Self::get_config_path().unwrap_or_else(|| PathBuf::from("config.toml"))
        });

        if config_file.exists() {
            builder = builder.add_source(
                File::from(config_file.clone())
                    .required(false)
                    .format(config::FileFormat::Toml),
            );
        }

        // Add environment variable overrides with ROUNDTRIP_ prefix
        builder = builder.add_source(
            Environment::with_prefix("ROUNDTRIP")
                .separator("__")
                .try_parsing(true),
        );

        let settings = builder
            .build()
            .with_context(|| "Failed to build configuration")?;

        let config: RoundtripConfig = settings
            .try_deserialize()
            .with_context(|| "Failed to deserialize configuration")?;

        config.validate()?;

        Ok(config)
    }

    /// Get the default configuration file path
    #[must_use]
    pub fn get_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("roundtrip").join("config.toml"))
    }

    /// Validate all configuration settings
    pub fn validate(&self) -> Result<()> {
        let valid_log_levels = ["error", "warn", "info", "debug", "trace"];
        if !valid_log_levels.contains(&self.logging.level.as_str()) {
            return Err(anyhow::anyhow!(
                "Invalid log level '{}'. Must be one of: {}",
                self.logging.level,
                valid_log_levels.join(", ")
            ));
        }

        if self.catalog.default_start.trim().is_empty() {
            return Err(anyhow::anyhow!("Default start location cannot be empty"));
        }

        if let Some(path) = &self.catalog.locations_file {
            if !path.exists() {
                return Err(RouteError::Io {
                    source: std::io::Error::new(
                        std::io::ErrorKind::NotFound,
                        format!("Locations file not found: {}", path.display()),
                    ),
                }
                .into());
            }
        }

        Ok(())
    }
}
