//! Configuration loading utilities
//!
//! Provides helper functions for loading configuration from various sources
//! with proper error handling and validation.

use crate::{Result, config::Settings};
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// Configuration loader with multiple source support
#[derive(Debug)]
pub struct ConfigLoader {
    /// Default settings
    defaults: Settings,
}

impl ConfigLoader {
    /// Create new configuration loader
    pub fn new() -> Self {
        Self {
            defaults: Settings::default(),
        }
    }

    /// Load configuration with precedence order:
    /// 1. Command line arguments (highest priority, applied by the caller)
    /// 2. Environment variables
    /// 3. Configuration file (explicit path, else the user config directory)
    /// 4. Default values (lowest priority)
    pub fn load(&self, config_file: Option<&Path>) -> Result<Settings> {
        let mut settings = self.defaults.clone();

        match config_file {
            Some(path) if path.exists() => {
                info!("Loading configuration from file: {:?}", path);
                settings = Settings::from_file(path)?;
            }
            Some(path) => {
                warn!("Configuration file not found: {:?}, using defaults", path);
            }
            None => {
                if let Some(path) = default_config_path().filter(|p| p.exists()) {
                    info!("Loading configuration from file: {:?}", path);
                    settings = Settings::from_file(&path)?;
                }
            }
        }

        // Override with environment variables
        debug!("Applying environment variable overrides");
        settings = settings.merge_with_env()?;

        // Validate final configuration
        settings.validate()?;

        info!("Configuration loaded successfully");
        debug!(
            "Final configuration: {}://{}/{} (key set: {})",
            settings.api.protocol,
            settings.api.server,
            settings.api.version,
            settings.api.key.is_some()
        );

        Ok(settings)
    }

    /// Load configuration from environment only
    pub fn from_env_only(&self) -> Result<Settings> {
        let settings = self.defaults.clone().merge_with_env()?;
        settings.validate()?;
        Ok(settings)
    }

    /// Get default configuration
    pub fn defaults(&self) -> &Settings {
        &self.defaults
    }
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}

/// `<config dir>/botr/config.toml`, when the platform has a config directory
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("botr").join("config.toml"))
}
