pub mod types;

pub use types::*;

use crate::error::AppError;
use crate::probe::DiskSpaceProbe;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// Main application configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Probe settings
    pub probe: ProbeConfig,
}

impl AppConfig {
    /// Load configuration from the default TOML file, or defaults if not found
    pub fn load() -> Self {
        Self::load_or_default(&Self::config_path())
    }

    /// Load configuration from `path`, falling back to defaults
    pub fn load_or_default(path: &Path) -> Self {
        if path.exists() {
            match Self::load_from_file(path).and_then(|config| {
                config.validate()?;
                Ok(config)
            }) {
                Ok(config) => {
                    info!("Loaded config from {}", path.display());
                    return config;
                }
                Err(e) => {
                    warn!("Failed to load config: {}. Using defaults.", e);
                }
            }
        }
        Self::default()
    }

    /// Save configuration to the default TOML file
    pub fn save(&self) -> Result<PathBuf, AppError> {
        let config_path = Self::config_path();
        self.save_to(&config_path)?;
        Ok(config_path)
    }

    /// Save configuration to a specific TOML file
    pub fn save_to(&self, path: &Path) -> Result<(), AppError> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| {
                AppError::Config(format!("Failed to create config directory: {}", e))
            })?;
        }

        let toml_string = toml::to_string_pretty(self)?;
        std::fs::write(path, toml_string)
            .map_err(|e| AppError::Config(format!("Failed to write config file: {}", e)))?;

        info!("Saved config to {}", path.display());
        Ok(())
    }

    /// Load configuration from a specific file
    pub fn load_from_file(path: &Path) -> Result<Self, AppError> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| AppError::Config(format!("Failed to read config file: {}", e)))?;
        let config: AppConfig = toml::from_str(&content)?;
        Ok(config)
    }

    /// Get the default configuration file path
    pub fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("diskprobe")
            .join("config.toml")
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<(), AppError> {
        if self.probe.default_path.as_os_str().is_empty() {
            return Err(AppError::Config(
                "probe.default_path must not be empty".to_string(),
            ));
        }
        Ok(())
    }

    /// Native probe configured from these settings
    pub fn probe(&self) -> DiskSpaceProbe {
        DiskSpaceProbe::new().used_basis(self.probe.used_basis)
    }
}
