//! # Config Module
//!
//! Runtime settings for the dashboard, read from an optional YAML file.
//!
//! ## Location:
//! `<platform config dir>/dashboard.yaml`, e.g.
//! `~/.config/wallet-dashboard/dashboard.yaml` on Linux. A missing file means
//! defaults; a file that exists but does not parse is an error.
//!
//! ## Example:
//! ```yaml
//! api_base_url: https://fe-task-api.mainstack.io
//! request_timeout_secs: 15
//! ```

use std::path::{Path, PathBuf};
use std::time::Duration;

use directories::ProjectDirs;
use log::info;
use serde::{Deserialize, Serialize};

pub const DEFAULT_API_BASE_URL: &str = "https://fe-task-api.mainstack.io";
pub const CONFIG_FILE_NAME: &str = "dashboard.yaml";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Invalid config file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },
}

/// Dashboard settings; every field has a default
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    /// Base URL of the REST API, without a trailing slash
    pub api_base_url: String,
    pub request_timeout_secs: u64,
    pub window_width: f32,
    pub window_height: f32,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            request_timeout_secs: 30,
            window_width: 1280.0,
            window_height: 860.0,
        }
    }
}

impl DashboardConfig {
    /// Load from the platform config directory, falling back to defaults
    pub fn load() -> Result<Self, ConfigError> {
        match Self::default_path() {
            Some(path) => Self::load_from(&path),
            None => {
                info!("No config directory available, using default settings");
                Ok(Self::default())
            }
        }
    }

    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            info!("No config file at {}, using default settings", path.display());
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        // An empty file deserializes to `null`, which should mean "all defaults"
        if contents.trim().is_empty() {
            return Ok(Self::default());
        }

        let config: Self = serde_yaml::from_str(&contents).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;

        info!("Loaded dashboard config from {}", path.display());
        Ok(config.normalized())
    }

    pub fn default_path() -> Option<PathBuf> {
        ProjectDirs::from("io", "mainstack", "wallet-dashboard")
            .map(|dirs| dirs.config_dir().join(CONFIG_FILE_NAME))
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    fn normalized(mut self) -> Self {
        let trimmed = self.api_base_url.trim().trim_end_matches('/');
        self.api_base_url = if trimmed.is_empty() {
            DEFAULT_API_BASE_URL.to_string()
        } else {
            trimmed.to_string()
        };
        if self.request_timeout_secs == 0 {
            self.request_timeout_secs = Self::default().request_timeout_secs;
        }
        self
    }
}
