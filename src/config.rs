//! TOML configuration for the CLI.

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::Deserialize;
use url::Url;

use crate::api::{DEFAULT_API_URL, DEFAULT_REQUEST_TIMEOUT};
use crate::error::{Result, SrfError};

#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub api: ApiConfig,
    pub defaults: Defaults,
    pub store: StoreConfig,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ApiConfig {
    pub base_url: String,
    #[serde(with = "humantime_serde")]
    pub timeout: Duration,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Defaults {
    pub dietary: String,
    pub max_results: u32,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct StoreConfig {
    pub path: Option<PathBuf>,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_URL.to_string(),
            timeout: DEFAULT_REQUEST_TIMEOUT,
        }
    }
}

impl Default for Defaults {
    fn default() -> Self {
        Self {
            dietary: "any".to_string(),
            max_results: 5,
        }
    }
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self { path: None }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api: ApiConfig::default(),
            defaults: Defaults::default(),
            store: StoreConfig::default(),
        }
    }
}

impl Config {
    /// Load configuration.
    ///
    /// Priority: explicit path > `~/.config/srf/config.toml` > defaults.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let candidate = match path {
            Some(p) => Some(p.to_path_buf()),
            None => Self::central_config_path().filter(|p| p.exists()),
        };

        let Some(file) = candidate else {
            return Ok(Self::default());
        };

        let raw = std::fs::read_to_string(&file)?;
        toml::from_str(&raw)
            .map_err(|e| SrfError::Config(format!("Failed to parse {}: {}", file.display(), e)))
    }

    pub fn central_config_path() -> Option<PathBuf> {
        std::env::var_os("HOME")
            .map(|home| PathBuf::from(home).join(".config").join("srf").join("config.toml"))
    }

    pub fn validate(&self) -> Result<()> {
        Url::parse(&self.api.base_url)
            .map_err(|e| SrfError::Config(format!("Invalid api.base_url: {}", e)))?;
        if self.defaults.max_results == 0 {
            return Err(SrfError::Config(
                "defaults.max_results must be at least 1".to_string(),
            ));
        }
        if self.api.timeout.is_zero() {
            return Err(SrfError::Config(
                "api.timeout must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }
}
