use std::path::{Path, PathBuf};

use srf_lib::{Config, Result, SrfError};

/// Environment variable that overrides the configured API base URL.
pub const API_URL_ENV: &str = "SRF_API_URL";

/// Tracks which CLI flags were explicitly provided vs. defaulted.
#[derive(Debug, Default)]
pub struct QueryFlagSources {
    pub dietary: bool,
    pub max_results: bool,
}

impl QueryFlagSources {
    pub fn from_args(args: &[String]) -> Self {
        Self {
            dietary: flag_present(args, "--dietary"),
            max_results: flag_present(args, "--max-results"),
        }
    }
}

/// Checks if a flag was present in the command-line arguments.
pub fn flag_present(args: &[String], flag: &str) -> bool {
    args.iter()
        .any(|arg| arg == flag || arg.starts_with(&format!("{flag}=")))
}

/// Effective settings after merging CLI args, environment, and config file.
#[derive(Debug, Clone)]
pub struct ResolvedSettings {
    pub base_url: String,
    pub timeout: std::time::Duration,
    pub dietary: String,
    pub max_results: u32,
    pub store_path: PathBuf,
}

/// Merge CLI arguments with the config file, preferring CLI values when the
/// flags are present and `SRF_API_URL` over the configured base URL.
pub fn resolve_settings(
    cli_dietary: Option<String>,
    cli_max_results: Option<u32>,
    config: &Config,
    flags: &QueryFlagSources,
) -> ResolvedSettings {
    let base_url = std::env::var(API_URL_ENV)
        .ok()
        .filter(|v| !v.trim().is_empty())
        .unwrap_or_else(|| config.api.base_url.clone());

    ResolvedSettings {
        base_url,
        timeout: config.api.timeout,
        dietary: if flags.dietary {
            cli_dietary.unwrap_or_else(|| config.defaults.dietary.clone())
        } else {
            config.defaults.dietary.clone()
        },
        max_results: if flags.max_results {
            cli_max_results.unwrap_or(config.defaults.max_results)
        } else {
            config.defaults.max_results
        },
        store_path: resolve_store_path(config),
    }
}

/// Store file location: config override, else `~/.local/share/srf/store.json`,
/// else a file in the working directory.
fn resolve_store_path(config: &Config) -> PathBuf {
    if let Some(path) = &config.store.path {
        return path.clone();
    }
    if let Some(home) = std::env::var_os("HOME") {
        return PathBuf::from(home)
            .join(".local")
            .join("share")
            .join("srf")
            .join("store.json");
    }
    PathBuf::from("srf-store.json")
}

/// Load config from a TOML file, central config, or return defaults.
pub fn load_config(path: Option<&Path>) -> Result<Config> {
    let cfg = Config::load(path).map_err(|e| {
        let loc = path
            .map(|p| p.display().to_string())
            .or_else(|| Config::central_config_path().map(|p| p.display().to_string()))
            .unwrap_or_else(|| "defaults".to_string());
        SrfError::Config(format!("Failed to read config {}: {}", loc, e))
    })?;

    cfg.validate().map_err(|e| {
        let prefix = path
            .map(|p| format!("Invalid config ({}): {}", p.display(), e))
            .unwrap_or_else(|| format!("Invalid config: {}", e));
        SrfError::Config(prefix)
    })?;
    Ok(cfg)
}

/// Log effective settings to stderr (verbose mode).
pub fn log_effective_settings(config_path: Option<&Path>, settings: &ResolvedSettings) {
    let config_source = config_path
        .map(|p| p.to_string_lossy().to_string())
        .unwrap_or_else(|| "defaults/built-in".to_string());
    eprintln!(
        "Effective settings (source: {}): api {}, timeout {:?}, dietary {}, max_results {}, store {}",
        config_source,
        settings.base_url,
        settings.timeout,
        settings.dietary,
        settings.max_results,
        settings.store_path.display()
    );
}
