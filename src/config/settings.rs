// src/config/settings.rs
//
// Client configuration
//
// PRINCIPLES:
// - Explicit layering: defaults, then the JSON file, then environment
// - No hidden network activity while loading
// - Clear error propagation

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::error::{AppResult, CatalogError};

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8000";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Environment variable overriding the backend base URL
pub const ENV_API_URL: &str = "CINEDEX_API_URL";

/// Environment variable overriding the request timeout (seconds)
pub const ENV_TIMEOUT_SECS: &str = "CINEDEX_TIMEOUT_SECS";

/// Settings for talking to the catalog backend
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogConfig {
    /// Backend root, e.g. `http://localhost:8000`
    pub api_base_url: String,

    pub request_timeout_secs: u64,

    pub user_agent: String,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            request_timeout_secs: DEFAULT_TIMEOUT_SECS,
            user_agent: format!("cinedex/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

impl CatalogConfig {
    /// Load configuration from the default location plus environment.
    ///
    /// A missing config file is not an error; defaults apply.
    pub fn load() -> AppResult<Self> {
        let path = default_config_path()?;
        Self::load_layered(Some(&path), |key| std::env::var(key).ok())
    }

    /// Load configuration from an explicit file plus environment
    pub fn load_from(path: &Path) -> AppResult<Self> {
        if !path.exists() {
            return Err(CatalogError::Config(format!(
                "Config file {} does not exist",
                path.display()
            )));
        }
        Self::load_layered(Some(path), |key| std::env::var(key).ok())
    }

    /// Apply the layers in order: defaults, file (if present), env lookup
    pub fn load_layered<F>(path: Option<&Path>, env: F) -> AppResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = match path {
            Some(p) if p.exists() => {
                log::debug!("Reading catalog config from {}", p.display());
                let raw = std::fs::read_to_string(p)?;
                serde_json::from_str(&raw).map_err(|e| {
                    CatalogError::Config(format!("Invalid config file {}: {}", p.display(), e))
                })?
            }
            _ => Self::default(),
        };

        config.apply_env(env)?;
        config.validate()?;
        Ok(config)
    }

    fn apply_env<F>(&mut self, env: F) -> AppResult<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(url) = env(ENV_API_URL).filter(|v| !v.trim().is_empty()) {
            self.api_base_url = url;
        }

        if let Some(raw) = env(ENV_TIMEOUT_SECS).filter(|v| !v.trim().is_empty()) {
            self.request_timeout_secs = raw.trim().parse().map_err(|_| {
                CatalogError::Config(format!("{} must be a whole number, got '{}'", ENV_TIMEOUT_SECS, raw))
            })?;
        }

        Ok(())
    }

    pub fn validate(&self) -> AppResult<()> {
        let url = self.api_base_url.trim();
        if !(url.starts_with("http://") || url.starts_with("https://")) {
            return Err(CatalogError::Config(format!(
                "API base URL must start with http:// or https://, got '{}'",
                self.api_base_url
            )));
        }

        if self.request_timeout_secs == 0 {
            return Err(CatalogError::Config(
                "Request timeout must be greater than zero".to_string(),
            ));
        }

        Ok(())
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    /// Base URL without a trailing slash
    pub fn base_url(&self) -> &str {
        self.api_base_url.trim().trim_end_matches('/')
    }
}

/// Get the config file path
///
/// Path structure: {CONFIG_DIR}/cinedex/config.json
pub fn default_config_path() -> AppResult<PathBuf> {
    let config_dir = dirs::config_dir()
        .ok_or_else(|| CatalogError::Config("Could not determine config directory".to_string()))?;

    Ok(config_dir.join("cinedex").join("config.json"))
}
