//! Global configuration management
//!
//! Settings for talking to the hosting service.
//! Config is stored at `~/.config/issue-mafia/config.toml` (XDG standard).
//!
//! ```toml
//! [remote]
//! api_url = "https://api.github.com"
//! timeout_secs = 30
//! token = "ghp_..."
//! ```
//!
//! Environment variables take precedence over the file:
//! `ISSUE_MAFIA_API_URL`, `ISSUE_MAFIA_TOKEN`, then `GITHUB_TOKEN`.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::paths;

/// Overrides `remote.api_url`
pub const API_URL_ENV: &str = "ISSUE_MAFIA_API_URL";

/// Overrides `remote.token`
pub const TOKEN_ENV: &str = "ISSUE_MAFIA_TOKEN";

/// Token fallback shared with other GitHub tooling
pub const GITHUB_TOKEN_ENV: &str = "GITHUB_TOKEN";

/// Global issue-mafia configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GlobalConfig {
    /// Hosting service settings
    #[serde(default)]
    pub remote: RemoteConfig,
}

/// Hosting service settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RemoteConfig {
    /// Base URL of the GitHub REST API
    #[serde(default = "default_api_url")]
    pub api_url: String,
    /// Per-request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    /// Personal access token for private repositories
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
}

fn default_api_url() -> String {
    "https://api.github.com".to_string()
}

const fn default_timeout_secs() -> u64 {
    30
}

impl Default for RemoteConfig {
    fn default() -> Self {
        Self {
            api_url: default_api_url(),
            timeout_secs: default_timeout_secs(),
            token: None,
        }
    }
}

impl GlobalConfig {
    /// Get the config file path
    #[must_use]
    pub fn config_path() -> PathBuf {
        paths::global_config()
    }

    /// Load config from disk and apply environment overrides
    ///
    /// A missing or malformed file yields the defaults.
    #[must_use]
    pub fn load() -> Self {
        let mut config = Self::load_from(&Self::config_path());
        config.apply_overrides(|key| std::env::var(key).ok());
        config
    }

    /// Load config from a specific file, without environment overrides
    #[must_use]
    pub fn load_from(path: &Path) -> Self {
        if !path.exists() {
            return Self::default();
        }
        match fs::read_to_string(path).map(|content| toml::from_str::<Self>(&content)) {
            Ok(Ok(config)) => config,
            Ok(Err(e)) => {
                log::warn!("ignoring malformed config {}: {e}", path.display());
                Self::default()
            },
            Err(e) => {
                log::debug!("could not read config {}: {e}", path.display());
                Self::default()
            },
        }
    }

    /// Apply overrides looked up by environment variable name
    pub fn apply_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        if let Some(url) = non_empty(API_URL_ENV) {
            self.remote.api_url = url;
        }
        if let Some(token) = non_empty(TOKEN_ENV).or_else(|| non_empty(GITHUB_TOKEN_ENV)) {
            self.remote.token = Some(token);
        }
    }

    /// Save config to disk
    pub fn save(&self, path: &Path) -> anyhow::Result<()> {
        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir)?;
        }
        let content = toml::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }
}

impl RemoteConfig {
    /// API base URL without a trailing slash
    #[must_use]
    pub fn api_base(&self) -> &str {
        self.api_url.trim_end_matches('/')
    }
}
