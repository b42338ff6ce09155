//! Global configuration management
//!
//! Config is stored at `~/.config/sitecheck/config.toml` (XDG standard):
//!
//! ```toml
//! [fetch]
//! timeout_secs = 30
//! user_agent = "my-smoke-tests/1.0"
//! ```
//!
//! Every key is optional. Command line flags take precedence.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use log::warn;
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::paths;

/// Global sitecheck configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GlobalConfig {
    /// How targets are fetched
    #[serde(default)]
    pub fetch: FetchSettings,
}

/// Fetch settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FetchSettings {
    /// Per-target timeout in seconds; no timeout when unset
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timeout_secs: Option<u64>,

    /// User-Agent header for HTTP targets
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

fn default_user_agent() -> String {
    format!("sitecheck/{}", crate::VERSION)
}

impl Default for FetchSettings {
    fn default() -> Self {
        Self {
            timeout_secs: None,
            user_agent: default_user_agent(),
        }
    }
}

impl FetchSettings {
    /// The configured timeout, if any
    #[must_use]
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_secs.map(Duration::from_secs)
    }
}

impl GlobalConfig {
    /// Get the config file path
    #[must_use]
    pub fn config_path() -> Option<PathBuf> {
        paths::global_config()
    }

    /// Load config from disk, or use defaults if it is missing or unreadable
    #[must_use]
    pub fn load() -> Self {
        let Some(path) = Self::config_path() else {
            return Self::default();
        };
        if !path.exists() {
            return Self::default();
        }
        Self::load_from(&path).unwrap_or_else(|err| {
            warn!("{err}; using defaults");
            Self::default()
        })
    }

    /// Load config from a specific file
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|e| ConfigError::Config {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;
        toml::from_str(&content).map_err(|e| ConfigError::Config {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })
    }
}
