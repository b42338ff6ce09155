//! Centralized path definitions for sitecheck
//!
//! ### Global (User-Level)
//!
//! ```text
//! ~/.config/sitecheck/
//! └── config.toml               # Fetch settings
//! ```
//!
//! `SITECHECK_CONFIG` points at a different config file when set.

use std::env;
use std::path::PathBuf;

/// Environment variable overriding the config file location
pub const CONFIG_ENV: &str = "SITECHECK_CONFIG";

/// Config filename inside the config directory
const CONFIG_FILE: &str = "config.toml";

/// Get the global config directory (`~/.config/sitecheck/` on Linux)
#[must_use]
pub fn global_config_dir() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("sitecheck"))
}

/// Get the config file path, honouring [`CONFIG_ENV`]
#[must_use]
pub fn global_config() -> Option<PathBuf> {
    env::var_os(CONFIG_ENV)
        .filter(|v| !v.is_empty())
        .map(PathBuf::from)
        .or_else(|| global_config_dir().map(|dir| dir.join(CONFIG_FILE)))
}
