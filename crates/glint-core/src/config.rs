//! Configuration types.
//!
//! Configuration lives in `{config_dir}/glint/config.toml`. Every field has
//! a default, and a missing or malformed file degrades to the defaults so
//! the palette always starts.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::ConfigError;

/// Runtime configuration loaded from config.toml.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Hotkey configuration
    #[serde(default)]
    pub hotkey: HotkeyConfig,

    /// Search behavior
    #[serde(default)]
    pub search: SearchConfig,

    /// GitHub star badge
    #[serde(default)]
    pub github: GithubConfig,
}

/// Hotkey configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HotkeyConfig {
    /// Toggle hotkey string, e.g. "mod+k" ("mod" matches Cmd or Ctrl).
    pub toggle: String,
}

impl Default for HotkeyConfig {
    fn default() -> Self {
        Self {
            toggle: "mod+k".to_string(),
        }
    }
}

/// Search behavior configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Maximum number of results shown in the palette.
    pub max_results: usize,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self { max_results: 5 }
    }
}

/// GitHub star badge configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GithubConfig {
    /// Repository to read the star count from, "owner/name".
    pub repo: String,

    /// Value displayed until the fetch succeeds (and after it fails).
    pub star_placeholder: String,
}

impl Default for GithubConfig {
    fn default() -> Self {
        Self {
            repo: "glint-ui/glint".to_string(),
            star_placeholder: "0".to_string(),
        }
    }
}

impl AppConfig {
    /// Load the config from the default location.
    ///
    /// A missing file yields defaults silently; a malformed file logs a
    /// warning and yields defaults.
    pub fn load() -> Self {
        let path = match config_path() {
            Some(p) => p,
            None => {
                tracing::warn!("No config directory - using default configuration");
                return Self::default();
            }
        };

        if !path.exists() {
            return Self::default();
        }

        match Self::load_from(&path) {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!("Failed to load {}: {} - using defaults", path.display(), e);
                Self::default()
            }
        }
    }

    /// Load the config from an explicit path.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let raw = std::fs::read_to_string(path).map_err(|e| ConfigError::Io(e.to_string()))?;
        toml::from_str(&raw).map_err(|e| ConfigError::Parse(e.to_string()))
    }
}

/// Get the path to config.toml.
pub fn config_path() -> Option<PathBuf> {
    config_dir().map(|p| p.join("config.toml"))
}

/// Get the config directory path.
pub fn config_dir() -> Option<PathBuf> {
    dirs::config_dir().map(|p| p.join("glint"))
}

/// Ensure the config directory exists.
pub fn ensure_config_dir() -> std::io::Result<()> {
    if let Some(dir) = config_dir() {
        std::fs::create_dir_all(dir)?;
    }
    Ok(())
}
