//! Configuration management for vocabtape

mod keys;

pub use keys::{Action, ActionGroup, KeyBindings, key_to_string};

use crate::paths;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Environment variable overriding the storage directory.
pub const STATE_DIR_ENV: &str = "VOCABTAPE_STATE_DIR";

/// Application configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Config {
    /// Event poll interval in milliseconds
    #[serde(default = "default_tick_rate")]
    pub tick_rate_ms: u64,

    /// Command used to open secret browser links (the URL is appended)
    #[serde(default = "default_browser_command")]
    pub browser_command: String,

    /// Keybindings configuration
    #[serde(default)]
    pub keys: KeyBindings,
}

const fn default_tick_rate() -> u64 {
    100
}

fn default_browser_command() -> String {
    if cfg!(target_os = "macos") {
        "open".to_string()
    } else {
        "xdg-open".to_string()
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            tick_rate_ms: default_tick_rate(),
            browser_command: default_browser_command(),
            keys: KeyBindings::default(),
        }
    }
}

impl Config {
    /// Load configuration from the default location
    ///
    /// A missing file yields the defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if reading or parsing the config file fails
    pub fn load() -> Result<Self> {
        let path = Self::default_path();
        if path.exists() {
            Self::load_from(&path)
        } else {
            debug!(path = %path.display(), "No config file, using defaults");
            Ok(Self::default())
        }
    }

    /// Load configuration from a specific path
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed
    pub fn load_from(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config from {}", path.display()))?;
        let mut config: Self = serde_json::from_str(&contents)
            .with_context(|| format!("Failed to parse config from {}", path.display()))?;
        config.keys.merge_defaults();
        debug!(path = %path.display(), "Loaded config");
        Ok(config)
    }

    /// Save configuration to a specific path
    ///
    /// # Errors
    ///
    /// Returns an error if the config directory cannot be created or the file cannot be written
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory {}", parent.display())
            })?;
        }
        let contents = serde_json::to_string_pretty(self).context("Failed to serialize config")?;
        fs::write(path, contents)
            .with_context(|| format!("Failed to write config to {}", path.display()))?;
        Ok(())
    }

    /// Pretty JSON rendering of the effective configuration
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails
    pub fn to_pretty_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).context("Failed to serialize config")
    }

    /// Get the default configuration file path
    #[must_use]
    pub fn default_path() -> PathBuf {
        paths::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(paths::APP_DIR)
            .join("config.json")
    }

    /// Directory holding the stored session keys
    ///
    /// `VOCABTAPE_STATE_DIR` wins when set and non-empty.
    #[must_use]
    pub fn state_dir() -> PathBuf {
        Self::state_dir_from(std::env::var_os(STATE_DIR_ENV).map(PathBuf::from))
    }

    fn state_dir_from(override_dir: Option<PathBuf>) -> PathBuf {
        override_dir
            .filter(|dir| !dir.as_os_str().is_empty())
            .unwrap_or_else(|| {
                paths::data_local_dir()
                    .unwrap_or_else(|| PathBuf::from("."))
                    .join(paths::APP_DIR)
                    .join("storage")
            })
    }
}
