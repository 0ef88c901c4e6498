//! Configuration management for Slidecast

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::error::{ConfigError, Result};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub ui: UiSettings,
    pub deck: DeckSettings,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UiSettings {
    /// Use colors?
    pub colors: bool,

    /// Use unicode symbols (false = ASCII fallback)
    pub unicode: bool,

    /// Event poll interval in milliseconds
    pub tick_rate_ms: u64,

    /// Capture mouse clicks for the navigation buttons
    pub mouse: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DeckSettings {
    /// Deck file to show instead of the built-in deck
    pub path: Option<String>,
}

impl Default for UiSettings {
    fn default() -> Self {
        Self {
            colors: true,
            unicode: true,
            tick_rate_ms: 250,
            mouse: true,
        }
    }
}

impl Config {
    /// Load configuration from the default location.
    ///
    /// A missing file is not an error; defaults are used instead.
    /// Environment overrides are applied on top.
    pub fn load() -> Result<Self> {
        let config_path = resolve_config_path()?;
        let config = if config_path.exists() {
            Self::load_from_path(&config_path)?
        } else {
            debug!(path = %config_path.display(), "no config file, using defaults");
            Self::default_config()
        };
        Ok(config.with_env_overrides())
    }

    /// Load configuration from a specific path
    pub fn load_from_path(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(ConfigError::ReadError)?;
        let config: Config = toml::from_str(&content)
            .map_err(ConfigError::ParseError)?;
        debug!(path = %path.display(), "loaded config");
        Ok(config)
    }

    /// Create a default configuration
    pub fn default_config() -> Self {
        Self::default()
    }

    /// Apply `NO_COLOR`, `SLIDECAST_NO_COLOR` and `SLIDECAST_TICK_MS`
    pub fn with_env_overrides(mut self) -> Self {
        if std::env::var_os("NO_COLOR").is_some() || std::env::var_os("SLIDECAST_NO_COLOR").is_some() {
            self.ui.colors = false;
        }

        if let Some(tick_rate_ms) = std::env::var("SLIDECAST_TICK_MS")
            .ok()
            .and_then(|s| s.parse().ok())
        {
            self.ui.tick_rate_ms = tick_rate_ms;
        }

        self
    }

    /// Deck path from the config file, with `~` expanded
    pub fn deck_path(&self) -> Option<PathBuf> {
        self.deck
            .path
            .as_deref()
            .map(|path| PathBuf::from(shellexpand::tilde(path).to_string()))
    }
}

/// Resolve the configuration file path under the XDG config directory
pub fn resolve_config_path() -> Result<PathBuf> {
    if let Ok(path) = std::env::var("SLIDECAST_CONFIG") {
        return Ok(PathBuf::from(shellexpand::tilde(&path).to_string()));
    }

    let config_dir = dirs::config_dir().ok_or(ConfigError::NoConfigDir)?;

    Ok(config_dir.join("slidecast").join("config.toml"))
}
