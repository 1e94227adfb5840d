//! Configuration types.
//!
//! Configuration lives in `config.toml` under the platform config directory.
//! Every section is optional; a missing file means defaults.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::ConfigError;
use crate::sort::{SortDirection, SortKey, SortSpec};

/// Default catalog location, relative to the working directory.
pub const DEFAULT_CATALOG_LOCATION: &str = "cards.json";

/// Runtime configuration read from config.toml.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct AppConfig {
    /// Where the catalog is loaded from
    #[serde(default)]
    pub catalog: CatalogConfig,

    /// Initial table state
    #[serde(default)]
    pub display: DisplayConfig,

    /// Appearance settings
    #[serde(default)]
    pub appearance: AppearanceConfig,
}

impl AppConfig {
    /// Parse configuration from TOML text.
    pub fn from_toml(text: &str, path: &Path) -> Result<Self, ConfigError> {
        toml::from_str(text).map_err(|e| ConfigError::Parse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
    }

    /// Load configuration from a file. A missing file yields defaults.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let text = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        Self::from_toml(&text, path)
    }

    /// Load configuration from the default location.
    pub fn load() -> Result<Self, ConfigError> {
        let path = config_path().ok_or(ConfigError::NoConfigDir)?;
        Self::load_from(&path)
    }
}

/// Catalog source configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct CatalogConfig {
    /// File path or http(s) URL of the catalog JSON.
    pub location: String,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            location: DEFAULT_CATALOG_LOCATION.to_string(),
        }
    }
}

/// Table configuration.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct DisplayConfig {
    #[serde(default)]
    pub default_sort: SortKey,

    #[serde(default)]
    pub default_direction: SortDirection,
}

impl DisplayConfig {
    pub fn sort_spec(&self) -> SortSpec {
        SortSpec::new(self.default_sort, self.default_direction)
    }
}

/// Appearance configuration.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct AppearanceConfig {
    /// Theme mode: "light", "dark", or "system"
    #[serde(default)]
    pub theme: ThemeMode,
}

/// Theme mode selection.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    Light,
    Dark,
    #[default]
    System,
}

/// Get the path to config.toml.
pub fn config_path() -> Option<PathBuf> {
    config_dir().map(|p| p.join("config.toml"))
}

/// Get the config directory path.
pub fn config_dir() -> Option<PathBuf> {
    dirs::config_dir().map(|p| p.join("folio"))
}
