//! Sheet configuration persistence
//!
//! Stores user preferences in `~/.config/gridsheet/config.yaml`

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::GridError;
use crate::keyboard::KeyClassTable;

const APP_DIR: &str = "gridsheet";

/// Directory holding `config.yaml` and `logs/`
///
/// `$XDG_CONFIG_HOME/gridsheet` when set, `%APPDATA%\gridsheet` on Windows,
/// `~/.config/gridsheet` elsewhere.
pub fn config_dir() -> Option<PathBuf> {
    std::env::var_os("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .or_else(platform_config_base)
        .map(|base| base.join(APP_DIR))
}

#[cfg(target_os = "windows")]
fn platform_config_base() -> Option<PathBuf> {
    dirs::config_dir()
}

#[cfg(not(target_os = "windows"))]
fn platform_config_base() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(".config"))
}

pub fn config_file() -> Option<PathBuf> {
    config_dir().map(|dir| dir.join("config.yaml"))
}

/// Sheet configuration that persists across sessions
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SheetConfig {
    /// Key codes that start an edit when typed on a selected cell
    pub key_classes: KeyClassTable,
    /// Treat the first row of a loaded file as a read-only header
    pub read_only_header: bool,
    /// Route copy/paste through the OS clipboard
    pub system_clipboard: bool,
}

impl SheetConfig {
    /// Load config from disk, or return defaults if not found
    pub fn load() -> Self {
        let Some(path) = config_file() else {
            tracing::debug!("No config directory available, using defaults");
            return Self::default();
        };

        if !path.exists() {
            tracing::debug!(
                "Config file not found at {}, using defaults",
                path.display()
            );
            return Self::default();
        }

        match Self::load_from(&path) {
            Ok(config) => {
                tracing::info!("Loaded config from {}", path.display());
                config
            }
            Err(e) => {
                tracing::warn!("{}, using defaults", e);
                Self::default()
            }
        }
    }

    /// Load config from an explicit file
    pub fn load_from(path: &Path) -> Result<Self, GridError> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            GridError::ConfigIo(format!("failed to read {}: {}", path.display(), e))
        })?;
        Self::from_yaml(&content)
    }

    pub fn from_yaml(content: &str) -> Result<Self, GridError> {
        serde_yaml::from_str(content).map_err(|e| GridError::ConfigParse(e.to_string()))
    }

    /// Save config to the default location
    ///
    /// Creates the config directory if it doesn't exist.
    pub fn save(&self) -> Result<(), GridError> {
        let path = config_file()
            .ok_or_else(|| GridError::ConfigIo("no config directory available".to_string()))?;
        self.save_to(&path)
    }

    pub fn save_to(&self, path: &Path) -> Result<(), GridError> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| {
                GridError::ConfigIo(format!("failed to create {}: {}", parent.display(), e))
            })?;
        }

        let content =
            serde_yaml::to_string(self).map_err(|e| GridError::ConfigParse(e.to_string()))?;

        std::fs::write(path, content).map_err(|e| {
            GridError::ConfigIo(format!("failed to write {}: {}", path.display(), e))
        })?;

        tracing::info!("Saved config to {}", path.display());
        Ok(())
    }
}
