//! Persisted page configuration
//!
//! Stores the theme preference in `~/.config/compare-table/config.yaml`:
//!
//! ```yaml
//! theme: dark
//! ```

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::theme::{ThemeMode, ThemeStore};

/// Configuration that persists across runs
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageConfig {
    /// Last selected theme; absent until the first theme is entered
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub theme: Option<ThemeMode>,
}

impl PageConfig {
    /// Load config from a file, or return defaults if missing or unreadable
    pub fn load_from(path: &Path) -> Self {
        if !path.exists() {
            tracing::debug!(
                "Config file not found at {}, using defaults",
                path.display()
            );
            return Self::default();
        }

        match std::fs::read_to_string(path) {
            Ok(content) => match serde_yaml::from_str::<Option<Self>>(&content) {
                Ok(config) => {
                    tracing::info!("Loaded config from {}", path.display());
                    config.unwrap_or_default()
                }
                Err(e) => {
                    tracing::warn!("Failed to parse config at {}: {}", path.display(), e);
                    Self::default()
                }
            },
            Err(e) => {
                tracing::warn!("Failed to read config at {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    /// Save config to a file
    ///
    /// Creates the parent directory if it doesn't exist.
    pub fn save_to(&self, path: &Path) -> Result<(), String> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|e| format!("Failed to create config directory: {}", e))?;
        }

        let content = serde_yaml::to_string(self)
            .map_err(|e| format!("Failed to serialize config: {}", e))?;

        std::fs::write(path, content)
            .map_err(|e| format!("Failed to write config to {}: {}", path.display(), e))?;

        tracing::info!("Saved config to {}", path.display());
        Ok(())
    }
}

/// Theme store backed by the YAML config file
#[derive(Debug, Clone)]
pub struct FileThemeStore {
    path: PathBuf,
}

impl FileThemeStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Store at the default config location, if a config directory exists
    pub fn default_location() -> Option<Self> {
        crate::config_paths::config_file().map(Self::new)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ThemeStore for FileThemeStore {
    fn load(&self) -> Option<ThemeMode> {
        PageConfig::load_from(&self.path).theme
    }

    fn save(&mut self, mode: ThemeMode) -> Result<(), String> {
        let mut config = PageConfig::load_from(&self.path);
        if config.theme == Some(mode) && self.path.exists() {
            return Ok(());
        }
        config.theme = Some(mode);
        config.save_to(&self.path)
    }
}
