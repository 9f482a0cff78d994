//! Light/dark theme state
//!
//! The page has exactly two display modes. Resolution at startup:
//! 1. Persisted preference (`ThemeStore::load`)
//! 2. System dark-mode preference
//! 3. Light
//!
//! Every state entry, initial or toggled, persists the new mode and updates
//! what the page displays (the `data-theme` attribute and the toggle glyph).

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Display mode of the page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    #[default]
    Light,
    Dark,
}

impl ThemeMode {
    /// Value of the `data-theme` attribute and of the persisted setting
    pub fn as_str(self) -> &'static str {
        match self {
            ThemeMode::Light => "light",
            ThemeMode::Dark => "dark",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            ThemeMode::Light => ThemeMode::Dark,
            ThemeMode::Dark => ThemeMode::Light,
        }
    }

    /// Glyph on the toggle control: it shows the mode you would switch to
    pub fn indicator_glyph(self) -> &'static str {
        match self {
            ThemeMode::Dark => "\u{2600}",
            ThemeMode::Light => "\u{1F319}",
        }
    }
}

impl fmt::Display for ThemeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ThemeMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "light" => Ok(ThemeMode::Light),
            "dark" => Ok(ThemeMode::Dark),
            other => Err(format!("Unknown theme '{}' (expected light or dark)", other)),
        }
    }
}

/// Persistence for the theme preference
pub trait ThemeStore {
    /// Previously saved mode, if any
    fn load(&self) -> Option<ThemeMode>;

    /// Save the mode
    fn save(&mut self, mode: ThemeMode) -> Result<(), String>;
}

impl<T: ThemeStore + ?Sized> ThemeStore for Box<T> {
    fn load(&self) -> Option<ThemeMode> {
        (**self).load()
    }

    fn save(&mut self, mode: ThemeMode) -> Result<(), String> {
        (**self).save(mode)
    }
}

/// In-memory store, for tests and for rendering without a config directory
#[derive(Debug, Clone, Default)]
pub struct MemoryThemeStore {
    pub value: Option<ThemeMode>,
    /// Number of successful saves
    pub saves: usize,
}

impl MemoryThemeStore {
    pub fn with_value(mode: ThemeMode) -> Self {
        Self {
            value: Some(mode),
            saves: 0,
        }
    }
}

impl ThemeStore for MemoryThemeStore {
    fn load(&self) -> Option<ThemeMode> {
        self.value
    }

    fn save(&mut self, mode: ThemeMode) -> Result<(), String> {
        self.value = Some(mode);
        self.saves += 1;
        Ok(())
    }
}

/// Pick the initial mode from persisted and system preferences
pub fn resolve_initial(persisted: Option<ThemeMode>, system_prefers_dark: bool) -> ThemeMode {
    match persisted {
        Some(mode) => mode,
        None if system_prefers_dark => ThemeMode::Dark,
        None => ThemeMode::Light,
    }
}

/// Owner of the current theme mode
#[derive(Debug)]
pub struct ThemeController<S: ThemeStore> {
    mode: ThemeMode,
    store: S,
}

impl<S: ThemeStore> ThemeController<S> {
    /// Resolve the initial mode and enter it
    pub fn init(store: S, system_prefers_dark: bool) -> Self {
        let mode = resolve_initial(store.load(), system_prefers_dark);
        tracing::debug!(theme = %mode, "resolved initial theme");
        let mut controller = Self { mode, store };
        controller.enter(mode);
        controller
    }

    /// Switch to the other mode, returning it
    pub fn toggle(&mut self) -> ThemeMode {
        let next = self.mode.toggled();
        self.enter(next);
        next
    }

    fn enter(&mut self, mode: ThemeMode) {
        self.mode = mode;
        if let Err(e) = self.store.save(mode) {
            tracing::warn!("Failed to persist theme '{}': {}", mode, e);
        }
    }

    pub fn mode(&self) -> ThemeMode {
        self.mode
    }

    /// Value for the `data-theme` attribute
    pub fn attribute(&self) -> &'static str {
        self.mode.as_str()
    }

    pub fn indicator_glyph(&self) -> &'static str {
        self.mode.indicator_glyph()
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn into_store(self) -> S {
        self.store
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FailingStore;

    impl ThemeStore for FailingStore {
        fn load(&self) -> Option<ThemeMode> {
            None
        }

        fn save(&mut self, _mode: ThemeMode) -> Result<(), String> {
            Err("read-only".to_string())
        }
    }

    #[test]
    fn test_resolution_order() {
        assert_eq!(resolve_initial(Some(ThemeMode::Light), true), ThemeMode::Light);
        assert_eq!(resolve_initial(Some(ThemeMode::Dark), false), ThemeMode::Dark);
        assert_eq!(resolve_initial(None, true), ThemeMode::Dark);
        assert_eq!(resolve_initial(None, false), ThemeMode::Light);
    }

    #[test]
    fn test_init_persists_initial_mode() {
        let controller = ThemeController::init(MemoryThemeStore::default(), false);
        assert_eq!(controller.mode(), ThemeMode::Light);
        assert_eq!(controller.store().value, Some(ThemeMode::Light));
        assert_eq!(controller.store().saves, 1);
    }

    #[test]
    fn test_system_dark_then_toggle() {
        let mut controller = ThemeController::init(MemoryThemeStore::default(), true);
        assert_eq!(controller.attribute(), "dark");
        assert_eq!(controller.indicator_glyph(), "\u{2600}");

        assert_eq!(controller.toggle(), ThemeMode::Light);
        assert_eq!(controller.attribute(), "light");
        assert_eq!(controller.indicator_glyph(), "\u{1F319}");
        assert_eq!(controller.store().value, Some(ThemeMode::Light));
    }

    #[test]
    fn test_persisted_beats_system() {
        let controller =
            ThemeController::init(MemoryThemeStore::with_value(ThemeMode::Light), true);
        assert_eq!(controller.mode(), ThemeMode::Light);
    }

    #[test]
    fn test_save_failure_keeps_state() {
        let mut controller = ThemeController::init(FailingStore, false);
        assert_eq!(controller.toggle(), ThemeMode::Dark);
        assert_eq!(controller.mode(), ThemeMode::Dark);
    }

    #[test]
    fn test_parse_mode() {
        assert_eq!("Dark".parse::<ThemeMode>(), Ok(ThemeMode::Dark));
        assert_eq!(" light ".parse::<ThemeMode>(), Ok(ThemeMode::Light));
        assert!("sepia".parse::<ThemeMode>().is_err());
    }

    #[test]
    fn test_serde_lowercase() {
        let yaml = serde_yaml::to_string(&ThemeMode::Dark).unwrap();
        assert_eq!(yaml.trim(), "dark");
        let mode: ThemeMode = serde_yaml::from_str("light").unwrap();
        assert_eq!(mode, ThemeMode::Light);
    }
}
