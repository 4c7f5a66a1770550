//! Theme preference manager.
//!
//! Shares the session store with the state managers under its own key.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::store::{self, StateStore, StoreError, keys};

/// Available UI themes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
    Ocean,
    Sunset,
}

impl Theme {
    /// The theme after this one in the toggle cycle.
    #[must_use]
    pub const fn next(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Ocean,
            Self::Ocean => Self::Sunset,
            Self::Sunset => Self::Light,
        }
    }

    /// Lowercase name as persisted.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
            Self::Ocean => "ocean",
            Self::Sunset => "sunset",
        }
    }
}

impl std::fmt::Display for Theme {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Theme {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "light" => Ok(Self::Light),
            "dark" => Ok(Self::Dark),
            "ocean" => Ok(Self::Ocean),
            "sunset" => Ok(Self::Sunset),
            other => Err(format!("unknown theme: {other}")),
        }
    }
}

/// Persisted theme preference.
pub struct ThemePreference {
    theme: Theme,
    store: Arc<dyn StateStore>,
}

impl ThemePreference {
    /// Rehydrate the preference from the store; absent or corrupt records
    /// fall back to the default theme.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Io` if the store cannot be read.
    pub fn load(store: Arc<dyn StateStore>) -> Result<Self, StoreError> {
        let theme = store::load_or_default(&*store, keys::THEME)?;
        Ok(Self { theme, store })
    }

    /// The active theme.
    #[must_use]
    pub const fn current(&self) -> Theme {
        self.theme
    }

    /// Switch to a specific theme.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the preference cannot be persisted.
    pub fn set(&mut self, theme: Theme) -> Result<(), StoreError> {
        self.theme = theme;
        self.sync()
    }

    /// Advance to the next theme in the cycle and return it.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the preference cannot be persisted.
    pub fn toggle(&mut self) -> Result<Theme, StoreError> {
        self.theme = self.theme.next();
        self.sync()?;
        Ok(self.theme)
    }

    fn sync(&self) -> Result<(), StoreError> {
        store::persist(&*self.store, keys::THEME, &self.theme)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;

    #[test]
    fn test_default_is_light() {
        let prefs = ThemePreference::load(Arc::new(MemoryStore::new())).unwrap();
        assert_eq!(prefs.current(), Theme::Light);
    }

    #[test]
    fn test_toggle_cycles_all_themes() {
        let mut prefs = ThemePreference::load(Arc::new(MemoryStore::new())).unwrap();
        assert_eq!(prefs.toggle().unwrap(), Theme::Dark);
        assert_eq!(prefs.toggle().unwrap(), Theme::Ocean);
        assert_eq!(prefs.toggle().unwrap(), Theme::Sunset);
        assert_eq!(prefs.toggle().unwrap(), Theme::Light);
    }

    #[test]
    fn test_set_persists() {
        let store: Arc<dyn StateStore> = Arc::new(MemoryStore::new());
        let mut prefs = ThemePreference::load(Arc::clone(&store)).unwrap();
        prefs.set(Theme::Ocean).unwrap();

        let reloaded = ThemePreference::load(store).unwrap();
        assert_eq!(reloaded.current(), Theme::Ocean);
    }

    #[test]
    fn test_corrupt_blob_falls_back_to_default() {
        let store: Arc<dyn StateStore> = Arc::new(MemoryStore::new());
        store.write(keys::THEME, "\"plaid\"").unwrap();

        let prefs = ThemePreference::load(store).unwrap();
        assert_eq!(prefs.current(), Theme::Light);
    }

    #[test]
    fn test_parse_from_str() {
        assert_eq!("sunset".parse::<Theme>().unwrap(), Theme::Sunset);
        assert!("plaid".parse::<Theme>().is_err());
    }
}
