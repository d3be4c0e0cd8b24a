/// Theme preference persistence
///
/// Saves and loads the theme selection as one small versioned JSON document.
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::Theme;
use crate::error::ThemeError;

/// Persisted theme data
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThemePreference {
    /// Selected theme
    pub theme: Theme,

    /// Version of the preference format (for future migrations)
    pub version: u32,
}

impl ThemePreference {
    /// Current preference format version
    pub const VERSION: u32 = 1;

    pub fn new(theme: Theme) -> Self {
        Self {
            theme,
            version: Self::VERSION,
        }
    }
}

impl Default for ThemePreference {
    fn default() -> Self {
        Self::new(Theme::Auto)
    }
}

/// File-backed store for the theme preference
#[derive(Debug, Clone)]
pub struct ThemeStore {
    path: PathBuf,
}

impl ThemeStore {
    /// Store at the platform config directory.
    pub fn new() -> Result<Self, ThemeError> {
        let dir = dirs::config_dir().ok_or(ThemeError::NoConfigDir)?;
        Ok(Self {
            path: dir.join("checkout-wizard").join("theme.json"),
        })
    }

    /// Store at an explicit path.
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the preference. A missing file yields the default (auto).
    pub fn load(&self) -> Result<ThemePreference, ThemeError> {
        if !self.path.exists() {
            tracing::debug!("No theme preference found, using default");
            return Ok(ThemePreference::default());
        }

        let json = fs::read_to_string(&self.path).map_err(|source| ThemeError::LoadFailed {
            path: self.path.display().to_string(),
            source: Box::new(source),
        })?;
        let preference: ThemePreference =
            serde_json::from_str(&json).map_err(|source| ThemeError::LoadFailed {
                path: self.path.display().to_string(),
                source: Box::new(source),
            })?;

        tracing::debug!("Loaded theme preference from: {}", self.path.display());

        if preference.version != ThemePreference::VERSION {
            tracing::warn!(
                "Theme preference version mismatch: expected {}, found {}",
                ThemePreference::VERSION,
                preference.version
            );
        }

        Ok(preference)
    }

    /// Save the preference to disk.
    pub fn save(&self, preference: &ThemePreference) -> Result<(), ThemeError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(|source| ThemeError::DirectoryCreationFailed {
                path: parent.display().to_string(),
                source,
            })?;
        }

        let json = serde_json::to_string_pretty(preference).map_err(|source| {
            ThemeError::SaveFailed {
                path: self.path.display().to_string(),
                source: Box::new(source),
            }
        })?;
        fs::write(&self.path, json).map_err(|source| ThemeError::SaveFailed {
            path: self.path.display().to_string(),
            source: Box::new(source),
        })?;

        tracing::debug!("Saved theme preference to: {}", self.path.display());
        Ok(())
    }

    /// Save just a theme selection.
    pub fn save_theme(&self, theme: Theme) -> Result<(), ThemeError> {
        self.save(&ThemePreference::new(theme))
    }

    /// Delete the preference file, if present.
    pub fn delete(&self) -> Result<(), ThemeError> {
        if self.path.exists() {
            fs::remove_file(&self.path).map_err(|source| ThemeError::SaveFailed {
                path: self.path.display().to_string(),
                source: Box::new(source),
            })?;
            tracing::debug!("Deleted theme preference file: {}", self.path.display());
        }
        Ok(())
    }
}
