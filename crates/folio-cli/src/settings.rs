//! Persisted user settings: content language and display theme.
//!
//! Settings are read once at start and written back on every change, so
//! the selected language survives between invocations.

use std::fmt;
use std::path::Path;

use folio_core::{Error, Language, Result};
use serde::{Deserialize, Serialize};

/// File name of the settings file, stored next to the config file.
pub const SETTINGS_FILE: &str = "settings.toml";

/// Display theme preference.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    /// Light background
    Light,
    /// Dark background
    Dark,
    /// Follow the operating system
    #[default]
    System,
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
            Theme::System => "system",
        })
    }
}

/// User settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    /// Content language
    pub language: Language,
    /// Display theme
    #[serde(default)]
    pub theme: Theme,
}

impl Settings {
    /// Settings for a first run: language from the `LANG` locale when set,
    /// else `fallback`.
    pub fn detect(fallback: Language) -> Self {
        let language = std::env::var("LANG")
            .ok()
            .filter(|locale| !locale.is_empty())
            .map(|locale| Language::from_locale(&locale))
            .unwrap_or(fallback);
        Self {
            language,
            theme: Theme::System,
        }
    }

    /// Load settings from `path`, detecting defaults when the file is absent.
    pub fn load(path: &Path, fallback: Language) -> Result<Self> {
        if !path.exists() {
            log::debug!("No settings at {}, using detected defaults", path.display());
            return Ok(Self::detect(fallback));
        }
        let content = std::fs::read_to_string(path).map_err(|e| Error::io_with_path(e, path))?;
        toml::from_str(&content)
            .map_err(|e| Error::config(format!("Failed to parse {}: {e}", path.display())))
    }

    /// Write settings to `path`, creating parent directories.
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| Error::io_with_path(e, parent))?;
        }
        let toml_str = toml::to_string_pretty(self).map_err(|e| Error::config(e.to_string()))?;
        std::fs::write(path, toml_str).map_err(|e| Error::io_with_path(e, path))?;
        log::debug!("Saved settings to {}", path.display());
        Ok(())
    }
}
