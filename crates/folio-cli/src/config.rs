//! Folio configuration file.
//!
//! A small TOML file that tells the CLI where content lives. Every field is
//! optional in the file; missing fields take their defaults.

use std::path::{Path, PathBuf};

use folio_core::{Error, Language, PathResolver, Result};
use folio_loader::registry::DEFAULT_PROJECTS_DIR;
use folio_loader::ContentRegistry;
use serde::{Deserialize, Serialize};

use crate::settings::SETTINGS_FILE;

/// File name of the config file inside the config directory.
pub const CONFIG_FILE: &str = "config.toml";

/// Marker that identifies a content root when searching upward.
pub const CONTENT_MARKER: &str = "content/profile-en.json";

/// Content root used when nothing else resolves.
pub const FALLBACK_CONTENT_DIR: &str = "content";

/// Folio CLI configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FolioConfig {
    /// Content root directory; resolved automatically when unset
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content_dir: Option<PathBuf>,
    /// Language used before any setting is saved
    pub default_language: Language,
    /// Project documents directory, relative to the content root
    pub projects_dir: String,
}

impl Default for FolioConfig {
    fn default() -> Self {
        Self {
            content_dir: None,
            default_language: Language::En,
            projects_dir: DEFAULT_PROJECTS_DIR.to_string(),
        }
    }
}

impl FolioConfig {
    /// Path resolver for folio's environment and directories.
    pub fn resolver() -> PathResolver {
        PathResolver::new("folio")
            .with_content_marker(CONTENT_MARKER)
            .with_content_fallback(FALLBACK_CONTENT_DIR)
    }

    /// Default config file location (`<config dir>/folio/config.toml`).
    pub fn default_config_path() -> Option<PathBuf> {
        Self::resolver().config_dir().map(|dir| dir.join(CONFIG_FILE))
    }

    /// The config file in effect: an explicit path, else the default location.
    pub fn resolve_config_path(explicit: Option<&Path>) -> Option<PathBuf> {
        explicit
            .map(Path::to_path_buf)
            .or_else(Self::default_config_path)
    }

    /// Settings file location, next to the config file.
    pub fn settings_path(config_path: &Path) -> PathBuf {
        config_path
            .parent()
            .map(|dir| dir.join(SETTINGS_FILE))
            .unwrap_or_else(|| PathBuf::from(SETTINGS_FILE))
    }

    /// Load configuration; a missing file yields defaults.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        let Some(path) = Self::resolve_config_path(explicit) else {
            return Ok(Self::default());
        };
        if !path.exists() {
            log::debug!("No config at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(&path).map_err(|e| Error::io_with_path(e, &path))?;
        let config: Self = toml::from_str(&content)
            .map_err(|e| Error::config(format!("Failed to parse {}: {e}", path.display())))?;
        log::debug!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Serialize as pretty TOML.
    pub fn to_toml_string(&self) -> Result<String> {
        toml::to_string_pretty(self).map_err(|e| Error::config(e.to_string()))
    }

    /// Content root: `flag`, else the configured directory, else the
    /// resolver, else `./content`.
    pub fn content_dir(&self, flag: Option<&Path>) -> PathBuf {
        if let Some(dir) = flag {
            return dir.to_path_buf();
        }
        if let Some(dir) = &self.content_dir {
            return folio_core::util::paths::expand_tilde(&dir.to_string_lossy());
        }
        Self::resolver()
            .content_dir()
            .unwrap_or_else(|| PathBuf::from(FALLBACK_CONTENT_DIR))
    }

    /// Document registry for this configuration.
    pub fn registry(&self) -> ContentRegistry {
        ContentRegistry::standard().with_projects_dir(self.projects_dir.clone())
    }
}
