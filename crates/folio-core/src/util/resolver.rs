//! Content and config directory resolution.
//!
//! `PathResolver` locates the content directory of a portfolio and the
//! directory holding its configuration, using environment variables,
//! directory markers, and fallback paths.
//!
//! # Example
//!
//! ```no_run
//! use folio_core::util::resolver::PathResolver;
//!
//! let resolver = PathResolver::new("folio")
//!     .with_content_marker("content/profile-en.json")
//!     .with_content_fallback("./content");
//!
//! // Checks FOLIO_CONTENT_DIR, then searches for the marker
//! if let Some(content) = resolver.content_dir() {
//!     println!("Content: {:?}", content);
//! }
//! ```

use std::env;
use std::path::PathBuf;

use crate::util::paths::{binary_dir, expand_tilde, find_dir_with_marker};

/// Configurable path resolver for a portfolio project.
#[derive(Debug, Clone)]
pub struct PathResolver {
    /// Project name (e.g., "folio")
    project_name: String,
    /// Environment variable prefix (e.g., "FOLIO")
    env_prefix: String,
    /// Marker path identifying the content directory, relative to the
    /// project root (e.g., "content/profile-en.json")
    content_marker: Option<String>,
    /// Fallback content directory (expanded with tilde)
    content_fallback: Option<PathBuf>,
}

impl PathResolver {
    /// Create a new resolver for the given project name.
    ///
    /// The project name is converted to an environment variable prefix:
    /// - "folio" → "FOLIO"
    /// - "my-site" → "MY_SITE"
    pub fn new(project_name: &str) -> Self {
        let env_prefix = project_name.to_uppercase().replace(['-', ' '], "_");

        Self {
            project_name: project_name.to_string(),
            env_prefix,
            content_marker: None,
            content_fallback: None,
        }
    }

    /// Set the marker path that identifies the content directory.
    ///
    /// The first component of the marker is the content directory itself;
    /// the remainder is a file that must exist inside it.
    pub fn with_content_marker(mut self, marker: &str) -> Self {
        self.content_marker = Some(marker.to_string());
        self
    }

    /// Set a fallback path for the content directory (supports ~ expansion).
    pub fn with_content_fallback(mut self, path: &str) -> Self {
        self.content_fallback = Some(expand_tilde(path));
        self
    }

    /// Get the environment variable name for a given suffix.
    ///
    /// # Example
    /// ```
    /// use folio_core::util::resolver::PathResolver;
    ///
    /// let resolver = PathResolver::new("folio");
    /// assert_eq!(resolver.env_var("CONTENT_DIR"), "FOLIO_CONTENT_DIR");
    /// ```
    pub fn env_var(&self, suffix: &str) -> String {
        format!("{}_{}", self.env_prefix, suffix)
    }

    /// Resolve the content directory.
    ///
    /// Checks in order:
    /// 1. `{PROJECT}_CONTENT_DIR` environment variable
    /// 2. Walk up from the current directory looking for the content marker
    /// 3. Walk up from the binary looking for the content marker
    /// 4. Fallback path (if configured)
    pub fn content_dir(&self) -> Option<PathBuf> {
        let env_var = self.env_var("CONTENT_DIR");
        if let Ok(path) = env::var(&env_var) {
            let path = expand_tilde(&path);
            if path.is_dir() {
                return Some(path);
            }
            log::warn!("{env_var} points at {}, which is not a directory", path.display());
        }

        if let Some(marker) = &self.content_marker {
            let starts = [env::current_dir().ok(), binary_dir()];
            for start in starts.iter().flatten() {
                if let Some(root) = find_dir_with_marker(start, marker) {
                    return Some(self.content_dir_under(root, marker));
                }
            }
        }

        self.content_fallback
            .as_ref()
            .filter(|fallback| fallback.is_dir())
            .cloned()
    }

    /// Resolve the directory that holds folio's config and settings files.
    ///
    /// Checks `{PROJECT}_CONFIG_DIR`, then the platform config directory
    /// joined with the project name.
    pub fn config_dir(&self) -> Option<PathBuf> {
        if let Ok(path) = env::var(self.env_var("CONFIG_DIR")) {
            return Some(expand_tilde(&path));
        }
        dirs::config_dir().map(|dir| dir.join(&self.project_name))
    }

    /// Get the project name.
    pub fn project_name(&self) -> &str {
        &self.project_name
    }

    /// Get the environment variable prefix.
    pub fn env_prefix(&self) -> &str {
        &self.env_prefix
    }

    fn content_dir_under(&self, root: PathBuf, marker: &str) -> PathBuf {
        match marker.split('/').next() {
            Some(first) if marker.contains('/') => root.join(first),
            _ => root,
        }
    }
}
