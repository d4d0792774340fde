//! Content sources: where raw documents come from.
//!
//! A [`ContentSource`] resolves a locator (a `/`-separated path relative to
//! the content root, e.g. `projects/k8s-migration-en.md`) to document text.
//! Loaders only ever talk to this trait, so the same pipeline runs over a
//! directory on disk ([`FsSource`]) or over documents held in memory
//! ([`MemorySource`]).

use std::collections::BTreeMap;
use std::io;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use folio_core::{Error, Result};

/// A read-only store of content documents.
#[async_trait]
pub trait ContentSource: Send + Sync {
    /// Read the document at `locator` as UTF-8 text.
    ///
    /// A missing document is reported as [`Error::Io`] with
    /// [`io::ErrorKind::NotFound`].
    async fn read(&self, locator: &str) -> Result<String>;

    /// List the file names directly inside `dir`, sorted by name.
    ///
    /// A missing directory yields an empty list.
    async fn list(&self, dir: &str) -> Result<Vec<String>>;
}

/// Whether an error means "the document does not exist".
pub fn is_missing(err: &Error) -> bool {
    matches!(err, Error::Io { source, .. } if source.kind() == io::ErrorKind::NotFound)
}

/// Join a directory locator and a file name.
pub fn join_locator(dir: &str, name: &str) -> String {
    let dir = dir.trim_end_matches('/');
    if dir.is_empty() {
        name.to_string()
    } else {
        format!("{dir}/{name}")
    }
}

// ============================================================================
// FsSource
// ============================================================================

/// Content source backed by a directory on disk.
#[derive(Debug, Clone)]
pub struct FsSource {
    root: PathBuf,
}

impl FsSource {
    /// Create a source rooted at `root`.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// The content root directory.
    pub fn root(&self) -> &Path {
        &self.root
    }

    fn resolve(&self, locator: &str) -> PathBuf {
        locator
            .split('/')
            .filter(|part| !part.is_empty())
            .fold(self.root.clone(), |path, part| path.join(part))
    }
}

#[async_trait]
impl ContentSource for FsSource {
    async fn read(&self, locator: &str) -> Result<String> {
        let path = self.resolve(locator);
        log::debug!("Reading {}", path.display());
        tokio::fs::read_to_string(&path)
            .await
            .map_err(|e| Error::io_with_path(e, &path))
    }

    async fn list(&self, dir: &str) -> Result<Vec<String>> {
        let path = self.resolve(dir);
        let mut entries = match tokio::fs::read_dir(&path).await {
            Ok(entries) => entries,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                log::info!("Content directory {} does not exist", path.display());
                return Ok(Vec::new());
            }
            Err(e) => return Err(Error::io_with_path(e, &path)),
        };

        let mut names = Vec::new();
        while let Some(entry) = entries
            .next_entry()
            .await
            .map_err(|e| Error::io_with_path(e, &path))?
        {
            let file_type = entry
                .file_type()
                .await
                .map_err(|e| Error::io_with_path(e, entry.path()))?;
            if !file_type.is_file() {
                continue;
            }
            match entry.file_name().into_string() {
                Ok(name) => names.push(name),
                Err(raw) => log::warn!("Skipping non-UTF-8 file name {raw:?}"),
            }
        }

        // Sort for deterministic ordering
        names.sort();
        Ok(names)
    }
}

// ============================================================================
// MemorySource
// ============================================================================

/// Content source holding documents in memory, keyed by locator.
#[derive(Debug, Clone, Default)]
pub struct MemorySource {
    files: BTreeMap<String, String>,
}

impl MemorySource {
    /// Create an empty source.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a document (builder style).
    pub fn with_file(mut self, locator: impl Into<String>, text: impl Into<String>) -> Self {
        self.insert(locator, text);
        self
    }

    /// Add or replace a document.
    pub fn insert(&mut self, locator: impl Into<String>, text: impl Into<String>) {
        self.files.insert(locator.into(), text.into());
    }

    /// Number of documents held.
    pub fn len(&self) -> usize {
        self.files.len()
    }

    /// Whether the source holds no documents.
    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }
}

#[async_trait]
impl ContentSource for MemorySource {
    async fn read(&self, locator: &str) -> Result<String> {
        self.files.get(locator).cloned().ok_or_else(|| {
            Error::io_with_path(
                io::Error::new(io::ErrorKind::NotFound, "no such document"),
                locator,
            )
        })
    }

    async fn list(&self, dir: &str) -> Result<Vec<String>> {
        let prefix = join_locator(dir, "");
        // BTreeMap iteration is already sorted by locator
        Ok(self
            .files
            .keys()
            .filter_map(|locator| locator.strip_prefix(&prefix))
            .filter(|name| !name.is_empty() && !name.contains('/'))
            .map(String::from)
            .collect())
    }
}
