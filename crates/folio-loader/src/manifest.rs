//! Project document manifest.
//!
//! The manifest is built once from a listing of the projects directory and
//! maps every `<slug>-<lang>.md` file to its locator. Loaders consult it
//! instead of re-scanning storage on each call. Entry order is file-name
//! order, which is the enumeration order every listing starts from.

use folio_core::util::ids::{normalize_id, project_file_name, split_project_file_name};
use folio_core::{Language, Result};

use crate::source::{join_locator, ContentSource};

/// Minimum Jaro-Winkler similarity for a slug suggestion.
const SUGGESTION_THRESHOLD: f64 = 0.8;

/// Maximum number of slug suggestions returned.
const MAX_SUGGESTIONS: usize = 3;

/// One project document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ManifestEntry {
    /// File name, e.g. `k8s-migration-de.md`
    pub file_name: String,
    /// File name with the language suffix stripped, e.g. `k8s-migration`
    pub stem: String,
    /// Language variant
    pub language: Language,
    /// Locator to read the document from
    pub locator: String,
}

/// All project documents known to a loader.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProjectManifest {
    entries: Vec<ManifestEntry>,
}

impl ProjectManifest {
    /// Build a manifest from a listing of `dir`.
    ///
    /// Files that do not follow `<slug>-<lang>.md` for a supported language
    /// are skipped.
    pub async fn build(source: &dyn ContentSource, dir: &str) -> Result<Self> {
        let names = source.list(dir).await?;
        let manifest = Self::from_file_names(dir, names);
        log::debug!(
            "Project manifest for '{dir}': {} documents",
            manifest.entries.len()
        );
        Ok(manifest)
    }

    /// Build a manifest from file names already listed.
    pub fn from_file_names<I, S>(dir: &str, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut entries: Vec<ManifestEntry> = names
            .into_iter()
            .filter_map(|name| {
                let name = name.as_ref();
                match split_project_file_name(name) {
                    Some((stem, language)) => Some(ManifestEntry {
                        file_name: name.to_string(),
                        stem: stem.to_string(),
                        language,
                        locator: join_locator(dir, name),
                    }),
                    None => {
                        log::debug!("Skipping '{name}': not a <slug>-<lang>.md project file");
                        None
                    }
                }
            })
            .collect();

        // Sort for deterministic ordering
        entries.sort_by(|a, b| a.file_name.cmp(&b.file_name));
        Self { entries }
    }

    /// All entries in file-name order.
    pub fn entries(&self) -> &[ManifestEntry] {
        &self.entries
    }

    /// Entries for one language, in file-name order.
    pub fn for_language(&self, language: Language) -> impl Iterator<Item = &ManifestEntry> {
        self.entries.iter().filter(move |e| e.language == language)
    }

    /// Find the document named exactly `<slug>-<lang>.md`.
    ///
    /// This is a linear scan; the first match wins.
    pub fn find(&self, slug: &str, language: Language) -> Option<&ManifestEntry> {
        let wanted = project_file_name(slug, language);
        self.entries.iter().find(|e| e.file_name == wanted)
    }

    /// Known stems in `language` that resemble `slug`, best match first.
    pub fn suggest(&self, slug: &str, language: Language) -> Vec<String> {
        let wanted = normalize_id(slug);
        let mut scored: Vec<(f64, &str)> = self
            .for_language(language)
            .map(|e| (strsim::jaro_winkler(&wanted, &e.stem), e.stem.as_str()))
            .filter(|(score, _)| *score >= SUGGESTION_THRESHOLD)
            .collect();

        scored.sort_by(|a, b| b.0.total_cmp(&a.0));
        scored
            .into_iter()
            .take(MAX_SUGGESTIONS)
            .map(|(_, stem)| stem.to_string())
            .collect()
    }

    /// Number of documents.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether there are no documents.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
