//! Registry of JSON content documents.
//!
//! Every `(ContentKind, Language)` pair maps to exactly one locator. The
//! table is built up front, so the full set of valid combinations can be
//! enumerated (the validator walks it) instead of being assembled from
//! strings at load time.

use std::collections::BTreeMap;
use std::fmt;

use folio_core::{Error, Language, Result};

/// Default directory (relative to the content root) holding project documents.
pub const DEFAULT_PROJECTS_DIR: &str = "projects";

/// Kinds of JSON content document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ContentKind {
    /// Name, title, contact methods
    Profile,
    /// Work history
    Experience,
    /// Skills grouped by category
    Skills,
    /// Degrees
    Education,
    /// Professional certifications
    Certifications,
    /// Personal interests
    Interests,
}

impl ContentKind {
    /// All JSON content kinds, in canonical order.
    pub const ALL: [ContentKind; 6] = [
        ContentKind::Profile,
        ContentKind::Experience,
        ContentKind::Skills,
        ContentKind::Education,
        ContentKind::Certifications,
        ContentKind::Interests,
    ];

    /// Lowercase name, also the file-name prefix.
    pub fn name(self) -> &'static str {
        match self {
            ContentKind::Profile => "profile",
            ContentKind::Experience => "experience",
            ContentKind::Skills => "skills",
            ContentKind::Education => "education",
            ContentKind::Certifications => "certifications",
            ContentKind::Interests => "interests",
        }
    }
}

impl fmt::Display for ContentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Lookup table from `(kind, language)` to document locator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentRegistry {
    locators: BTreeMap<(ContentKind, Language), String>,
    projects_dir: String,
}

impl ContentRegistry {
    /// The standard layout: `<kind>-<lang>.json` at the content root and
    /// project documents under `projects/`.
    ///
    /// ```
    /// use folio_core::Language;
    /// use folio_loader::registry::{ContentKind, ContentRegistry};
    ///
    /// let registry = ContentRegistry::standard();
    /// assert_eq!(
    ///     registry.locator(ContentKind::Skills, Language::De).unwrap(),
    ///     "skills-de.json"
    /// );
    /// assert_eq!(registry.entries().count(), 12);
    /// ```
    pub fn standard() -> Self {
        let locators = ContentKind::ALL
            .iter()
            .flat_map(|&kind| Language::ALL.iter().map(move |&lang| (kind, lang)))
            .map(|(kind, lang)| ((kind, lang), format!("{}-{}.json", kind.name(), lang.code())))
            .collect();

        Self {
            locators,
            projects_dir: DEFAULT_PROJECTS_DIR.to_string(),
        }
    }

    /// Override the locator for one `(kind, language)` pair.
    pub fn with_locator(
        mut self,
        kind: ContentKind,
        language: Language,
        locator: impl Into<String>,
    ) -> Self {
        self.locators.insert((kind, language), locator.into());
        self
    }

    /// Override the project documents directory.
    pub fn with_projects_dir(mut self, dir: impl Into<String>) -> Self {
        self.projects_dir = dir.into();
        self
    }

    /// Resolve the locator for a `(kind, language)` pair.
    pub fn locator(&self, kind: ContentKind, language: Language) -> Result<&str> {
        self.locators
            .get(&(kind, language))
            .map(String::as_str)
            .ok_or_else(|| Error::config(format!("no {kind} document registered for '{language}'")))
    }

    /// All registered pairs with their locators, in kind-then-language order.
    pub fn entries(&self) -> impl Iterator<Item = (ContentKind, Language, &str)> {
        self.locators
            .iter()
            .map(|(&(kind, lang), locator)| (kind, lang, locator.as_str()))
    }

    /// Directory holding project documents.
    pub fn projects_dir(&self) -> &str {
        &self.projects_dir
    }
}

impl Default for ContentRegistry {
    fn default() -> Self {
        Self::standard()
    }
}
