//! Slug utilities and the project file-naming convention.
//!
//! Project documents are stored one per language variant and named
//! `<slug>-<lang>.md`, e.g. `k8s-migration-de.md`.

use crate::Language;

/// File extension of project documents (without the dot).
pub const PROJECT_EXTENSION: &str = "md";

/// Normalize an identifier to lowercase kebab-case.
///
/// Performs the following transformations:
/// 1. Trims leading/trailing whitespace
/// 2. Converts to lowercase
/// 3. Replaces underscores with hyphens
/// 4. Collapses multiple whitespace into single hyphens
///
/// # Examples
///
/// ```
/// use folio_core::util::ids::normalize_id;
///
/// assert_eq!(normalize_id("K8s Migration"), "k8s-migration");
/// assert_eq!(normalize_id("home_lab"), "home-lab");
/// assert_eq!(normalize_id("  Mixed   Case  "), "mixed-case");
/// ```
pub fn normalize_id(id: &str) -> String {
    id.trim()
        .to_lowercase()
        .replace('_', " ")
        .split_whitespace()
        .collect::<Vec<&str>>()
        .join("-")
}

/// Build the document file name for a project slug in a language.
///
/// ```
/// use folio_core::{project_file_name, Language};
///
/// assert_eq!(project_file_name("k8s-migration", Language::De), "k8s-migration-de.md");
/// ```
pub fn project_file_name(slug: &str, language: Language) -> String {
    format!("{slug}-{}.{PROJECT_EXTENSION}", language.code())
}

/// Split a project document file name into its slug stem and language.
///
/// Returns `None` when the name does not follow `<slug>-<lang>.md` for a
/// supported language.
///
/// ```
/// use folio_core::{split_project_file_name, Language};
///
/// assert_eq!(
///     split_project_file_name("k8s-migration-en.md"),
///     Some(("k8s-migration", Language::En))
/// );
/// assert_eq!(split_project_file_name("notes.md"), None);
/// assert_eq!(split_project_file_name("k8s-migration-fr.md"), None);
/// ```
pub fn split_project_file_name(file_name: &str) -> Option<(&str, Language)> {
    let stem = file_name
        .strip_suffix(PROJECT_EXTENSION)?
        .strip_suffix('.')?;
    let (slug, code) = stem.rsplit_once('-')?;
    if slug.is_empty() {
        return None;
    }
    let language = code.parse().ok()?;
    Some((slug, language))
}
