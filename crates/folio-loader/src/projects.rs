//! Project assembly: from Markdown documents to [`ProjectRecord`]s.
//!
//! Two entry points:
//!
//! - [`ProjectAssembler::list`] parses every document of a language, then
//!   filters, sorts (date descending), and truncates.
//! - [`ProjectAssembler::by_slug`] resolves one `<slug>-<lang>.md` document.
//!
//! Both are all-or-nothing: a document that fails to read or decode fails
//! the whole call.

use std::sync::Arc;

use folio_content::markdown::{
    estimate_reading_minutes, extract_first_paragraph, extract_frontmatter, FrontmatterRecord,
    FrontmatterValue,
};
use folio_core::{Error, Language, Result};
use futures::future::try_join_all;

use crate::manifest::{ManifestEntry, ProjectManifest};
use crate::records::ProjectRecord;
use crate::source::ContentSource;

/// Maximum length of a project excerpt, in characters.
pub const EXCERPT_CHARS: usize = 200;

// ============================================================================
// ProjectQuery
// ============================================================================

/// Options for listing projects.
///
/// ```
/// use folio_core::Language;
/// use folio_loader::ProjectQuery;
///
/// let query = ProjectQuery::new(Language::De).featured_only().limit(2);
/// assert!(query.featured_only);
/// assert_eq!(query.limit, Some(2));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProjectQuery {
    /// Language variant to list
    pub language: Language,
    /// Keep only projects with `featured: true`
    pub featured_only: bool,
    /// Keep only projects whose category equals this exactly
    pub category: Option<String>,
    /// Keep at most this many (after sorting); `0` means no limit
    pub limit: Option<usize>,
}

impl ProjectQuery {
    /// All projects in `language`.
    pub fn new(language: Language) -> Self {
        Self {
            language,
            ..Self::default()
        }
    }

    /// Keep only featured projects.
    pub fn featured_only(mut self) -> Self {
        self.featured_only = true;
        self
    }

    /// Keep only projects in `category`.
    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    /// Keep at most `limit` projects.
    pub fn limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Apply filters, sort by date descending, and truncate.
    ///
    /// Filters run in order `featured_only`, then `category`. The sort is
    /// stable, so projects sharing a date keep their input order.
    pub fn apply(&self, mut projects: Vec<ProjectRecord>) -> Vec<ProjectRecord> {
        if self.featured_only {
            projects.retain(|p| p.featured);
        }
        if let Some(category) = &self.category {
            projects.retain(|p| p.category.as_deref() == Some(category.as_str()));
        }

        projects.sort_by(|a, b| b.date.cmp(&a.date));

        if let Some(limit) = self.limit.filter(|&n| n > 0) {
            projects.truncate(limit);
        }
        projects
    }
}

// ============================================================================
// Record construction
// ============================================================================

/// Build a project record from a document.
///
/// `fallback_slug` is used when the frontmatter carries no `slug`. Only a
/// missing `title` or `date` key is an error; values of any shape are
/// accepted:
///
/// - `title`, `date`, `slug`, `category` and the URL fields render as text
///   (lists join with `", "`); `null` is empty text for `title` and `date`
///   and absent for the rest
/// - a scalar `technologies` becomes a one-element list
/// - `featured` is set only by a literal `true`
///
/// ```
/// use folio_loader::parse_project;
///
/// let p = parse_project("---\ntitle: Lab\ndate: 2024-02\ntechnologies: Go\n---\n", "lab").unwrap();
/// assert_eq!(p.technologies, vec!["Go"]);
/// assert!(!p.featured);
/// ```
pub fn parse_project(document: &str, fallback_slug: &str) -> Result<ProjectRecord> {
    let fm = extract_frontmatter(document);
    let meta = fm.data();
    let content = fm.content();

    let slug = text_field(meta, "slug")
        .filter(|s| !s.is_empty())
        .unwrap_or_else(|| fallback_slug.to_string());

    Ok(ProjectRecord {
        id: slug.clone(),
        title: required_text(meta, "title")?,
        slug,
        date: required_text(meta, "date")?,
        technologies: technologies(meta),
        category: text_field(meta, "category"),
        featured: meta.get_bool("featured").unwrap_or(false),
        github_url: text_field(meta, "githubUrl"),
        live_url: text_field(meta, "liveUrl"),
        blog_post_url: text_field(meta, "blogPostUrl"),
        excerpt: extract_first_paragraph(content, EXCERPT_CHARS),
        reading_minutes: estimate_reading_minutes(content),
        content: content.to_string(),
    })
}

fn text_field(meta: &FrontmatterRecord, key: &str) -> Option<String> {
    meta.get(key).and_then(FrontmatterValue::to_text)
}

fn required_text(meta: &FrontmatterRecord, key: &str) -> Result<String> {
    match meta.get(key) {
        Some(value) => Ok(value.to_text().unwrap_or_default()),
        None => Err(Error::decode("frontmatter", format!("missing field `{key}`"))),
    }
}

fn technologies(meta: &FrontmatterRecord) -> Vec<String> {
    match meta.get("technologies") {
        Some(FrontmatterValue::List(items)) => items.clone(),
        Some(FrontmatterValue::String(s)) if !s.is_empty() => vec![s.clone()],
        Some(FrontmatterValue::Bool(b)) => vec![b.to_string()],
        _ => Vec::new(),
    }
}

// ============================================================================
// ProjectAssembler
// ============================================================================

/// Resolves and lists projects over a content source and its manifest.
#[derive(Clone)]
pub struct ProjectAssembler {
    source: Arc<dyn ContentSource>,
    manifest: ProjectManifest,
}

impl ProjectAssembler {
    /// Create an assembler over an already-built manifest.
    pub fn new(source: Arc<dyn ContentSource>, manifest: ProjectManifest) -> Self {
        Self { source, manifest }
    }

    /// The manifest this assembler reads from.
    pub fn manifest(&self) -> &ProjectManifest {
        &self.manifest
    }

    /// List the projects matching `query`.
    pub async fn list(&self, query: &ProjectQuery) -> Result<Vec<ProjectRecord>> {
        let entries: Vec<&ManifestEntry> = self.manifest.for_language(query.language).collect();

        // try_join_all yields results in input order, whatever order the
        // reads complete in.
        let projects = try_join_all(entries.into_iter().map(|e| self.load_entry(e, &e.stem))).await?;
        log::debug!(
            "Parsed {} project documents for '{}'",
            projects.len(),
            query.language
        );

        Ok(query.apply(projects))
    }

    /// Load the project `<slug>-<lang>.md`.
    ///
    /// The record's `id` is the requested slug, even when the frontmatter
    /// declares a different `slug`.
    pub async fn by_slug(&self, slug: &str, language: Language) -> Result<ProjectRecord> {
        let entry = self
            .manifest
            .find(slug, language)
            .ok_or_else(|| Error::project_not_found(slug, language))?;
        let mut project = self.load_entry(entry, slug).await?;
        project.id = slug.to_string();
        Ok(project)
    }

    async fn load_entry(&self, entry: &ManifestEntry, fallback_slug: &str) -> Result<ProjectRecord> {
        let document = self.source.read(&entry.locator).await?;
        parse_project(&document, fallback_slug).map_err(|e| match e {
            Error::Decode { message, .. } => Error::decode(entry.locator.as_str(), message),
            other => other,
        })
    }
}

impl std::fmt::Debug for ProjectAssembler {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProjectAssembler")
            .field("documents", &self.manifest.len())
            .finish()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::source::MemorySource;

    fn doc(title: &str, date: &str, extra: &str) -> String {
        format!("---\ntitle: {title}\ndate: {date}\ntechnologies: [Rust]\n{extra}---\n# {title}\n\nAbout {title}.\n")
    }

    fn record(slug: &str, date: &str, featured: bool, category: Option<&str>) -> ProjectRecord {
        let mut extra = format!("featured: {featured}\n");
        if let Some(c) = category {
            extra.push_str(&format!("category: {c}\n"));
        }
        parse_project(&doc(slug, date, &extra), slug).unwrap()
    }

    // ------------------------------------------------------------------------
    // parse_project
    // ------------------------------------------------------------------------

    #[test]
    fn test_parse_project_fields() {
        let text = "---\ntitle: \"Kubernetes Migration\"\nslug: k8s-migration\ndate: 2024-03\n\
                    technologies: [Kubernetes, Terraform]\ncategory: infrastructure\nfeatured: true\n\
                    githubUrl: https://github.com/example/k8s\n---\n# Migration\n\nMoved everything.\n";
        let p = parse_project(text, "ignored").unwrap();

        assert_eq!(p.id, "k8s-migration");
        assert_eq!(p.slug, "k8s-migration");
        assert_eq!(p.title, "Kubernetes Migration");
        assert_eq!(p.date, "2024-03");
        assert_eq!(p.technologies, vec!["Kubernetes", "Terraform"]);
        assert_eq!(p.category.as_deref(), Some("infrastructure"));
        assert!(p.featured);
        assert_eq!(p.github_url.as_deref(), Some("https://github.com/example/k8s"));
        assert_eq!(p.excerpt.as_deref(), Some("Moved everything."));
        assert_eq!(p.content, "# Migration\n\nMoved everything.\n");
    }

    #[test]
    fn test_parse_project_defaults() {
        let p = parse_project("---\ntitle: T\ndate: 2023-01\n---\nBody", "from-file").unwrap();
        assert_eq!(p.slug, "from-file");
        assert_eq!(p.id, "from-file");
        assert!(p.technologies.is_empty());
        assert!(!p.featured);
        assert!(p.category.is_none());
    }

    #[test]
    fn test_parse_project_null_fields() {
        let p = parse_project(
            "---\ntitle: T\ndate: 2023-01\ncategory: null\nfeatured: null\ntechnologies: null\n---\n",
            "x",
        )
        .unwrap();
        assert!(p.category.is_none());
        assert!(!p.featured);
        assert!(p.technologies.is_empty());
    }

    #[test]
    fn test_parse_project_missing_title_is_decode_error() {
        let err = parse_project("---\ndate: 2023-01\n---\n", "x").unwrap_err();
        assert!(matches!(err, Error::Decode { .. }));
    }

    #[test]
    fn test_parse_project_loose_shapes() {
        let p = parse_project(
            "---\ntitle: Home Lab\nslug: home-lab\ndate: 2024-02\ntechnologies: Kubernetes\nfeatured: yes\n---\nBody",
            "x",
        )
        .unwrap();
        assert_eq!(p.technologies, vec!["Kubernetes"]);
        assert!(!p.featured);

        let p = parse_project("---\ntitle: null\ndate: true\ncategory: [a, b]\n---\n", "x").unwrap();
        assert_eq!(p.title, "");
        assert_eq!(p.date, "true");
        assert_eq!(p.category.as_deref(), Some("a, b"));
    }

    #[test]
    fn test_parse_project_without_frontmatter_fails() {
        assert!(parse_project("# No header", "x").is_err());
    }

    // ------------------------------------------------------------------------
    // ProjectQuery::apply
    // ------------------------------------------------------------------------

    #[test]
    fn test_apply_featured_and_limit() {
        let projects = vec![
            record("a", "2023-11", true, None),
            record("b", "2024-02", false, None),
            record("c", "2024-03", true, None),
            record("d", "2022-05", false, None),
            record("e", "2024-01", true, None),
        ];
        let result = ProjectQuery::default().featured_only().limit(2).apply(projects);
        let dates: Vec<_> = result.iter().map(|p| p.date.as_str()).collect();
        assert_eq!(dates, vec!["2024-03", "2024-01"]);
    }

    #[test]
    fn test_apply_category_exact_match() {
        let projects = vec![
            record("a", "2024-01", false, Some("infra")),
            record("b", "2024-02", false, Some("Infra")),
            record("c", "2024-03", false, None),
        ];
        let result = ProjectQuery::default().category("infra").apply(projects);
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].slug, "a");
    }

    #[test]
    fn test_apply_stable_for_equal_dates() {
        let projects = vec![
            record("first", "2024-01", false, None),
            record("newer", "2024-06", false, None),
            record("second", "2024-01", false, None),
            record("third", "2024-01", false, None),
        ];
        let slugs: Vec<_> = ProjectQuery::default()
            .apply(projects)
            .into_iter()
            .map(|p| p.slug)
            .collect();
        assert_eq!(slugs, vec!["newer", "first", "second", "third"]);
    }

    #[test]
    fn test_apply_zero_limit_is_unbounded() {
        let projects = vec![record("a", "2024-01", false, None), record("b", "2024-02", false, None)];
        assert_eq!(ProjectQuery::default().limit(0).apply(projects).len(), 2);
    }

    // ------------------------------------------------------------------------
    // ProjectAssembler
    // ------------------------------------------------------------------------

    fn assembler(source: MemorySource) -> ProjectAssembler {
        let names: Vec<String> = ["a-en.md", "b-en.md", "a-de.md"]
            .iter()
            .map(|s| s.to_string())
            .collect();
        ProjectAssembler::new(
            Arc::new(source),
            ProjectManifest::from_file_names("projects", names),
        )
    }

    #[tokio::test]
    async fn test_list_filters_by_language() {
        let source = MemorySource::new()
            .with_file("projects/a-en.md", doc("A", "2024-01", ""))
            .with_file("projects/b-en.md", doc("B", "2024-05", ""))
            .with_file("projects/a-de.md", doc("A (de)", "2024-01", ""));

        let en = assembler(source.clone())
            .list(&ProjectQuery::new(Language::En))
            .await
            .unwrap();
        assert_eq!(
            en.iter().map(|p| p.slug.as_str()).collect::<Vec<_>>(),
            vec!["b", "a"]
        );

        let de = assembler(source).list(&ProjectQuery::new(Language::De)).await.unwrap();
        assert_eq!(de.len(), 1);
        assert_eq!(de[0].title, "A (de)");
    }

    #[tokio::test]
    async fn test_list_is_all_or_nothing() {
        let source = MemorySource::new()
            .with_file("projects/a-en.md", doc("A", "2024-01", ""))
            .with_file("projects/b-en.md", "---\ntitle: Missing date\n---\n");

        let err = assembler(source)
            .list(&ProjectQuery::new(Language::En))
            .await
            .unwrap_err();
        assert!(matches!(err, Error::Decode { .. }));
        assert!(err.to_string().contains("projects/b-en.md"));
    }

    #[tokio::test]
    async fn test_by_slug_id_is_requested_slug() {
        let source = MemorySource::new().with_file(
            "projects/a-en.md",
            "---\ntitle: A\nslug: renamed\ndate: 2024-01\n---\n",
        );
        let project = assembler(source).by_slug("a", Language::En).await.unwrap();
        assert_eq!(project.id, "a");
        assert_eq!(project.slug, "renamed");
    }

    #[tokio::test]
    async fn test_by_slug_not_found() {
        let err = assembler(MemorySource::new())
            .by_slug("nope", Language::En)
            .await
            .unwrap_err();
        assert!(err.is_not_found());
        assert!(err.to_string().contains("nope"));
    }
}
