//! The content loader: typed records for one language at a time.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use folio_core::{Error, Language, Result};
use serde::de::DeserializeOwned;

use crate::certifications::apply_expiration;
use crate::manifest::ProjectManifest;
use crate::projects::{ProjectAssembler, ProjectQuery};
use crate::records::{
    Certification, EducationRecord, Interests, Profile, ProjectRecord, Skills,
    WorkExperienceEntry,
};
use crate::registry::{ContentKind, ContentRegistry};
use crate::source::ContentSource;

/// Loads portfolio content from a [`ContentSource`].
///
/// The project manifest is built once in [`ContentLoader::open`]; every
/// other call reads its document fresh. Failures are wrapped with
/// [`Error::load`] naming the content kind, so callers see
/// `Failed to load experience: ...` with the cause attached.
#[derive(Clone)]
pub struct ContentLoader {
    source: Arc<dyn ContentSource>,
    registry: ContentRegistry,
    projects: ProjectAssembler,
}

impl ContentLoader {
    /// Open a loader over `source`, listing the projects directory once.
    pub async fn open(source: Arc<dyn ContentSource>, registry: ContentRegistry) -> Result<Self> {
        let manifest = ProjectManifest::build(source.as_ref(), registry.projects_dir())
            .await
            .map_err(|e| Error::load("projects", e))?;
        let projects = ProjectAssembler::new(Arc::clone(&source), manifest);
        Ok(Self {
            source,
            registry,
            projects,
        })
    }

    /// The document registry in use.
    pub fn registry(&self) -> &ContentRegistry {
        &self.registry
    }

    /// The project manifest built at open time.
    pub fn manifest(&self) -> &ProjectManifest {
        self.projects.manifest()
    }

    /// The underlying content source.
    pub fn source(&self) -> &Arc<dyn ContentSource> {
        &self.source
    }

    async fn read_json<T: DeserializeOwned>(&self, kind: ContentKind, language: Language) -> Result<T> {
        let locator = self.registry.locator(kind, language)?;
        let text = self.source.read(locator).await?;
        serde_json::from_str(&text).map_err(|e| Error::decode(locator, e))
    }

    /// Read a document whose top level must not be `null`.
    async fn read_required<T: DeserializeOwned>(
        &self,
        kind: ContentKind,
        language: Language,
    ) -> Result<T> {
        self.read_json::<Option<T>>(kind, language)
            .await?
            .ok_or_else(|| Error::incomplete(kind.name()))
    }

    /// Load the profile.
    pub async fn load_profile(&self, language: Language) -> Result<Profile> {
        self.read_required(ContentKind::Profile, language)
            .await
            .map_err(|e| Error::load(ContentKind::Profile.name(), e))
    }

    /// Load work experience, most recent start date first.
    pub async fn load_experience(&self, language: Language) -> Result<Vec<WorkExperienceEntry>> {
        let mut entries: Vec<WorkExperienceEntry> = self
            .read_json(ContentKind::Experience, language)
            .await
            .map_err(|e| Error::load(ContentKind::Experience.name(), e))?;
        entries.sort_by(|a, b| b.start_date.cmp(&a.start_date));
        Ok(entries)
    }

    /// Load skills grouped by category, in document order.
    pub async fn load_skills(&self, language: Language) -> Result<Skills> {
        self.read_required(ContentKind::Skills, language)
            .await
            .map_err(|e| Error::load(ContentKind::Skills.name(), e))
    }

    /// Load education, most recent graduation first.
    pub async fn load_education(&self, language: Language) -> Result<Vec<EducationRecord>> {
        let mut records: Vec<EducationRecord> = self
            .read_json(ContentKind::Education, language)
            .await
            .map_err(|e| Error::load(ContentKind::Education.name(), e))?;
        records.sort_by(|a, b| b.graduation_date.cmp(&a.graduation_date));
        Ok(records)
    }

    /// Load certifications with expiration fields computed against the
    /// current time.
    pub async fn load_certifications(&self, language: Language) -> Result<Vec<Certification>> {
        self.load_certifications_at(language, Utc::now()).await
    }

    /// Load certifications with expiration fields computed against `now`,
    /// most recently issued first.
    pub async fn load_certifications_at(
        &self,
        language: Language,
        now: DateTime<Utc>,
    ) -> Result<Vec<Certification>> {
        self.read_certifications(language, now)
            .await
            .map_err(|e| Error::load(ContentKind::Certifications.name(), e))
    }

    async fn read_certifications(
        &self,
        language: Language,
        now: DateTime<Utc>,
    ) -> Result<Vec<Certification>> {
        let mut certs: Vec<Certification> =
            self.read_json(ContentKind::Certifications, language).await?;
        for cert in &mut certs {
            apply_expiration(cert, now)?;
        }
        certs.sort_by(|a, b| b.issue_date.cmp(&a.issue_date));
        Ok(certs)
    }

    /// Load interests.
    pub async fn load_interests(&self, language: Language) -> Result<Interests> {
        self.read_json(ContentKind::Interests, language)
            .await
            .map_err(|e| Error::load(ContentKind::Interests.name(), e))
    }

    /// List projects matching `query`.
    pub async fn load_projects(&self, query: &ProjectQuery) -> Result<Vec<ProjectRecord>> {
        self.projects
            .list(query)
            .await
            .map_err(|e| Error::load("projects", e))
    }

    /// Load one project by slug.
    ///
    /// A slug with no `<slug>-<lang>.md` document yields
    /// [`Error::ProjectNotFound`] unwrapped; other failures are wrapped.
    pub async fn load_project_by_slug(&self, slug: &str, language: Language) -> Result<ProjectRecord> {
        self.projects.by_slug(slug, language).await.map_err(|e| {
            if matches!(e, Error::ProjectNotFound { .. }) {
                e
            } else {
                Error::load(format!("project {slug}"), e)
            }
        })
    }

    /// Slugs in `language` resembling `slug`, best match first.
    pub fn suggest_slugs(&self, slug: &str, language: Language) -> Vec<String> {
        self.manifest().suggest(slug, language)
    }
}

impl std::fmt::Debug for ContentLoader {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ContentLoader")
            .field("registry", &self.registry)
            .field("projects", &self.projects)
            .finish_non_exhaustive()
    }
}
