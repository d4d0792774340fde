//! Everything one page render needs, loaded in a single call.

use folio_core::{Language, Result};
use serde::Serialize;

use crate::loader::ContentLoader;
use crate::projects::ProjectQuery;
use crate::records::{
    Certification, EducationRecord, Interests, Profile, ProjectRecord, Skills,
    WorkExperienceEntry,
};

/// All portfolio content for one language.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SiteContent {
    /// Language the content was loaded in
    pub language: Language,
    pub profile: Profile,
    pub experience: Vec<WorkExperienceEntry>,
    pub skills: Skills,
    pub education: Vec<EducationRecord>,
    pub certifications: Vec<Certification>,
    pub interests: Interests,
    /// All projects, newest first
    pub projects: Vec<ProjectRecord>,
}

impl SiteContent {
    /// Load every content kind concurrently.
    ///
    /// The first failure cancels the rest and is returned as is.
    pub async fn load(loader: &ContentLoader, language: Language) -> Result<Self> {
        let query = ProjectQuery::new(language);
        let (profile, experience, skills, education, certifications, interests, projects) = tokio::try_join!(
            loader.load_profile(language),
            loader.load_experience(language),
            loader.load_skills(language),
            loader.load_education(language),
            loader.load_certifications(language),
            loader.load_interests(language),
            loader.load_projects(&query),
        )?;

        log::info!(
            "Loaded site content for '{language}': {} experience entries, {} projects",
            experience.len(),
            projects.len()
        );

        Ok(Self {
            language,
            profile,
            experience,
            skills,
            education,
            certifications,
            interests,
            projects,
        })
    }
}
