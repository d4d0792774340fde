//! Portfolio record types.
//!
//! Field names follow the camelCase keys of the JSON content documents and
//! of project frontmatter.

use std::fmt;

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

// ============================================================================
// Profile
// ============================================================================

/// The landing-page header: who this portfolio belongs to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    /// Full display name
    pub full_name: String,
    /// Job title line
    pub professional_title: String,
    /// Short specialization blurb
    pub specialization: String,
    /// Optional portrait URL
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profile_photo_url: Option<String>,
    /// Optional location
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    /// Ways to get in touch
    #[serde(default)]
    pub contact_methods: Vec<ContactMethod>,
}

/// One way of contacting the profile owner.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactMethod {
    /// Channel type
    #[serde(rename = "type")]
    pub kind: ContactType,
    /// Display label
    pub label: String,
    /// Address, handle, or URL
    pub value: String,
    /// Optional icon name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
}

/// Contact channel. Unrecognized channel names decode as [`ContactType::Other`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ContactType {
    /// E-mail address
    Email,
    /// LinkedIn profile
    Linkedin,
    /// GitHub profile
    Github,
    /// Personal website
    Website,
    /// Anything else
    Other,
}

impl<'de> Deserialize<'de> for ContactType {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Ok(match raw.as_str() {
            "email" => ContactType::Email,
            "linkedin" => ContactType::Linkedin,
            "github" => ContactType::Github,
            "website" => ContactType::Website,
            _ => ContactType::Other,
        })
    }
}

// ============================================================================
// Experience / Education
// ============================================================================

/// A position held.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkExperienceEntry {
    /// Stable identifier
    pub id: String,
    /// Employer
    pub company: String,
    /// Role
    pub job_title: String,
    /// Start, `YYYY-MM`
    pub start_date: String,
    /// End, `YYYY-MM`; absent for the current position
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_date: Option<String>,
    /// Optional location
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    /// Bullet points
    #[serde(default)]
    pub achievements: Vec<String>,
}

/// A degree or programme.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EducationRecord {
    /// Stable identifier
    pub id: String,
    /// School or university
    pub institution: String,
    /// Degree name
    pub degree: String,
    /// Field of study
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
    /// Graduation, `YYYY-MM`
    pub graduation_date: String,
    /// Optional location
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
}

// ============================================================================
// Certifications
// ============================================================================

/// A professional certification.
///
/// `is_expired` and `days_until_expiration` are derived at load time from
/// the current clock and are never read from the source document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Certification {
    /// Stable identifier
    pub id: String,
    /// Certification name
    pub name: String,
    /// Issuer
    pub issuing_organization: String,
    /// Issue date
    pub issue_date: String,
    /// Expiration date, if the certification expires
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expiration_date: Option<String>,
    /// Credential number
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub credential_id: Option<String>,
    /// Verification URL
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub credential_url: Option<String>,
    /// Derived: expiration date lies in the past
    #[serde(default, skip_deserializing)]
    pub is_expired: bool,
    /// Derived: whole days left, only for unexpired certifications with an
    /// expiration date
    #[serde(default, skip_deserializing, skip_serializing_if = "Option::is_none")]
    pub days_until_expiration: Option<i64>,
}

// ============================================================================
// Skills
// ============================================================================

/// Proficiency level of a skill.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Proficiency {
    /// Beginner
    Beginner,
    /// Intermediate
    Intermediate,
    /// Advanced
    Advanced,
    /// Expert
    Expert,
}

/// A single skill.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Skill {
    /// Skill name
    pub name: String,
    /// Optional proficiency
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub proficiency: Option<Proficiency>,
}

/// A named group of skills.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkillCategory {
    /// Category heading
    pub name: String,
    /// Skills in document order
    pub skills: Vec<Skill>,
}

/// Skills grouped by category, in document order.
///
/// Stored as a JSON object mapping category name to a skill array.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Skills {
    categories: Vec<SkillCategory>,
}

impl Skills {
    /// Categories in document order.
    pub fn categories(&self) -> &[SkillCategory] {
        &self.categories
    }

    /// Look up a category by name.
    pub fn category(&self, name: &str) -> Option<&[Skill]> {
        self.categories
            .iter()
            .find(|c| c.name == name)
            .map(|c| c.skills.as_slice())
    }

    /// Number of categories.
    pub fn len(&self) -> usize {
        self.categories.len()
    }

    /// Whether there are no categories.
    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }
}

impl Serialize for Skills {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.categories.len()))?;
        for category in &self.categories {
            map.serialize_entry(&category.name, &category.skills)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for Skills {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct SkillsVisitor;

        impl<'de> Visitor<'de> for SkillsVisitor {
            type Value = Skills;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("an object mapping category names to skill arrays")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Skills, A::Error> {
                let mut categories: Vec<SkillCategory> = Vec::new();
                while let Some((name, skills)) = access.next_entry::<String, Vec<Skill>>()? {
                    match categories.iter_mut().find(|c| c.name == name) {
                        Some(existing) => existing.skills = skills,
                        None => categories.push(SkillCategory { name, skills }),
                    }
                }
                Ok(Skills { categories })
            }
        }

        deserializer.deserialize_map(SkillsVisitor)
    }
}

// ============================================================================
// Interests
// ============================================================================

/// The interests document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Interests {
    /// Interests in document order
    #[serde(default)]
    pub interests: Vec<Interest>,
}

/// A personal interest.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Interest {
    /// Heading
    pub title: String,
    /// Description text
    pub description: String,
    /// Directory of gallery images
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_directory: Option<String>,
    /// Embedded track URLs
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub soundcloud_tracks: Option<Vec<String>>,
}

// ============================================================================
// Projects
// ============================================================================

/// A project write-up in one language.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectRecord {
    /// Same as `slug`
    pub id: String,
    /// Title
    pub title: String,
    /// URL-safe identifier, unique per language
    pub slug: String,
    /// ISO date string (`YYYY-MM` or `YYYY-MM-DD`)
    pub date: String,
    /// Technology tags in frontmatter order
    pub technologies: Vec<String>,
    /// Optional category
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    /// Featured on the landing page
    pub featured: bool,
    /// Source repository
    #[serde(skip_serializing_if = "Option::is_none")]
    pub github_url: Option<String>,
    /// Live deployment
    #[serde(skip_serializing_if = "Option::is_none")]
    pub live_url: Option<String>,
    /// Related blog post
    #[serde(skip_serializing_if = "Option::is_none")]
    pub blog_post_url: Option<String>,
    /// Plain-text first paragraph of the body
    #[serde(skip_serializing_if = "Option::is_none")]
    pub excerpt: Option<String>,
    /// Estimated reading time
    pub reading_minutes: u32,
    /// Markdown body
    pub content: String,
}
