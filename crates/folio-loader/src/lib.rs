//! Folio Loader: typed portfolio records from a content tree.
//!
//! Content lives in two shapes:
//!
//! - JSON documents, one per `(kind, language)` pair (`profile-en.json`,
//!   `skills-de.json`, ...), resolved through a [`ContentRegistry`]
//! - Markdown project documents named `<slug>-<lang>.md`, indexed once into
//!   a [`ProjectManifest`]
//!
//! # Modules
//!
//! - [`source`]: The [`ContentSource`] trait with disk and in-memory backends
//! - [`registry`]: `(kind, language)` to locator table
//! - [`records`]: Record types (profile, experience, skills, ...)
//! - [`certifications`]: Derived expiration fields
//! - [`manifest`]: Project document index and slug suggestions
//! - [`projects`]: Project assembly, filtering, and sorting
//! - [`loader`]: [`ContentLoader`], one method per content kind
//! - [`site`]: [`SiteContent`], every kind loaded concurrently
//! - [`validate`]: Structural checks over the whole tree
//!
//! # Example
//!
//! ```rust
//! use std::sync::Arc;
//!
//! use folio_core::Language;
//! use folio_loader::{ContentLoader, ContentRegistry, MemorySource, ProjectQuery};
//!
//! # tokio_test::block_on(async {
//! let source = MemorySource::new()
//!     .with_file("projects/home-lab-en.md", "---\ntitle: Home Lab\ndate: 2024-02\n---\nRacks.");
//! let loader = ContentLoader::open(Arc::new(source), ContentRegistry::standard())
//!     .await
//!     .unwrap();
//!
//! let projects = loader.load_projects(&ProjectQuery::new(Language::En)).await.unwrap();
//! assert_eq!(projects[0].slug, "home-lab");
//! # });
//! ```

#![forbid(unsafe_code)]

pub mod certifications;
pub mod loader;
pub mod manifest;
pub mod projects;
pub mod records;
pub mod registry;
pub mod site;
pub mod source;
pub mod validate;

// Re-export key types at crate root for convenience
pub use loader::ContentLoader;
pub use manifest::{ManifestEntry, ProjectManifest};
pub use projects::{parse_project, ProjectAssembler, ProjectQuery};
pub use records::{
    Certification, ContactMethod, ContactType, EducationRecord, Interest, Interests,
    Proficiency, Profile, ProjectRecord, Skill, SkillCategory, Skills, WorkExperienceEntry,
};
pub use registry::{ContentKind, ContentRegistry};
pub use site::SiteContent;
pub use source::{ContentSource, FsSource, MemorySource};
pub use validate::{validate_content, CheckStatus, FileCheck, ValidationReport};
