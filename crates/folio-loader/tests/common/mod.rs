//! Common test utilities and harness for folio loader integration tests.

use std::fs;
use std::path::Path;
use std::sync::Arc;

use folio_loader::{ContentLoader, ContentRegistry, FsSource};
use tempfile::TempDir;

/// A content tree on disk.
///
/// The directory is removed when the harness is dropped.
pub struct ContentHarness {
    /// Temporary content root
    pub dir: TempDir,
}

impl ContentHarness {
    /// An empty content root.
    pub fn empty() -> Self {
        Self {
            dir: TempDir::new().expect("create temp dir"),
        }
    }

    /// A complete bilingual content tree.
    pub fn sample() -> Self {
        let harness = Self::empty();
        for (name, text) in SAMPLE_JSON {
            harness.write(name, text);
        }
        harness.write("projects/k8s-migration-en.md", K8S_EN);
        harness.write("projects/k8s-migration-de.md", K8S_DE);
        harness.write("projects/home-lab-en.md", HOME_LAB_EN);
        harness
    }

    /// Content root path.
    pub fn root(&self) -> &Path {
        self.dir.path()
    }

    /// Write a file relative to the content root, creating parent directories.
    pub fn write(&self, relative: &str, text: &str) {
        let path = self.root().join(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("create parent dir");
        }
        fs::write(&path, text).expect("write fixture");
    }

    /// Remove a file relative to the content root.
    pub fn remove(&self, relative: &str) {
        fs::remove_file(self.root().join(relative)).expect("remove fixture");
    }

    /// Open a loader over the tree with the standard registry.
    pub async fn loader(&self) -> ContentLoader {
        ContentLoader::open(
            Arc::new(FsSource::new(self.root())),
            ContentRegistry::standard(),
        )
        .await
        .expect("open loader")
    }
}

/// A project document with the given frontmatter fields.
pub fn project_doc(title: &str, date: &str, featured: bool) -> String {
    format!(
        "---\ntitle: {title}\ndate: {date}\ntechnologies: [Rust]\nfeatured: {featured}\n---\n\
         # {title}\n\nNotes on {title}.\n"
    )
}

pub const K8S_EN: &str = "---
title: \"Kubernetes Migration\"
slug: k8s-migration
date: 2024-03
technologies: [Kubernetes, Terraform, Helm]
category: infrastructure
featured: true
---
# Kubernetes Migration

Moved forty services from VMs to a managed cluster.

## Outcome

Deploys went from hours to minutes.
";

pub const K8S_DE: &str = "---
title: \"Kubernetes-Migration\"
slug: k8s-migration
date: 2024-03
technologies: [Kubernetes, Terraform, Helm]
category: infrastructure
featured: true
---
# Kubernetes-Migration

Vierzig Dienste von VMs in einen verwalteten Cluster verschoben.
";

pub const HOME_LAB_EN: &str = "---
title: Home Lab
date: 2023-06
technologies: []
featured: false
---
A rack in the basement.
";

pub const SAMPLE_JSON: [(&str, &str); 12] = [
    (
        "profile-en.json",
        r#"{
  "fullName": "Ada Example",
  "professionalTitle": "Platform Engineer",
  "specialization": "Cloud infrastructure",
  "location": "Berlin",
  "contactMethods": [
    {"type": "email", "label": "Email", "value": "ada@example.com"},
    {"type": "github", "label": "GitHub", "value": "https://github.com/ada"}
  ]
}"#,
    ),
    (
        "profile-de.json",
        r#"{
  "fullName": "Ada Example",
  "professionalTitle": "Plattform-Ingenieurin",
  "specialization": "Cloud-Infrastruktur",
  "contactMethods": []
}"#,
    ),
    (
        "experience-en.json",
        r#"[
  {"id": "acme", "company": "Acme", "jobTitle": "Engineer", "startDate": "2019-04", "endDate": "2021-12", "achievements": ["Built CI"]},
  {"id": "globex", "company": "Globex", "jobTitle": "Senior Engineer", "startDate": "2022-01", "achievements": []}
]"#,
    ),
    (
        "experience-de.json",
        r#"[
  {"id": "globex", "company": "Globex", "jobTitle": "Senior-Ingenieurin", "startDate": "2022-01", "achievements": []}
]"#,
    ),
    (
        "skills-en.json",
        r#"{"Cloud": [{"name": "Kubernetes", "proficiency": "expert"}], "Languages": [{"name": "Rust"}, {"name": "Go"}]}"#,
    ),
    (
        "skills-de.json",
        r#"{"Cloud": [{"name": "Kubernetes", "proficiency": "expert"}]}"#,
    ),
    (
        "education-en.json",
        r#"[{"id": "tu", "institution": "TU Berlin", "degree": "M.Sc.", "field": "Computer Science", "graduationDate": "2018-09"}]"#,
    ),
    (
        "education-de.json",
        r#"[{"id": "tu", "institution": "TU Berlin", "degree": "M.Sc.", "graduationDate": "2018-09"}]"#,
    ),
    (
        "certifications-en.json",
        r#"[
  {"id": "cka", "name": "Certified Kubernetes Administrator", "issuingOrganization": "CNCF", "issueDate": "2023-05", "expirationDate": "2026-05-01"},
  {"id": "aws", "name": "AWS Solutions Architect", "issuingOrganization": "AWS", "issueDate": "2020-02", "expirationDate": "2023-02-01"}
]"#,
    ),
    ("certifications-de.json", "[]"),
    (
        "interests-en.json",
        r#"{"interests": [{"title": "Music", "description": "Synths", "soundcloudTracks": ["https://soundcloud.com/ada/1"]}]}"#,
    ),
    ("interests-de.json", r#"{"interests": []}"#),
];
