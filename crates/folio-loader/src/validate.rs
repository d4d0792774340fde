//! Content validation.
//!
//! Checks that every registered JSON document exists and parses, and that
//! every Markdown document in the projects directory carries a frontmatter
//! header with the required fields. Checks never stop at the first failure;
//! the report lists every file.

use std::fmt;

use folio_content::markdown::extract_frontmatter;
use folio_core::Result;

use crate::registry::ContentRegistry;
use crate::source::{is_missing, join_locator, ContentSource};

/// Frontmatter fields every project document must declare.
pub const REQUIRED_PROJECT_FIELDS: [&str; 4] = ["title", "slug", "date", "technologies"];

/// Outcome of checking one file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CheckStatus {
    /// The file is well formed.
    Pass,
    /// The file exists but is malformed.
    Fail(String),
    /// The file does not exist.
    Missing,
}

/// One checked file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileCheck {
    /// File name as shown to the user
    pub name: String,
    /// Outcome
    pub status: CheckStatus,
}

impl FileCheck {
    /// Whether the file passed.
    pub fn is_valid(&self) -> bool {
        self.status == CheckStatus::Pass
    }
}

impl fmt::Display for FileCheck {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.status {
            CheckStatus::Pass => write!(f, "[PASS] {} - Valid", self.name),
            CheckStatus::Fail(reason) => write!(f, "[FAIL] {} - Invalid: {reason}", self.name),
            CheckStatus::Missing => write!(f, "[WARN] {} - File not found", self.name),
        }
    }
}

/// Result of validating a content tree.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationReport {
    /// Registry JSON documents, in registry order
    pub json: Vec<FileCheck>,
    /// Project Markdown documents, in file-name order
    pub projects: Vec<FileCheck>,
    /// Non-fatal notices (e.g. no project documents)
    pub warnings: Vec<String>,
}

impl ValidationReport {
    /// Every check, JSON first.
    pub fn checks(&self) -> impl Iterator<Item = &FileCheck> {
        self.json.iter().chain(self.projects.iter())
    }

    /// Number of files checked.
    pub fn total(&self) -> usize {
        self.json.len() + self.projects.len()
    }

    /// Number of files that passed.
    pub fn valid(&self) -> usize {
        self.checks().filter(|c| c.is_valid()).count()
    }

    /// Number of files missing or malformed.
    pub fn invalid(&self) -> usize {
        self.total() - self.valid()
    }

    /// Whether every file passed.
    pub fn is_success(&self) -> bool {
        self.invalid() == 0
    }
}

/// Validate the content reachable through `source`.
///
/// Only failures of the source itself (e.g. a projects directory that
/// exists but cannot be listed) are returned as errors.
pub async fn validate_content(
    source: &dyn ContentSource,
    registry: &ContentRegistry,
) -> Result<ValidationReport> {
    let mut report = ValidationReport::default();

    for (_, _, locator) in registry.entries() {
        let status = match source.read(locator).await {
            Ok(text) => check_json(&text),
            Err(e) if is_missing(&e) => CheckStatus::Missing,
            Err(e) => CheckStatus::Fail(e.to_string()),
        };
        report.json.push(FileCheck {
            name: locator.to_string(),
            status,
        });
    }

    let dir = registry.projects_dir();
    let names: Vec<String> = source
        .list(dir)
        .await?
        .into_iter()
        .filter(|name| name.ends_with(".md"))
        .collect();

    if names.is_empty() {
        report.warnings.push("No project files found".to_string());
    }

    for name in names {
        let status = match source.read(&join_locator(dir, &name)).await {
            Ok(text) => check_project(&text),
            Err(e) => CheckStatus::Fail(e.to_string()),
        };
        report.projects.push(FileCheck { name, status });
    }

    log::info!(
        "Validated {} files: {} valid, {} invalid",
        report.total(),
        report.valid(),
        report.invalid()
    );
    Ok(report)
}

fn check_json(text: &str) -> CheckStatus {
    match serde_json::from_str::<serde_json::Value>(text) {
        Ok(_) => CheckStatus::Pass,
        Err(e) => CheckStatus::Fail(e.to_string()),
    }
}

fn check_project(text: &str) -> CheckStatus {
    let fm = extract_frontmatter(text);
    if !fm.has_frontmatter() {
        return CheckStatus::Fail("No frontmatter found".to_string());
    }

    let missing: Vec<&str> = REQUIRED_PROJECT_FIELDS
        .iter()
        .copied()
        .filter(|field| !fm.data().contains_key(field))
        .collect();

    if missing.is_empty() {
        CheckStatus::Pass
    } else {
        CheckStatus::Fail(format!("Missing required fields: {}", missing.join(", ")))
    }
}
