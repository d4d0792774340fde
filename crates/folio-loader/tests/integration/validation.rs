//! Integration tests for content validation.

use folio_core::Language;
use folio_loader::{validate_content, CheckStatus, ContentRegistry, FsSource, ProjectQuery};

use crate::common::ContentHarness;

#[tokio::test]
async fn test_sample_tree_is_valid() {
    let harness = ContentHarness::sample();
    // The sample home-lab document omits its slug.
    harness.write(
        "projects/home-lab-en.md",
        "---\ntitle: Home Lab\nslug: home-lab\ndate: 2023-06\ntechnologies: []\n---\n",
    );

    let report = validate_content(&FsSource::new(harness.root()), &ContentRegistry::standard())
        .await
        .unwrap();
    assert!(report.is_success(), "{report:?}");
    assert_eq!(report.total(), 15);
}

#[tokio::test]
async fn test_reports_every_problem() {
    let harness = ContentHarness::sample();
    harness.remove("profile-de.json");
    harness.write("skills-en.json", "{\"Cloud\": [");

    let report = validate_content(&FsSource::new(harness.root()), &ContentRegistry::standard())
        .await
        .unwrap();

    let profile_de = report.json.iter().find(|c| c.name == "profile-de.json").unwrap();
    assert_eq!(profile_de.status, CheckStatus::Missing);
    let skills_en = report.json.iter().find(|c| c.name == "skills-en.json").unwrap();
    assert!(matches!(skills_en.status, CheckStatus::Fail(_)));

    let home_lab = report
        .projects
        .iter()
        .find(|c| c.name == "home-lab-en.md")
        .unwrap();
    assert_eq!(
        home_lab.status,
        CheckStatus::Fail("Missing required fields: slug".to_string())
    );

    assert_eq!(report.invalid(), 3);
    assert!(!report.is_success());
}

#[tokio::test]
async fn test_valid_tree_lists_projects() {
    let harness = ContentHarness::sample();
    harness.write(
        "projects/home-lab-en.md",
        "---\ntitle: Home Lab\nslug: home-lab\ndate: 2024-02\ntechnologies: Kubernetes\nfeatured: yes\n---\nBody",
    );

    let report = validate_content(&FsSource::new(harness.root()), &ContentRegistry::standard())
        .await
        .unwrap();
    assert!(report.is_success(), "{report:?}");

    let projects = harness
        .loader()
        .await
        .load_projects(&ProjectQuery::new(Language::En))
        .await
        .unwrap();
    let home_lab = projects.iter().find(|p| p.slug == "home-lab").unwrap();
    assert_eq!(home_lab.technologies, vec!["Kubernetes"]);
    assert!(!home_lab.featured);
    assert_eq!(projects.len(), 2);
}
