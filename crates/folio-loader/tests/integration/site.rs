//! Integration tests for loading the whole site at once.

use folio_core::Language;
use folio_loader::SiteContent;

use crate::common::ContentHarness;

#[tokio::test]
async fn test_site_loads_everything() {
    let harness = ContentHarness::sample();
    let loader = harness.loader().await;

    let site = SiteContent::load(&loader, Language::En).await.unwrap();
    assert_eq!(site.profile.full_name, "Ada Example");
    assert_eq!(site.experience.len(), 2);
    assert_eq!(site.skills.len(), 2);
    assert_eq!(site.education.len(), 1);
    assert_eq!(site.certifications.len(), 2);
    assert_eq!(site.interests.interests.len(), 1);
    assert_eq!(site.projects[0].slug, "k8s-migration");
    assert_eq!(site.projects[1].slug, "home-lab");
}

#[tokio::test]
async fn test_site_fails_when_one_kind_fails() {
    let harness = ContentHarness::sample();
    harness.write("interests-de.json", "{ not json");

    let err = SiteContent::load(&harness.loader().await, Language::De)
        .await
        .unwrap_err();
    assert!(err.to_string().starts_with("Failed to load interests"));
}

#[tokio::test]
async fn test_site_serializes_camel_case() {
    let harness = ContentHarness::sample();
    let site = SiteContent::load(&harness.loader().await, Language::De)
        .await
        .unwrap();

    let json = serde_json::to_value(&site).unwrap();
    assert_eq!(json["language"], "de");
    assert_eq!(json["profile"]["fullName"], "Ada Example");
    assert_eq!(json["projects"][0]["readingMinutes"], 1);
}
