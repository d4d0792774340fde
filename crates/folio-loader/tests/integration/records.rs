//! Integration tests for the JSON record loaders.

use chrono::{TimeZone, Utc};
use folio_core::{Error, Language};
use folio_loader::{ContactType, Proficiency};

use crate::common::ContentHarness;

#[tokio::test]
async fn test_profile_both_languages() {
    let harness = ContentHarness::sample();
    let loader = harness.loader().await;

    let en = loader.load_profile(Language::En).await.unwrap();
    let de = loader.load_profile(Language::De).await.unwrap();

    assert_eq!(en.professional_title, "Platform Engineer");
    assert_eq!(de.professional_title, "Plattform-Ingenieurin");
    assert_eq!(en.contact_methods[1].kind, ContactType::Github);
    assert!(de.contact_methods.is_empty());
    assert_eq!(de.location, None);
}

#[tokio::test]
async fn test_experience_newest_first() {
    let harness = ContentHarness::sample();
    let experience = harness
        .loader()
        .await
        .load_experience(Language::En)
        .await
        .unwrap();

    let ids: Vec<_> = experience.iter().map(|e| e.id.as_str()).collect();
    assert_eq!(ids, vec!["globex", "acme"]);
    assert_eq!(experience[1].end_date.as_deref(), Some("2021-12"));
}

#[tokio::test]
async fn test_skills_keep_category_order() {
    let harness = ContentHarness::sample();
    let skills = harness.loader().await.load_skills(Language::En).await.unwrap();

    let names: Vec<_> = skills.categories().iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, vec!["Cloud", "Languages"]);
    assert_eq!(
        skills.category("Cloud").unwrap()[0].proficiency,
        Some(Proficiency::Expert)
    );
    assert_eq!(skills.category("Languages").unwrap()[1].name, "Go");
}

#[tokio::test]
async fn test_certifications_expiry_at_fixed_time() {
    let harness = ContentHarness::sample();
    let now = Utc.with_ymd_and_hms(2026, 4, 21, 0, 0, 0).unwrap();
    let certs = harness
        .loader()
        .await
        .load_certifications_at(Language::En, now)
        .await
        .unwrap();

    assert_eq!(certs[0].id, "cka");
    assert!(!certs[0].is_expired);
    assert_eq!(certs[0].days_until_expiration, Some(10));
    assert_eq!(certs[1].id, "aws");
    assert!(certs[1].is_expired);
    assert_eq!(certs[1].days_until_expiration, None);
}

#[tokio::test]
async fn test_empty_documents() {
    let harness = ContentHarness::sample();
    let loader = harness.loader().await;

    assert!(loader.load_certifications(Language::De).await.unwrap().is_empty());
    assert!(loader.load_interests(Language::De).await.unwrap().interests.is_empty());
}

#[tokio::test]
async fn test_missing_file_fails_with_kind() {
    let harness = ContentHarness::sample();
    harness.remove("education-de.json");

    let err = harness
        .loader()
        .await
        .load_education(Language::De)
        .await
        .unwrap_err();
    assert!(err.to_string().starts_with("Failed to load education:"));
    assert!(matches!(err.root_cause(), Error::Io { .. }));
}

#[tokio::test]
async fn test_null_skills_is_incomplete() {
    let harness = ContentHarness::sample();
    harness.write("skills-de.json", "null");

    let err = harness.loader().await.load_skills(Language::De).await.unwrap_err();
    assert!(matches!(err.root_cause(), Error::IncompleteData { .. }));
}
