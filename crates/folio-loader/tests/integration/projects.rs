//! Integration tests for project listing and lookup.

use folio_core::{Error, Language};
use folio_loader::ProjectQuery;
use proptest::prelude::*;

use crate::common::{project_doc, ContentHarness, HOME_LAB_EN, K8S_EN};

#[tokio::test]
async fn test_lookup_by_slug_per_language() {
    let harness = ContentHarness::sample();
    let loader = harness.loader().await;

    let de = loader
        .load_project_by_slug("k8s-migration", Language::De)
        .await
        .unwrap();
    assert_eq!(de.title, "Kubernetes-Migration");
    assert_eq!(de.id, "k8s-migration");
    assert!(de.featured);
    assert!(de.content.starts_with("# Kubernetes-Migration"));

    let en = loader
        .load_project_by_slug("k8s-migration", Language::En)
        .await
        .unwrap();
    assert_eq!(en.title, "Kubernetes Migration");
    assert_eq!(en.technologies, vec!["Kubernetes", "Terraform", "Helm"]);
    assert_eq!(
        en.excerpt.as_deref(),
        Some("Moved forty services from VMs to a managed cluster.")
    );
}

#[tokio::test]
async fn test_lookup_missing_variant() {
    let harness = ContentHarness::sample();
    let err = harness
        .loader()
        .await
        .load_project_by_slug("home-lab", Language::De)
        .await
        .unwrap_err();

    assert!(matches!(err, Error::ProjectNotFound { .. }));
    assert!(err.to_string().contains("home-lab"));
}

#[tokio::test]
async fn test_slug_falls_back_to_file_name() {
    let harness = ContentHarness::sample();
    let project = harness
        .loader()
        .await
        .load_project_by_slug("home-lab", Language::En)
        .await
        .unwrap();

    assert_eq!(project.slug, "home-lab");
    assert!(project.technologies.is_empty());
    assert!(!project.featured);
}

#[tokio::test]
async fn test_featured_with_limit() {
    let harness = ContentHarness::empty();
    harness.write("projects/a-en.md", &project_doc("A", "2023-11", true));
    harness.write("projects/b-en.md", &project_doc("B", "2024-02", false));
    harness.write("projects/c-en.md", &project_doc("C", "2024-03", true));
    harness.write("projects/d-en.md", &project_doc("D", "2022-05", false));
    harness.write("projects/e-en.md", &project_doc("E", "2024-01", true));

    let query = ProjectQuery::new(Language::En).featured_only().limit(2);
    let projects = harness.loader().await.load_projects(&query).await.unwrap();

    let dates: Vec<_> = projects.iter().map(|p| p.date.as_str()).collect();
    assert_eq!(dates, vec!["2024-03", "2024-01"]);
}

#[tokio::test]
async fn test_category_filter() {
    let harness = ContentHarness::sample();
    let loader = harness.loader().await;

    let infra = loader
        .load_projects(&ProjectQuery::new(Language::En).category("infrastructure"))
        .await
        .unwrap();
    assert_eq!(infra.len(), 1);
    assert_eq!(infra[0].slug, "k8s-migration");

    let none = loader
        .load_projects(&ProjectQuery::new(Language::En).category("Infrastructure"))
        .await
        .unwrap();
    assert!(none.is_empty());
}

#[tokio::test]
async fn test_missing_projects_dir_lists_nothing() {
    let harness = ContentHarness::empty();
    let projects = harness
        .loader()
        .await
        .load_projects(&ProjectQuery::new(Language::En))
        .await
        .unwrap();
    assert!(projects.is_empty());
}

#[tokio::test]
async fn test_one_bad_document_fails_listing() {
    let harness = ContentHarness::empty();
    harness.write("projects/good-en.md", K8S_EN);
    harness.write("projects/other-en.md", HOME_LAB_EN);
    harness.write("projects/bad-en.md", "---\ntitle: No date\n---\n");

    let err = harness
        .loader()
        .await
        .load_projects(&ProjectQuery::new(Language::En))
        .await
        .unwrap_err();
    assert!(err.to_string().starts_with("Failed to load projects"));
    assert!(matches!(err.root_cause(), Error::Decode { .. }));
}

#[tokio::test]
async fn test_files_added_after_open_are_not_seen() {
    let harness = ContentHarness::sample();
    let loader = harness.loader().await;
    harness.write("projects/late-en.md", &project_doc("Late", "2025-01", true));

    let err = loader
        .load_project_by_slug("late", Language::En)
        .await
        .unwrap_err();
    assert!(err.is_not_found());
}

#[tokio::test]
async fn test_suggest_slugs() {
    let harness = ContentHarness::sample();
    let loader = harness.loader().await;
    assert_eq!(
        loader.suggest_slugs("k8s-migraton", Language::En),
        vec!["k8s-migration"]
    );
}

// ----------------------------------------------------------------------------
// Ordering properties
// ----------------------------------------------------------------------------

proptest! {
    #[test]
    fn prop_listing_sorted_newest_first(
        months in proptest::collection::vec((2015u32..2026, 1u32..=12, any::<bool>()), 0..8)
    ) {
        let projects: Vec<_> = months
            .iter()
            .enumerate()
            .map(|(i, (y, m, featured))| {
                let doc = project_doc(&format!("p{i}"), &format!("{y}-{m:02}"), *featured);
                folio_loader::parse_project(&doc, &format!("p{i}")).unwrap()
            })
            .collect();

        let all = ProjectQuery::default().apply(projects.clone());
        prop_assert_eq!(all.len(), projects.len());
        for pair in all.windows(2) {
            prop_assert!(pair[0].date >= pair[1].date);
            if pair[0].date == pair[1].date {
                let a: usize = pair[0].slug[1..].parse().unwrap();
                let b: usize = pair[1].slug[1..].parse().unwrap();
                prop_assert!(a < b, "equal dates keep input order");
            }
        }

        let featured = ProjectQuery::default().featured_only().limit(2).apply(projects);
        prop_assert!(featured.len() <= 2);
        prop_assert!(featured.iter().all(|p| p.featured));
    }
}
