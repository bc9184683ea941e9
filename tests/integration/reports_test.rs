//! End-to-end tests for the report CRUD workflow.

use reportdesk_core::error::ErrorKind;
use reportdesk_core::types::PageRequest;
use reportdesk_core::types::pagination::total_pages;
use reportdesk_entity::report::{FilterReportsQuery, minify_template};
use reportdesk_state::ReportsStore;

use crate::helpers::{TestBackend, sample_report};

#[tokio::test]
async fn create_then_fetch_includes_minified_template() {
    let backend = TestBackend::spawn(Vec::new()).await;
    let mut store = ReportsStore::new(backend.client()).await;

    let raw = "  <html>\n  <body>\n    Monthly   sales\n  </body>\n</html>\n";
    store
        .create_report(raw, "analyst@example.com")
        .await
        .unwrap();

    store.fetch_reports(None).await.unwrap();
    let entry = store
        .reports()
        .iter()
        .find(|r| r.user_mail == "analyst@example.com")
        .expect("created report missing from listing");
    assert_eq!(entry.template, minify_template(raw));
}

#[tokio::test]
async fn create_refetch_keeps_pagination_counters_correct() {
    let backend = TestBackend::spawn((1..=10).map(sample_report).collect()).await;
    let mut store = ReportsStore::new(backend.client()).await;
    assert_eq!(store.pagination().total_count, 10);
    assert_eq!(store.pagination().total_pages, 1);

    store
        .create_report("<p>eleventh</p>", "owner@example.com")
        .await
        .unwrap();
    assert_eq!(store.pagination().total_count, 11);
    assert_eq!(store.pagination().total_pages, 2);
}

#[tokio::test]
async fn listing_upholds_pagination_invariants() {
    let backend = TestBackend::spawn((1..=23).map(sample_report).collect()).await;
    let mut store = ReportsStore::new(backend.client()).await;

    for page in 1..=3 {
        store
            .fetch_reports(Some(PageRequest::new(page, 10)))
            .await
            .unwrap();
        let p = store.pagination();
        assert!(store.reports().len() as u64 <= p.page_size);
        assert_eq!(p.total_pages, total_pages(p.total_count, p.page_size));
        assert_eq!(p.total_pages, 3);
    }
}

#[tokio::test]
async fn filter_with_zero_matches_yields_empty_page_without_error() {
    let backend = TestBackend::spawn(vec![sample_report(1)]).await;
    let mut store = ReportsStore::new(backend.client()).await;

    store
        .filter_reports(FilterReportsQuery::by_id(7))
        .await
        .unwrap();
    assert!(store.reports().is_empty());
    assert_eq!(store.pagination().total_count, 0);
    assert!(store.error().is_none());
}

#[tokio::test]
async fn filter_by_owner_narrows_results() {
    let mut seeded = vec![sample_report(1), sample_report(2)];
    seeded[1].user_mail = "other@example.com".to_string();
    let backend = TestBackend::spawn(seeded).await;
    let mut store = ReportsStore::new(backend.client()).await;

    let mut query = FilterReportsQuery::by_id(2);
    query.user_mail = Some("other@example.com".to_string());
    store.filter_reports(query).await.unwrap();
    assert_eq!(store.reports().len(), 1);
    assert_eq!(store.reports()[0].id, 2);
}

#[tokio::test]
async fn update_patches_local_entry_and_backend() {
    let backend = TestBackend::spawn(vec![sample_report(1), sample_report(2)]).await;
    let mut store = ReportsStore::new(backend.client()).await;

    store.update_report(2, "<p>fresh</p>").await.unwrap();

    let local = store.reports().iter().find(|r| r.id == 2).unwrap();
    assert_eq!(local.template, "<p>fresh</p>");
    let remote = backend.reports().into_iter().find(|r| r.id == 2).unwrap();
    assert_eq!(remote.template, "<p>fresh</p>");
}

#[tokio::test]
async fn update_of_unknown_id_surfaces_backend_message() {
    let backend = TestBackend::spawn(vec![sample_report(1)]).await;
    let mut store = ReportsStore::new(backend.client()).await;

    let err = store.update_report(99, "<p>x</p>").await.unwrap_err();
    assert_eq!(err.kind, ErrorKind::Http);
    assert!(err.message.contains("report not found"));
    assert_eq!(store.error(), Some(err.message.as_str()));
    // The stale page survives the failed mutation.
    assert_eq!(store.reports().len(), 1);
}

#[tokio::test]
async fn toggle_twice_with_same_value_is_idempotent() {
    let backend = TestBackend::spawn(vec![sample_report(1)]).await;
    let mut store = ReportsStore::new(backend.client()).await;

    store.toggle_report_status(1, false).await.unwrap();
    store.toggle_report_status(1, false).await.unwrap();

    assert!(!store.reports()[0].active);
    assert!(!backend.reports()[0].active);
}

#[tokio::test]
async fn empty_template_never_reaches_the_backend() {
    let backend = TestBackend::spawn(Vec::new()).await;
    let mut store = ReportsStore::new(backend.client()).await;

    let err = store
        .create_report("", "owner@example.com")
        .await
        .unwrap_err();
    assert_eq!(err.kind, ErrorKind::Validation);
    assert!(backend.reports().is_empty());
}
