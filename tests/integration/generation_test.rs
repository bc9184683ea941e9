//! End-to-end tests for the generation workflow.

use bytes::Bytes;

use reportdesk_core::error::ErrorKind;
use reportdesk_entity::generation::{GenerateReportRequest, SourceFile};
use reportdesk_state::GenerationStore;

use crate::helpers::{GENERATED_HTML, TestBackend, sample_report};

fn csv_source() -> SourceFile {
    SourceFile::new(
        "sample.csv",
        Some("text/csv".to_string()),
        Bytes::from("region,amount\nnorth,42\n"),
    )
    .unwrap()
}

#[tokio::test]
async fn generate_stores_html_and_saves_byte_identical_download() {
    let backend = TestBackend::spawn(vec![sample_report(42)]).await;
    let mut store = GenerationStore::new(backend.client());

    let html = store
        .generate(GenerateReportRequest::new(42, csv_source()))
        .await
        .unwrap();
    assert_eq!(html, GENERATED_HTML);
    assert_eq!(store.generated(), Some(GENERATED_HTML));
    assert!(!store.loading());
    assert!(store.error().is_none());

    let dir = tempfile::tempdir().unwrap();
    let path = store.save_to(dir.path(), None).await.unwrap().unwrap();
    assert_eq!(path.file_name().unwrap(), "report.html");
    let written = tokio::fs::read(&path).await.unwrap();
    assert_eq!(written, GENERATED_HTML.as_bytes());
}

#[tokio::test]
async fn generate_sends_all_multipart_fields() {
    let backend = TestBackend::spawn(vec![sample_report(42)]).await;
    let mut store = GenerationStore::new(backend.client());

    let request = GenerateReportRequest::new(42, csv_source())
        .with_prompt("focus on the north region")
        .with_model("claude-sonnet")
        .with_provider("anthropic");
    store.generate(request).await.unwrap();

    let fields = backend.generate_fields();
    assert_eq!(fields.get("idReport").map(String::as_str), Some("42"));
    assert_eq!(
        fields.get("prompt").map(String::as_str),
        Some("focus on the north region")
    );
    assert_eq!(fields.get("model").map(String::as_str), Some("claude-sonnet"));
    assert_eq!(fields.get("llm").map(String::as_str), Some("anthropic"));
    assert_eq!(fields.get("file_name").map(String::as_str), Some("sample.csv"));
    assert_eq!(
        fields.get("file_len").map(String::as_str),
        Some("23"),
        "file bytes must arrive intact"
    );
}

#[tokio::test]
async fn generate_against_unknown_report_surfaces_backend_message() {
    let backend = TestBackend::spawn(Vec::new()).await;
    let mut store = GenerationStore::new(backend.client());

    let err = store
        .generate(GenerateReportRequest::new(42, csv_source()))
        .await
        .unwrap_err();
    assert_eq!(err.kind, ErrorKind::Http);
    assert!(err.message.contains("report not found"));
    assert_eq!(store.error(), Some(err.message.as_str()));
    assert!(store.generated().is_none());

    // A failed generation leaves nothing to download.
    let dir = tempfile::tempdir().unwrap();
    assert!(store.save_to(dir.path(), None).await.unwrap().is_none());
}

#[tokio::test]
async fn reset_allows_a_fresh_generation() {
    let backend = TestBackend::spawn(vec![sample_report(1)]).await;
    let mut store = GenerationStore::new(backend.client());

    store
        .generate(GenerateReportRequest::new(1, csv_source()))
        .await
        .unwrap();
    store.reset();
    assert!(store.generated().is_none());

    store
        .generate(GenerateReportRequest::new(1, csv_source()))
        .await
        .unwrap();
    assert_eq!(store.generated(), Some(GENERATED_HTML));
}
