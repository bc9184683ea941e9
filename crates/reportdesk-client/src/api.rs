//! The report backend API seam.

use async_trait::async_trait;

use reportdesk_core::AppResult;
use reportdesk_entity::generation::GenerateReportRequest;
use reportdesk_entity::report::{
    CreateReportRequest, FilterReportsQuery, ListReportsQuery, Report, ReportPage,
    ToggleReportRequest, UpdateReportRequest,
};

/// Operations exposed by the report backend.
///
/// State containers depend on this trait rather than on a concrete HTTP
/// client, so they can be exercised against an in-memory stub in tests.
#[async_trait]
pub trait ReportApi: Send + Sync {
    /// List reports, newest first, one page at a time.
    async fn list_reports(&self, query: ListReportsQuery) -> AppResult<ReportPage>;

    /// Filter reports by id and optionally by owner email.
    async fn filter_reports(&self, query: FilterReportsQuery) -> AppResult<ReportPage>;

    /// Create a new report template. The template is minified before
    /// transmission.
    async fn create_report(&self, req: CreateReportRequest) -> AppResult<Report>;

    /// Replace the template of an existing report. The template is
    /// minified before transmission.
    async fn update_report(&self, req: UpdateReportRequest) -> AppResult<Report>;

    /// Enable or disable a report template.
    async fn set_report_active(&self, req: ToggleReportRequest) -> AppResult<()>;

    /// Generate a report from an uploaded file. Returns the raw HTML
    /// document produced by the backend.
    async fn generate_report(&self, req: GenerateReportRequest) -> AppResult<String>;
}
