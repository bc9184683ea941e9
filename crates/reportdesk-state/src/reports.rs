//! The reports list state container.

use std::sync::Arc;

use tracing::{debug, warn};

use reportdesk_client::ReportApi;
use reportdesk_core::AppResult;
use reportdesk_core::types::{PageRequest, PaginationState};
use reportdesk_entity::report::{
    CreateReportRequest, FilterReportsQuery, ListReportsQuery, Report, ToggleReportRequest,
    UpdateReportRequest,
};

/// Owns the current page of reports and its pagination metadata.
///
/// All list-mutating operations go through the [`ReportApi`] client and
/// reconcile local state afterwards. Methods take `&mut self`, so calls on
/// one store are naturally serialized; within that constraint the policy
/// is last-write-wins, which is acceptable for a single-operator console.
pub struct ReportsStore {
    client: Arc<dyn ReportApi>,
    reports: Vec<Report>,
    pagination: PaginationState,
    loading: bool,
    error: Option<String>,
}

impl ReportsStore {
    /// Create a store and eagerly fetch the first page.
    ///
    /// An initial-load failure does not fail construction; it is recorded
    /// in [`error`](Self::error) so the console stays usable.
    pub async fn new(client: Arc<dyn ReportApi>) -> Self {
        let mut store = Self {
            client,
            reports: Vec::new(),
            pagination: PaginationState::default(),
            loading: false,
            error: None,
        };
        if store.fetch_reports(None).await.is_err() {
            warn!(error = ?store.error, "initial report fetch failed");
        }
        store
    }

    /// The current page of reports, in server order.
    pub fn reports(&self) -> &[Report] {
        &self.reports
    }

    /// Pagination metadata as of the last successful fetch.
    pub fn pagination(&self) -> PaginationState {
        self.pagination
    }

    /// Whether an operation is currently in flight.
    pub fn loading(&self) -> bool {
        self.loading
    }

    /// The most recent failure message, if the last operation failed.
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Fetch a page of reports, replacing `reports` and `pagination`
    /// wholesale. On failure the previous page is left untouched
    /// (stale but consistent) and the error message is recorded.
    pub async fn fetch_reports(&mut self, page: Option<PageRequest>) -> AppResult<()> {
        self.loading = true;
        self.error = None;
        let result = self
            .client
            .list_reports(ListReportsQuery { page })
            .await;
        self.loading = false;

        match result {
            Ok(data) => {
                self.apply_page(data);
                Ok(())
            }
            Err(err) => {
                self.error = Some(err.message.clone());
                Err(err)
            }
        }
    }

    /// Same contract as [`fetch_reports`](Self::fetch_reports), against
    /// the filter endpoint.
    pub async fn filter_reports(&mut self, query: FilterReportsQuery) -> AppResult<()> {
        self.loading = true;
        self.error = None;
        let result = self.client.filter_reports(query).await;
        self.loading = false;

        match result {
            Ok(data) => {
                self.apply_page(data);
                Ok(())
            }
            Err(err) => {
                self.error = Some(err.message.clone());
                Err(err)
            }
        }
    }

    /// Create a report, then unconditionally re-fetch the current page.
    ///
    /// Re-fetching (rather than inserting locally) keeps the pagination
    /// counters correct after server-side insertion order effects.
    pub async fn create_report(&mut self, template: &str, user_mail: &str) -> AppResult<Report> {
        self.loading = true;
        self.error = None;
        let result = self
            .client
            .create_report(CreateReportRequest {
                template: template.to_string(),
                user_mail: user_mail.to_string(),
            })
            .await;
        self.loading = false;

        match result {
            Ok(created) => {
                debug!(id = created.id, "report created");
                // The create itself succeeded; a failed refetch only leaves
                // the listing stale and is recorded in the error field.
                let current = self.pagination.current_request();
                if self.fetch_reports(Some(current)).await.is_err() {
                    warn!(id = created.id, "refetch after create failed");
                }
                Ok(created)
            }
            Err(err) => {
                self.error = Some(err.message.clone());
                Err(err)
            }
        }
    }

    /// Update a report's template, then patch only the matching local
    /// entry in place. The entry's id is unchanged; every other field
    /// adopts the server's returned entity.
    pub async fn update_report(&mut self, id: i64, template: &str) -> AppResult<Report> {
        self.loading = true;
        self.error = None;
        let result = self
            .client
            .update_report(UpdateReportRequest {
                id,
                template: template.to_string(),
            })
            .await;
        self.loading = false;

        match result {
            Ok(updated) => {
                if let Some(entry) = self.reports.iter_mut().find(|r| r.id == id) {
                    *entry = updated.clone();
                }
                Ok(updated)
            }
            Err(err) => {
                self.error = Some(err.message.clone());
                Err(err)
            }
        }
    }

    /// Enable or disable a report.
    ///
    /// The local `active` flag is flipped only after the server confirms;
    /// a failed call surfaces the error and leaves local state untouched.
    pub async fn toggle_report_status(&mut self, id: i64, active: bool) -> AppResult<()> {
        self.loading = true;
        self.error = None;
        let result = self
            .client
            .set_report_active(ToggleReportRequest { id, active })
            .await;
        self.loading = false;

        match result {
            Ok(()) => {
                if let Some(entry) = self.reports.iter_mut().find(|r| r.id == id) {
                    entry.active = active;
                }
                Ok(())
            }
            Err(err) => {
                self.error = Some(err.message.clone());
                Err(err)
            }
        }
    }

    /// Re-fetch at a different page, keeping the page size.
    pub async fn change_page(&mut self, page: u64) -> AppResult<()> {
        let request = self.pagination.current_request().at_page(page);
        self.fetch_reports(Some(request)).await
    }

    /// Re-fetch with a new page size, resetting to page 1.
    pub async fn change_page_size(&mut self, page_size: u64) -> AppResult<()> {
        self.fetch_reports(Some(PageRequest::new(1, page_size))).await
    }

    fn apply_page(&mut self, data: reportdesk_entity::report::ReportPage) {
        self.pagination = PaginationState {
            page: data.page,
            page_size: data.page_size,
            total_count: data.total_count,
            total_pages: data.total_pages,
        };
        self.reports = data.reports;
    }
}
