//! Paginated report listing as returned by the backend.

use serde::{Deserialize, Serialize};

use super::model::Report;

/// One page of reports plus pagination metadata.
///
/// Invariants (backend-enforced, checked by the test suite):
/// `reports.len() <= page_size` and
/// `total_pages == ceil(total_count / page_size)`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportPage {
    /// The reports on this page, in server order.
    pub reports: Vec<Report>,
    /// Total number of reports across all pages.
    pub total_count: u64,
    /// Current page number (1-based).
    pub page: u64,
    /// Number of reports per page.
    pub page_size: u64,
    /// Total number of pages.
    pub total_pages: u64,
}

impl ReportPage {
    /// An empty page for the given request parameters.
    pub fn empty(page: u64, page_size: u64) -> Self {
        Self {
            reports: Vec::new(),
            total_count: 0,
            page,
            page_size,
            total_pages: 0,
        }
    }
}
