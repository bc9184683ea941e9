//! Request DTOs for the report endpoints.
//!
//! Validation mirrors the backend contract so obviously malformed input
//! never leaves the client.

use serde::{Deserialize, Serialize};
use validator::Validate;

use reportdesk_core::types::PageRequest;

/// Create a new report template.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateReportRequest {
    /// The HTML template content.
    #[validate(length(min = 1, message = "Template is required"))]
    pub template: String,
    /// Owner email address.
    #[validate(email(message = "A valid owner email is required"))]
    pub user_mail: String,
}

/// Replace the template of an existing report.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct UpdateReportRequest {
    /// Target report identifier.
    #[validate(range(min = 1, message = "Report id must be positive"))]
    pub id: i64,
    /// The new HTML template content.
    #[validate(length(min = 1, message = "Template is required"))]
    pub template: String,
}

/// Enable or disable a report template.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Validate)]
pub struct ToggleReportRequest {
    /// Target report identifier.
    #[validate(range(min = 1, message = "Report id must be positive"))]
    pub id: i64,
    /// The desired active state.
    pub active: bool,
}

/// Query parameters for the plain listing endpoint.
///
/// Serialized into `page` / `page_size` query parameters by the client.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ListReportsQuery {
    /// Pagination; backend defaults apply when absent.
    pub page: Option<PageRequest>,
}

impl From<PageRequest> for ListReportsQuery {
    fn from(page: PageRequest) -> Self {
        Self { page: Some(page) }
    }
}

/// Query parameters for the filter endpoint.
///
/// The backend requires `id`; filtering without one falls back to the
/// plain listing at the caller level.
#[derive(Debug, Clone, PartialEq, Eq, Validate)]
pub struct FilterReportsQuery {
    /// Report identifier to filter by.
    #[validate(range(min = 1, message = "Report id must be positive"))]
    pub id: i64,
    /// Optional owner email filter.
    pub user_mail: Option<String>,
    /// Pagination; backend defaults apply when absent.
    pub page: Option<PageRequest>,
}

impl FilterReportsQuery {
    /// Filter by id only.
    pub fn by_id(id: i64) -> Self {
        Self {
            id,
            user_mail: None,
            page: None,
        }
    }
}
