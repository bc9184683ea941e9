//! Report template domain entities.

pub mod model;
pub mod page;
pub mod request;
pub mod template;

pub use model::Report;
pub use page::ReportPage;
pub use request::{
    CreateReportRequest, FilterReportsQuery, ListReportsQuery, ToggleReportRequest,
    UpdateReportRequest,
};
pub use template::minify_template;
