//! # reportdesk-state
//!
//! State containers for the ReportDesk console: [`ReportsStore`] owns the
//! current page of report templates, [`GenerationStore`] owns one
//! generation result. Both depend on the [`ReportApi`] seam rather than a
//! concrete HTTP client.
//!
//! [`ReportApi`]: reportdesk_client::ReportApi

pub mod generation;
pub mod reports;


pub use generation::GenerationStore;
pub use reports::ReportsStore;
