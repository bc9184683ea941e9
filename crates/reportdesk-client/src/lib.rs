//! # reportdesk-client
//!
//! Typed REST client for the report backend: the [`ReportApi`] trait seam
//! plus the reqwest-backed [`RestReportClient`] implementation.

pub mod api;
pub mod rest;

pub use api::ReportApi;
pub use rest::RestReportClient;
