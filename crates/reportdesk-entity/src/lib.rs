//! # reportdesk-entity
//!
//! Domain models for ReportDesk: the report template entity, its request
//! DTOs, and the one-shot generation request types.

pub mod generation;
pub mod report;
