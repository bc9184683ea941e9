//! One-shot report generation request types.

pub mod request;
pub mod source;

pub use request::GenerateReportRequest;
pub use source::SourceFile;
