//! Uploaded source file with advisory type validation.
//!
//! The backend is authoritative about what it accepts; the client-side
//! check only stops obviously unsupported uploads before any bytes leave
//! the machine.

use bytes::Bytes;

use reportdesk_core::{AppError, AppResult};

/// MIME types the generation endpoint accepts.
const ACCEPTED_TYPES: [&str; 4] = [
    "application/pdf",
    "text/csv",
    "application/vnd.ms-excel",
    "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet",
];

/// Extension fallback for files whose MIME type is absent or unrecognized.
const ACCEPTED_EXTENSIONS: [&str; 4] = [".pdf", ".csv", ".xls", ".xlsx"];

/// A file payload destined for the generation endpoint.
#[derive(Debug, Clone)]
pub struct SourceFile {
    /// Original file name, sent with the multipart part.
    pub file_name: String,
    /// MIME type, when known.
    pub content_type: Option<String>,
    /// Raw file content.
    pub content: Bytes,
}

impl SourceFile {
    /// Wrap a file payload, validating its type.
    ///
    /// A file is accepted when its MIME type is one of the supported
    /// types, or — as a fallback for unrecognized MIME types — when its
    /// name carries a supported extension.
    pub fn new(
        file_name: impl Into<String>,
        content_type: Option<String>,
        content: Bytes,
    ) -> AppResult<Self> {
        let file_name = file_name.into();
        if !is_supported(&file_name, content_type.as_deref()) {
            return Err(AppError::validation(format!(
                "Unsupported file type for '{file_name}': expected PDF, CSV, or Excel (.xls, .xlsx)"
            )));
        }
        Ok(Self {
            file_name,
            content_type,
            content,
        })
    }

    /// File size in bytes.
    pub fn size(&self) -> usize {
        self.content.len()
    }
}

fn is_supported(file_name: &str, content_type: Option<&str>) -> bool {
    if let Some(mime) = content_type
        && ACCEPTED_TYPES.contains(&mime)
    {
        return true;
    }
    let lower = file_name.to_lowercase();
    ACCEPTED_EXTENSIONS.iter().any(|ext| lower.ends_with(ext))
}
