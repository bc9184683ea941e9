//! Generation request model.

use super::source::SourceFile;

/// A one-shot request to generate a report from an uploaded file.
///
/// Transient: exists only for the duration of one call, no persisted
/// identity.
#[derive(Debug, Clone)]
pub struct GenerateReportRequest {
    /// Identifier of the report template to generate against.
    pub report_id: i64,
    /// Optional free-text prompt passed through to the LLM.
    pub prompt: Option<String>,
    /// Optional model name override.
    pub model: Option<String>,
    /// Optional LLM provider selector (wire field `llm`).
    pub provider: Option<String>,
    /// The uploaded data file.
    pub file: SourceFile,
}

impl GenerateReportRequest {
    /// Build a request with only the required fields.
    pub fn new(report_id: i64, file: SourceFile) -> Self {
        Self {
            report_id,
            prompt: None,
            model: None,
            provider: None,
            file,
        }
    }

    /// Attach a free-text prompt.
    pub fn with_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.prompt = Some(prompt.into());
        self
    }

    /// Override the model name.
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = Some(model.into());
        self
    }

    /// Select the LLM provider.
    pub fn with_provider(mut self, provider: impl Into<String>) -> Self {
        self.provider = Some(provider.into());
        self
    }
}
