//! The report generation state container.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use tracing::debug;

use reportdesk_client::ReportApi;
use reportdesk_core::AppResult;
use reportdesk_entity::generation::GenerateReportRequest;

/// Default file name for a downloaded report.
const DEFAULT_DOWNLOAD_NAME: &str = "report.html";

/// Drives one file-upload-triggered generation and holds its result.
///
/// The generated HTML lives in memory only; it reaches disk solely through
/// [`save_to`](Self::save_to).
pub struct GenerationStore {
    client: Arc<dyn ReportApi>,
    loading: bool,
    error: Option<String>,
    generated: Option<String>,
}

impl GenerationStore {
    /// Create an empty store.
    pub fn new(client: Arc<dyn ReportApi>) -> Self {
        Self {
            client,
            loading: false,
            error: None,
            generated: None,
        }
    }

    /// Whether a generation request is in flight.
    pub fn loading(&self) -> bool {
        self.loading
    }

    /// The most recent failure message, if generation failed.
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// The generated HTML document, if a generation has succeeded.
    pub fn generated(&self) -> Option<&str> {
        self.generated.as_deref()
    }

    /// Run one generation request.
    ///
    /// Stores the returned HTML on success; on failure records the message
    /// and returns the error so the caller can react.
    pub async fn generate(&mut self, req: GenerateReportRequest) -> AppResult<String> {
        self.loading = true;
        self.error = None;
        let result = self.client.generate_report(req).await;
        self.loading = false;

        match result {
            Ok(html) => {
                debug!(bytes = html.len(), "report generated");
                self.generated = Some(html.clone());
                Ok(html)
            }
            Err(err) => {
                self.error = Some(err.message.clone());
                Err(err)
            }
        }
    }

    /// Clear the result and error to allow a fresh generation.
    pub fn reset(&mut self) {
        self.generated = None;
        self.error = None;
    }

    /// Write the generated HTML to `<dir>/<filename>` (default
    /// `report.html`) and return the path. No-op returning `Ok(None)`
    /// when no result exists.
    pub async fn save_to(
        &self,
        dir: &Path,
        filename: Option<&str>,
    ) -> AppResult<Option<PathBuf>> {
        let Some(html) = &self.generated else {
            return Ok(None);
        };
        let path = dir.join(filename.unwrap_or(DEFAULT_DOWNLOAD_NAME));
        tokio::fs::write(&path, html.as_bytes()).await?;
        Ok(Some(path))
    }
}
