//! Report entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A report template managed by the backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Report {
    /// Unique report identifier, assigned by the server and immutable.
    pub id: i64,
    /// The HTML template content.
    pub template: String,
    /// Email address of the template owner.
    pub user_mail: String,
    /// Whether the template is enabled for generation.
    pub active: bool,
    /// When the report was created.
    pub create_at: DateTime<Utc>,
    /// When the report was last updated.
    pub update_at: DateTime<Utc>,
}

impl Report {
    /// A short preview of the template, suitable for table output.
    pub fn template_preview(&self, max_chars: usize) -> String {
        if self.template.chars().count() <= max_chars {
            return self.template.clone();
        }
        let cut: String = self.template.chars().take(max_chars).collect();
        format!("{cut}…")
    }
}
