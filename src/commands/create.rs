//! Report creation command.

use std::path::PathBuf;

use clap::Args;
use dialoguer::Editor;

use crate::output::{self, OutputFormat};
use reportdesk_core::error::AppError;
use reportdesk_state::ReportsStore;

/// Arguments for the create command
#[derive(Debug, Args)]
pub struct CreateArgs {
    /// Owner email address
    #[arg(short, long)]
    pub user_mail: String,

    /// Read the template from a file
    #[arg(short, long, conflicts_with = "template")]
    pub template_file: Option<PathBuf>,

    /// Inline template content
    #[arg(long)]
    pub template: Option<String>,
}

/// Execute the create command
pub async fn execute(args: &CreateArgs, env: &str, format: OutputFormat) -> Result<(), AppError> {
    let template = read_template(&args.template_file, &args.template).await?;

    let client = super::build_client(env)?;
    let mut store = ReportsStore::new(client).await;

    let created = store.create_report(&template, &args.user_mail).await?;

    output::print_success(&format!("Created report {}", created.id));
    output::print_item(&created, format);
    Ok(())
}

/// Resolve the template from a file, an inline flag, or an editor prompt.
pub async fn read_template(
    file: &Option<PathBuf>,
    inline: &Option<String>,
) -> Result<String, AppError> {
    if let Some(path) = file {
        let content = tokio::fs::read_to_string(path)
            .await
            .map_err(|e| AppError::io(format!("Failed to read {}: {e}", path.display())))?;
        return Ok(content);
    }
    if let Some(template) = inline {
        return Ok(template.clone());
    }
    let edited = Editor::new()
        .extension(".html")
        .edit("<html>\n<body>\n</body>\n</html>\n")
        .map_err(|e| AppError::io(format!("Editor failed: {e}")))?;
    edited.ok_or_else(|| AppError::validation("Template editing was cancelled"))
}
