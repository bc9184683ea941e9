//! Report update command.

use std::path::PathBuf;

use clap::Args;

use crate::output::{self, OutputFormat};
use reportdesk_core::error::AppError;
use reportdesk_state::ReportsStore;

/// Arguments for the update command
#[derive(Debug, Args)]
pub struct UpdateArgs {
    /// Report identifier
    pub id: i64,

    /// Read the new template from a file
    #[arg(short, long, conflicts_with = "template")]
    pub template_file: Option<PathBuf>,

    /// Inline template content
    #[arg(long)]
    pub template: Option<String>,
}

/// Execute the update command
pub async fn execute(args: &UpdateArgs, env: &str, format: OutputFormat) -> Result<(), AppError> {
    let template = super::create::read_template(&args.template_file, &args.template).await?;

    let client = super::build_client(env)?;
    let mut store = ReportsStore::new(client).await;

    let updated = store.update_report(args.id, &template).await?;

    output::print_success(&format!("Updated report {}", updated.id));
    output::print_item(&updated, format);
    Ok(())
}
