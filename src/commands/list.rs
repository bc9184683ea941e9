//! Report listing command.

use clap::Args;

use crate::output::{self, OutputFormat};
use reportdesk_core::error::AppError;
use reportdesk_state::ReportsStore;

/// Arguments for the list command
#[derive(Debug, Args)]
pub struct ListArgs {
    /// Page number (1-based)
    #[arg(short, long)]
    pub page: Option<u64>,

    /// Reports per page
    #[arg(short = 's', long)]
    pub page_size: Option<u64>,
}

/// Execute the list command
pub async fn execute(args: &ListArgs, env: &str, format: OutputFormat) -> Result<(), AppError> {
    let client = super::build_client(env)?;
    let mut store = ReportsStore::new(client).await;

    store
        .fetch_reports(super::page_request(args.page, args.page_size))
        .await?;

    output::print_report_page(store.reports(), store.pagination(), format);
    Ok(())
}
