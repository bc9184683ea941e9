//! Report filter command.

use clap::Args;

use crate::output::{self, OutputFormat};
use reportdesk_core::error::AppError;
use reportdesk_entity::report::FilterReportsQuery;
use reportdesk_state::ReportsStore;

/// Arguments for the filter command
#[derive(Debug, Args)]
pub struct FilterArgs {
    /// Report identifier to filter by
    pub id: i64,

    /// Filter by owner email
    #[arg(short, long)]
    pub user_mail: Option<String>,

    /// Page number (1-based)
    #[arg(short, long)]
    pub page: Option<u64>,

    /// Reports per page
    #[arg(short = 's', long)]
    pub page_size: Option<u64>,
}

/// Execute the filter command
pub async fn execute(args: &FilterArgs, env: &str, format: OutputFormat) -> Result<(), AppError> {
    let client = super::build_client(env)?;
    let mut store = ReportsStore::new(client).await;

    store
        .filter_reports(FilterReportsQuery {
            id: args.id,
            user_mail: args.user_mail.clone(),
            page: super::page_request(args.page, args.page_size),
        })
        .await?;

    output::print_report_page(store.reports(), store.pagination(), format);
    Ok(())
}
