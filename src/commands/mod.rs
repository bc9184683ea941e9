//! Console command definitions and dispatch.

pub mod create;
pub mod filter;
pub mod generate;
pub mod list;
pub mod toggle;
pub mod update;

use std::sync::Arc;

use clap::{Parser, Subcommand};

use crate::output::OutputFormat;
use reportdesk_client::RestReportClient;
use reportdesk_core::config::AppConfig;
use reportdesk_core::error::AppError;

/// ReportDesk — admin console for AI-assisted report templates
#[derive(Debug, Parser)]
#[command(name = "reportdesk", version, about, long_about = None)]
pub struct Cli {
    /// Configuration environment (config/<env>.toml overlay)
    #[arg(short, long, default_value = "default")]
    pub env: String,

    /// Output format
    #[arg(short, long, value_enum, default_value = "table")]
    pub format: OutputFormat,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Top-level commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// List report templates
    List(list::ListArgs),
    /// Filter report templates by id and owner
    Filter(filter::FilterArgs),
    /// Create a report template
    Create(create::CreateArgs),
    /// Update a report template
    Update(update::UpdateArgs),
    /// Enable or disable a report template
    Toggle(toggle::ToggleArgs),
    /// Generate a report from an uploaded file
    Generate(generate::GenerateArgs),
}

impl Cli {
    /// Execute the console command
    pub async fn execute(&self) -> Result<(), AppError> {
        match &self.command {
            Commands::List(args) => list::execute(args, &self.env, self.format).await,
            Commands::Filter(args) => filter::execute(args, &self.env, self.format).await,
            Commands::Create(args) => create::execute(args, &self.env, self.format).await,
            Commands::Update(args) => update::execute(args, &self.env, self.format).await,
            Commands::Toggle(args) => toggle::execute(args, &self.env).await,
            Commands::Generate(args) => generate::execute(args, &self.env).await,
        }
    }
}

/// Helper: build the REST client from configuration
pub fn build_client(env: &str) -> Result<Arc<RestReportClient>, AppError> {
    let config = AppConfig::load(env)?;
    Ok(Arc::new(RestReportClient::from_config(&config.api)?))
}

/// Helper: combine optional page/page-size flags into a request
pub fn page_request(
    page: Option<u64>,
    page_size: Option<u64>,
) -> Option<reportdesk_core::types::PageRequest> {
    if page.is_none() && page_size.is_none() {
        return None;
    }
    let default = reportdesk_core::types::PageRequest::default();
    Some(reportdesk_core::types::PageRequest::new(
        page.unwrap_or(default.page),
        page_size.unwrap_or(default.page_size),
    ))
}
