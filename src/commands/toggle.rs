//! Report enable/disable command.

use clap::Args;
use dialoguer::Confirm;

use crate::output;
use reportdesk_core::error::AppError;
use reportdesk_state::ReportsStore;

/// Arguments for the toggle command
#[derive(Debug, Args)]
pub struct ToggleArgs {
    /// Report identifier
    pub id: i64,

    /// Desired active state
    #[arg(long, action = clap::ArgAction::Set)]
    pub active: bool,

    /// Skip the confirmation prompt when disabling
    #[arg(short, long)]
    pub yes: bool,
}

/// Execute the toggle command
pub async fn execute(args: &ToggleArgs, env: &str) -> Result<(), AppError> {
    if !args.active && !args.yes {
        let confirmed = Confirm::new()
            .with_prompt(format!(
                "Disable report {}? Generation against it will be rejected.",
                args.id
            ))
            .default(false)
            .interact()
            .map_err(|e| AppError::io(format!("Prompt failed: {e}")))?;
        if !confirmed {
            println!("Aborted.");
            return Ok(());
        }
    }

    let client = super::build_client(env)?;
    let mut store = ReportsStore::new(client).await;

    store.toggle_report_status(args.id, args.active).await?;

    let state = if args.active { "enabled" } else { "disabled" };
    output::print_success(&format!("Report {} {state}", args.id));
    Ok(())
}
