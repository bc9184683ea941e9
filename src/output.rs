//! Table and JSON output formatting for console commands.

use serde::Serialize;
use tabled::{Table, Tabled};

use reportdesk_core::types::PaginationState;
use reportdesk_entity::report::Report;

/// Characters of template shown in table rows.
const TEMPLATE_PREVIEW_CHARS: usize = 48;

/// Output format selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human-readable table
    Table,
    /// JSON output
    Json,
}

impl Default for OutputFormat {
    fn default() -> Self {
        Self::Table
    }
}

/// One report as a table row.
#[derive(Debug, Serialize, Tabled)]
pub struct ReportRow {
    /// Report identifier.
    pub id: i64,
    /// Owner email.
    pub owner: String,
    /// Active flag.
    pub active: bool,
    /// Truncated template preview.
    pub template: String,
    /// Last update timestamp.
    pub updated: String,
}

impl From<&Report> for ReportRow {
    fn from(report: &Report) -> Self {
        Self {
            id: report.id,
            owner: report.user_mail.clone(),
            active: report.active,
            template: report.template_preview(TEMPLATE_PREVIEW_CHARS),
            updated: report.update_at.format("%Y-%m-%d %H:%M:%S").to_string(),
        }
    }
}

/// Print a page of reports in the selected format, with pagination footer
pub fn print_report_page(reports: &[Report], pagination: PaginationState, format: OutputFormat) {
    match format {
        OutputFormat::Table => {
            if reports.is_empty() {
                println!("No results found.");
            } else {
                let rows: Vec<ReportRow> = reports.iter().map(ReportRow::from).collect();
                let table = Table::new(rows).to_string();
                println!("{}", table);
            }
            println!(
                "Page {}/{} — {} report(s) total",
                pagination.page, pagination.total_pages, pagination.total_count
            );
        }
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(reports).unwrap_or_else(|_| "[]".to_string());
            println!("{}", json);
        }
    }
}

/// Print a single item in the selected format
pub fn print_item<T: Serialize + std::fmt::Debug>(item: &T, format: OutputFormat) {
    match format {
        OutputFormat::Table => {
            println!("{:#?}", item);
        }
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(item).unwrap_or_else(|_| "{}".to_string());
            println!("{}", json);
        }
    }
}

/// Print a success message
pub fn print_success(msg: &str) {
    println!("✓ {}", msg);
}

/// Print a key-value pair
pub fn print_kv(key: &str, value: &str) {
    println!("  {:<24} {}", format!("{}:", key), value);
}

/// Render a byte count as a human-readable size
pub fn format_file_size(bytes: usize) -> String {
    if bytes == 0 {
        return "0 Bytes".to_string();
    }
    const UNITS: [&str; 3] = ["Bytes", "KB", "MB"];
    let exponent = (bytes as f64).log(1024.0).floor() as usize;
    let exponent = exponent.min(UNITS.len() - 1);
    let value = bytes as f64 / 1024f64.powi(exponent as i32);
    format!("{:.2} {}", value, UNITS[exponent])
        .replace(".00 ", " ")
}
