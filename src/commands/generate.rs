//! Report generation command.

use std::path::PathBuf;

use bytes::Bytes;
use clap::Args;

use crate::output;
use reportdesk_core::error::AppError;
use reportdesk_entity::generation::{GenerateReportRequest, SourceFile};
use reportdesk_state::GenerationStore;

/// Arguments for the generate command
#[derive(Debug, Args)]
pub struct GenerateArgs {
    /// Path to the data file (PDF, CSV, or Excel)
    pub file: PathBuf,

    /// Report template identifier
    #[arg(short, long)]
    pub id: i64,

    /// Free-text prompt passed to the LLM
    #[arg(short, long)]
    pub prompt: Option<String>,

    /// Model name override
    #[arg(short, long)]
    pub model: Option<String>,

    /// LLM provider selector
    #[arg(long)]
    pub provider: Option<String>,

    /// Directory to save the generated HTML into
    #[arg(short, long, default_value = ".")]
    pub output_dir: PathBuf,

    /// File name for the generated HTML
    #[arg(short = 'n', long)]
    pub output_name: Option<String>,

    /// Print the generated HTML to stdout instead of saving it
    #[arg(long)]
    pub stdout: bool,
}

/// Execute the generate command
pub async fn execute(args: &GenerateArgs, env: &str) -> Result<(), AppError> {
    if !args.file.exists() {
        return Err(AppError::io(format!(
            "File not found: {}",
            args.file.display()
        )));
    }

    let file_name = args
        .file
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or("upload")
        .to_string();
    let mime = mime_guess::from_path(&args.file)
        .first()
        .map(|m| m.to_string());
    let content = tokio::fs::read(&args.file)
        .await
        .map_err(|e| AppError::io(format!("Failed to read file: {e}")))?;

    let source = SourceFile::new(file_name, mime, Bytes::from(content))?;

    output::print_kv("File", &source.file_name);
    output::print_kv("Size", &output::format_file_size(source.size()));
    output::print_kv("Report id", &args.id.to_string());

    let mut request = GenerateReportRequest::new(args.id, source);
    if let Some(prompt) = &args.prompt {
        request = request.with_prompt(prompt);
    }
    if let Some(model) = &args.model {
        request = request.with_model(model);
    }
    if let Some(provider) = &args.provider {
        request = request.with_provider(provider);
    }

    let client = super::build_client(env)?;
    let mut store = GenerationStore::new(client);

    let html = store.generate(request).await?;

    if args.stdout {
        println!("{html}");
        return Ok(());
    }

    let saved = store
        .save_to(&args.output_dir, args.output_name.as_deref())
        .await?;
    if let Some(path) = saved {
        output::print_success(&format!("Generated report saved to {}", path.display()));
    }
    Ok(())
}
