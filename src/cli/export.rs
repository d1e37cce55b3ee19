//! CLI command for data export

use std::path::PathBuf;

use clap::{Args, ValueEnum};

use crate::error::LedgerResult;
use crate::export::{export_ledger_json, export_ledger_yaml, export_transactions_csv};
use crate::services::{LedgerService, TransactionFilter};

use super::report::{create_output, finish_output};

/// Export format options
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ExportFormat {
    /// CSV format (spreadsheet-compatible)
    Csv,
    /// JSON format (loadable as a ledger file)
    Json,
    /// YAML format (human-readable)
    Yaml,
}

/// Arguments of the export command
#[derive(Args, Debug)]
pub struct ExportArgs {
    /// Output file path
    pub output: PathBuf,

    /// Export format
    #[arg(short, long, value_enum, default_value = "csv")]
    pub format: ExportFormat,

    /// Only transactions with this person
    #[arg(short, long)]
    pub person: Option<String>,

    /// Pretty-print JSON output
    #[arg(long)]
    pub pretty: bool,
}

/// Handle the export command
pub fn handle_export_command(service: &LedgerService<'_>, args: ExportArgs) -> LedgerResult<()> {
    let transactions = match &args.person {
        Some(person) => TransactionFilter::new()
            .person(person.clone())
            .apply(service.transactions()),
        None => service.transactions().to_vec(),
    };

    let mut writer = create_output(&args.output)?;
    match args.format {
        ExportFormat::Csv => export_transactions_csv(&transactions, &mut writer)?,
        ExportFormat::Json => export_ledger_json(&transactions, &mut writer, args.pretty)?,
        ExportFormat::Yaml => export_ledger_yaml(&transactions, &mut writer)?,
    }
    finish_output(writer)?;

    tracing::info!(
        path = %args.output.display(),
        count = transactions.len(),
        "ledger exported"
    );
    println!(
        "Exported {} transactions to: {}",
        transactions.len(),
        args.output.display()
    );

    Ok(())
}
