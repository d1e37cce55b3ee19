//! CLI commands for reports
//!
//! The ledger summary and the activity and balance reports.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use clap::Subcommand;

use crate::config::Settings;
use crate::display::person::format_top_balances;
use crate::error::{LedgerError, LedgerResult};
use crate::reports::{FlowReport, LedgerSummary, MonthlyReport, TopBalances};
use crate::services::LedgerService;

/// Report subcommands
#[derive(Subcommand, Debug)]
pub enum ReportCommands {
    /// Net flow and transaction count per month
    Monthly {
        /// Export to CSV file
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Cumulative net position over time
    #[command(alias = "cumulative")]
    Flow {
        /// Export to CSV file
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// People with the largest balances on each side
    Top {
        /// Number of people per side
        #[arg(short, long, default_value = "5")]
        limit: usize,
    },
}

/// Print the ledger summary
pub fn handle_summary_command(service: &LedgerService<'_>, settings: &Settings) {
    let summary = LedgerSummary::generate(service.transactions());
    print!("{}", summary.format_terminal(&settings.currency_symbol));
}

/// Handle report commands
pub fn handle_report_command(
    service: &LedgerService<'_>,
    settings: &Settings,
    cmd: ReportCommands,
) -> LedgerResult<()> {
    let symbol = settings.currency_symbol.as_str();
    let transactions = service.transactions();

    match cmd {
        ReportCommands::Monthly { output } => {
            let report = MonthlyReport::generate(transactions);
            match output {
                Some(path) => {
                    let mut writer = create_output(&path)?;
                    report.export_csv(&mut writer)?;
                    finish_output(writer)?;
                    println!("Monthly report exported to: {}", path.display());
                }
                None => print!("{}", report.format_terminal(symbol)),
            }
        }

        ReportCommands::Flow { output } => {
            let report = FlowReport::generate(transactions);
            match output {
                Some(path) => {
                    let mut writer = create_output(&path)?;
                    report.export_csv(&mut writer)?;
                    finish_output(writer)?;
                    println!("Flow report exported to: {}", path.display());
                }
                None => print!("{}", report.format_terminal(symbol)),
            }
        }

        ReportCommands::Top { limit } => {
            let top = TopBalances::generate(transactions, limit);
            print!("{}", format_top_balances(&top, symbol));
        }
    }

    Ok(())
}

/// Open a buffered output file
pub(crate) fn create_output(path: &Path) -> LedgerResult<BufWriter<File>> {
    let file = File::create(path).map_err(|e| {
        LedgerError::Export(format!("Failed to create file {}: {}", path.display(), e))
    })?;
    Ok(BufWriter::new(file))
}

/// Flush a buffered output file, surfacing write errors
pub(crate) fn finish_output(mut writer: BufWriter<File>) -> LedgerResult<()> {
    writer
        .flush()
        .map_err(|e| LedgerError::Export(e.to_string()))
}
