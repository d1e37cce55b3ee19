use anyhow::Result;
use clap::{Parser, Subcommand};

use iou_ledger::cli::{
    handle_export_command, handle_person_command, handle_report_command, handle_summary_command,
    handle_transaction_command, ExportArgs, PersonCommands, ReportCommands, TransactionCommands,
};
use iou_ledger::config::{paths::DATA_DIR_ENV, LedgerPaths, Settings};
use iou_ledger::logging::init_tracing;
use iou_ledger::services::LedgerService;
use iou_ledger::storage::{json_file_valid, Storage};

#[derive(Parser)]
#[command(
    name = "iou",
    version,
    about = "Track money you lend to and borrow from people",
    long_about = "iou keeps a log of money moving between you and the people you \
                  lend to or borrow from. Positive amounts mean you gave money, \
                  negative amounts mean you borrowed. Balances, reports and \
                  settlements are derived from that log."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    #[command(flatten)]
    Transaction(TransactionCommands),

    #[command(flatten)]
    Person(PersonCommands),

    /// Show overall statistics
    Summary,

    /// Activity and balance reports
    #[command(subcommand)]
    Report(ReportCommands),

    /// Export transactions to a file
    Export(ExportArgs),

    /// Delete every transaction
    Clear {
        /// Confirm deletion
        #[arg(long)]
        yes: bool,
    },

    /// Show current configuration and paths
    Config {
        /// Write the settings file if it does not exist yet
        #[arg(long)]
        init: bool,
    },
}

fn main() -> Result<()> {
    init_tracing();

    let cli = Cli::parse();

    let paths = LedgerPaths::new()?;
    let settings = Settings::load_or_default(&paths)?;

    let command = match cli.command {
        Some(command) => command,
        None => {
            println!("iou - personal IOU ledger");
            println!();
            println!("Run 'iou --help' for usage information.");
            println!("Run 'iou add Alice 20 --purpose Lunch' to record your first transaction.");
            return Ok(());
        }
    };

    let storage = Storage::new(paths, &settings)?;

    if let Commands::Config { init } = command {
        if init && !storage.paths().settings_file().exists() {
            settings.save(storage.paths())?;
            println!("Wrote default settings.");
            println!();
        }

        let ledger_file = storage.transactions.path();
        let status = if !ledger_file.exists() {
            "not created yet"
        } else if json_file_valid(ledger_file) {
            "ok"
        } else {
            "unreadable"
        };

        println!("IOU Ledger Configuration");
        println!("========================");
        println!("Base directory:   {}", storage.paths().base_dir().display());
        println!("Settings file:    {}", storage.paths().settings_file().display());
        println!("Ledger file:      {} ({})", ledger_file.display(), status);
        println!("Override with:    {}", DATA_DIR_ENV);
        println!();
        println!("Settings:");
        println!("  Currency symbol: {}", settings.currency_symbol);
        println!("  Strict load:     {}", settings.strict_load);
        return Ok(());
    }

    let mut service = LedgerService::open(&storage.transactions, settings.strict_load)?;

    match command {
        Commands::Transaction(cmd) => handle_transaction_command(&mut service, &settings, cmd)?,
        Commands::Person(cmd) => handle_person_command(&mut service, &settings, cmd)?,
        Commands::Summary => handle_summary_command(&service, &settings),
        Commands::Report(cmd) => handle_report_command(&service, &settings, cmd)?,
        Commands::Export(args) => handle_export_command(&service, args)?,
        Commands::Clear { yes } => {
            if !yes {
                println!(
                    "About to delete all {} transactions.",
                    service.ledger().len()
                );
                println!("Use --yes to confirm.");
                return Ok(());
            }
            let dropped = service.clear()?;
            println!("Deleted {} transactions.", dropped);
        }
        Commands::Config { .. } => {}
    }

    Ok(())
}
