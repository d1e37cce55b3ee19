//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the service layer.

pub mod export;
pub mod person;
pub mod report;
pub mod transaction;

pub use export::{handle_export_command, ExportArgs, ExportFormat};
pub use person::{handle_person_command, PersonCommands};
pub use report::{handle_report_command, handle_summary_command, ReportCommands};
pub use transaction::{handle_transaction_command, TransactionCommands};
