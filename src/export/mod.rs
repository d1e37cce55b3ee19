//! Export module
//!
//! Writes transactions out in several formats:
//! - CSV: one row per transaction (spreadsheet-compatible)
//! - JSON: transactions plus metadata, loadable as a ledger file
//! - YAML: the JSON document in human-readable form

pub mod csv;
pub mod json;
pub mod yaml;

pub use csv::export_transactions_csv;
pub use json::{export_ledger_json, LedgerExport, EXPORT_SCHEMA_VERSION};
pub use yaml::export_ledger_yaml;
