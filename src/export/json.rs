//! JSON Export functionality
//!
//! Exports transactions with export metadata. The document keeps the
//! `transactions` key of the ledger file, so an export can be loaded back
//! as a ledger.

use std::io::Write;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{LedgerError, LedgerResult};
use crate::models::Transaction;
use crate::services::list_persons;

/// Current export schema version
pub const EXPORT_SCHEMA_VERSION: &str = "1.0.0";

/// Ledger export structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LedgerExport {
    /// Schema version for compatibility checking
    pub schema_version: String,

    /// Export timestamp
    pub exported_at: DateTime<Utc>,

    /// Application version that created the export
    pub app_version: String,

    /// Export metadata
    pub metadata: ExportMetadata,

    /// Exported transactions in storage order
    pub transactions: Vec<Transaction>,
}

/// Export metadata for reference
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportMetadata {
    pub transaction_count: usize,
    pub person_count: usize,
    /// Earliest transaction date
    pub earliest_transaction: Option<String>,
    /// Latest transaction date
    pub latest_transaction: Option<String>,
}

impl LedgerExport {
    pub fn new(transactions: &[Transaction]) -> Self {
        let earliest = transactions.iter().map(|t| t.occurred_on).min();
        let latest = transactions.iter().map(|t| t.occurred_on).max();

        Self {
            schema_version: EXPORT_SCHEMA_VERSION.to_string(),
            exported_at: Utc::now(),
            app_version: env!("CARGO_PKG_VERSION").to_string(),
            metadata: ExportMetadata {
                transaction_count: transactions.len(),
                person_count: list_persons(transactions).len(),
                earliest_transaction: earliest.map(|d| d.format("%Y-%m-%d").to_string()),
                latest_transaction: latest.map(|d| d.format("%Y-%m-%d").to_string()),
            },
            transactions: transactions.to_vec(),
        }
    }
}

/// Export transactions to JSON
pub fn export_ledger_json<W: Write>(
    transactions: &[Transaction],
    writer: &mut W,
    pretty: bool,
) -> LedgerResult<()> {
    let export = LedgerExport::new(transactions);

    let written = if pretty {
        serde_json::to_writer_pretty(&mut *writer, &export)
    } else {
        serde_json::to_writer(&mut *writer, &export)
    };
    written.map_err(|e| LedgerError::Export(e.to_string()))?;

    writeln!(writer).map_err(|e| LedgerError::Export(e.to_string()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Money, RecordedAt};
    use crate::storage::TransactionStore;
    use chrono::NaiveDate;
    use tempfile::TempDir;

    fn sample() -> Vec<Transaction> {
        vec![
            Transaction::new(
                "Alice",
                Money::from_cents(2000),
                NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
                RecordedAt::parse("2024-01-01 12:00:00").unwrap(),
            )
            .with_purpose("Lunch"),
            Transaction::new(
                "bob",
                Money::from_cents(-750),
                NaiveDate::from_ymd_opt(2024, 2, 3).unwrap(),
                RecordedAt::parse("2024-02-03 09:00:00").unwrap(),
            ),
        ]
    }

    #[test]
    fn test_export_metadata() {
        let export = LedgerExport::new(&sample());
        assert_eq!(export.schema_version, EXPORT_SCHEMA_VERSION);
        assert_eq!(export.metadata.transaction_count, 2);
        assert_eq!(export.metadata.person_count, 2);
        assert_eq!(
            export.metadata.earliest_transaction.as_deref(),
            Some("2024-01-01")
        );
        assert_eq!(
            export.metadata.latest_transaction.as_deref(),
            Some("2024-02-03")
        );
    }

    #[test]
    fn test_export_loads_as_ledger() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("export.json");

        let mut buffer = Vec::new();
        export_ledger_json(&sample(), &mut buffer, true).unwrap();
        std::fs::write(&path, &buffer).unwrap();

        let loaded = TransactionStore::new(path).load().unwrap();
        assert_eq!(loaded.transactions(), sample().as_slice());
    }

    #[test]
    fn test_empty_export() {
        let mut buffer = Vec::new();
        export_ledger_json(&[], &mut buffer, false).unwrap();

        let value: serde_json::Value = serde_json::from_slice(&buffer).unwrap();
        assert_eq!(value["transactions"].as_array().unwrap().len(), 0);
        assert!(value["metadata"]["earliest_transaction"].is_null());
    }
}
