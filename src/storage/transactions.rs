//! Transaction store for JSON storage
//!
//! Loads and persists the whole ledger as a single document of the form
//! `{"transactions": [...]}`.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::LedgerResult;
use crate::models::{Ledger, Transaction};

use super::file_io::{read_json, write_json_atomic};

/// Serializable ledger document
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct LedgerFile {
    #[serde(default)]
    transactions: Vec<Transaction>,
}

/// Durable home of the ledger
pub struct TransactionStore {
    path: PathBuf,
}

impl TransactionStore {
    /// Create a store backed by the file at `path`
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Location of the ledger file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the ledger
    ///
    /// A missing file is an empty ledger. A file that cannot be read or
    /// parsed is a `StorageRead` error. Zero-amount entries are dropped with a
    /// warning.
    pub fn load(&self) -> LedgerResult<Ledger> {
        let file: LedgerFile = read_json(&self.path)?;

        let total = file.transactions.len();
        let transactions: Vec<Transaction> = file
            .transactions
            .into_iter()
            .filter(|txn| !txn.amount.is_zero())
            .collect();
        if transactions.len() < total {
            tracing::warn!(
                path = %self.path.display(),
                skipped = total - transactions.len(),
                "skipping zero-amount entries"
            );
        }

        let ledger = Ledger::from_transactions(transactions);

        let duplicates = ledger.duplicate_recorded_at();
        if !duplicates.is_empty() {
            tracing::warn!(
                path = %self.path.display(),
                count = duplicates.len(),
                "ledger contains entries sharing a timestamp; delete removes the first match"
            );
        }

        tracing::debug!(
            path = %self.path.display(),
            transactions = ledger.len(),
            "ledger loaded"
        );
        Ok(ledger)
    }

    /// Load the ledger, treating an unreadable file as empty
    ///
    /// The failure is logged instead of returned.
    pub fn load_lenient(&self) -> Ledger {
        match self.load() {
            Ok(ledger) => ledger,
            Err(e) => {
                tracing::warn!(
                    path = %self.path.display(),
                    error = %e,
                    "could not load ledger, starting empty"
                );
                Ledger::new()
            }
        }
    }

    /// Replace the stored ledger with `ledger`
    pub fn persist(&self, ledger: &Ledger) -> LedgerResult<()> {
        let file = LedgerFile {
            transactions: ledger.transactions().to_vec(),
        };
        write_json_atomic(&self.path, &file)?;

        tracing::debug!(
            path = %self.path.display(),
            transactions = ledger.len(),
            "ledger persisted"
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::LedgerError;
    use crate::models::{Money, RecordedAt};
    use chrono::NaiveDate;
    use std::collections::HashSet;
    use tempfile::TempDir;

    fn create_test_store() -> (TempDir, TransactionStore) {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("ledger.json");
        let store = TransactionStore::new(path);
        (temp_dir, store)
    }

    fn txn(person: &str, cents: i64, stamp: &str) -> Transaction {
        Transaction::new(
            person,
            Money::from_cents(cents),
            NaiveDate::from_ymd_opt(2024, 1, 15).unwrap(),
            RecordedAt::parse(stamp).unwrap(),
        )
    }

    #[test]
    fn test_empty_load() {
        let (_temp_dir, store) = create_test_store();
        assert!(store.load().unwrap().is_empty());
        assert!(store.load_lenient().is_empty());
    }

    #[test]
    fn test_persist_and_reload() {
        let (_temp_dir, store) = create_test_store();

        let ledger = Ledger::new()
            .append(txn("Alice", 2000, "2024-01-15 10:00:00").with_purpose("Lunch"))
            .append(txn("Bob", -550, "2024-01-15 10:00:01").as_repayment());

        store.persist(&ledger).unwrap();
        let loaded = store.load().unwrap();

        let original: HashSet<_> = ledger.iter().map(|t| t.recorded_at).collect();
        let reloaded: HashSet<_> = loaded.iter().map(|t| t.recorded_at).collect();
        assert_eq!(original, reloaded);
        assert_eq!(loaded, ledger);
    }

    #[test]
    fn test_persist_replaces_previous_content() {
        let (_temp_dir, store) = create_test_store();

        let first = Ledger::new().append(txn("Alice", 100, "2024-01-15 10:00:00"));
        store.persist(&first).unwrap();
        store.persist(&Ledger::new()).unwrap();

        assert!(store.load().unwrap().is_empty());
    }

    #[test]
    fn test_corrupt_file_strict_vs_lenient() {
        let (_temp_dir, store) = create_test_store();
        std::fs::write(store.path(), "this is not json").unwrap();

        assert!(matches!(store.load(), Err(LedgerError::StorageRead(_))));
        assert!(store.load_lenient().is_empty());
    }

    #[test]
    fn test_reads_original_tracker_file() {
        let (_temp_dir, store) = create_test_store();
        std::fs::write(
            store.path(),
            r#"{"transactions": [
                {"person": "Alice", "amount": 20.0, "date": "2024-01-01",
                 "purpose": "Lunch", "is_repayment": false,
                 "timestamp": "2024-01-01 12:00:00"},
                {"person": "alice", "amount": -5.0, "date": "2024-01-02",
                 "purpose": "", "is_repayment": false,
                 "timestamp": "2024-01-02 08:30:00"}
            ]}"#,
        )
        .unwrap();

        let ledger = store.load().unwrap();
        assert_eq!(ledger.len(), 2);
        assert_eq!(ledger.transactions()[1].amount.cents(), -500);
    }

    #[test]
    fn test_zero_amount_entries_are_skipped() {
        let (_temp_dir, store) = create_test_store();
        std::fs::write(
            store.path(),
            r#"{"transactions": [
                {"person": "Alice", "amount": 0.004, "date": "2024-01-01",
                 "timestamp": "2024-01-01 12:00:00"},
                {"person": "Alice", "amount": 0, "date": "2024-01-01",
                 "timestamp": "2024-01-01 12:00:01"},
                {"person": "Alice", "amount": 5.0, "date": "2024-01-02",
                 "timestamp": "2024-01-02 08:30:00"}
            ]}"#,
        )
        .unwrap();

        let ledger = store.load().unwrap();
        assert_eq!(ledger.len(), 1);
        assert!(ledger.iter().all(|t| !t.amount.is_zero()));
    }

    #[test]
    fn test_out_of_range_amount_is_read_error() {
        let (_temp_dir, store) = create_test_store();
        std::fs::write(
            store.path(),
            r#"{"transactions": [
                {"person": "A", "amount": 1e300, "date": "2024-01-01",
                 "timestamp": "2024-01-01 12:00:00"},
                {"person": "A", "amount": 5.0, "date": "2024-01-01",
                 "timestamp": "2024-01-01 12:00:01"}
            ]}"#,
        )
        .unwrap();

        assert!(matches!(store.load(), Err(LedgerError::StorageRead(_))));
        assert!(store.load_lenient().is_empty());
    }

    #[test]
    fn test_file_without_transactions_key_is_empty() {
        let (_temp_dir, store) = create_test_store();
        std::fs::write(store.path(), "{}").unwrap();
        assert!(store.load().unwrap().is_empty());
    }
}
