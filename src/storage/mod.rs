//! Storage layer for the IOU ledger
//!
//! Provides JSON file storage with atomic writes and automatic directory
//! creation.

pub mod file_io;
pub mod transactions;

pub use file_io::{json_file_valid, read_json, write_json_atomic};
pub use transactions::TransactionStore;

use crate::config::{paths::LedgerPaths, settings::Settings};
use crate::error::LedgerError;

/// Storage coordinator tying the resolved paths to the transaction store
pub struct Storage {
    paths: LedgerPaths,
    pub transactions: TransactionStore,
}

impl Storage {
    /// Create a new Storage instance
    pub fn new(paths: LedgerPaths, settings: &Settings) -> Result<Self, LedgerError> {
        paths.ensure_directories()?;

        Ok(Self {
            transactions: TransactionStore::new(settings.resolve_ledger_file(&paths)),
            paths,
        })
    }

    /// Get the paths configuration
    pub fn paths(&self) -> &LedgerPaths {
        &self.paths
    }
}
