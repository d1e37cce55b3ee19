//! IOU Ledger - personal debt tracking between you and the people you lend
//! to or borrow from
//!
//! Every transaction records money moving between the user and one person.
//! A positive amount means the user gave money (the person owes more), a
//! negative amount means the user borrowed. Balances, reports and
//! settlements are all derived from that single signed log.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: Core data models (money, persons, transactions, the ledger)
//! - `storage`: JSON file storage layer
//! - `services`: Queries, commands and the ledger service
//! - `reports`: Person balances, activity over time, the summary
//! - `display`: Terminal formatting
//! - `export`: CSV, JSON and YAML export
//! - `cli`: Command handlers for the `iou` binary
//! - `logging`: Tracing subscriber setup
//!
//! # Example
//!
//! ```rust,ignore
//! use iou_ledger::config::{LedgerPaths, Settings};
//! use iou_ledger::models::Money;
//! use iou_ledger::services::{LedgerService, NewTransaction};
//! use iou_ledger::storage::Storage;
//!
//! let paths = LedgerPaths::new()?;
//! let settings = Settings::load_or_default(&paths)?;
//! let storage = Storage::new(paths, &settings)?;
//! let mut service = LedgerService::open(&storage.transactions, settings.strict_load)?;
//!
//! let today = chrono::Local::now().date_naive();
//! service.record(NewTransaction::new("Alice", Money::from_cents(2000), today))?;
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod logging;
pub mod models;
pub mod reports;
pub mod services;
pub mod storage;

pub use error::LedgerError;
