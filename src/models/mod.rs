//! Core data models for the IOU ledger
//!
//! This module contains the data structures of the debt-tracking domain:
//! money amounts, person names, transactions and the ledger snapshot.

pub mod ids;
pub mod ledger;
pub mod money;
pub mod person;
pub mod transaction;

pub use ids::{RecordedAt, RECORDED_AT_FORMAT};
pub use ledger::Ledger;
pub use money::{Money, MoneyParseError};
pub use person::PersonName;
pub use transaction::{Transaction, TransactionKind};
