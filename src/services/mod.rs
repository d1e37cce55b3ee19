//! Service layer for the IOU ledger
//!
//! Queries and commands are pure functions over ledger snapshots; the
//! `LedgerService` adds persistence on top of the commands.

pub mod command;
pub mod ledger;
pub mod query;

pub use command::{NewTransaction, SETTLEMENT_PURPOSE};
pub use ledger::LedgerService;
pub use query::{
    balance_of, list_persons, most_active_person, sort_transactions, LedgerStats,
    PersonBalance, SortKey, TransactionFilter,
};
