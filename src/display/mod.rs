//! Display formatting for terminal output
//!
//! Tables and detail views for transactions and people.

pub mod person;
pub mod report;
pub mod transaction;

pub use person::{format_balance_details, format_person_list, format_top_balances};
pub use transaction::{format_transaction_details, format_transaction_register};
