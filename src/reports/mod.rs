//! Reports over the ledger
//!
//! Person balances, activity over time and the overall summary.

pub mod activity;
pub mod persons;
pub mod summary;

pub use activity::{FlowPoint, FlowReport, MonthlyActivity, MonthlyReport};
pub use persons::{
    BalanceStatus, PersonReport, PersonReportOptions, PersonSort, PersonSummary, TopBalances,
};
pub use summary::{LedgerSummary, Position};
