//! Transaction CLI commands
//!
//! Recording, listing and deleting transactions.

use chrono::NaiveDate;
use clap::{Subcommand, ValueEnum};

use crate::config::Settings;
use crate::display::transaction::{format_transaction_details, format_transaction_register};
use crate::error::{LedgerError, LedgerResult};
use crate::models::{Money, RecordedAt, TransactionKind};
use crate::services::{sort_transactions, LedgerService, NewTransaction, SortKey, TransactionFilter};

/// Transaction kind filter
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum KindArg {
    /// Money the user gave
    Given,
    /// Money the user borrowed
    Borrowed,
    /// Transactions flagged as repayments
    Repayment,
}

impl From<KindArg> for TransactionKind {
    fn from(kind: KindArg) -> Self {
        match kind {
            KindArg::Given => TransactionKind::Given,
            KindArg::Borrowed => TransactionKind::Borrowed,
            KindArg::Repayment => TransactionKind::Repayment,
        }
    }
}

/// Transaction sort order
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum SortArg {
    /// Oldest first
    Date,
    /// Newest first
    Recent,
    /// Smallest amount first
    AmountAsc,
    /// Largest amount first
    AmountDesc,
}

impl From<SortArg> for SortKey {
    fn from(sort: SortArg) -> Self {
        match sort {
            SortArg::Date => SortKey::Date,
            SortArg::Recent => SortKey::MostRecent,
            SortArg::AmountAsc => SortKey::AmountAscending,
            SortArg::AmountDesc => SortKey::AmountDescending,
        }
    }
}

/// Transaction subcommands
#[derive(Subcommand)]
pub enum TransactionCommands {
    /// Record money given to (or borrowed from) a person
    Add {
        /// Person name
        person: String,
        /// Amount (e.g. "20", "12.50"; negative means you borrowed)
        #[arg(allow_hyphen_values = true)]
        amount: String,
        /// Transaction date (YYYY-MM-DD), defaults to today
        #[arg(short, long)]
        date: Option<String>,
        /// What the money was for
        #[arg(short, long)]
        purpose: Option<String>,
        /// You borrowed the amount instead of giving it
        #[arg(short, long)]
        borrowed: bool,
        /// Mark as a repayment of earlier debt
        #[arg(short, long)]
        repayment: bool,
    },
    /// List transactions
    List {
        /// Start date (YYYY-MM-DD)
        #[arg(long)]
        from: Option<String>,
        /// End date (YYYY-MM-DD)
        #[arg(long)]
        to: Option<String>,
        /// Only transactions of this kind
        #[arg(short, long, value_enum)]
        kind: Option<KindArg>,
        /// Only transactions with this person
        #[arg(short, long)]
        person: Option<String>,
        /// Sort order (storage order if omitted)
        #[arg(short, long, value_enum)]
        sort: Option<SortArg>,
        /// Show at most this many transactions
        #[arg(short, long)]
        limit: Option<usize>,
    },
    /// Delete a transaction by its recorded timestamp
    Delete {
        /// Timestamp as shown by `list` (YYYY-MM-DD HH:MM:SS)
        timestamp: String,
    },
}

/// Handle a transaction command
pub fn handle_transaction_command(
    service: &mut LedgerService<'_>,
    settings: &Settings,
    cmd: TransactionCommands,
) -> LedgerResult<()> {
    let symbol = settings.currency_symbol.as_str();

    match cmd {
        TransactionCommands::Add {
            person,
            amount,
            date,
            purpose,
            borrowed,
            repayment,
        } => {
            let mut amount = parse_amount(&amount)?;
            if borrowed {
                amount = -amount.abs();
            }

            let date = match date {
                Some(date_str) => parse_date("date", &date_str)?,
                None => chrono::Local::now().date_naive(),
            };

            let mut input = NewTransaction::new(person, amount, date).repayment(repayment);
            if let Some(purpose) = purpose {
                input = input.with_purpose(purpose);
            }

            let txn = service.record(input)?;

            println!("Recorded transaction:");
            print!("{}", format_transaction_details(&txn, symbol));
        }

        TransactionCommands::List {
            from,
            to,
            kind,
            person,
            sort,
            limit,
        } => {
            let mut filter = TransactionFilter::new();
            if let Some(from_str) = from {
                filter = filter.since(parse_date("from", &from_str)?);
            }
            if let Some(to_str) = to {
                filter = filter.until(parse_date("to", &to_str)?);
            }
            if let Some(kind) = kind {
                filter = filter.kind(kind.into());
            }
            if let Some(person) = person {
                filter = filter.person(person);
            }

            let mut transactions = filter.apply(service.transactions());
            if let Some(sort) = sort {
                transactions = sort_transactions(&transactions, sort.into());
            }
            if let Some(limit) = limit {
                transactions.truncate(limit);
            }

            print!("{}", format_transaction_register(&transactions, symbol));
        }

        TransactionCommands::Delete { timestamp } => {
            let recorded_at = RecordedAt::parse(timestamp.trim()).map_err(|_| {
                LedgerError::validation(
                    "timestamp",
                    format!("'{}'. Use YYYY-MM-DD HH:MM:SS", timestamp),
                )
            })?;

            if service.delete(recorded_at)? {
                println!("Deleted transaction recorded at {}", recorded_at);
            } else {
                println!("No transaction recorded at {}", recorded_at);
            }
        }
    }

    Ok(())
}

/// Parse a user-entered amount
pub(crate) fn parse_amount(s: &str) -> LedgerResult<Money> {
    Money::parse(s).map_err(|e| {
        LedgerError::validation(
            "amount",
            format!("'{}'. Use a format like '20' or '12.50' ({})", s, e),
        )
    })
}

/// Parse a YYYY-MM-DD date
pub(crate) fn parse_date(field: &'static str, s: &str) -> LedgerResult<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d")
        .map_err(|_| LedgerError::validation(field, format!("'{}'. Use YYYY-MM-DD", s)))
}
