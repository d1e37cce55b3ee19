//! Person CLI commands
//!
//! Balances per person and settlement.

use clap::{Subcommand, ValueEnum};

use crate::config::Settings;
use crate::display::person::{format_balance_details, format_person_list};
use crate::error::LedgerResult;
use crate::models::Money;
use crate::reports::{BalanceStatus, PersonReport, PersonReportOptions, PersonSort};
use crate::services::{balance_of, LedgerService};

/// Balance status filter
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum StatusArg {
    All,
    /// People who owe you
    OwesMe,
    /// People you owe
    IOwe,
    /// People with a zero balance
    Settled,
}

impl From<StatusArg> for BalanceStatus {
    fn from(status: StatusArg) -> Self {
        match status {
            StatusArg::All => BalanceStatus::All,
            StatusArg::OwesMe => BalanceStatus::OwesMe,
            StatusArg::IOwe => BalanceStatus::IOwe,
            StatusArg::Settled => BalanceStatus::Settled,
        }
    }
}

/// Person sort order
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum PersonSortArg {
    Name,
    /// Largest balance first
    BalanceDesc,
    /// Smallest balance first
    BalanceAsc,
    /// Most recent activity first
    Recent,
}

impl From<PersonSortArg> for PersonSort {
    fn from(sort: PersonSortArg) -> Self {
        match sort {
            PersonSortArg::Name => PersonSort::Name,
            PersonSortArg::BalanceDesc => PersonSort::BalanceHighToLow,
            PersonSortArg::BalanceAsc => PersonSort::BalanceLowToHigh,
            PersonSortArg::Recent => PersonSort::MostRecent,
        }
    }
}

/// Person subcommands
#[derive(Subcommand)]
pub enum PersonCommands {
    /// List everyone you have transactions with
    Persons {
        /// Only people with this balance status
        #[arg(long, value_enum, default_value = "all")]
        status: StatusArg,
        /// Only names containing this text (case-insensitive)
        #[arg(long)]
        search: Option<String>,
        /// Sort order
        #[arg(long, value_enum, default_value = "name")]
        sort: PersonSortArg,
    },
    /// Show one person's balance and history
    Balance {
        /// Person name (case-insensitive)
        person: String,
    },
    /// Record a repayment that brings a person's balance to zero
    Settle {
        /// Person name (case-insensitive)
        person: String,
    },
}

/// Handle a person command
pub fn handle_person_command(
    service: &mut LedgerService<'_>,
    settings: &Settings,
    cmd: PersonCommands,
) -> LedgerResult<()> {
    let symbol = settings.currency_symbol.as_str();

    match cmd {
        PersonCommands::Persons {
            status,
            search,
            sort,
        } => {
            let options = PersonReportOptions {
                status: status.into(),
                search,
                sort: sort.into(),
            };
            let report = PersonReport::generate(service.transactions(), &options);
            print!("{}", format_person_list(&report.rows, symbol));
        }

        PersonCommands::Balance { person } => {
            let result = balance_of(service.transactions(), &person);
            print!("{}", format_balance_details(&result, symbol));
        }

        PersonCommands::Settle { person } => match service.settle(&person)? {
            Some(txn) => {
                println!(
                    "Settled with {}: recorded {} on {}",
                    txn.person,
                    txn.amount.format_signed(symbol),
                    txn.occurred_on.format("%Y-%m-%d")
                );
                println!("Balance is now {}", Money::zero().format_with_symbol(symbol));
            }
            None => {
                let result = balance_of(service.transactions(), &person);
                if result.transactions.is_empty() {
                    println!("No transactions with {}", person.trim());
                } else {
                    println!("{} is already settled", result.person);
                }
            }
        },
    }

    Ok(())
}
