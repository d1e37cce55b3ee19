//! Ledger summary
//!
//! Headline statistics for the whole ledger.

use std::fmt;

use chrono::NaiveDate;

use crate::models::{Money, PersonName, Transaction};
use crate::services::query::{most_active_person, LedgerStats};

/// Which way money flows overall
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Position {
    /// Others owe the user on balance
    NetLender,
    /// The user owes others on balance
    NetBorrower,
    Even,
}

impl Position {
    pub fn from_net(net: Money) -> Self {
        if net.is_positive() {
            Self::NetLender
        } else if net.is_negative() {
            Self::NetBorrower
        } else {
            Self::Even
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NetLender => write!(f, "net lender"),
            Self::NetBorrower => write!(f, "net borrower"),
            Self::Even => write!(f, "even"),
        }
    }
}

/// Summary of the ledger
#[derive(Debug, Clone)]
pub struct LedgerSummary {
    pub stats: LedgerStats,
    /// Earliest and latest transaction dates
    pub period: Option<(NaiveDate, NaiveDate)>,
    /// `(total_given + total_borrowed) / count`
    pub average_transaction: Money,
    pub most_active: Option<PersonName>,
    pub position: Position,
}

impl LedgerSummary {
    pub fn generate(transactions: &[Transaction]) -> Self {
        let stats = LedgerStats::compute(transactions);

        let first = transactions.iter().map(|t| t.occurred_on).min();
        let last = transactions.iter().map(|t| t.occurred_on).max();
        let period = first.zip(last);

        let average_transaction = Money::average(
            stats.total_given + stats.total_borrowed,
            stats.transaction_count,
        );

        Self {
            position: Position::from_net(stats.net_position),
            most_active: most_active_person(transactions),
            average_transaction,
            period,
            stats,
        }
    }

    /// Days covered by the tracking period, inclusive
    pub fn tracking_days(&self) -> i64 {
        self.period
            .map(|(start, end)| (end - start).num_days() + 1)
            .unwrap_or(0)
    }

    /// Format the summary for terminal display
    pub fn format_terminal(&self, symbol: &str) -> String {
        let mut output = String::new();
        let stats = &self.stats;

        output.push_str("Ledger Summary\n");
        output.push_str(&"=".repeat(40));
        output.push('\n');

        if stats.transaction_count == 0 {
            output.push_str("No transactions recorded.\n");
            return output;
        }

        output.push_str(&format!(
            "Total given:         {}\n",
            stats.total_given.format_with_symbol(symbol)
        ));
        output.push_str(&format!(
            "Total borrowed:      {}\n",
            stats.total_borrowed.format_with_symbol(symbol)
        ));
        output.push_str(&format!(
            "Net position:        {}\n",
            stats.net_position.format_signed(symbol)
        ));
        output.push_str(&format!(
            "Transactions:        {}\n",
            stats.transaction_count
        ));
        output.push_str(&format!("People:              {}\n", stats.person_count));
        output.push_str(&format!(
            "Repayment rate:      {:.1}%\n",
            stats.repayment_rate
        ));
        output.push_str(&format!(
            "Average given:       {}\n",
            stats.average_given.format_with_symbol(symbol)
        ));
        output.push_str(&format!(
            "Average borrowed:    {}\n",
            stats.average_borrowed.format_with_symbol(symbol)
        ));
        output.push_str(&format!(
            "Average transaction: {}\n",
            self.average_transaction.format_with_symbol(symbol)
        ));

        if let Some((start, end)) = self.period {
            output.push_str(&format!(
                "Tracking period:     {} to {} ({} days)\n",
                start.format("%Y-%m-%d"),
                end.format("%Y-%m-%d"),
                self.tracking_days()
            ));
        }
        if let Some(person) = &self.most_active {
            output.push_str(&format!("Most active:         {}\n", person));
        }

        output.push('\n');
        match self.position {
            Position::NetLender => output.push_str(&format!(
                "You are a net lender: others owe you {}.\n",
                stats.net_position.format_with_symbol(symbol)
            )),
            Position::NetBorrower => output.push_str(&format!(
                "You are a net borrower: you owe others {}.\n",
                stats.net_position.abs().format_with_symbol(symbol)
            )),
            Position::Even => output.push_str("You are all square.\n"),
        }

        output
    }
}
