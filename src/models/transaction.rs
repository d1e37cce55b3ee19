//! Transaction model
//!
//! A single money movement between the user and one person. Transactions are
//! immutable once recorded; correcting one means deleting it and recording a
//! new one.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::ids::RecordedAt;
use super::money::Money;
use super::person::PersonName;

/// Direction-based classification used for filtering
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransactionKind {
    /// The user gave money (positive amount)
    Given,
    /// The user borrowed money (negative amount)
    Borrowed,
    /// Flagged as paying down earlier debt, either direction
    Repayment,
}

impl fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Given => write!(f, "given"),
            Self::Borrowed => write!(f, "borrowed"),
            Self::Repayment => write!(f, "repayment"),
        }
    }
}

impl FromStr for TransactionKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "given" | "gave" | "lent" => Ok(Self::Given),
            "borrowed" | "borrow" => Ok(Self::Borrowed),
            "repayment" | "repayments" | "repaid" => Ok(Self::Repayment),
            other => Err(format!(
                "Unknown transaction kind '{}'. Use given, borrowed or repayment",
                other
            )),
        }
    }
}

/// A recorded debt movement
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    /// Counterparty name as entered
    pub person: String,

    /// Positive when the user gave money, negative when the user borrowed
    pub amount: Money,

    /// Calendar date the money changed hands
    #[serde(rename = "date")]
    pub occurred_on: NaiveDate,

    /// Free-text note
    #[serde(default)]
    pub purpose: String,

    /// Informational marker; has no effect on balances
    #[serde(default)]
    pub is_repayment: bool,

    /// When the entry was recorded; identifies it for deletion
    #[serde(rename = "timestamp")]
    pub recorded_at: RecordedAt,
}

impl Transaction {
    /// Create a transaction with no purpose that is not a repayment
    pub fn new(
        person: impl Into<String>,
        amount: Money,
        occurred_on: NaiveDate,
        recorded_at: RecordedAt,
    ) -> Self {
        Self {
            person: person.into(),
            amount,
            occurred_on,
            purpose: String::new(),
            is_repayment: false,
            recorded_at,
        }
    }

    /// Set the purpose note
    pub fn with_purpose(mut self, purpose: impl Into<String>) -> Self {
        self.purpose = purpose.into();
        self
    }

    /// Mark as a repayment
    pub fn as_repayment(mut self) -> Self {
        self.is_repayment = true;
        self
    }

    /// The counterparty as a case-insensitive name
    pub fn person_name(&self) -> PersonName {
        PersonName::new(&self.person)
    }

    /// Whether this transaction belongs to `name` (case-insensitive)
    pub fn is_for(&self, name: &str) -> bool {
        super::person::normalize(&self.person) == super::person::normalize(name)
    }

    /// The user gave money
    pub fn is_given(&self) -> bool {
        self.amount.is_positive()
    }

    /// The user borrowed money
    pub fn is_borrowed(&self) -> bool {
        self.amount.is_negative()
    }

    /// Check against a kind filter
    pub fn is_kind(&self, kind: TransactionKind) -> bool {
        match kind {
            TransactionKind::Given => self.is_given(),
            TransactionKind::Borrowed => self.is_borrowed(),
            TransactionKind::Repayment => self.is_repayment,
        }
    }

    /// Human-readable direction
    pub fn direction_label(&self) -> &'static str {
        if self.is_given() {
            "You gave"
        } else {
            "You borrowed"
        }
    }
}

impl fmt::Display for Transaction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {}",
            self.occurred_on.format("%Y-%m-%d"),
            self.person,
            self.amount
        )
    }
}
