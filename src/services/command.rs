//! Ledger commands
//!
//! Mutating operations expressed as pure functions: each takes the current
//! snapshot and returns the next one. Persisting the result is the caller's
//! job (see [`LedgerService`](super::LedgerService)).

use chrono::{NaiveDate, NaiveDateTime};

use crate::error::{LedgerError, LedgerResult};
use crate::models::{Ledger, Money, RecordedAt, Transaction};

use super::query::balance_of;

/// Purpose written on generated settlement transactions
pub const SETTLEMENT_PURPOSE: &str = "Full settlement";

/// Input for recording a new transaction
#[derive(Debug, Clone)]
pub struct NewTransaction {
    pub person: String,
    /// Positive when the user gave money, negative when the user borrowed
    pub amount: Money,
    pub date: NaiveDate,
    pub purpose: Option<String>,
    pub is_repayment: bool,
}

impl NewTransaction {
    /// Create an input with no purpose that is not a repayment
    pub fn new(person: impl Into<String>, amount: Money, date: NaiveDate) -> Self {
        Self {
            person: person.into(),
            amount,
            date,
            purpose: None,
            is_repayment: false,
        }
    }

    pub fn with_purpose(mut self, purpose: impl Into<String>) -> Self {
        self.purpose = Some(purpose.into());
        self
    }

    pub fn repayment(mut self, is_repayment: bool) -> Self {
        self.is_repayment = is_repayment;
        self
    }

    /// Check the preconditions of recording against `today`
    pub fn validate(&self, today: NaiveDate) -> LedgerResult<()> {
        if self.person.trim().is_empty() {
            return Err(LedgerError::validation("person", "name cannot be empty"));
        }
        if self.amount.is_zero() {
            return Err(LedgerError::validation("amount", "must not be zero"));
        }
        if !self.amount.is_within_limit() {
            return Err(LedgerError::validation(
                "amount",
                format!("must not exceed {}", Money::MAX_AMOUNT),
            ));
        }
        if self.date > today {
            return Err(LedgerError::validation(
                "date",
                format!("{} is in the future", self.date.format("%Y-%m-%d")),
            ));
        }
        Ok(())
    }
}

/// Record a transaction
///
/// `now` is the local wall-clock time: its date bounds `input.date` and it
/// seeds the identity timestamp. On validation failure the ledger is not
/// touched.
pub fn record_transaction(
    ledger: &Ledger,
    input: NewTransaction,
    now: NaiveDateTime,
) -> LedgerResult<Ledger> {
    let txn = build_transaction(ledger, input, now)?;
    Ok(ledger.append(txn))
}

/// Validate `input` and build the transaction `record_transaction` would append
pub fn build_transaction(
    ledger: &Ledger,
    input: NewTransaction,
    now: NaiveDateTime,
) -> LedgerResult<Transaction> {
    input.validate(now.date())?;

    let recorded_at = ledger.next_recorded_at(now);
    let mut txn = Transaction::new(input.person.trim(), input.amount, input.date, recorded_at);
    if let Some(purpose) = input.purpose {
        txn.purpose = purpose;
    }
    txn.is_repayment = input.is_repayment;

    Ok(txn)
}

/// Delete the transaction recorded at `recorded_at`
///
/// Deleting an unknown entry succeeds and changes nothing.
pub fn delete_transaction(ledger: &Ledger, recorded_at: RecordedAt) -> Ledger {
    ledger.remove(recorded_at)
}

/// Zero a person's balance with a generated repayment dated today
///
/// Settled persons (and unknown ones) are left alone.
pub fn settle_person(ledger: &Ledger, name: &str, now: NaiveDateTime) -> Ledger {
    let current = balance_of(ledger.transactions(), name);
    if current.balance.is_zero() {
        return ledger.clone();
    }

    let recorded_at = ledger.next_recorded_at(now);
    let settlement = Transaction::new(
        current.person.display(),
        -current.balance,
        now.date(),
        recorded_at,
    )
    .with_purpose(SETTLEMENT_PURPOSE)
    .as_repayment();

    ledger.append(settlement)
}

/// Drop every transaction
pub fn clear_all(_ledger: &Ledger) -> Ledger {
    Ledger::new()
}
