//! Ledger queries
//!
//! Pure read-only functions over a collection of transactions: person
//! listing, balances, filtering, sorting and aggregate statistics. Every
//! function accepts any slice, so they compose over filtered subsets.

use std::collections::HashMap;

use chrono::NaiveDate;

use crate::models::{Money, PersonName, Transaction, TransactionKind};

/// A person's current balance and the transactions it is made of
#[derive(Debug, Clone, PartialEq)]
pub struct PersonBalance {
    /// Canonical (first-seen) name, or the queried name if unknown
    pub person: PersonName,
    /// Positive when the person owes the user
    pub balance: Money,
    /// Matching transactions in storage order
    pub transactions: Vec<Transaction>,
}

/// Distinct persons, sorted case-insensitively
///
/// Each person is shown with the casing of their first transaction in
/// storage order.
pub fn list_persons(transactions: &[Transaction]) -> Vec<PersonName> {
    let mut persons: Vec<PersonName> = Vec::new();
    for txn in transactions {
        let name = txn.person_name();
        if name.is_empty() {
            continue;
        }
        if !persons.contains(&name) {
            persons.push(name);
        }
    }
    persons.sort();
    persons
}

/// Canonical display name for `name`, if the person has any transactions
pub fn canonical_name(transactions: &[Transaction], name: &str) -> Option<PersonName> {
    transactions
        .iter()
        .find(|t| t.is_for(name))
        .map(Transaction::person_name)
}

/// Balance of one person (case-insensitive match)
pub fn balance_of(transactions: &[Transaction], name: &str) -> PersonBalance {
    let matching = filter_by_person(transactions, name);
    let balance = matching.iter().map(|t| t.amount).sum();
    let person = canonical_name(transactions, name).unwrap_or_else(|| PersonName::new(name));

    PersonBalance {
        person,
        balance,
        transactions: matching,
    }
}

/// Transactions dated within `start..=end`
pub fn filter_by_date_range(
    transactions: &[Transaction],
    start: NaiveDate,
    end: NaiveDate,
) -> Vec<Transaction> {
    transactions
        .iter()
        .filter(|t| t.occurred_on >= start && t.occurred_on <= end)
        .cloned()
        .collect()
}

/// Transactions of the given kind
pub fn filter_by_kind(transactions: &[Transaction], kind: TransactionKind) -> Vec<Transaction> {
    transactions
        .iter()
        .filter(|t| t.is_kind(kind))
        .cloned()
        .collect()
}

/// Transactions for one person (case-insensitive)
pub fn filter_by_person(transactions: &[Transaction], name: &str) -> Vec<Transaction> {
    transactions
        .iter()
        .filter(|t| t.is_for(name))
        .cloned()
        .collect()
}

/// Options for filtering transactions; set criteria are combined with AND
#[derive(Debug, Clone, Default)]
pub struct TransactionFilter {
    /// Earliest date, inclusive
    pub start_date: Option<NaiveDate>,
    /// Latest date, inclusive
    pub end_date: Option<NaiveDate>,
    /// Direction or repayment filter
    pub kind: Option<TransactionKind>,
    /// Person name (case-insensitive)
    pub person: Option<String>,
}

impl TransactionFilter {
    /// Create a new empty filter
    pub fn new() -> Self {
        Self::default()
    }

    /// Filter by date range
    pub fn date_range(mut self, start: NaiveDate, end: NaiveDate) -> Self {
        self.start_date = Some(start);
        self.end_date = Some(end);
        self
    }

    /// Only transactions on or after `start`
    pub fn since(mut self, start: NaiveDate) -> Self {
        self.start_date = Some(start);
        self
    }

    /// Only transactions on or before `end`
    pub fn until(mut self, end: NaiveDate) -> Self {
        self.end_date = Some(end);
        self
    }

    /// Filter by kind
    pub fn kind(mut self, kind: TransactionKind) -> Self {
        self.kind = Some(kind);
        self
    }

    /// Filter by person
    pub fn person(mut self, name: impl Into<String>) -> Self {
        self.person = Some(name.into());
        self
    }

    /// Check a single transaction against every set criterion
    pub fn matches(&self, txn: &Transaction) -> bool {
        if let Some(start) = self.start_date {
            if txn.occurred_on < start {
                return false;
            }
        }
        if let Some(end) = self.end_date {
            if txn.occurred_on > end {
                return false;
            }
        }
        if let Some(kind) = self.kind {
            if !txn.is_kind(kind) {
                return false;
            }
        }
        if let Some(person) = &self.person {
            if !txn.is_for(person) {
                return false;
            }
        }
        true
    }

    /// Apply the filter, preserving order
    pub fn apply(&self, transactions: &[Transaction]) -> Vec<Transaction> {
        transactions
            .iter()
            .filter(|t| self.matches(t))
            .cloned()
            .collect()
    }
}

/// Sort order for transaction views
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    /// Oldest date first
    Date,
    /// Smallest signed amount first
    AmountAscending,
    /// Largest signed amount first
    AmountDescending,
    /// Newest date first; same-day entries newest-recorded first
    MostRecent,
}

/// Sort a collection; equal keys keep their original order
pub fn sort_transactions(transactions: &[Transaction], key: SortKey) -> Vec<Transaction> {
    let mut sorted = transactions.to_vec();
    match key {
        SortKey::Date => sorted.sort_by(|a, b| a.occurred_on.cmp(&b.occurred_on)),
        SortKey::AmountAscending => sorted.sort_by(|a, b| a.amount.cmp(&b.amount)),
        SortKey::AmountDescending => sorted.sort_by(|a, b| b.amount.cmp(&a.amount)),
        SortKey::MostRecent => sorted.sort_by(|a, b| {
            b.occurred_on
                .cmp(&a.occurred_on)
                .then(b.recorded_at.cmp(&a.recorded_at))
        }),
    }
    sorted
}

/// Aggregate statistics over a collection
#[derive(Debug, Clone, PartialEq)]
pub struct LedgerStats {
    /// Sum of positive amounts
    pub total_given: Money,
    /// Sum of the absolute value of negative amounts
    pub total_borrowed: Money,
    /// `total_given - total_borrowed`, the plain sum of all amounts
    pub net_position: Money,
    /// Share of transactions flagged as repayments, in percent
    pub repayment_rate: f64,
    /// Mean positive amount, zero if none
    pub average_given: Money,
    /// Mean absolute negative amount, zero if none
    pub average_borrowed: Money,
    pub transaction_count: usize,
    pub person_count: usize,
}

impl LedgerStats {
    /// Compute statistics for `transactions`
    pub fn compute(transactions: &[Transaction]) -> Self {
        let mut total_given = Money::zero();
        let mut total_borrowed = Money::zero();
        let mut given_count = 0;
        let mut borrowed_count = 0;
        let mut repayments = 0;

        for txn in transactions {
            if txn.is_given() {
                total_given += txn.amount;
                given_count += 1;
            } else if txn.is_borrowed() {
                total_borrowed += txn.amount.abs();
                borrowed_count += 1;
            }
            if txn.is_repayment {
                repayments += 1;
            }
        }

        Self {
            total_given,
            total_borrowed,
            net_position: total_given - total_borrowed,
            repayment_rate: repayment_rate(repayments, transactions.len()),
            average_given: Money::average(total_given, given_count),
            average_borrowed: Money::average(total_borrowed, borrowed_count),
            transaction_count: transactions.len(),
            person_count: list_persons(transactions).len(),
        }
    }
}

fn repayment_rate(repayments: usize, total: usize) -> f64 {
    if total == 0 {
        0.0
    } else {
        repayments as f64 * 100.0 / total as f64
    }
}

/// Sum of positive amounts
pub fn total_given(transactions: &[Transaction]) -> Money {
    transactions
        .iter()
        .filter(|t| t.is_given())
        .map(|t| t.amount)
        .sum()
}

/// Sum of absolute negative amounts
pub fn total_borrowed(transactions: &[Transaction]) -> Money {
    transactions
        .iter()
        .filter(|t| t.is_borrowed())
        .map(|t| t.amount.abs())
        .sum()
}

/// Plain sum of all amounts
pub fn net_position(transactions: &[Transaction]) -> Money {
    transactions.iter().map(|t| t.amount).sum()
}

/// Transaction count per person, keyed by canonical name
pub fn transaction_counts(transactions: &[Transaction]) -> Vec<(PersonName, usize)> {
    let mut counts: HashMap<String, usize> = HashMap::new();
    for txn in transactions {
        *counts.entry(txn.person_name().key().to_string()).or_insert(0) += 1;
    }

    list_persons(transactions)
        .into_iter()
        .map(|p| {
            let count = counts.get(p.key()).copied().unwrap_or(0);
            (p, count)
        })
        .collect()
}

/// The person with the most transactions
///
/// Ties go to the alphabetically earliest name (case-insensitive).
pub fn most_active_person(transactions: &[Transaction]) -> Option<PersonName> {
    // Counts come back sorted by key, so keeping the first maximum is the tie-break
    let mut best: Option<(PersonName, usize)> = None;
    for (person, count) in transaction_counts(transactions) {
        match &best {
            Some((_, best_count)) if *best_count >= count => {}
            _ => best = Some((person, count)),
        }
    }
    best.map(|(person, _)| person)
}
