//! Ledger snapshot
//!
//! An ordered, immutable view of every active transaction. Mutating
//! operations return a new snapshot and leave the original untouched.

use chrono::NaiveDateTime;

use super::ids::RecordedAt;
use super::transaction::Transaction;

/// The collection of all active transactions, in insertion order
///
/// Order is not chronological; callers sort explicitly when it matters.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Ledger {
    transactions: Vec<Transaction>,
}

impl Ledger {
    /// Create an empty ledger
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a ledger from transactions in storage order
    pub fn from_transactions(transactions: Vec<Transaction>) -> Self {
        Self { transactions }
    }

    /// All transactions in storage order
    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Transaction> {
        self.transactions.iter()
    }

    pub fn len(&self) -> usize {
        self.transactions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty()
    }

    /// The most recently appended transaction
    pub fn last(&self) -> Option<&Transaction> {
        self.transactions.last()
    }

    /// Find a transaction by its identity timestamp
    pub fn get(&self, recorded_at: RecordedAt) -> Option<&Transaction> {
        self.transactions
            .iter()
            .find(|t| t.recorded_at == recorded_at)
    }

    pub fn contains(&self, recorded_at: RecordedAt) -> bool {
        self.get(recorded_at).is_some()
    }

    /// Return a new ledger with `transaction` appended
    pub fn append(&self, transaction: Transaction) -> Self {
        let mut transactions = self.transactions.clone();
        transactions.push(transaction);
        Self { transactions }
    }

    /// Return a new ledger without the transaction recorded at `recorded_at`
    ///
    /// Unknown keys leave the ledger unchanged. If legacy data holds several
    /// entries with the same timestamp, only the first is removed.
    pub fn remove(&self, recorded_at: RecordedAt) -> Self {
        let mut transactions = self.transactions.clone();
        if let Some(pos) = transactions
            .iter()
            .position(|t| t.recorded_at == recorded_at)
        {
            transactions.remove(pos);
        }
        Self { transactions }
    }

    /// First identity timestamp at or after `now` that no entry uses yet
    pub fn next_recorded_at(&self, now: NaiveDateTime) -> RecordedAt {
        let mut candidate = RecordedAt::new(now);
        while self.contains(candidate) {
            candidate = candidate.next_second();
        }
        candidate
    }

    /// Identity timestamps that appear more than once
    pub fn duplicate_recorded_at(&self) -> Vec<RecordedAt> {
        let mut seen = std::collections::HashSet::new();
        let mut duplicates = Vec::new();
        for txn in &self.transactions {
            if !seen.insert(txn.recorded_at) && !duplicates.contains(&txn.recorded_at) {
                duplicates.push(txn.recorded_at);
            }
        }
        duplicates
    }
}

impl<'a> IntoIterator for &'a Ledger {
    type Item = &'a Transaction;
    type IntoIter = std::slice::Iter<'a, Transaction>;

    fn into_iter(self) -> Self::IntoIter {
        self.transactions.iter()
    }
}

impl FromIterator<Transaction> for Ledger {
    fn from_iter<I: IntoIterator<Item = Transaction>>(iter: I) -> Self {
        Self {
            transactions: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Money;
    use chrono::NaiveDate;

    fn txn(person: &str, cents: i64, stamp: &str) -> Transaction {
        Transaction::new(
            person,
            Money::from_cents(cents),
            NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            RecordedAt::parse(stamp).unwrap(),
        )
    }

    #[test]
    fn test_append_is_pure() {
        let empty = Ledger::new();
        let one = empty.append(txn("Alice", 100, "2024-01-01 10:00:00"));

        assert!(empty.is_empty());
        assert_eq!(one.len(), 1);
        assert_eq!(one.last().unwrap().person, "Alice");
    }

    #[test]
    fn test_remove_by_identity() {
        let ledger = Ledger::new()
            .append(txn("Alice", 100, "2024-01-01 10:00:00"))
            .append(txn("Bob", 200, "2024-01-01 10:00:01"));

        let id = RecordedAt::parse("2024-01-01 10:00:00").unwrap();
        let removed = ledger.remove(id);

        assert_eq!(removed.len(), 1);
        assert!(!removed.contains(id));
        assert_eq!(ledger.len(), 2);
    }

    #[test]
    fn test_remove_unknown_is_noop() {
        let ledger = Ledger::new().append(txn("Alice", 100, "2024-01-01 10:00:00"));
        let id = RecordedAt::parse("2030-01-01 00:00:00").unwrap();
        assert_eq!(ledger.remove(id), ledger);
    }

    #[test]
    fn test_remove_first_duplicate_only() {
        let ledger = Ledger::new()
            .append(txn("Alice", 100, "2024-01-01 10:00:00"))
            .append(txn("Bob", 200, "2024-01-01 10:00:00"));

        let id = RecordedAt::parse("2024-01-01 10:00:00").unwrap();
        let removed = ledger.remove(id);

        assert_eq!(removed.len(), 1);
        assert_eq!(removed.transactions()[0].person, "Bob");
        assert_eq!(ledger.duplicate_recorded_at(), vec![id]);
    }

    #[test]
    fn test_next_recorded_at_skips_taken_seconds() {
        let ledger = Ledger::new()
            .append(txn("Alice", 100, "2024-01-01 10:00:00"))
            .append(txn("Bob", 200, "2024-01-01 10:00:01"));

        let now = NaiveDate::from_ymd_opt(2024, 1, 1)
            .unwrap()
            .and_hms_opt(10, 0, 0)
            .unwrap();
        assert_eq!(
            ledger.next_recorded_at(now).to_string(),
            "2024-01-01 10:00:02"
        );
    }
}
