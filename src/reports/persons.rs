//! Person balances report
//!
//! One row per counterparty with balance, activity count and last activity,
//! filterable by balance status and name, and sortable.

use chrono::NaiveDate;

use crate::models::{Money, PersonName, Transaction};
use crate::services::query::{balance_of, list_persons};

/// Which side of the ledger a person is on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BalanceStatus {
    #[default]
    All,
    /// Person owes the user (balance > 0)
    OwesMe,
    /// User owes the person (balance < 0)
    IOwe,
    /// Balance is exactly zero
    Settled,
}

impl BalanceStatus {
    pub fn matches(&self, balance: Money) -> bool {
        match self {
            Self::All => true,
            Self::OwesMe => balance.is_positive(),
            Self::IOwe => balance.is_negative(),
            Self::Settled => balance.is_zero(),
        }
    }
}

/// Ordering of person rows
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PersonSort {
    #[default]
    Name,
    BalanceHighToLow,
    BalanceLowToHigh,
    /// Most recent activity first; persons without activity last
    MostRecent,
}

/// Summary row for one person
#[derive(Debug, Clone, PartialEq)]
pub struct PersonSummary {
    pub person: PersonName,
    pub balance: Money,
    pub transaction_count: usize,
    /// Date of the person's most recently recorded transaction
    pub last_activity: Option<NaiveDate>,
}

impl PersonSummary {
    fn from_transactions(person: PersonName, transactions: &[Transaction]) -> Self {
        let last_activity = transactions
            .iter()
            .max_by_key(|t| t.recorded_at)
            .map(|t| t.occurred_on);

        Self {
            person,
            balance: transactions.iter().map(|t| t.amount).sum(),
            transaction_count: transactions.len(),
            last_activity,
        }
    }
}

/// Options for the person report
#[derive(Debug, Clone, Default)]
pub struct PersonReportOptions {
    pub status: BalanceStatus,
    /// Case-insensitive substring of the name
    pub search: Option<String>,
    pub sort: PersonSort,
}

/// Person balances report
#[derive(Debug, Clone)]
pub struct PersonReport {
    pub rows: Vec<PersonSummary>,
}

impl PersonReport {
    /// Generate the report over `transactions`
    pub fn generate(transactions: &[Transaction], options: &PersonReportOptions) -> Self {
        let mut rows: Vec<PersonSummary> = list_persons(transactions)
            .into_iter()
            .map(|person| {
                let result = balance_of(transactions, person.display());
                PersonSummary::from_transactions(person, &result.transactions)
            })
            .filter(|row| options.status.matches(row.balance))
            .filter(|row| match &options.search {
                Some(fragment) => row.person.contains(fragment),
                None => true,
            })
            .collect();

        // Rows arrive sorted by name, which breaks ties below
        match options.sort {
            PersonSort::Name => {}
            PersonSort::BalanceHighToLow => rows.sort_by(|a, b| b.balance.cmp(&a.balance)),
            PersonSort::BalanceLowToHigh => rows.sort_by(|a, b| a.balance.cmp(&b.balance)),
            PersonSort::MostRecent => rows.sort_by(|a, b| b.last_activity.cmp(&a.last_activity)),
        }

        Self { rows }
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Largest balances on each side
#[derive(Debug, Clone)]
pub struct TopBalances {
    /// Persons who owe the user, largest first
    pub owed_to_me: Vec<PersonSummary>,
    /// Persons the user owes, largest debt first
    pub i_owe: Vec<PersonSummary>,
}

impl TopBalances {
    /// Up to `limit` persons on each side
    pub fn generate(transactions: &[Transaction], limit: usize) -> Self {
        let owed_to_me = PersonReport::generate(
            transactions,
            &PersonReportOptions {
                status: BalanceStatus::OwesMe,
                sort: PersonSort::BalanceHighToLow,
                ..Default::default()
            },
        )
        .rows
        .into_iter()
        .take(limit)
        .collect();

        let i_owe = PersonReport::generate(
            transactions,
            &PersonReportOptions {
                status: BalanceStatus::IOwe,
                sort: PersonSort::BalanceLowToHigh,
                ..Default::default()
            },
        )
        .rows
        .into_iter()
        .take(limit)
        .collect();

        Self { owed_to_me, i_owe }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::RecordedAt;

    fn txn(person: &str, cents: i64, day: u32, stamp: &str) -> Transaction {
        Transaction::new(
            person,
            Money::from_cents(cents),
            NaiveDate::from_ymd_opt(2024, 3, day).unwrap(),
            RecordedAt::parse(stamp).unwrap(),
        )
    }

    fn sample() -> Vec<Transaction> {
        vec![
            txn("Alice", 2000, 1, "2024-03-01 10:00:00"),
            txn("bob", -1500, 2, "2024-03-02 10:00:00"),
            txn("Carol", 500, 3, "2024-03-03 10:00:00"),
            txn("carol", -500, 4, "2024-03-04 10:00:00"),
            txn("Dave", 300, 5, "2024-03-05 10:00:00"),
            // back-dated entry recorded last
            txn("alice", -100, 1, "2024-03-06 10:00:00"),
        ]
    }

    #[test]
    fn test_rows_by_name() {
        let report = PersonReport::generate(&sample(), &PersonReportOptions::default());
        let names: Vec<_> = report.rows.iter().map(|r| r.person.display()).collect();
        assert_eq!(names, vec!["Alice", "bob", "Carol", "Dave"]);

        let alice = &report.rows[0];
        assert_eq!(alice.balance, Money::from_cents(1900));
        assert_eq!(alice.transaction_count, 2);
        // last recorded, not latest date
        assert_eq!(alice.last_activity, NaiveDate::from_ymd_opt(2024, 3, 1));
    }

    #[test]
    fn test_status_filter() {
        let owes_me = PersonReport::generate(
            &sample(),
            &PersonReportOptions {
                status: BalanceStatus::OwesMe,
                ..Default::default()
            },
        );
        assert_eq!(owes_me.rows.len(), 2);

        let settled = PersonReport::generate(
            &sample(),
            &PersonReportOptions {
                status: BalanceStatus::Settled,
                ..Default::default()
            },
        );
        assert_eq!(settled.rows.len(), 1);
        assert_eq!(settled.rows[0].person.display(), "Carol");

        let i_owe = PersonReport::generate(
            &sample(),
            &PersonReportOptions {
                status: BalanceStatus::IOwe,
                ..Default::default()
            },
        );
        assert_eq!(i_owe.rows[0].person.display(), "bob");
    }

    #[test]
    fn test_search() {
        let report = PersonReport::generate(
            &sample(),
            &PersonReportOptions {
                search: Some("AR".into()),
                ..Default::default()
            },
        );
        assert_eq!(report.rows.len(), 1);
        assert_eq!(report.rows[0].person.display(), "Carol");
    }

    #[test]
    fn test_sort_orders() {
        let by = |sort| {
            PersonReport::generate(
                &sample(),
                &PersonReportOptions {
                    sort,
                    ..Default::default()
                },
            )
            .rows
            .into_iter()
            .map(|r| r.person.display().to_string())
            .collect::<Vec<_>>()
        };

        assert_eq!(
            by(PersonSort::BalanceHighToLow),
            vec!["Alice", "Dave", "Carol", "bob"]
        );
        assert_eq!(
            by(PersonSort::BalanceLowToHigh),
            vec!["bob", "Carol", "Dave", "Alice"]
        );
        assert_eq!(by(PersonSort::MostRecent), vec!["Dave", "Carol", "bob", "Alice"]);
    }

    #[test]
    fn test_top_balances() {
        let top = TopBalances::generate(&sample(), 1);
        assert_eq!(top.owed_to_me.len(), 1);
        assert_eq!(top.owed_to_me[0].person.display(), "Alice");
        assert_eq!(top.i_owe.len(), 1);
        assert_eq!(top.i_owe[0].balance, Money::from_cents(-1500));
    }
}
