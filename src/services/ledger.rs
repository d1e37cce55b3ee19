//! Ledger service
//!
//! Binds a transaction store to the in-memory snapshot. Every command computes
//! the next snapshot, persists it, and only then makes it current, so a failed
//! write leaves memory and disk in agreement.

use chrono::{Local, NaiveDateTime};

use crate::error::LedgerResult;
use crate::models::{Ledger, RecordedAt, Transaction};
use crate::storage::TransactionStore;

use super::command::{self, NewTransaction};

/// Source of the current local date-time
pub type Clock = fn() -> NaiveDateTime;

fn local_now() -> NaiveDateTime {
    Local::now().naive_local()
}

/// Service running ledger commands against a store
pub struct LedgerService<'a> {
    store: &'a TransactionStore,
    ledger: Ledger,
    clock: Clock,
}

impl<'a> LedgerService<'a> {
    /// Load the ledger from `store`
    ///
    /// With `strict` an unreadable file is an error; otherwise it is logged
    /// and the ledger starts empty.
    pub fn open(store: &'a TransactionStore, strict: bool) -> LedgerResult<Self> {
        let ledger = if strict {
            store.load()?
        } else {
            store.load_lenient()
        };

        Ok(Self {
            store,
            ledger,
            clock: local_now,
        })
    }

    /// Use a different clock (for tests and replays)
    pub fn with_clock(mut self, clock: Clock) -> Self {
        self.clock = clock;
        self
    }

    /// The current snapshot
    pub fn ledger(&self) -> &Ledger {
        &self.ledger
    }

    /// All transactions in storage order
    pub fn transactions(&self) -> &[Transaction] {
        self.ledger.transactions()
    }

    /// Record a transaction and return it
    pub fn record(&mut self, input: NewTransaction) -> LedgerResult<Transaction> {
        let txn = command::build_transaction(&self.ledger, input, (self.clock)())?;
        let next = self.ledger.append(txn.clone());
        self.commit(next)?;

        tracing::info!(
            person = %txn.person,
            amount = %txn.amount,
            recorded_at = %txn.recorded_at,
            "transaction recorded"
        );
        Ok(txn)
    }

    /// Delete a transaction; returns whether anything was removed
    pub fn delete(&mut self, recorded_at: RecordedAt) -> LedgerResult<bool> {
        let existed = self.ledger.contains(recorded_at);
        let next = command::delete_transaction(&self.ledger, recorded_at);
        self.commit(next)?;

        if existed {
            tracing::info!(%recorded_at, "transaction deleted");
        } else {
            tracing::debug!(%recorded_at, "delete of unknown transaction ignored");
        }
        Ok(existed)
    }

    /// Settle a person; returns the generated transaction, if any
    pub fn settle(&mut self, name: &str) -> LedgerResult<Option<Transaction>> {
        let before = self.ledger.len();
        let next = command::settle_person(&self.ledger, name, (self.clock)());
        let settlement = if next.len() > before {
            next.last().cloned()
        } else {
            None
        };
        self.commit(next)?;

        match &settlement {
            Some(txn) => tracing::info!(
                person = %txn.person,
                amount = %txn.amount,
                "balance settled"
            ),
            None => tracing::debug!(person = name, "nothing to settle"),
        }
        Ok(settlement)
    }

    /// Remove every transaction; returns how many were dropped
    pub fn clear(&mut self) -> LedgerResult<usize> {
        let dropped = self.ledger.len();
        let next = command::clear_all(&self.ledger);
        self.commit(next)?;

        tracing::info!(dropped, "ledger cleared");
        Ok(dropped)
    }

    fn commit(&mut self, next: Ledger) -> LedgerResult<()> {
        self.store.persist(&next)?;
        self.ledger = next;
        Ok(())
    }
}
