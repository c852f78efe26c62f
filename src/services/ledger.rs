//! Expense ledger service
//!
//! The ledger is the single source of truth for recorded expenses: an
//! append-only, insertion-ordered collection with write-through persistence.
//! Records enter only through `submit`, which validates a draft, assigns a
//! fresh ID, appends, and saves the full set.

use crate::error::{SpendlogError, SpendlogResult};
use crate::models::{ExpenseDraft, ExpenseId, ExpenseRecord};
use crate::reports::Summary;
use crate::storage::ExpenseRepository;

/// The authoritative expense record store
pub struct Ledger {
    repository: ExpenseRepository,
    records: Vec<ExpenseRecord>,
}

impl Ledger {
    /// Open the ledger, loading any previously saved records
    ///
    /// Loading happens here, before any mutation is possible. A missing or
    /// unreadable store starts the ledger empty (see
    /// [`ExpenseRepository::load`]).
    pub fn open(repository: ExpenseRepository) -> Self {
        let records = repository.load();
        Self {
            repository,
            records,
        }
    }

    /// Validate a draft and record it as a new expense
    ///
    /// On success the record is appended (insertion order = creation order)
    /// and the full set is saved write-through; the new record is returned.
    /// A validation failure leaves the ledger untouched. A save failure is
    /// returned as [`SpendlogError::Storage`] but does NOT roll back the
    /// in-memory append - the running session stays authoritative, and only
    /// durability across a restart is at risk.
    pub fn submit(&mut self, draft: ExpenseDraft) -> SpendlogResult<ExpenseRecord> {
        let validated = draft
            .validate()
            .map_err(|e| SpendlogError::Validation(e.to_string()))?;

        let record = validated.into_record(self.next_id());
        self.records.push(record.clone());
        self.repository.save(&self.records)?;

        Ok(record)
    }

    /// Read-only snapshot of all records, in insertion order
    pub fn records(&self) -> &[ExpenseRecord] {
        &self.records
    }

    /// Number of recorded expenses
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the ledger has no records
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Derive the summary views from the current records
    pub fn summary(&self) -> Summary {
        Summary::generate(&self.records)
    }

    /// Next fresh ID: one past the highest ID ever assigned
    ///
    /// Records are never deleted, so max + 1 stays unique for the lifetime
    /// of the store, including across restarts.
    fn next_id(&self) -> ExpenseId {
        self.records
            .iter()
            .map(|r| r.id)
            .max()
            .map(|id| id.next())
            .unwrap_or(ExpenseId::new(1))
    }
}
