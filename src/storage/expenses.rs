//! Expense repository for JSON storage
//!
//! Persists the full record set as a single JSON array under one well-known
//! file path. The payload schema is an array of
//! `{id, description, amount, category, date}` objects with no versioning
//! field; schema changes require external migration.

use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::error::SpendlogError;
use crate::models::ExpenseRecord;

use super::file_io::{read_json, write_json_atomic};

/// Repository for expense record persistence
pub struct ExpenseRepository {
    path: PathBuf,
}

impl ExpenseRepository {
    /// Create a repository backed by the given file path
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// The backing file path
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load all persisted records, in their stored order
    ///
    /// Never fails the caller: a missing file yields an empty ledger, and an
    /// unreadable or corrupt payload degrades to an empty ledger with a
    /// warning. This is the one place an error is deliberately swallowed -
    /// a usable empty state beats a crash on startup.
    pub fn load(&self) -> Vec<ExpenseRecord> {
        match read_json::<Vec<ExpenseRecord>, _>(&self.path) {
            Ok(records) => records,
            Err(e) => {
                warn!(
                    path = %self.path.display(),
                    error = %e,
                    "could not read expense store, starting empty"
                );
                Vec::new()
            }
        }
    }

    /// Save the full record set, replacing any prior content atomically
    ///
    /// Called after every accepted mutation (write-through). Failures are
    /// surfaced to the caller; the in-memory ledger is not rolled back.
    pub fn save(&self, records: &[ExpenseRecord]) -> Result<(), SpendlogError> {
        write_json_atomic(&self.path, &records)?;
        debug!(count = records.len(), "expense store saved");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Category, ExpenseId, Money};
    use chrono::NaiveDate;
    use tempfile::TempDir;

    fn record(id: u64, cents: i64) -> ExpenseRecord {
        ExpenseRecord {
            id: ExpenseId::new(id),
            description: format!("Expense {}", id),
            amount: Money::from_cents(cents),
            category: Category::Food,
            date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
        }
    }

    fn create_test_repo() -> (TempDir, ExpenseRepository) {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("expenses.json");
        (temp_dir, ExpenseRepository::new(path))
    }

    #[test]
    fn test_load_missing_file_is_empty() {
        let (_temp_dir, repo) = create_test_repo();
        assert!(repo.load().is_empty());
    }

    #[test]
    fn test_save_and_load_round_trip() {
        let (_temp_dir, repo) = create_test_repo();

        let records = vec![record(1, 450), record(2, 120000)];
        repo.save(&records).unwrap();

        let loaded = repo.load();
        assert_eq!(loaded, records);
    }

    #[test]
    fn test_load_corrupt_file_is_empty() {
        let (_temp_dir, repo) = create_test_repo();
        std::fs::write(repo.path(), "{{{ definitely not json").unwrap();

        assert!(repo.load().is_empty());
    }

    #[test]
    fn test_save_replaces_prior_content() {
        let (_temp_dir, repo) = create_test_repo();

        repo.save(&[record(1, 100)]).unwrap();
        repo.save(&[record(1, 100), record(2, 200)]).unwrap();

        assert_eq!(repo.load().len(), 2);
    }

    #[test]
    fn test_payload_is_a_plain_array() {
        let (_temp_dir, repo) = create_test_repo();
        repo.save(&[record(1, 450)]).unwrap();

        let raw = std::fs::read_to_string(repo.path()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
        let array = value.as_array().expect("payload should be a JSON array");
        assert_eq!(array.len(), 1);
        assert_eq!(array[0]["id"], 1);
        assert_eq!(array[0]["description"], "Expense 1");
        assert_eq!(array[0]["amount"], 450);
        assert_eq!(array[0]["category"], "Food");
        assert_eq!(array[0]["date"], "2024-01-01");
    }
}
