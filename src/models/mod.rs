//! Core data models for spendlog
//!
//! This module contains the data structures that represent the expense
//! ledger domain: records, the fixed category set, money amounts, and IDs.

pub mod category;
pub mod expense;
pub mod ids;
pub mod money;

pub use category::Category;
pub use expense::{ExpenseDraft, ExpenseRecord, ExpenseValidationError, ValidatedExpense};
pub use ids::ExpenseId;
pub use money::Money;
