//! Terminal output formatting
//!
//! The presentation side of the crate: everything here works from read
//! snapshots and derived summaries, never from a writable ledger reference.

pub mod expense;
pub mod report;

pub use expense::{format_expense_register, format_expense_row};
pub use report::format_summary;
