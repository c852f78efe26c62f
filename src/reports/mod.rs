//! Derived analytics over the expense ledger

pub mod summary;

pub use summary::{spend_by_category, spend_over_time, total_spend, Summary};
