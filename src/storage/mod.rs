//! Storage layer for spendlog
//!
//! Provides JSON file storage with atomic writes and automatic directory
//! creation. The ledger owns exactly one store, so there is no multi-file
//! coordinator here - just the expense repository and its file primitives.

pub mod expenses;
pub mod file_io;

pub use expenses::ExpenseRepository;
pub use file_io::{read_json, write_json_atomic};
