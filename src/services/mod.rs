//! Business logic layer
//!
//! The ledger service owns the mutation path: validation, ID assignment,
//! and write-through persistence.

pub mod ledger;

pub use ledger::Ledger;
