//! spendlog - Terminal-based personal expense ledger
//!
//! This library provides the core functionality for the spendlog expense
//! tracker: an append-only record store with write-through JSON persistence
//! and pure aggregation of spend summaries.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: Core data models (records, categories, money)
//! - `storage`: JSON file storage layer
//! - `services`: The ledger (business logic layer)
//! - `reports`: Derived analytics over record snapshots
//! - `display`: Terminal output formatting
//! - `cli`: Command handlers
//!
//! # Example
//!
//! ```rust,ignore
//! use spendlog::services::Ledger;
//! use spendlog::storage::ExpenseRepository;
//!
//! let mut ledger = Ledger::open(ExpenseRepository::new(path));
//! let record = ledger.submit(draft)?;
//! let summary = ledger.summary();
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod models;
pub mod reports;
pub mod services;
pub mod storage;

pub use error::SpendlogError;
