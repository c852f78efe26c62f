//! CLI command handlers
//!
//! This module bridges clap argument parsing with the service layer.

pub mod expense;
pub mod report;

pub use expense::{handle_expense_command, ExpenseCommands};
pub use report::handle_summary_command;
