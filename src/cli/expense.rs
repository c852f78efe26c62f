//! Expense CLI commands
//!
//! Bridges clap argument parsing to the ledger service. Raw argument strings
//! flow into an `ExpenseDraft` unparsed; all validation happens in the core.

use chrono::Local;
use clap::Subcommand;

use crate::display::format_expense_register;
use crate::error::SpendlogResult;
use crate::models::{expense::DATE_FORMAT, ExpenseDraft};
use crate::services::Ledger;

/// Expense subcommands
#[derive(Subcommand)]
pub enum ExpenseCommands {
    /// Record a new expense
    Add {
        /// What the money was spent on
        description: String,
        /// Amount spent (e.g., "4.50")
        #[arg(allow_hyphen_values = true)]
        amount: String,
        /// Category (Food, Rent, Entertainment, Transport, Utilities, Others)
        category: String,
        /// Expense date (YYYY-MM-DD), defaults to today
        #[arg(short, long)]
        date: Option<String>,
    },
    /// List recorded expenses in insertion order
    List {
        /// Number of most recent expenses to show (all by default)
        #[arg(short, long)]
        limit: Option<usize>,
    },
}

/// Handle an expense subcommand
pub fn handle_expense_command(ledger: &mut Ledger, command: ExpenseCommands) -> SpendlogResult<()> {
    match command {
        ExpenseCommands::Add {
            description,
            amount,
            category,
            date,
        } => {
            let date =
                date.unwrap_or_else(|| Local::now().date_naive().format(DATE_FORMAT).to_string());
            let record = ledger.submit(ExpenseDraft::new(description, amount, category, date))?;
            println!("Recorded: {}", record);
        }
        ExpenseCommands::List { limit } => {
            let records = ledger.records();
            let shown = match limit {
                Some(n) => &records[records.len().saturating_sub(n)..],
                None => records,
            };
            print!("{}", format_expense_register(shown));
        }
    }

    Ok(())
}
