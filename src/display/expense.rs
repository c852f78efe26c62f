//! Expense display formatting
//!
//! Formats expense records for terminal display as a simple register.

use crate::models::ExpenseRecord;

/// Format a single expense for display (register row)
pub fn format_expense_row(record: &ExpenseRecord) -> String {
    format!(
        "{:>4}  {}  {:<24} {:<13} {:>10}",
        record.id,
        record.date.format("%Y-%m-%d"),
        truncate(&record.description, 24),
        record.category.as_str(),
        record.amount.to_string()
    )
}

/// Format a list of expenses as a register
pub fn format_expense_register(records: &[ExpenseRecord]) -> String {
    if records.is_empty() {
        return "No expenses recorded yet.\n".to_string();
    }

    let mut output = String::new();
    output.push_str(&format!(
        "{:>4}  {:10}  {:<24} {:<13} {:>10}\n",
        "Id", "Date", "Description", "Category", "Amount"
    ));
    output.push_str(&"-".repeat(68));
    output.push('\n');

    for record in records {
        output.push_str(&format_expense_row(record));
        output.push('\n');
    }

    output
}

/// Truncate a string with an ellipsis if it exceeds the given width
fn truncate(s: &str, width: usize) -> String {
    if s.chars().count() <= width {
        s.to_string()
    } else {
        let cut: String = s.chars().take(width.saturating_sub(1)).collect();
        format!("{}…", cut)
    }
}
