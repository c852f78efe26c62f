//! Summary rendering for terminal output
//!
//! Renders the derived summary views as text: total spend against the budget
//! limit, a bar chart of category shares, and the spend-over-time series.

use crate::config::Settings;
use crate::models::{Category, Money};
use crate::reports::Summary;

const BAR_WIDTH: usize = 24;

/// Format the full summary for terminal display
pub fn format_summary(summary: &Summary, settings: &Settings) -> String {
    let symbol = settings.currency_symbol.as_str();
    let mut output = String::new();

    output.push_str(&format!(
        "Total Expenses: {}\n",
        summary.total.format_with_symbol(symbol)
    ));
    output.push_str(&format!(
        "Budget Limit:   {}\n",
        settings.budget_limit.format_with_symbol(symbol)
    ));

    let remaining = settings.budget_limit - summary.total;
    if remaining.is_negative() {
        output.push_str(&format!(
            "Over budget by {}\n",
            remaining.abs().format_with_symbol(symbol)
        ));
    } else {
        output.push_str(&format!(
            "Remaining:      {}\n",
            remaining.format_with_symbol(symbol)
        ));
    }

    output.push('\n');
    output.push_str("Expenses by Category\n");
    output.push_str(&separator(62));
    output.push('\n');

    let max_cents = summary
        .by_category
        .iter()
        .map(|m| m.cents())
        .max()
        .unwrap_or(0);

    for (category, amount) in Category::ALL.iter().zip(&summary.by_category) {
        output.push_str(&format!(
            "{:<13} {} {:>10}\n",
            category.as_str(),
            format_bar(amount.cents(), max_cents, BAR_WIDTH),
            amount.format_with_symbol(symbol)
        ));
    }

    output.push('\n');
    output.push_str("Spending Over Time\n");
    output.push_str(&separator(62));
    output.push('\n');

    if summary.series.is_empty() {
        output.push_str("(no expenses yet)\n");
    } else {
        for (date, amount) in &summary.series {
            output.push_str(&format!(
                "{}  {:>10}\n",
                date.format("%Y-%m-%d"),
                amount.format_with_symbol(symbol)
            ));
        }
    }

    output
}

/// Render a proportional text bar
fn format_bar(value: i64, max_value: i64, width: usize) -> String {
    if max_value <= 0 || value <= 0 {
        return "░".repeat(width);
    }

    let filled = ((value as f64 / max_value as f64) * width as f64).round() as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// A separator line
fn separator(width: usize) -> String {
    "─".repeat(width)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ExpenseId, ExpenseRecord};

    fn summary_for(records: &[ExpenseRecord]) -> Summary {
        Summary::generate(records)
    }

    fn record(amount: i64, category: Category, date: &str) -> ExpenseRecord {
        ExpenseRecord {
            id: ExpenseId::new(1),
            description: "x".to_string(),
            amount: Money::from_cents(amount),
            category,
            date: date.parse().unwrap(),
        }
    }

    #[test]
    fn test_summary_shows_total_and_budget() {
        let records = [record(120_450, Category::Rent, "2024-01-01")];
        let output = format_summary(&summary_for(&records), &Settings::default());

        assert!(output.contains("Total Expenses: $1204.50"));
        assert!(output.contains("Budget Limit:   $1000.00"));
        assert!(output.contains("Over budget by $204.50"));
    }

    #[test]
    fn test_summary_shows_remaining_when_under_budget() {
        let records = [record(450, Category::Food, "2024-01-01")];
        let output = format_summary(&summary_for(&records), &Settings::default());

        assert!(output.contains("Remaining:      $995.50"));
    }

    #[test]
    fn test_summary_lists_every_category() {
        let output = format_summary(&summary_for(&[]), &Settings::default());
        for category in Category::ALL {
            assert!(output.contains(category.as_str()));
        }
        assert!(output.contains("(no expenses yet)"));
    }

    #[test]
    fn test_format_bar_proportions() {
        assert_eq!(format_bar(0, 100, 4), "░░░░");
        assert_eq!(format_bar(100, 100, 4), "████");
        assert_eq!(format_bar(50, 100, 4), "██░░");
        assert_eq!(format_bar(10, 0, 4), "░░░░");
    }
}
