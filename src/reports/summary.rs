//! Spend summary aggregation
//!
//! Pure, deterministic derivations over a snapshot of expense records: the
//! running total, the per-category breakdown aligned to the fixed category
//! order, and the date-ordered spend series. No hidden state, no side
//! effects; safe to recompute on every render.

use std::collections::BTreeMap;

use chrono::NaiveDate;

use crate::models::{Category, ExpenseRecord, Money};

/// Sum of all record amounts; zero for an empty snapshot
pub fn total_spend(records: &[ExpenseRecord]) -> Money {
    records.iter().map(|r| r.amount).sum()
}

/// Per-category totals, aligned to the supplied category order
///
/// The output always has the same length and order as `categories`;
/// categories with no matching records yield zero. Category chart rendering
/// relies on this alignment.
pub fn spend_by_category(records: &[ExpenseRecord], categories: &[Category]) -> Vec<Money> {
    categories
        .iter()
        .map(|category| {
            records
                .iter()
                .filter(|r| r.category == *category)
                .map(|r| r.amount)
                .sum()
        })
        .collect()
}

/// Per-day totals, ascending by date
///
/// Groups records by exact calendar date and sums each group. Dates with no
/// records are absent (no zero gap-filling), and each date appears exactly
/// once. Records sharing a date aggregate into one entry; the model only
/// tracks calendar dates, so that is the intended granularity.
pub fn spend_over_time(records: &[ExpenseRecord]) -> Vec<(NaiveDate, Money)> {
    let mut by_date: BTreeMap<NaiveDate, Money> = BTreeMap::new();
    for record in records {
        *by_date.entry(record.date).or_insert_with(Money::zero) += record.amount;
    }
    by_date.into_iter().collect()
}

/// Everything the presentation layer needs to render, in one call
#[derive(Debug, Clone)]
pub struct Summary {
    /// Total spend across all records
    pub total: Money,
    /// Per-category totals aligned to `Category::ALL`
    pub by_category: Vec<Money>,
    /// Per-day totals, ascending by date
    pub series: Vec<(NaiveDate, Money)>,
}

impl Summary {
    /// Derive all summary views from a record snapshot
    pub fn generate(records: &[ExpenseRecord]) -> Self {
        Self {
            total: total_spend(records),
            by_category: spend_by_category(records, &Category::ALL),
            series: spend_over_time(records),
        }
    }
}
