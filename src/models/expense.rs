//! Expense record model
//!
//! An `ExpenseRecord` is one immutable user-entered spending event. Records
//! are created only through validation of an `ExpenseDraft` - the transient
//! raw-input value captured from a form or command line - and are never
//! updated or deleted afterwards.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::category::Category;
use super::ids::ExpenseId;
use super::money::Money;

/// Date format accepted on input and used in the persisted payload
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// A single recorded spending event
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExpenseRecord {
    /// Unique identifier, assigned at creation
    pub id: ExpenseId,

    /// What the money was spent on
    pub description: String,

    /// Amount spent, always positive
    pub amount: Money,

    /// Category from the fixed set
    pub category: Category,

    /// Calendar date of the expense (no time component)
    pub date: NaiveDate,
}

impl fmt::Display for ExpenseRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} ({})",
            self.date.format(DATE_FORMAT),
            self.description,
            self.amount,
            self.category
        )
    }
}

/// Raw expense input captured before validation
///
/// Mirrors the transient form state of a submission: every field is an
/// unparsed string. `validate` converts a draft into typed record fields or
/// rejects it without side effects.
#[derive(Debug, Clone, Default)]
pub struct ExpenseDraft {
    pub description: String,
    pub amount: String,
    pub category: String,
    pub date: String,
}

impl ExpenseDraft {
    /// Create a draft from raw input fields
    pub fn new(
        description: impl Into<String>,
        amount: impl Into<String>,
        category: impl Into<String>,
        date: impl Into<String>,
    ) -> Self {
        Self {
            description: description.into(),
            amount: amount.into(),
            category: category.into(),
            date: date.into(),
        }
    }

    /// Validate the draft and convert it into typed record fields
    ///
    /// Checks, in order: description is non-empty after trimming, the amount
    /// parses to a positive value, the category is in the fixed set, and the
    /// date is a valid `YYYY-MM-DD` calendar date.
    pub fn validate(&self) -> Result<ValidatedExpense, ExpenseValidationError> {
        let description = self.description.trim();
        if description.is_empty() {
            return Err(ExpenseValidationError::EmptyDescription);
        }

        let amount = Money::parse(&self.amount)
            .map_err(|_| ExpenseValidationError::InvalidAmount(self.amount.clone()))?;
        if !amount.is_positive() {
            return Err(ExpenseValidationError::NonPositiveAmount(amount));
        }

        let category = self
            .category
            .parse::<Category>()
            .map_err(|_| ExpenseValidationError::UnknownCategory(self.category.clone()))?;

        let date = NaiveDate::parse_from_str(self.date.trim(), DATE_FORMAT)
            .map_err(|_| ExpenseValidationError::InvalidDate(self.date.clone()))?;

        Ok(ValidatedExpense {
            description: description.to_string(),
            amount,
            category,
            date,
        })
    }
}

/// Typed fields of a validated draft, awaiting an ID
#[derive(Debug, Clone)]
pub struct ValidatedExpense {
    pub description: String,
    pub amount: Money,
    pub category: Category,
    pub date: NaiveDate,
}

impl ValidatedExpense {
    /// Finalize into an immutable record with the given ID
    pub fn into_record(self, id: ExpenseId) -> ExpenseRecord {
        ExpenseRecord {
            id,
            description: self.description,
            amount: self.amount,
            category: self.category,
            date: self.date,
        }
    }
}

/// Validation errors for expense drafts
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExpenseValidationError {
    EmptyDescription,
    InvalidAmount(String),
    NonPositiveAmount(Money),
    UnknownCategory(String),
    InvalidDate(String),
}

impl fmt::Display for ExpenseValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyDescription => write!(f, "Description must not be empty"),
            Self::InvalidAmount(s) => write!(f, "Amount is not a number: {}", s),
            Self::NonPositiveAmount(m) => {
                write!(f, "Amount must be greater than zero, got {}", m)
            }
            Self::UnknownCategory(s) => {
                write!(f, "{}", super::category::CategoryParseError::Unknown(s.clone()))
            }
            Self::InvalidDate(s) => write!(f, "Invalid date (expected YYYY-MM-DD): {}", s),
        }
    }
}

impl std::error::Error for ExpenseValidationError {}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft() -> ExpenseDraft {
        ExpenseDraft::new("Coffee", "4.50", "Food", "2024-01-01")
    }

    #[test]
    fn test_valid_draft() {
        let validated = draft().validate().unwrap();
        assert_eq!(validated.description, "Coffee");
        assert_eq!(validated.amount, Money::from_cents(450));
        assert_eq!(validated.category, Category::Food);
        assert_eq!(
            validated.date,
            NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()
        );
    }

    #[test]
    fn test_description_is_trimmed() {
        let mut d = draft();
        d.description = "  Coffee  ".into();
        assert_eq!(d.validate().unwrap().description, "Coffee");
    }

    #[test]
    fn test_empty_description_rejected() {
        let mut d = draft();
        d.description = "   ".into();
        assert_eq!(
            d.validate().unwrap_err(),
            ExpenseValidationError::EmptyDescription
        );
    }

    #[test]
    fn test_negative_amount_rejected() {
        let mut d = draft();
        d.amount = "-5".into();
        assert_eq!(
            d.validate().unwrap_err(),
            ExpenseValidationError::NonPositiveAmount(Money::from_cents(-500))
        );
    }

    #[test]
    fn test_zero_amount_rejected() {
        let mut d = draft();
        d.amount = "0".into();
        assert!(matches!(
            d.validate(),
            Err(ExpenseValidationError::NonPositiveAmount(_))
        ));
    }

    #[test]
    fn test_non_numeric_amount_rejected() {
        let mut d = draft();
        d.amount = "lots".into();
        assert!(matches!(
            d.validate(),
            Err(ExpenseValidationError::InvalidAmount(_))
        ));
    }

    #[test]
    fn test_unknown_category_rejected() {
        let mut d = draft();
        d.category = "Groceries".into();
        assert!(matches!(
            d.validate(),
            Err(ExpenseValidationError::UnknownCategory(_))
        ));
    }

    #[test]
    fn test_invalid_date_rejected() {
        let mut d = draft();
        d.date = "01/01/2024".into();
        assert!(matches!(
            d.validate(),
            Err(ExpenseValidationError::InvalidDate(_))
        ));

        d.date = "2024-02-30".into();
        assert!(matches!(
            d.validate(),
            Err(ExpenseValidationError::InvalidDate(_))
        ));
    }

    #[test]
    fn test_record_display() {
        let record = draft().validate().unwrap().into_record(ExpenseId::new(1));
        assert_eq!(format!("{}", record), "2024-01-01 Coffee $4.50 (Food)");
    }

    #[test]
    fn test_record_serialization() {
        let record = draft().validate().unwrap().into_record(ExpenseId::new(1));
        let json = serde_json::to_string(&record).unwrap();
        let deserialized: ExpenseRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(record, deserialized);
        assert!(json.contains("\"date\":\"2024-01-01\""));
        assert!(json.contains("\"category\":\"Food\""));
        assert!(json.contains("\"amount\":450"));
    }
}
