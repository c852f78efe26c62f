//! Expense category model
//!
//! Categories form a fixed, closed set shared by input validation, the
//! aggregation engine, and display. `Category::ALL` defines the canonical
//! ordering that category breakdowns are aligned to.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A fixed expense category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    Food,
    Rent,
    Entertainment,
    Transport,
    Utilities,
    Others,
}

impl Category {
    /// All categories, in canonical display and aggregation order
    pub const ALL: [Category; 6] = [
        Category::Food,
        Category::Rent,
        Category::Entertainment,
        Category::Transport,
        Category::Utilities,
        Category::Others,
    ];

    /// The canonical name of this category
    pub const fn as_str(&self) -> &'static str {
        match self {
            Category::Food => "Food",
            Category::Rent => "Rent",
            Category::Entertainment => "Entertainment",
            Category::Transport => "Transport",
            Category::Utilities => "Utilities",
            Category::Others => "Others",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Category {
    type Err = CategoryParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        Category::ALL
            .into_iter()
            .find(|c| c.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| CategoryParseError::Unknown(s.to_string()))
    }
}

/// Error type for category parsing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CategoryParseError {
    Unknown(String),
}

impl fmt::Display for CategoryParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CategoryParseError::Unknown(s) => {
                write!(f, "Unknown category: {} (expected one of: ", s)?;
                for (i, c) in Category::ALL.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", c)?;
                }
                write!(f, ")")
            }
        }
    }
}

impl std::error::Error for CategoryParseError {}
