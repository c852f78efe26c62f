//! Strongly-typed ID wrapper for expense records
//!
//! The newtype keeps record IDs distinct from ordinary integers at compile
//! time. IDs are assigned monotonically by the ledger and serialized as plain
//! JSON numbers.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Unique identifier of an expense record
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ExpenseId(u64);

impl ExpenseId {
    /// Wrap a raw ID value
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }

    /// Get the raw ID value
    pub const fn value(&self) -> u64 {
        self.0
    }

    /// The ID following this one
    pub const fn next(&self) -> Self {
        Self(self.0 + 1)
    }
}

impl fmt::Display for ExpenseId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for ExpenseId {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(s.parse()?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_next_is_monotonic() {
        let id = ExpenseId::new(7);
        assert_eq!(id.next().value(), 8);
        assert!(id.next() > id);
    }

    #[test]
    fn test_serialization_is_transparent() {
        let id = ExpenseId::new(42);
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "42");

        let deserialized: ExpenseId = serde_json::from_str(&json).unwrap();
        assert_eq!(id, deserialized);
    }

    #[test]
    fn test_parse() {
        let id: ExpenseId = "17".parse().unwrap();
        assert_eq!(id.value(), 17);
        assert!("abc".parse::<ExpenseId>().is_err());
    }
}
