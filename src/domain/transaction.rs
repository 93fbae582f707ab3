use std::str::FromStr;

use chrono::NaiveDate;

use super::{Amount, ValidationError};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Kind {
    /// Money coming in (salary, refunds, interest, etc.)
    Income,
    /// Money going out (rent, groceries, bills, etc.)
    Expense,
}

impl Kind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Kind::Income => "Income",
            Kind::Expense => "Expense",
        }
    }
}

impl FromStr for Kind {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Income" => Ok(Kind::Income),
            "Expense" => Ok(Kind::Expense),
            _ => Err(ValidationError::InvalidKind(s.to_string())),
        }
    }
}

impl std::fmt::Display for Kind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.pad(self.as_str())
    }
}

/// A single recorded income or expense.
/// Transactions are never edited after creation; the ledger only appends.
#[derive(Debug, Clone, PartialEq)]
pub struct Transaction {
    /// When the transaction happened
    pub date: NaiveDate,
    /// Free-form label (e.g., "Food", "Rent", "Salary")
    pub category: String,
    /// Always positive; the kind carries the direction
    pub amount: Amount,
    pub kind: Kind,
}

impl Transaction {
    pub fn new(date: NaiveDate, category: impl Into<String>, amount: Amount, kind: Kind) -> Self {
        assert!(amount > 0.0, "Transaction amount must be positive");
        Self {
            date,
            category: category.into(),
            amount,
            kind,
        }
    }

    pub fn is_income(&self) -> bool {
        self.kind == Kind::Income
    }
}
