//! This file defines ledger entries and the aggregate values derived from them.

use std::{fmt::Display, str::FromStr};

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::{DatabaseID, UserID};

/// Whether a ledger entry records money coming in or going out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryKind {
    /// Money received.
    Income,
    /// Money spent.
    Expense,
}

impl EntryKind {
    /// The string form stored in the database and used in JSON.
    pub fn as_str(&self) -> &'static str {
        match self {
            EntryKind::Income => "income",
            EntryKind::Expense => "expense",
        }
    }
}

impl Display for EntryKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// The error returned when a string is neither `income` nor `expense`.
#[derive(Debug, thiserror::Error, PartialEq)]
#[error("unknown entry kind: {0}")]
pub struct ParseEntryKindError(pub String);

impl FromStr for EntryKind {
    type Err = ParseEntryKindError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "income" => Ok(EntryKind::Income),
            "expense" => Ok(EntryKind::Expense),
            other => Err(ParseEntryKindError(other.to_owned())),
        }
    }
}

/// One income or expense record belonging to a user.
///
/// Amounts are fixed-point decimals so that sums over entries cannot drift
/// the way floating-point sums do.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LedgerEntry {
    /// The entry's ID in the database.
    pub id: DatabaseID,
    /// The user that owns the entry. Every query filters by this field.
    pub user_id: UserID,
    /// The amount of money received or spent.
    pub amount: Decimal,
    /// A free-text label grouping related entries.
    pub category: String,
    /// Whether the entry is income or an expense.
    #[serde(rename = "type")]
    pub kind: EntryKind,
    /// The calendar date the entry applies to, supplied by the client.
    pub date: NaiveDate,
}

/// The summed expense amount for one category, one row of chart data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryTotal {
    /// The category label.
    pub category: String,
    /// The sum of expense amounts in the category.
    pub total: Decimal,
}

/// Income and expense totals with their balance.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LedgerSummary {
    /// The sum of all income amounts.
    pub income: Decimal,
    /// The sum of all expense amounts.
    pub expense: Decimal,
    /// Income minus expense.
    pub balance: Decimal,
}

impl LedgerSummary {
    /// Create a summary from income and expense totals.
    ///
    /// The balance is always derived here so the invariant
    /// `balance == income - expense` cannot be broken by a caller.
    pub fn new(income: Decimal, expense: Decimal) -> Self {
        Self {
            income,
            expense,
            balance: income - expense,
        }
    }
}

#[cfg(test)]
mod entry_kind_tests {
    use super::{EntryKind, ParseEntryKindError};

    #[test]
    fn parse_valid_kinds() {
        assert_eq!("income".parse(), Ok(EntryKind::Income));
        assert_eq!("expense".parse(), Ok(EntryKind::Expense));
    }

    #[test]
    fn parse_rejects_unknown_kind() {
        let result = "savings".parse::<EntryKind>();

        assert_eq!(result, Err(ParseEntryKindError("savings".to_owned())));
    }

    #[test]
    fn serializes_as_lowercase_string() {
        assert_eq!(
            serde_json::to_string(&EntryKind::Expense).unwrap(),
            "\"expense\""
        );
    }

    #[test]
    fn deserialize_rejects_unknown_kind() {
        assert!(serde_json::from_str::<EntryKind>("\"savings\"").is_err());
    }
}
