//! Transaction domain types.

use chrono::NaiveDate;
use quartermaster_shared::TransactionId;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Category of a ledger transaction.
///
/// The category alone determines the sign of a transaction's effect on
/// a fund balance; amounts are stored as non-negative magnitudes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Category {
    /// Adds its amount to the fund balance.
    Income,
    /// Subtracts its amount from the fund balance.
    Expense,
    /// No effect on this fund's balance; the offsetting entry lives on
    /// another fund's ledger.
    Transfer,
}

impl Category {
    /// Returns the canonical storage string for this category.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Income => "Income",
            Self::Expense => "Expense",
            Self::Transfer => "Transfer",
        }
    }

    /// Returns the signed balance effect for a transaction of this
    /// category carrying `amount`.
    #[must_use]
    pub fn signed_effect(self, amount: Decimal) -> Decimal {
        match self {
            Self::Income => amount,
            Self::Expense => -amount,
            Self::Transfer => Decimal::ZERO,
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Income" => Ok(Self::Income),
            "Expense" => Ok(Self::Expense),
            "Transfer" => Ok(Self::Transfer),
            _ => Err(format!("Unknown category: {s}")),
        }
    }
}

/// A single dated financial event on a fund's ledger.
///
/// Transactions are immutable values in this layer: edits and deletions,
/// where the dashboard offers them, are full-sequence replacements
/// performed by the caller. Amounts are expected non-negative; see
/// [`Category`] for the sign rules.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    /// Unique identifier for this transaction.
    pub id: TransactionId,
    /// The date the transaction occurred (chronological ordering key).
    pub date: NaiveDate,
    /// Human-readable description (non-empty).
    pub description: String,
    /// The category determining the balance effect.
    pub category: Category,
    /// Optional free-text subcategory.
    pub subcategory: Option<String>,
    /// Amount as a non-negative magnitude.
    pub amount: Decimal,
    /// Optional fund attribution (e.g. "Party", "Ship", a character name).
    pub fund: Option<String>,
    /// Optional free-text notes.
    pub notes: Option<String>,
}

impl Transaction {
    /// Returns the signed effect of this transaction on the fund balance.
    #[must_use]
    pub fn signed_effect(&self) -> Decimal {
        self.category.signed_effect(self.amount)
    }
}
