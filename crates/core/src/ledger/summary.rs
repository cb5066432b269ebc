//! Transaction summaries for dashboard display.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::transaction::{Category, Transaction};

/// Aggregate totals over a transaction sequence.
///
/// Income and expense totals are positive magnitudes; the sign lives in
/// `net_change` alone. Transfers count toward `transaction_count` but
/// contribute to neither sum.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LedgerSummary {
    /// Sum of all Income amounts.
    pub total_income: Decimal,
    /// Sum of all Expense amounts (positive magnitude).
    pub total_expenses: Decimal,
    /// `total_income - total_expenses`.
    pub net_change: Decimal,
    /// Number of transactions of every category, transfers included.
    pub transaction_count: usize,
}

/// Summarizes a transaction sequence in a single pass.
#[must_use]
pub fn summarize(transactions: &[Transaction]) -> LedgerSummary {
    let mut total_income = Decimal::ZERO;
    let mut total_expenses = Decimal::ZERO;

    for transaction in transactions {
        match transaction.category {
            Category::Income => total_income += transaction.amount,
            Category::Expense => total_expenses += transaction.amount,
            Category::Transfer => {}
        }
    }

    LedgerSummary {
        total_income,
        total_expenses,
        net_change: total_income - total_expenses,
        transaction_count: transactions.len(),
    }
}
