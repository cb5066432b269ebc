//! Ledger input and output record types.
//!
//! The dashboard forms submit loosely-typed candidate records; the
//! engine returns fully-resolved records with derived running totals.
//! Keeping both shapes distinct from [`Transaction`] preserves the
//! always-valid invariant on the real entity.
//!
//! [`Transaction`]: super::transaction::Transaction

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::transaction::Transaction;

/// A candidate transaction assembled from raw form state.
///
/// Every field is optional: the presentation layer coerces types
/// (string → number, string → date) but performs no completeness
/// checks of its own. Pass a draft through
/// [`validate_draft`](super::validation::validate_draft) before
/// promoting it to a [`Transaction`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransactionDraft {
    /// The transaction date, if the form supplied one.
    pub date: Option<NaiveDate>,
    /// The description, possibly blank.
    pub description: Option<String>,
    /// The category as entered, not yet parsed to the closed enum.
    pub category: Option<String>,
    /// Optional free-text subcategory.
    pub subcategory: Option<String>,
    /// The amount, if the form input coerced to a number.
    pub amount: Option<Decimal>,
    /// Optional fund attribution.
    pub fund: Option<String>,
    /// Optional free-text notes.
    pub notes: Option<String>,
}

/// A transaction augmented with its derived running total.
///
/// `running_total` is the cumulative fund balance immediately after this
/// transaction is applied, in the chronological ordering of the sequence
/// it was computed over. It is always recomputed from scratch and never
/// stored on [`Transaction`] itself.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostedTransaction {
    /// The underlying transaction, unchanged from the input.
    pub transaction: Transaction,
    /// Cumulative balance after applying this transaction.
    pub running_total: Decimal,
}
