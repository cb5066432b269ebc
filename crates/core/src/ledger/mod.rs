//! Fund ledger logic.
//!
//! This module implements the core ledger functionality:
//! - Transaction domain types (categories, posted transactions)
//! - Candidate (draft) records from raw form state
//! - Running balance calculations over chronological sequences
//! - Transaction summaries for dashboard display
//! - Business rule validation for candidate transactions
//!
//! Every operation is a pure, deterministic function over its explicit
//! inputs: no I/O, no shared state, no suspension points. Callers own
//! concurrency control over the persisted transaction sequence.

pub mod balance;
pub mod summary;
pub mod transaction;
pub mod types;
pub mod validation;

#[cfg(test)]
mod validation_props;

pub use balance::{add_transaction, compute_running_totals, current_balance};
pub use summary::{LedgerSummary, summarize};
pub use transaction::{Category, Transaction};
pub use types::{PostedTransaction, TransactionDraft};
pub use validation::{ValidationError, ValidationReport, validate_draft};
