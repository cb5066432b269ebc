//! Fund balance calculations.
//!
//! Running totals are always recomputed over the full transaction
//! sequence rather than patched incrementally, so a backdated insert
//! can never leave stale balances behind.

use rust_decimal::Decimal;

use super::transaction::Transaction;
use super::types::PostedTransaction;

/// Computes the running total after each transaction in the sequence.
///
/// The sequence is walked in the order given (this function does not
/// sort); the accumulator starts at `initial_balance` and each output
/// element carries the balance *after* applying that transaction's
/// category-signed effect. Inputs are copied, never mutated.
#[must_use]
pub fn compute_running_totals(
    transactions: &[Transaction],
    initial_balance: Decimal,
) -> Vec<PostedTransaction> {
    let mut balance = initial_balance;
    transactions
        .iter()
        .map(|transaction| {
            balance += transaction.signed_effect();
            PostedTransaction {
                transaction: transaction.clone(),
                running_total: balance,
            }
        })
        .collect()
}

/// Computes the final fund balance as a single fold.
///
/// Must agree with the last `running_total` produced by
/// [`compute_running_totals`] for the same inputs. Unlike the running
/// totals, the result is insensitive to the order of the sequence.
#[must_use]
pub fn current_balance(transactions: &[Transaction], initial_balance: Decimal) -> Decimal {
    transactions
        .iter()
        .fold(initial_balance, |balance, transaction| {
            balance + transaction.signed_effect()
        })
}

/// Merges a new transaction into an existing sequence.
///
/// Appends the transaction, stable-sorts by date ascending (equal dates
/// keep their relative insertion order, so the new transaction lands
/// after existing same-date ones), and recomputes running totals
/// end-to-end. Does NOT validate the transaction; callers run
/// [`validate_draft`](super::validation::validate_draft) on the
/// candidate first.
#[must_use]
pub fn add_transaction(
    existing: &[Transaction],
    new_transaction: Transaction,
    initial_balance: Decimal,
) -> Vec<PostedTransaction> {
    let mut merged = existing.to_vec();
    merged.push(new_transaction);
    // Vec::sort_by is a stable sort, which is what preserves tie order.
    merged.sort_by(|a, b| a.date.cmp(&b.date));
    compute_running_totals(&merged, initial_balance)
}
