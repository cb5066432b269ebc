//! Business rule validation for candidate transactions.
//!
//! Validation never raises faults: it reports every failing rule in a
//! [`ValidationReport`] so the dashboard form can surface all problems
//! at once. The rules are evaluated independently and in a fixed order;
//! callers (and the test corpus) rely on exact error counts and
//! ordering, so the checks must not be merged or short-circuited.

use rust_decimal::Decimal;
use thiserror::Error;

use super::transaction::Category;
use super::types::TransactionDraft;

/// Validation errors for candidate transactions.
///
/// The `Display` strings are shown verbatim in the dashboard form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// Description missing or blank after trimming.
    #[error("Description is required")]
    MissingDescription,

    /// No date supplied.
    #[error("Date is required")]
    MissingDate,

    /// No amount supplied.
    #[error("Amount is required")]
    MissingAmount,

    /// Amount supplied but negative.
    #[error("Amount must be positive (use Expense category for negative impact)")]
    NegativeAmount,

    /// Category missing or not one of the closed enum values.
    #[error("Category must be Income, Expense, or Transfer")]
    InvalidCategory,
}

/// The outcome of validating a candidate transaction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationReport {
    /// Every failing rule, in rule order.
    pub errors: Vec<ValidationError>,
}

impl ValidationReport {
    /// Returns true if no rule failed.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// Returns the display messages for all failing rules, in rule order.
    #[must_use]
    pub fn messages(&self) -> Vec<String> {
        self.errors.iter().map(ToString::to_string).collect()
    }
}

/// Validates a candidate transaction from raw form state.
///
/// All rules run independently; a draft can fail several at once. A
/// missing amount and a negative amount are mutually exclusive in
/// practice, but the rules stay written as separate checks.
#[must_use]
pub fn validate_draft(draft: &TransactionDraft) -> ValidationReport {
    let mut errors = Vec::new();

    if draft
        .description
        .as_deref()
        .is_none_or(|description| description.trim().is_empty())
    {
        errors.push(ValidationError::MissingDescription);
    }

    if draft.date.is_none() {
        errors.push(ValidationError::MissingDate);
    }

    match draft.amount {
        None => errors.push(ValidationError::MissingAmount),
        Some(amount) if amount < Decimal::ZERO => errors.push(ValidationError::NegativeAmount),
        Some(_) => {}
    }

    let category_is_valid = draft
        .category
        .as_deref()
        .is_some_and(|category| category.parse::<Category>().is_ok());
    if !category_is_valid {
        errors.push(ValidationError::InvalidCategory);
    }

    ValidationReport { errors }
}
