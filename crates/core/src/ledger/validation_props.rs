//! Property-based tests for candidate transaction validation.

use chrono::NaiveDate;
use proptest::prelude::*;
use rust_decimal::Decimal;

use super::types::TransactionDraft;
use super::validation::{ValidationError, validate_draft};

/// Rule order used to check that reported errors are canonical.
const RULE_ORDER: [ValidationError; 5] = [
    ValidationError::MissingDescription,
    ValidationError::MissingDate,
    ValidationError::MissingAmount,
    ValidationError::NegativeAmount,
    ValidationError::InvalidCategory,
];

fn rule_rank(error: ValidationError) -> usize {
    RULE_ORDER
        .iter()
        .position(|candidate| *candidate == error)
        .unwrap()
}

/// Strategy for a valid category string.
fn valid_category() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("Income".to_string()),
        Just("Expense".to_string()),
        Just("Transfer".to_string()),
    ]
}

/// Strategy for a category string that is NOT in the closed enum.
fn invalid_category() -> impl Strategy<Value = Option<String>> {
    prop_oneof![
        Just(None),
        Just(Some(String::new())),
        Just(Some("income".to_string())),
        "[A-Z][a-z]{3,8}".prop_map(|s| Some(format!("X{s}"))),
    ]
}

/// Strategy for a draft that satisfies every rule.
fn valid_draft() -> impl Strategy<Value = TransactionDraft> {
    (
        "[a-z]{1,16}",
        valid_category(),
        0i64..100_000_000i64,
        (2020i32..2031i32, 1u32..13u32, 1u32..29u32),
    )
        .prop_map(|(description, category, cents, (y, m, d))| TransactionDraft {
            date: NaiveDate::from_ymd_opt(y, m, d),
            description: Some(description),
            category: Some(category),
            subcategory: None,
            amount: Some(Decimal::new(cents, 2)),
            fund: None,
            notes: None,
        })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// A draft with non-blank description, present date, non-negative
    /// amount, and valid category SHALL pass validation.
    #[test]
    fn prop_complete_draft_is_valid(draft in valid_draft()) {
        let report = validate_draft(&draft);
        prop_assert!(report.is_valid(), "unexpected errors: {:?}", report.errors);
    }

    /// A negative amount SHALL report only the negative-amount rule for
    /// the amount field, never the missing-amount rule.
    #[test]
    fn prop_negative_amount_excludes_missing_amount(
        draft in valid_draft(),
        cents in 1i64..100_000_000i64,
    ) {
        let negative = TransactionDraft {
            amount: Some(Decimal::new(-cents, 2)),
            ..draft
        };
        let report = validate_draft(&negative);

        prop_assert!(report.errors.contains(&ValidationError::NegativeAmount));
        prop_assert!(!report.errors.contains(&ValidationError::MissingAmount));
    }

    /// A blank description SHALL be reported regardless of how much
    /// whitespace padding the form submitted.
    #[test]
    fn prop_whitespace_description_rejected(
        draft in valid_draft(),
        padding in "[ \t]{0,8}",
    ) {
        let blank = TransactionDraft {
            description: Some(padding),
            ..draft
        };
        let report = validate_draft(&blank);

        prop_assert!(report.errors.contains(&ValidationError::MissingDescription));
    }

    /// A category outside the closed enum SHALL be rejected.
    #[test]
    fn prop_unknown_category_rejected(
        draft in valid_draft(),
        category in invalid_category(),
    ) {
        let bad = TransactionDraft { category, ..draft };
        let report = validate_draft(&bad);

        prop_assert!(report.errors.contains(&ValidationError::InvalidCategory));
    }

    /// Reported errors SHALL appear in canonical rule order with no
    /// duplicates, for any combination of failing fields.
    #[test]
    fn prop_errors_follow_rule_order(
        description in prop_oneof![Just(None), Just(Some(String::new())), "[a-z]{1,8}".prop_map(Some)],
        has_date in any::<bool>(),
        amount in prop_oneof![
            Just(None),
            (-100_000i64..100_000i64).prop_map(|cents| Some(Decimal::new(cents, 2))),
        ],
        category in prop_oneof![valid_category().prop_map(Some), invalid_category()],
    ) {
        let draft = TransactionDraft {
            date: has_date.then(|| NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()),
            description,
            category,
            subcategory: None,
            amount,
            fund: None,
            notes: None,
        };
        let report = validate_draft(&draft);

        let ranks: Vec<usize> = report.errors.iter().map(|e| rule_rank(*e)).collect();
        for window in ranks.windows(2) {
            prop_assert!(window[0] < window[1], "errors out of order: {:?}", report.errors);
        }
    }

    /// Validation SHALL be a pure report: same draft, same outcome, and
    /// `is_valid` mirrors the error list exactly.
    #[test]
    fn prop_validation_is_pure_and_consistent(draft in valid_draft()) {
        let first = validate_draft(&draft);
        let second = validate_draft(&draft);

        prop_assert_eq!(&first, &second);
        prop_assert_eq!(first.is_valid(), first.errors.is_empty());
    }
}
