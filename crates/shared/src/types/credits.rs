//! Credit amounts with decimal precision.
//!
//! CRITICAL: Never use floating-point for money calculations.
//! This type wraps `rust_decimal::Decimal` for arbitrary precision.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A monetary amount in credits (Cr), the campaign's currency unit.
///
/// Uses `Decimal` internally to avoid floating-point precision errors.
/// The `Display` implementation renders the dashboard format: grouped
/// thousands, preserved sign, fractional digits exactly as present in
/// the amount, and a trailing ` Cr` suffix.
///
/// ```
/// use quartermaster_shared::Credits;
/// use rust_decimal_macros::dec;
///
/// assert_eq!(Credits::new(dec!(1234567)).to_string(), "1,234,567 Cr");
/// assert_eq!(Credits::new(dec!(-1000)).to_string(), "-1,000 Cr");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Credits(Decimal);

impl Credits {
    /// Creates a new credit amount.
    #[must_use]
    pub const fn new(amount: Decimal) -> Self {
        Self(amount)
    }

    /// A zero credit amount.
    #[must_use]
    pub fn zero() -> Self {
        Self(Decimal::ZERO)
    }

    /// Returns the underlying decimal amount.
    #[must_use]
    pub const fn amount(self) -> Decimal {
        self.0
    }

    /// Returns true if the amount is zero.
    #[must_use]
    pub fn is_zero(self) -> bool {
        self.0.is_zero()
    }

    /// Returns true if the amount is negative.
    #[must_use]
    pub fn is_negative(self) -> bool {
        self.0.is_sign_negative() && !self.0.is_zero()
    }
}

impl From<Decimal> for Credits {
    fn from(amount: Decimal) -> Self {
        Self(amount)
    }
}

impl From<Credits> for Decimal {
    fn from(credits: Credits) -> Self {
        credits.0
    }
}

/// Inserts a comma every three digits, counting from the right.
fn group_thousands(digits: &str) -> String {
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

impl std::fmt::Display for Credits {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let raw = self.0.to_string();
        let (sign, unsigned) = match raw.strip_prefix('-') {
            Some(rest) => ("-", rest),
            None => ("", raw.as_str()),
        };
        // Fractional digits are kept exactly as carried by the Decimal's
        // scale; only the integer part is grouped.
        let (int_part, frac_part) = match unsigned.split_once('.') {
            Some((int_part, frac_part)) => (int_part, Some(frac_part)),
            None => (unsigned, None),
        };

        write!(f, "{sign}{}", group_thousands(int_part))?;
        if let Some(frac) = frac_part {
            write!(f, ".{frac}")?;
        }
        write!(f, " Cr")
    }
}
