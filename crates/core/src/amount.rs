//! Amount - Face value of a billet
//!
//! Billets encode their value as an integer number of cents.
//! `Amount` keeps it as a non-negative decimal with two places.

use rust_decimal::Decimal;
use serde::Serialize;
use std::fmt;

/// A non-negative monetary amount in currency units (BRL).
///
/// # Invariant
/// The inner value is always >= 0: the only constructor takes unsigned cents.
///
/// # Example
/// ```
/// use billet_core::Amount;
/// use rust_decimal::Decimal;
///
/// let amount = Amount::from_cents(12345);
/// assert_eq!(amount.value(), Decimal::new(12345, 2));
/// assert_eq!(amount.to_string(), "123.45");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(into = "Decimal")]
pub struct Amount(Decimal);

impl Amount {
    /// Zero amount constant
    pub const ZERO: Self = Self(Decimal::ZERO);

    /// Create an Amount from a whole number of cents.
    pub fn from_cents(cents: u64) -> Self {
        Self(Decimal::new(i64::try_from(cents).unwrap_or(i64::MAX), 2))
    }

    /// Get the inner Decimal value
    #[inline]
    pub const fn value(&self) -> Decimal {
        self.0
    }

    /// Check if the amount is zero
    #[inline]
    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<Amount> for Decimal {
    fn from(amount: Amount) -> Self {
        amount.0
    }
}

impl Default for Amount {
    fn default() -> Self {
        Self::ZERO
    }
}
