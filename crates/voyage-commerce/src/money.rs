//! Money type for representing prices.
//!
//! The storefront trades in a single currency and prices everything in
//! whole currency units, so amounts are plain integers. All arithmetic is
//! checked; rounding only ever happens in [`Money::percent_floor`].

use serde::{Deserialize, Serialize};
use std::fmt;

/// Symbol used by [`Money`]'s `Display` impl.
pub const CURRENCY_SYMBOL: &str = "$";

/// A monetary amount in whole currency units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default)]
#[serde(transparent)]
pub struct Money(i64);

impl Money {
    /// Create a Money value.
    pub const fn new(amount: i64) -> Self {
        Self(amount)
    }

    /// Zero.
    pub const fn zero() -> Self {
        Self(0)
    }

    /// The raw amount.
    pub const fn amount(&self) -> i64 {
        self.0
    }

    /// Check if this is zero.
    pub fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Check if this is negative.
    pub fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Add another amount, returning `None` on overflow.
    pub fn checked_add(&self, other: Money) -> Option<Money> {
        self.0.checked_add(other.0).map(Money)
    }

    /// Multiply by a scalar, returning `None` on overflow.
    pub fn checked_mul(&self, factor: i64) -> Option<Money> {
        self.0.checked_mul(factor).map(Money)
    }

    /// `percent`% of this amount, rounded down (toward negative infinity).
    ///
    /// ```
    /// use voyage_commerce::money::Money;
    /// assert_eq!(Money::new(4998).percent_floor(10), Some(Money::new(499)));
    /// ```
    pub fn percent_floor(&self, percent: i64) -> Option<Money> {
        self.0
            .checked_mul(percent)
            .map(|scaled| Money(scaled.div_euclid(100)))
    }

    /// Sum an iterator of amounts, returning `None` on overflow.
    pub fn try_sum(mut iter: impl Iterator<Item = Money>) -> Option<Money> {
        iter.try_fold(Money::zero(), |acc, m| acc.checked_add(m))
    }

    /// Format with an explicit currency symbol (e.g., "€120").
    pub fn display_with(&self, symbol: &str) -> String {
        if self.0 < 0 {
            format!("-{}{}", symbol, self.0.unsigned_abs())
        } else {
            format!("{}{}", symbol, self.0)
        }
    }
}

impl From<i64> for Money {
    fn from(amount: i64) -> Self {
        Money(amount)
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_with(CURRENCY_SYMBOL))
    }
}
