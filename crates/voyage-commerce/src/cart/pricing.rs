//! Cart pricing calculations.

use crate::error::CommerceError;
use crate::money::Money;
use serde::{Deserialize, Serialize};

/// Flat tax rate applied to the cart subtotal.
pub const TAX_RATE_PERCENT: i64 = 10;

/// Tax owed on `subtotal`, truncated to whole currency units.
pub fn tax_on(subtotal: Money) -> Result<Money, CommerceError> {
    subtotal
        .percent_floor(TAX_RATE_PERCENT)
        .ok_or(CommerceError::Overflow)
}

/// Pricing breakdown for a cart.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CartSummary {
    /// Sum of line totals.
    pub subtotal: Money,
    /// `floor(subtotal * 10%)`.
    pub tax: Money,
    /// `subtotal + tax`.
    pub total: Money,
    /// Travellers plus rentals, for the cart badge.
    pub item_count: i64,
    /// Number of distinct lines.
    pub line_count: usize,
}

impl CartSummary {
    /// Price a list of line totals.
    pub fn from_line_totals(
        totals: impl Iterator<Item = Money>,
        item_count: i64,
        line_count: usize,
    ) -> Result<Self, CommerceError> {
        let subtotal = Money::try_sum(totals).ok_or(CommerceError::Overflow)?;
        let tax = tax_on(subtotal)?;
        let total = subtotal.checked_add(tax).ok_or(CommerceError::Overflow)?;
        Ok(Self {
            subtotal,
            tax,
            total,
            item_count,
            line_count,
        })
    }

    /// Check if the cart was empty.
    pub fn is_empty(&self) -> bool {
        self.line_count == 0
    }
}
