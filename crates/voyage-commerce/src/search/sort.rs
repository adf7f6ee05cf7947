//! Sort options for tour listings.

use crate::catalog::Tour;
use crate::error::CommerceError;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

/// Sort options for tour listings.
///
/// Every ordering is stable: ties keep their catalog order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum TourSort {
    /// Catalog order.
    #[default]
    Featured,
    /// Price, low to high.
    PriceLow,
    /// Price, high to low.
    PriceHigh,
    /// Highest rated first.
    Rating,
}

impl TourSort {
    /// All options in menu order.
    pub const ALL: [TourSort; 4] = [
        TourSort::Featured,
        TourSort::PriceLow,
        TourSort::PriceHigh,
        TourSort::Rating,
    ];

    /// Wire name (e.g., "price-low").
    pub fn as_str(&self) -> &'static str {
        match self {
            TourSort::Featured => "featured",
            TourSort::PriceLow => "price-low",
            TourSort::PriceHigh => "price-high",
            TourSort::Rating => "rating",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            TourSort::Featured => "Featured",
            TourSort::PriceLow => "Price: Low to High",
            TourSort::PriceHigh => "Price: High to Low",
            TourSort::Rating => "Highest Rated",
        }
    }

    /// Compare two tours under this ordering.
    pub fn compare(&self, a: &Tour, b: &Tour) -> Ordering {
        match self {
            TourSort::Featured => Ordering::Equal,
            TourSort::PriceLow => a.price.cmp(&b.price),
            TourSort::PriceHigh => b.price.cmp(&a.price),
            TourSort::Rating => b.rating.total_cmp(&a.rating),
        }
    }

    /// Stable-sort `tours` in place.
    pub fn sort(&self, tours: &mut [&Tour]) {
        if *self != TourSort::Featured {
            tours.sort_by(|a, b| self.compare(a, b));
        }
    }
}

impl FromStr for TourSort {
    type Err = CommerceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TourSort::ALL
            .into_iter()
            .find(|o| o.as_str() == s.trim())
            .ok_or_else(|| CommerceError::unknown("sort option", s))
    }
}

impl fmt::Display for TourSort {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
