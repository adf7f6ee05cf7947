//! Listing filters for tours and vehicles.
//!
//! All predicates are ANDed together. An unset predicate matches
//! everything.

use crate::catalog::{Tour, TourCategory, Vehicle, VehicleType};
use crate::money::Money;
use crate::search::TourSort;
use serde::{Deserialize, Serialize};

/// Upper end of the tour price slider.
pub const TOUR_PRICE_CEILING: Money = Money::new(5000);

/// Upper end of the vehicle daily-rate slider.
pub const VEHICLE_PRICE_CEILING: Money = Money::new(200);

/// Inclusive price bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct PriceRange {
    pub min: Option<Money>,
    pub max: Option<Money>,
}

impl PriceRange {
    /// Bounds on both ends.
    pub fn between(min: Money, max: Money) -> Self {
        Self {
            min: Some(min),
            max: Some(max),
        }
    }

    /// No bounds.
    pub fn any() -> Self {
        Self::default()
    }

    /// Check if `price` lies within the bounds (inclusive).
    pub fn contains(&self, price: Money) -> bool {
        self.min.map_or(true, |min| price >= min) && self.max.map_or(true, |max| price <= max)
    }
}

fn matches_text(text: &Option<String>, matcher: impl FnOnce(&str) -> bool) -> bool {
    match text.as_deref() {
        None | Some("") => true,
        Some(needle) => matcher(needle),
    }
}

/// Tour listing query: filters plus sort order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct TourFilter {
    /// Exact category, or any when unset.
    pub category: Option<TourCategory>,
    /// Per-person price bounds.
    pub price: PriceRange,
    /// Case-insensitive search over title, location and description.
    pub text: Option<String>,
    pub sort: TourSort,
}

impl TourFilter {
    /// Match everything, featured order.
    pub fn new() -> Self {
        Self::default()
    }

    /// Restrict to one category.
    pub fn with_category(mut self, category: TourCategory) -> Self {
        self.category = Some(category);
        self
    }

    /// Restrict to an inclusive price range.
    pub fn with_price_range(mut self, min: Money, max: Money) -> Self {
        self.price = PriceRange::between(min, max);
        self
    }

    /// Search text.
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    /// Set sort option.
    pub fn with_sort(mut self, sort: TourSort) -> Self {
        self.sort = sort;
        self
    }

    /// Check a single tour against the predicates (sort is ignored).
    pub fn matches(&self, tour: &Tour) -> bool {
        self.category.map_or(true, |c| tour.category == c)
            && self.price.contains(tour.price)
            && matches_text(&self.text, |needle| tour.matches_text(needle))
    }

    /// Filter then stable-sort `tours`.
    pub fn apply<'a>(&self, tours: &'a [Tour]) -> Vec<&'a Tour> {
        let mut result: Vec<&Tour> = tours.iter().filter(|t| self.matches(t)).collect();
        self.sort.sort(&mut result);
        result
    }
}

/// Vehicle listing filter. Results keep catalog order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct VehicleFilter {
    /// Exact type, or any when unset.
    pub vehicle_type: Option<VehicleType>,
    /// Daily-rate bounds.
    pub price: PriceRange,
    /// Case-insensitive search over the name.
    pub text: Option<String>,
}

impl VehicleFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_type(mut self, vehicle_type: VehicleType) -> Self {
        self.vehicle_type = Some(vehicle_type);
        self
    }

    pub fn with_price_range(mut self, min: Money, max: Money) -> Self {
        self.price = PriceRange::between(min, max);
        self
    }

    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    pub fn matches(&self, vehicle: &Vehicle) -> bool {
        self.vehicle_type.map_or(true, |t| vehicle.vehicle_type == t)
            && self.price.contains(vehicle.price_per_day)
            && matches_text(&self.text, |needle| vehicle.matches_text(needle))
    }

    pub fn apply<'a>(&self, vehicles: &'a [Vehicle]) -> Vec<&'a Vehicle> {
        vehicles.iter().filter(|v| self.matches(v)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_price_range_inclusive() {
        let range = PriceRange::between(Money::new(1000), Money::new(2000));
        assert!(range.contains(Money::new(1000)));
        assert!(range.contains(Money::new(2000)));
        assert!(!range.contains(Money::new(999)));
        assert!(!range.contains(Money::new(2001)));
        assert!(PriceRange::any().contains(Money::new(i64::MAX)));
    }

    #[test]
    fn test_empty_text_matches_everything() {
        assert!(matches_text(&None, |_| false));
        assert!(matches_text(&Some(String::new()), |_| false));
        assert!(!matches_text(&Some("alps".to_string()), |_| false));
    }

    #[test]
    fn test_text_is_matched_as_typed() {
        let title = "swiss alps hiking";
        let found = |text: &str| matches_text(&Some(text.to_string()), |needle| title.contains(needle));
        assert!(found("alps "));
        assert!(!found("hiking "));
        assert!(!found("  "));
    }
}
