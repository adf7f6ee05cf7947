//! In-memory cart.

use crate::cart::{
    tax_on, CartLine, CartLineRef, CartSummary, Rental, TourLine, VehicleLine,
    MAX_QUANTITY_PER_LINE,
};
use crate::catalog::{Tour, Vehicle};
use crate::error::CommerceError;
use crate::money::Money;
use serde::{Deserialize, Serialize};

/// An ordered list of cart lines.
///
/// Holds at most one tour line per tour. Vehicle lines are never merged:
/// each one is a separate rental period, so the same vehicle may appear
/// several times.
///
/// Every mutating method validates its input before changing anything.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Cart {
    lines: Vec<CartLine>,
}

impl Cart {
    /// Create an empty cart.
    pub fn new() -> Self {
        Self::default()
    }

    /// Wrap previously persisted lines.
    pub fn from_lines(lines: Vec<CartLine>) -> Self {
        Self { lines }
    }

    /// Lines in insertion order.
    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    pub fn into_lines(self) -> Vec<CartLine> {
        self.lines
    }

    /// Add travellers for a tour.
    ///
    /// Increments the existing line for this tour, or appends a new one.
    pub fn add_tour(&mut self, tour: &Tour, quantity: i64) -> Result<(), CommerceError> {
        if quantity <= 0 {
            return Err(CommerceError::InvalidQuantity(quantity));
        }

        if let Some(existing) = self.tour_line_mut(&CartLineRef::Tour(tour.id.clone())) {
            let new_quantity = existing
                .quantity
                .checked_add(quantity)
                .ok_or(CommerceError::Overflow)?;
            if new_quantity > MAX_QUANTITY_PER_LINE {
                return Err(CommerceError::QuantityExceedsLimit(
                    new_quantity,
                    MAX_QUANTITY_PER_LINE,
                ));
            }
            existing.quantity = new_quantity;
            return Ok(());
        }

        if quantity > MAX_QUANTITY_PER_LINE {
            return Err(CommerceError::QuantityExceedsLimit(
                quantity,
                MAX_QUANTITY_PER_LINE,
            ));
        }

        self.lines.push(CartLine::Tour(TourLine {
            tour_id: tour.id.clone(),
            title: tour.title.clone(),
            price: tour.price,
            quantity,
            image: tour.image.clone(),
        }));
        Ok(())
    }

    /// Append a rental line for a vehicle.
    pub fn add_vehicle(&mut self, vehicle: &Vehicle, rental: Rental) -> Result<(), CommerceError> {
        rental.validate()?;
        let total_price = vehicle
            .price_per_day
            .checked_mul(rental.days)
            .ok_or(CommerceError::Overflow)?;

        self.lines.push(CartLine::Vehicle(VehicleLine {
            vehicle_id: vehicle.id.clone(),
            name: vehicle.name.clone(),
            price_per_day: vehicle.price_per_day,
            days: rental.days,
            pickup_date: rental.pickup_date,
            dropoff_date: rental.dropoff_date,
            total_price,
        }));
        Ok(())
    }

    /// Set the traveller count of a tour line.
    ///
    /// A quantity of zero or less removes the line. Vehicle lines can only
    /// be removed this way. Returns whether anything changed.
    pub fn set_quantity(&mut self, line: &CartLineRef, quantity: i64) -> Result<bool, CommerceError> {
        if quantity <= 0 {
            return Ok(self.remove(line));
        }

        if let CartLineRef::Vehicle(id) = line {
            return Err(CommerceError::LineNotAdjustable(id.to_string()));
        }

        if quantity > MAX_QUANTITY_PER_LINE {
            return Err(CommerceError::QuantityExceedsLimit(
                quantity,
                MAX_QUANTITY_PER_LINE,
            ));
        }

        match self.tour_line_mut(line) {
            Some(existing) => {
                existing.quantity = quantity;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Remove every line addressed by `line`. Absent lines are not an error.
    pub fn remove(&mut self, line: &CartLineRef) -> bool {
        let len_before = self.lines.len();
        self.lines.retain(|l| !line.matches(l));
        self.lines.len() < len_before
    }

    /// Clear all lines.
    pub fn clear(&mut self) {
        self.lines.clear();
    }

    /// Check if cart is empty.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Travellers plus one per rental.
    pub fn item_count(&self) -> i64 {
        self.lines.iter().map(CartLine::units).sum()
    }

    /// Sum of line totals.
    pub fn subtotal(&self) -> Result<Money, CommerceError> {
        let mut subtotal = Money::zero();
        for line in &self.lines {
            subtotal = subtotal
                .checked_add(line.line_total()?)
                .ok_or(CommerceError::Overflow)?;
        }
        Ok(subtotal)
    }

    /// `floor(subtotal * 10%)`.
    pub fn tax(&self) -> Result<Money, CommerceError> {
        tax_on(self.subtotal()?)
    }

    /// `subtotal + tax`.
    pub fn total(&self) -> Result<Money, CommerceError> {
        self.summary().map(|s| s.total)
    }

    /// Full pricing breakdown.
    pub fn summary(&self) -> Result<CartSummary, CommerceError> {
        let totals = self
            .lines
            .iter()
            .map(CartLine::line_total)
            .collect::<Result<Vec<_>, _>>()?;
        CartSummary::from_line_totals(totals.into_iter(), self.item_count(), self.lines.len())
    }

    fn tour_line_mut(&mut self, line: &CartLineRef) -> Option<&mut TourLine> {
        let CartLineRef::Tour(id) = line else {
            return None;
        };
        self.lines.iter_mut().find_map(|l| match l {
            CartLine::Tour(tour_line) if &tour_line.tour_id == id => Some(tour_line),
            _ => None,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;
    use crate::ids::{TourId, VehicleId};
    use assert_matches::assert_matches;

    fn catalog() -> Catalog {
        Catalog::builtin()
    }

    #[test]
    fn test_add_same_tour_merges() {
        let catalog = catalog();
        let safari = catalog.tour(&TourId::new("1")).unwrap();
        let mut cart = Cart::new();

        cart.add_tour(safari, 1).unwrap();
        cart.add_tour(safari, 2).unwrap();
        cart.add_tour(safari, 4).unwrap();

        assert_eq!(cart.lines().len(), 1);
        assert_eq!(cart.item_count(), 7);
    }

    #[test]
    fn test_invalid_quantity_rejected_without_change() {
        let catalog = catalog();
        let safari = catalog.tour(&TourId::new("1")).unwrap();
        let mut cart = Cart::new();
        cart.add_tour(safari, 1).unwrap();

        assert_matches!(cart.add_tour(safari, 0), Err(CommerceError::InvalidQuantity(0)));
        assert_matches!(cart.add_tour(safari, -3), Err(CommerceError::InvalidQuantity(-3)));
        assert_matches!(
            cart.add_tour(safari, MAX_QUANTITY_PER_LINE),
            Err(CommerceError::QuantityExceedsLimit(..))
        );
        assert_eq!(cart.item_count(), 1);
    }

    #[test]
    fn test_vehicle_lines_are_not_merged() {
        let catalog = catalog();
        let corolla = catalog.vehicle(&VehicleId::new("v1")).unwrap();
        let mut cart = Cart::new();

        cart.add_vehicle(corolla, Rental::days(3)).unwrap();
        cart.add_vehicle(corolla, Rental::days(2)).unwrap();

        assert_eq!(cart.lines().len(), 2);
        assert_eq!(cart.subtotal().unwrap(), Money::new(45 * 5));
    }

    #[test]
    fn test_pricing_example() {
        let catalog = catalog();
        let mut cart = Cart::new();
        cart.add_tour(catalog.tour(&TourId::new("1")).unwrap(), 2).unwrap();

        assert_eq!(cart.subtotal().unwrap(), Money::new(4998));
        assert_eq!(cart.tax().unwrap(), Money::new(499));
        assert_eq!(cart.total().unwrap(), Money::new(5497));
    }

    #[test]
    fn test_mixed_cart_pricing() {
        let catalog = catalog();
        let mut cart = Cart::new();
        cart.add_tour(catalog.tour(&TourId::new("3")).unwrap(), 3).unwrap();
        cart.add_vehicle(catalog.vehicle(&VehicleId::new("v3")).unwrap(), Rental::days(4))
            .unwrap();

        let summary = cart.summary().unwrap();
        assert_eq!(summary.subtotal, Money::new(1299 * 3 + 180 * 4));
        assert_eq!(summary.tax, Money::new((1299 * 3 + 180 * 4) / 10));
        assert_eq!(summary.total, Money::new(summary.subtotal.amount() + summary.tax.amount()));
        assert_eq!(summary.item_count, 4);
        assert_eq!(summary.line_count, 2);
    }

    #[test]
    fn test_set_quantity() {
        let catalog = catalog();
        let mut cart = Cart::new();
        cart.add_tour(catalog.tour(&TourId::new("2")).unwrap(), 1).unwrap();
        let line = CartLineRef::Tour(TourId::new("2"));

        assert!(cart.set_quantity(&line, 5).unwrap());
        assert_eq!(cart.item_count(), 5);

        assert!(!cart.set_quantity(&CartLineRef::Tour(TourId::new("8")), 2).unwrap());

        assert!(cart.set_quantity(&line, 0).unwrap());
        assert!(cart.is_empty());
    }

    #[test]
    fn test_vehicle_quantity_not_adjustable() {
        let catalog = catalog();
        let mut cart = Cart::new();
        cart.add_vehicle(catalog.vehicle(&VehicleId::new("v2")).unwrap(), Rental::days(2))
            .unwrap();
        let line = CartLineRef::Vehicle(VehicleId::new("v2"));

        assert_matches!(cart.set_quantity(&line, 3), Err(CommerceError::LineNotAdjustable(_)));
        assert_eq!(cart.lines().len(), 1);

        assert!(cart.set_quantity(&line, -1).unwrap());
        assert!(cart.is_empty());
    }

    #[test]
    fn test_remove_is_type_aware_and_idempotent() {
        let catalog = catalog();
        let mut cart = Cart::new();
        cart.add_tour(catalog.tour(&TourId::new("1")).unwrap(), 1).unwrap();
        cart.add_vehicle(catalog.vehicle(&VehicleId::new("v1")).unwrap(), Rental::days(1))
            .unwrap();

        assert!(!cart.remove(&CartLineRef::Vehicle(VehicleId::new("1"))));
        assert!(cart.remove(&CartLineRef::Tour(TourId::new("1"))));
        assert!(!cart.remove(&CartLineRef::Tour(TourId::new("1"))));
        assert_eq!(cart.lines().len(), 1);
    }

    #[test]
    fn test_empty_cart_totals() {
        let cart = Cart::new();
        let summary = cart.summary().unwrap();
        assert!(summary.is_empty());
        assert_eq!(summary.total, Money::zero());
    }
}
