//! Persisted cart for the active session.

use tracing::debug;
use voyage_store::Repository;

use crate::cart::{Cart, CartLine, CartLineRef, CartSummary, Rental};
use crate::catalog::Catalog;
use crate::error::CommerceError;
use crate::ids::{TourId, VehicleId};
use crate::money::Money;

/// The cart as stored in a repository.
///
/// Each mutation loads the whole cart, applies one [`Cart`] operation and
/// writes the whole cart back. A rejected operation leaves the stored cart
/// untouched.
#[derive(Debug, Clone)]
pub struct CartLedger<'c, R> {
    catalog: &'c Catalog,
    repo: R,
}

impl<'c, R: Repository<CartLine>> CartLedger<'c, R> {
    pub fn new(catalog: &'c Catalog, repo: R) -> Self {
        Self { catalog, repo }
    }

    /// Add `quantity` travellers for a catalog tour.
    pub fn add_tour_line(&self, tour_id: &TourId, quantity: i64) -> Result<(), CommerceError> {
        let tour = self.catalog.tour(tour_id)?;
        self.modify(|cart| cart.add_tour(tour, quantity))?;
        debug!(tour = %tour_id, quantity, "added tour to cart");
        Ok(())
    }

    /// Add a rental of a catalog vehicle.
    pub fn add_vehicle_line(&self, vehicle_id: &VehicleId, rental: Rental) -> Result<(), CommerceError> {
        let vehicle = self.catalog.vehicle(vehicle_id)?;
        self.modify(|cart| cart.add_vehicle(vehicle, rental))?;
        debug!(vehicle = %vehicle_id, days = rental.days, "added vehicle to cart");
        Ok(())
    }

    /// See [`Cart::set_quantity`].
    pub fn set_quantity(&self, line: &CartLineRef, quantity: i64) -> Result<bool, CommerceError> {
        let changed = self.modify(|cart| cart.set_quantity(line, quantity))?;
        debug!(line = %line, quantity, changed, "set cart quantity");
        Ok(changed)
    }

    /// See [`Cart::remove`].
    pub fn remove(&self, line: &CartLineRef) -> Result<bool, CommerceError> {
        let removed = self.modify(|cart| Ok(cart.remove(line)))?;
        debug!(line = %line, removed, "removed from cart");
        Ok(removed)
    }

    /// Empty the cart.
    pub fn clear(&self) -> Result<(), CommerceError> {
        self.repo.save(&[])?;
        debug!("cleared cart");
        Ok(())
    }

    /// Current lines in insertion order.
    pub fn lines(&self) -> Result<Vec<CartLine>, CommerceError> {
        Ok(self.repo.load()?)
    }

    /// Current cart.
    pub fn cart(&self) -> Result<Cart, CommerceError> {
        self.lines().map(Cart::from_lines)
    }

    pub fn subtotal(&self) -> Result<Money, CommerceError> {
        self.cart()?.subtotal()
    }

    pub fn tax(&self) -> Result<Money, CommerceError> {
        self.cart()?.tax()
    }

    pub fn total(&self) -> Result<Money, CommerceError> {
        self.cart()?.total()
    }

    pub fn summary(&self) -> Result<CartSummary, CommerceError> {
        self.cart()?.summary()
    }

    fn modify<T>(
        &self,
        f: impl FnOnce(&mut Cart) -> Result<T, CommerceError>,
    ) -> Result<T, CommerceError> {
        self.repo.update(|lines| {
            let mut cart = Cart::from_lines(std::mem::take(lines));
            let result = f(&mut cart);
            *lines = cart.into_lines();
            result
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cart::ItemType;
    use assert_matches::assert_matches;
    use voyage_store::{Collection, MemoryStore};

    fn ledger(catalog: &Catalog) -> CartLedger<'_, Collection<MemoryStore, CartLine>> {
        CartLedger::new(catalog, Collection::new(MemoryStore::new(), "cart"))
    }

    #[test]
    fn test_mutations_persist() {
        let catalog = Catalog::builtin();
        let ledger = ledger(&catalog);

        ledger.add_tour_line(&TourId::new("1"), 2).unwrap();
        ledger.add_vehicle_line(&VehicleId::new("v1"), Rental::days(3)).unwrap();

        let lines = ledger.lines().unwrap();
        assert_eq!(lines.len(), 2);
        assert_eq!(ledger.subtotal().unwrap(), Money::new(4998 + 135));
    }

    #[test]
    fn test_unknown_items_rejected() {
        let catalog = Catalog::builtin();
        let ledger = ledger(&catalog);

        assert_matches!(
            ledger.add_tour_line(&TourId::new("404"), 1),
            Err(CommerceError::TourNotFound(_))
        );
        assert_matches!(
            ledger.add_vehicle_line(&VehicleId::new("v404"), Rental::days(1)),
            Err(CommerceError::VehicleNotFound(_))
        );
        assert!(ledger.lines().unwrap().is_empty());
    }

    #[test]
    fn test_rejected_mutation_leaves_cart_unchanged() {
        let catalog = Catalog::builtin();
        let ledger = ledger(&catalog);
        ledger.add_vehicle_line(&VehicleId::new("v2"), Rental::days(2)).unwrap();
        let before = ledger.lines().unwrap();

        let line = CartLineRef::new("v2", ItemType::Vehicle);
        assert_matches!(
            ledger.set_quantity(&line, 4),
            Err(CommerceError::LineNotAdjustable(_))
        );
        assert_matches!(
            ledger.add_tour_line(&TourId::new("1"), 0),
            Err(CommerceError::InvalidQuantity(0))
        );
        assert_eq!(ledger.lines().unwrap(), before);
    }

    #[test]
    fn test_remove_and_clear() {
        let catalog = Catalog::builtin();
        let ledger = ledger(&catalog);
        ledger.add_tour_line(&TourId::new("5"), 1).unwrap();
        ledger.add_tour_line(&TourId::new("6"), 1).unwrap();

        assert!(ledger.remove(&CartLineRef::new("5", ItemType::Tour)).unwrap());
        assert!(!ledger.remove(&CartLineRef::new("5", ItemType::Tour)).unwrap());
        assert_eq!(ledger.summary().unwrap().line_count, 1);

        ledger.clear().unwrap();
        assert!(ledger.cart().unwrap().is_empty());
        assert_eq!(ledger.total().unwrap(), Money::zero());
    }
}
