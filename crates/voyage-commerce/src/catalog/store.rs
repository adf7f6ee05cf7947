//! Read-only catalog store.

use crate::catalog::{data, Review, Tour, Vehicle};
use crate::error::CommerceError;
use crate::ids::{TourId, VehicleId};
use crate::search::{TourFilter, VehicleFilter};

/// Tours shown on the landing page.
pub const FEATURED_TOUR_COUNT: usize = 6;
/// Vehicles shown on the landing page.
pub const FEATURED_VEHICLE_COUNT: usize = 4;
/// Reviews shown as testimonials.
pub const TESTIMONIAL_COUNT: usize = 3;
/// Alternatives suggested on a vehicle page.
pub const SIMILAR_VEHICLE_COUNT: usize = 4;

/// The bookable catalog: tours, vehicles and reviews.
///
/// Immutable after construction, so any number of readers can share it.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    tours: Vec<Tour>,
    vehicles: Vec<Vehicle>,
    reviews: Vec<Review>,
}

impl Catalog {
    /// Build a catalog from explicit records. Order is the featured order.
    pub fn new(tours: Vec<Tour>, vehicles: Vec<Vehicle>, reviews: Vec<Review>) -> Self {
        Self {
            tours,
            vehicles,
            reviews,
        }
    }

    /// The catalog bundled with the storefront.
    pub fn builtin() -> Self {
        Self::new(data::tours(), data::vehicles(), data::reviews())
    }

    /// All tours in catalog order.
    pub fn tours(&self) -> &[Tour] {
        &self.tours
    }

    /// All vehicles in catalog order.
    pub fn vehicles(&self) -> &[Vehicle] {
        &self.vehicles
    }

    /// All reviews in catalog order.
    pub fn reviews(&self) -> &[Review] {
        &self.reviews
    }

    /// Tours matching `filter`, ordered by its sort option.
    pub fn list_tours(&self, filter: &TourFilter) -> Vec<&Tour> {
        filter.apply(&self.tours)
    }

    /// Look up a tour.
    pub fn get_tour(&self, id: &TourId) -> Option<&Tour> {
        self.tours.iter().find(|t| &t.id == id)
    }

    /// Look up a tour, failing with [`CommerceError::TourNotFound`].
    pub fn tour(&self, id: &TourId) -> Result<&Tour, CommerceError> {
        self.get_tour(id)
            .ok_or_else(|| CommerceError::TourNotFound(id.to_string()))
    }

    /// Vehicles matching `filter`, in catalog order.
    pub fn list_vehicles(&self, filter: &VehicleFilter) -> Vec<&Vehicle> {
        filter.apply(&self.vehicles)
    }

    /// Look up a vehicle.
    pub fn get_vehicle(&self, id: &VehicleId) -> Option<&Vehicle> {
        self.vehicles.iter().find(|v| &v.id == id)
    }

    /// Look up a vehicle, failing with [`CommerceError::VehicleNotFound`].
    pub fn vehicle(&self, id: &VehicleId) -> Result<&Vehicle, CommerceError> {
        self.get_vehicle(id)
            .ok_or_else(|| CommerceError::VehicleNotFound(id.to_string()))
    }

    /// Reviews of one tour. Unknown ids yield an empty list.
    pub fn reviews_for(&self, tour_id: &TourId) -> Vec<&Review> {
        self.reviews.iter().filter(|r| &r.tour == tour_id).collect()
    }

    /// Landing-page tours.
    pub fn featured_tours(&self) -> &[Tour] {
        &self.tours[..self.tours.len().min(FEATURED_TOUR_COUNT)]
    }

    /// Landing-page vehicles.
    pub fn featured_vehicles(&self) -> &[Vehicle] {
        &self.vehicles[..self.vehicles.len().min(FEATURED_VEHICLE_COUNT)]
    }

    /// Landing-page testimonials, each with the tour it reviews.
    pub fn testimonials(&self) -> Vec<(&Review, Option<&Tour>)> {
        self.reviews
            .iter()
            .take(TESTIMONIAL_COUNT)
            .map(|r| (r, self.get_tour(&r.tour)))
            .collect()
    }

    /// Other vehicles of the same type as `id`.
    pub fn similar_vehicles(&self, id: &VehicleId) -> Vec<&Vehicle> {
        let Some(vehicle) = self.get_vehicle(id) else {
            return Vec::new();
        };
        self.vehicles
            .iter()
            .filter(|v| v.vehicle_type == vehicle.vehicle_type && v.id != vehicle.id)
            .take(SIMILAR_VEHICLE_COUNT)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{TourCategory, VehicleType};
    use crate::money::Money;
    use crate::search::TourSort;
    use assert_matches::assert_matches;

    fn ids<'a>(tours: impl IntoIterator<Item = &'a Tour>) -> Vec<&'a str> {
        tours.into_iter().map(|t| t.id.as_str()).collect()
    }

    #[test]
    fn test_unfiltered_listing_keeps_catalog_order() {
        let catalog = Catalog::builtin();
        let tours = catalog.list_tours(&TourFilter::new());
        assert_eq!(ids(tours), vec!["1", "2", "3", "4", "5", "6", "7", "8"]);
    }

    #[test]
    fn test_category_and_price_filter() {
        let catalog = Catalog::builtin();
        let filter = TourFilter::new()
            .with_category(TourCategory::Beach)
            .with_price_range(Money::new(1000), Money::new(2000));
        assert_eq!(ids(catalog.list_tours(&filter)), vec!["4"]);
    }

    #[test]
    fn test_text_search_spans_title_location_description() {
        let catalog = Catalog::builtin();
        // location
        assert_eq!(ids(catalog.list_tours(&TourFilter::new().with_text("PERU"))), vec!["3"]);
        // description only
        assert_eq!(
            ids(catalog.list_tours(&TourFilter::new().with_text("yacht"))),
            vec!["8"]
        );
        // title
        assert_eq!(
            ids(catalog.list_tours(&TourFilter::new().with_text("northern lights"))),
            vec!["7"]
        );
    }

    #[test]
    fn test_sort_price_low_and_high() {
        let catalog = Catalog::builtin();
        let low = catalog.list_tours(&TourFilter::new().with_sort(TourSort::PriceLow));
        assert_eq!(ids(low), vec!["3", "6", "4", "5", "2", "7", "8", "1"]);

        let high = catalog.list_tours(&TourFilter::new().with_sort(TourSort::PriceHigh));
        assert_eq!(ids(high), vec!["1", "8", "7", "2", "5", "4", "6", "3"]);
    }

    #[test]
    fn test_sort_rating_is_stable() {
        let catalog = Catalog::builtin();
        let rated = catalog.list_tours(&TourFilter::new().with_sort(TourSort::Rating));
        // 4.9 ties (3, 4, 7) and 4.8 ties (1, 5, 8) keep catalog order.
        assert_eq!(ids(rated), vec!["3", "4", "7", "1", "5", "8", "2", "6"]);
    }

    #[test]
    fn test_vehicle_filter_matches_name_only() {
        let catalog = Catalog::builtin();
        let suvs = catalog.list_vehicles(&VehicleFilter::new().with_text("suv"));
        let names: Vec<_> = suvs.iter().map(|v| v.name.as_str()).collect();
        assert_eq!(names, vec!["Honda CRV SUV", "BMW X5 SUV"]);

        // "Diesel" appears only in fuel type, not in any name.
        assert!(catalog
            .list_vehicles(&VehicleFilter::new().with_text("diesel"))
            .is_empty());
    }

    #[test]
    fn test_vehicle_type_and_price_filter() {
        let catalog = Catalog::builtin();
        let filter = VehicleFilter::new()
            .with_type(VehicleType::Motorcycle)
            .with_price_range(Money::new(0), Money::new(50));
        let found: Vec<_> = catalog.list_vehicles(&filter).iter().map(|v| v.id.as_str()).collect();
        assert_eq!(found, vec!["v4"]);
    }

    #[test]
    fn test_lookup_not_found() {
        let catalog = Catalog::builtin();
        assert!(catalog.get_tour(&TourId::new("99")).is_none());
        assert_matches!(
            catalog.vehicle(&VehicleId::new("v99")),
            Err(CommerceError::VehicleNotFound(id)) if id == "v99"
        );
    }

    #[test]
    fn test_reviews_for_tour() {
        let catalog = Catalog::builtin();
        let reviews = catalog.reviews_for(&TourId::new("2"));
        assert_eq!(reviews.len(), 1);
        assert_eq!(reviews[0].name, "Michael Chen");
        assert!(catalog.reviews_for(&TourId::new("nope")).is_empty());
    }

    #[test]
    fn test_landing_page_slices() {
        let catalog = Catalog::builtin();
        assert_eq!(catalog.featured_tours().len(), FEATURED_TOUR_COUNT);
        assert_eq!(catalog.featured_vehicles().len(), FEATURED_VEHICLE_COUNT);

        let testimonials = catalog.testimonials();
        assert_eq!(testimonials.len(), TESTIMONIAL_COUNT);
        assert_eq!(
            testimonials[0].1.map(|t| t.title.as_str()),
            Some("African Safari Adventure")
        );
    }

    #[test]
    fn test_similar_vehicles() {
        let catalog = Catalog::builtin();
        let similar: Vec<_> = catalog
            .similar_vehicles(&VehicleId::new("v2"))
            .iter()
            .map(|v| v.id.as_str())
            .collect();
        assert_eq!(similar, vec!["v7"]);
        assert!(catalog.similar_vehicles(&VehicleId::new("v99")).is_empty());
    }
}
