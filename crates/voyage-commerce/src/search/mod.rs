//! Search module.
//!
//! Contains listing filters and sort options for the catalog.

mod filter;
mod sort;

pub use filter::{PriceRange, TourFilter, VehicleFilter, TOUR_PRICE_CEILING, VEHICLE_PRICE_CEILING};
pub use sort::TourSort;
