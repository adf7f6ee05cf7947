//! Catalog module.
//!
//! Contains the read-only tour, vehicle and review records and the store
//! that answers lookups and listing queries over them.

pub mod data;
mod review;
mod store;
mod tour;
mod vehicle;

pub use review::Review;
pub use store::{Catalog, FEATURED_TOUR_COUNT, FEATURED_VEHICLE_COUNT, SIMILAR_VEHICLE_COUNT, TESTIMONIAL_COUNT};
pub use tour::{Difficulty, Tour, TourCategory};
pub use vehicle::{FuelType, Transmission, Vehicle, VehicleType};
