//! Travel storefront domain types and logic for Voyage.
//!
//! This crate provides the pieces behind the storefront:
//!
//! - **Catalog**: Tours, vehicles, reviews, filtering and sorting
//! - **Cart**: Tour and vehicle lines, pricing, the persisted cart ledger
//! - **Checkout**: Cart → checkout → confirmation flow, bookings
//! - **Contact**: Contact-form inquiries
//! - **Logs**: Append-only booking and inquiry logs
//!
//! # Example
//!
//! ```rust
//! use voyage_commerce::prelude::*;
//! use voyage_store::MemoryStore;
//!
//! let shop = Storefront::with_builtin_catalog(MemoryStore::new());
//!
//! // Two travellers on the safari
//! shop.cart().add_tour_line(&TourId::new("1"), 2)?;
//! assert_eq!(shop.cart().total()?, Money::new(5497));
//!
//! let customer = CustomerDetails::new("Ada", "ada@example.com", "1 Main St", "Lisbon");
//! let booking = shop.checkout(customer)?;
//! assert_eq!(booking.total, Money::new(5497));
//! assert!(shop.cart().lines()?.is_empty());
//! # Ok::<(), voyage_commerce::CommerceError>(())
//! ```

pub mod error;
pub mod ids;
pub mod money;
pub mod validation;

pub mod cart;
pub mod catalog;
pub mod checkout;
pub mod contact;
pub mod log;
pub mod search;
pub mod storefront;

pub use error::CommerceError;
pub use ids::*;
pub use money::Money;
pub use storefront::Storefront;

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::error::CommerceError;
    pub use crate::ids::*;
    pub use crate::money::Money;
    pub use crate::validation::ValidationError;

    // Catalog
    pub use crate::catalog::{
        Catalog, Difficulty, FuelType, Review, Tour, TourCategory, Transmission, Vehicle,
        VehicleType,
    };

    // Cart
    pub use crate::cart::{
        Cart, CartLedger, CartLine, CartLineRef, CartSummary, ItemType, Rental, TourLine,
        VehicleLine,
    };

    // Checkout
    pub use crate::checkout::{Booking, CheckoutFlow, CheckoutStep, CustomerDetails};

    // Contact
    pub use crate::contact::{ContactForm, Inquiry};

    // Logs
    pub use crate::log::{BookingLog, InquiryLog, Record, RecordLog};

    // Search
    pub use crate::search::{PriceRange, TourFilter, TourSort, VehicleFilter};

    pub use crate::storefront::Storefront;
}
