//! Checkout module.
//!
//! Contains the checkout flow, customer details and booking records.

mod booking;
mod customer;
mod flow;

pub use booking::{format_booking_date, Booking};
pub use customer::CustomerDetails;
pub use flow::{CheckoutFlow, CheckoutStep};
