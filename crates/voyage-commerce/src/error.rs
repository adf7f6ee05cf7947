//! Commerce error types.

use thiserror::Error;
use voyage_store::StoreError;

use crate::validation::ValidationError;

/// Errors that can occur in storefront operations.
///
/// Every operation either applies fully or fails with one of these before
/// touching persisted state.
#[derive(Error, Debug)]
pub enum CommerceError {
    /// Tour not found.
    #[error("Tour not found: {0}")]
    TourNotFound(String),

    /// Vehicle not found.
    #[error("Vehicle not found: {0}")]
    VehicleNotFound(String),

    /// Invalid quantity.
    #[error("Invalid quantity: {0}")]
    InvalidQuantity(i64),

    /// Quantity exceeds maximum allowed.
    #[error("Quantity {0} exceeds maximum allowed ({1})")]
    QuantityExceedsLimit(i64, i64),

    /// Invalid rental length.
    #[error("Invalid rental length: {0} day(s)")]
    InvalidRentalDays(i64),

    /// Dropoff before pickup.
    #[error("Dropoff date {dropoff} is before pickup date {pickup}")]
    InvalidRentalDates { pickup: String, dropoff: String },

    /// Vehicle lines only change by removal.
    #[error("Quantity of vehicle rental {0} cannot be changed")]
    LineNotAdjustable(String),

    /// Checkout attempted with nothing in the cart.
    #[error("Cart is empty")]
    EmptyCart,

    /// Invalid checkout state transition.
    #[error("Invalid checkout transition from {from} to {to}")]
    InvalidCheckoutTransition { from: String, to: String },

    /// A required form field was left blank.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// A record id did not increase past the last one in its log.
    #[error("Record id {0} is not newer than the last record")]
    RecordIdConflict(u64),

    /// Unrecognized option name.
    #[error("Unknown {kind}: {value}")]
    UnknownOption { kind: &'static str, value: String },

    /// Arithmetic overflow.
    #[error("Arithmetic overflow in money calculation")]
    Overflow,

    /// Storage error.
    #[error("Storage error: {0}")]
    Storage(#[from] StoreError),
}

impl CommerceError {
    pub(crate) fn unknown(kind: &'static str, value: impl Into<String>) -> Self {
        CommerceError::UnknownOption {
            kind,
            value: value.into(),
        }
    }
}
