//! Booking records.

use chrono::{DateTime, TimeZone};
use serde::{Deserialize, Serialize};

use crate::cart::{Cart, CartLine};
use crate::checkout::CustomerDetails;
use crate::error::CommerceError;
use crate::ids::RecordId;
use crate::log::Record;
use crate::money::Money;

/// A completed checkout.
///
/// `items` is a copy of the cart taken at checkout time; later cart
/// changes never reach it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Booking {
    pub id: RecordId,
    /// Creation date as `M/D/YYYY`.
    pub date: String,
    pub items: Vec<CartLine>,
    pub customer: CustomerDetails,
    /// Subtotal plus tax.
    pub total: Money,
}

impl Booking {
    /// Snapshot `cart` into a new booking.
    pub fn from_cart<Tz: TimeZone>(
        id: RecordId,
        cart: &Cart,
        customer: CustomerDetails,
        created: &DateTime<Tz>,
    ) -> Result<Self, CommerceError>
    where
        Tz::Offset: std::fmt::Display,
    {
        Ok(Self {
            id,
            date: format_booking_date(created),
            items: cart.lines().to_vec(),
            customer,
            total: cart.total()?,
        })
    }

    /// Name shown on the confirmation.
    pub fn guest_name(&self) -> String {
        self.customer.full_name()
    }

    /// Travellers plus rentals in this booking.
    pub fn item_count(&self) -> i64 {
        self.items.iter().map(CartLine::units).sum()
    }
}

impl Record for Booking {
    fn id(&self) -> RecordId {
        self.id
    }
}

/// Format a date the way bookings store it, e.g. `3/7/2024`.
pub fn format_booking_date<Tz: TimeZone>(at: &DateTime<Tz>) -> String
where
    Tz::Offset: std::fmt::Display,
{
    at.format("%-m/%-d/%Y").to_string()
}
