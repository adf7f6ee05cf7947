//! Cart line items.

use crate::error::CommerceError;
use crate::ids::{TourId, VehicleId};
use crate::money::Money;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Maximum travellers per tour line.
pub const MAX_QUANTITY_PER_LINE: i64 = 9999;

/// Maximum length of a single rental.
pub const MAX_RENTAL_DAYS: i64 = 365;

/// One entry in the cart.
///
/// Persisted with a `"type"` tag so tour and vehicle lines are never told
/// apart by which fields happen to be present.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum CartLine {
    Tour(TourLine),
    Vehicle(VehicleLine),
}

impl CartLine {
    /// The key this line is addressed by.
    pub fn line_ref(&self) -> CartLineRef {
        match self {
            CartLine::Tour(line) => CartLineRef::Tour(line.tour_id.clone()),
            CartLine::Vehicle(line) => CartLineRef::Vehicle(line.vehicle_id.clone()),
        }
    }

    /// Display name of the booked item.
    pub fn label(&self) -> &str {
        match self {
            CartLine::Tour(line) => &line.title,
            CartLine::Vehicle(line) => &line.name,
        }
    }

    /// Price of this line before tax.
    pub fn line_total(&self) -> Result<Money, CommerceError> {
        match self {
            CartLine::Tour(line) => line.line_total(),
            CartLine::Vehicle(line) => Ok(line.total_price),
        }
    }

    /// Units this line contributes to the cart badge.
    pub fn units(&self) -> i64 {
        match self {
            CartLine::Tour(line) => line.quantity,
            CartLine::Vehicle(_) => 1,
        }
    }
}

/// A tour booking priced per person.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TourLine {
    pub tour_id: TourId,
    pub title: String,
    /// Price per person at the time the line was added.
    pub price: Money,
    /// Number of travellers, at least 1.
    pub quantity: i64,
    pub image: String,
}

impl TourLine {
    /// `price * quantity`.
    pub fn line_total(&self) -> Result<Money, CommerceError> {
        self.price
            .checked_mul(self.quantity)
            .ok_or(CommerceError::Overflow)
    }
}

/// A vehicle rental priced per day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VehicleLine {
    pub vehicle_id: VehicleId,
    pub name: String,
    pub price_per_day: Money,
    /// Rental length, at least 1.
    pub days: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pickup_date: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dropoff_date: Option<NaiveDate>,
    /// `price_per_day * days`, fixed when the line is created.
    pub total_price: Money,
}

/// Requested rental period for a vehicle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rental {
    pub days: i64,
    pub pickup_date: Option<NaiveDate>,
    pub dropoff_date: Option<NaiveDate>,
}

impl Rental {
    /// A rental of `days` without fixed dates.
    pub fn days(days: i64) -> Self {
        Self {
            days,
            pickup_date: None,
            dropoff_date: None,
        }
    }

    /// Set pickup and dropoff dates.
    pub fn with_dates(mut self, pickup: NaiveDate, dropoff: NaiveDate) -> Self {
        self.pickup_date = Some(pickup);
        self.dropoff_date = Some(dropoff);
        self
    }

    /// Reject non-positive or oversized lengths and reversed dates.
    pub fn validate(&self) -> Result<(), CommerceError> {
        if self.days < 1 {
            return Err(CommerceError::InvalidRentalDays(self.days));
        }
        if self.days > MAX_RENTAL_DAYS {
            return Err(CommerceError::QuantityExceedsLimit(self.days, MAX_RENTAL_DAYS));
        }
        if let (Some(pickup), Some(dropoff)) = (self.pickup_date, self.dropoff_date) {
            if dropoff < pickup {
                return Err(CommerceError::InvalidRentalDates {
                    pickup: pickup.to_string(),
                    dropoff: dropoff.to_string(),
                });
            }
        }
        Ok(())
    }
}

/// Kind of line item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemType {
    Tour,
    Vehicle,
}

impl ItemType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ItemType::Tour => "tour",
            ItemType::Vehicle => "vehicle",
        }
    }
}

impl FromStr for ItemType {
    type Err = CommerceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "tour" => Ok(ItemType::Tour),
            "vehicle" => Ok(ItemType::Vehicle),
            _ => Err(CommerceError::unknown("item type", s)),
        }
    }
}

/// Addresses cart lines by `(item id, item type)`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum CartLineRef {
    Tour(TourId),
    Vehicle(VehicleId),
}

impl CartLineRef {
    /// Build from a raw id and its type.
    pub fn new(id: impl Into<String>, item_type: ItemType) -> Self {
        match item_type {
            ItemType::Tour => CartLineRef::Tour(TourId::new(id)),
            ItemType::Vehicle => CartLineRef::Vehicle(VehicleId::new(id)),
        }
    }

    pub fn item_type(&self) -> ItemType {
        match self {
            CartLineRef::Tour(_) => ItemType::Tour,
            CartLineRef::Vehicle(_) => ItemType::Vehicle,
        }
    }

    pub fn id(&self) -> &str {
        match self {
            CartLineRef::Tour(id) => id.as_str(),
            CartLineRef::Vehicle(id) => id.as_str(),
        }
    }

    /// Check if `line` is addressed by this reference.
    pub fn matches(&self, line: &CartLine) -> bool {
        match (self, line) {
            (CartLineRef::Tour(id), CartLine::Tour(line)) => &line.tour_id == id,
            (CartLineRef::Vehicle(id), CartLine::Vehicle(line)) => &line.vehicle_id == id,
            _ => false,
        }
    }
}

impl fmt::Display for CartLineRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.item_type().as_str(), self.id())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    fn date(s: &str) -> NaiveDate {
        s.parse().unwrap()
    }

    #[test]
    fn test_tour_line_json_shape() {
        let line = CartLine::Tour(TourLine {
            tour_id: TourId::new("1"),
            title: "African Safari Adventure".to_string(),
            price: Money::new(2499),
            quantity: 2,
            image: "safari.jpg".to_string(),
        });
        let json = serde_json::to_value(&line).unwrap();
        assert_eq!(json["type"], "tour");
        assert_eq!(json["tourId"], "1");
        assert_eq!(json["price"], 2499);
        assert_eq!(json["quantity"], 2);
    }

    #[test]
    fn test_vehicle_line_dates_are_iso() {
        let line = CartLine::Vehicle(VehicleLine {
            vehicle_id: VehicleId::new("v1"),
            name: "Toyota Corolla".to_string(),
            price_per_day: Money::new(45),
            days: 3,
            pickup_date: Some(date("2024-06-01")),
            dropoff_date: None,
            total_price: Money::new(135),
        });
        let json = serde_json::to_value(&line).unwrap();
        assert_eq!(json["type"], "vehicle");
        assert_eq!(json["pickupDate"], "2024-06-01");
        assert!(json.get("dropoffDate").is_none());
        assert_eq!(json["totalPrice"], 135);
    }

    #[test]
    fn test_rental_validation() {
        assert!(Rental::days(1).validate().is_ok());
        assert_matches!(Rental::days(0).validate(), Err(CommerceError::InvalidRentalDays(0)));
        assert_matches!(
            Rental::days(400).validate(),
            Err(CommerceError::QuantityExceedsLimit(400, MAX_RENTAL_DAYS))
        );
        assert_matches!(
            Rental::days(2)
                .with_dates(date("2024-06-05"), date("2024-06-01"))
                .validate(),
            Err(CommerceError::InvalidRentalDates { .. })
        );
        assert!(Rental::days(4)
            .with_dates(date("2024-06-01"), date("2024-06-05"))
            .validate()
            .is_ok());
    }

    #[test]
    fn test_line_ref_matches_by_type() {
        let tour = CartLine::Tour(TourLine {
            tour_id: TourId::new("v1"),
            title: "Oddly named".to_string(),
            price: Money::new(10),
            quantity: 1,
            image: String::new(),
        });
        assert!(CartLineRef::new("v1", ItemType::Tour).matches(&tour));
        assert!(!CartLineRef::new("v1", ItemType::Vehicle).matches(&tour));
    }
}
