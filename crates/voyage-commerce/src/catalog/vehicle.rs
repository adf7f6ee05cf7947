//! Rental vehicle types.

use crate::error::CommerceError;
use crate::ids::VehicleId;
use crate::money::Money;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Vehicle class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum VehicleType {
    Economy,
    #[serde(rename = "SUV")]
    Suv,
    Luxury,
    Motorcycle,
    Minibus,
}

impl VehicleType {
    /// All vehicle types in storefront order.
    pub const ALL: [VehicleType; 5] = [
        VehicleType::Economy,
        VehicleType::Suv,
        VehicleType::Luxury,
        VehicleType::Motorcycle,
        VehicleType::Minibus,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            VehicleType::Economy => "Economy",
            VehicleType::Suv => "SUV",
            VehicleType::Luxury => "Luxury",
            VehicleType::Motorcycle => "Motorcycle",
            VehicleType::Minibus => "Minibus",
        }
    }
}

impl FromStr for VehicleType {
    type Err = CommerceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        VehicleType::ALL
            .into_iter()
            .find(|t| t.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| CommerceError::unknown("vehicle type", s))
    }
}

impl fmt::Display for VehicleType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Transmission {
    Manual,
    Automatic,
}

impl Transmission {
    pub fn as_str(&self) -> &'static str {
        match self {
            Transmission::Manual => "Manual",
            Transmission::Automatic => "Automatic",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FuelType {
    Petrol,
    Diesel,
    Hybrid,
}

impl FuelType {
    pub fn as_str(&self) -> &'static str {
        match self {
            FuelType::Petrol => "Petrol",
            FuelType::Diesel => "Diesel",
            FuelType::Hybrid => "Hybrid",
        }
    }
}

/// A rental vehicle, priced per day.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Vehicle {
    /// Unique vehicle identifier.
    pub id: VehicleId,
    pub name: String,
    #[serde(rename = "type")]
    pub vehicle_type: VehicleType,
    pub price_per_day: Money,
    /// Seats.
    pub capacity: u32,
    pub transmission: Transmission,
    pub fuel_type: FuelType,
    pub image: String,
    pub features: Vec<String>,
    pub rating: f64,
    pub reviews: u32,
}

impl Vehicle {
    /// Case-insensitive substring match against the name only.
    pub fn matches_text(&self, needle: &str) -> bool {
        self.name.to_lowercase().contains(&needle.to_lowercase())
    }
}
