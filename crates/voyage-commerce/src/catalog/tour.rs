//! Tour types.

use crate::error::CommerceError;
use crate::ids::TourId;
use crate::money::Money;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Tour category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TourCategory {
    Adventure,
    Cultural,
    Wildlife,
    Beach,
    Mountain,
}

impl TourCategory {
    /// All categories in storefront order.
    pub const ALL: [TourCategory; 5] = [
        TourCategory::Adventure,
        TourCategory::Cultural,
        TourCategory::Wildlife,
        TourCategory::Beach,
        TourCategory::Mountain,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            TourCategory::Adventure => "Adventure",
            TourCategory::Cultural => "Cultural",
            TourCategory::Wildlife => "Wildlife",
            TourCategory::Beach => "Beach",
            TourCategory::Mountain => "Mountain",
        }
    }
}

impl FromStr for TourCategory {
    type Err = CommerceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TourCategory::ALL
            .into_iter()
            .find(|c| c.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| CommerceError::unknown("tour category", s))
    }
}

impl fmt::Display for TourCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How demanding a tour is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Difficulty {
    Easy,
    Moderate,
    Hard,
}

impl Difficulty {
    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Moderate => "Moderate",
            Difficulty::Hard => "Hard",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A bookable tour, priced per person.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Tour {
    /// Unique tour identifier.
    pub id: TourId,
    pub title: String,
    pub category: TourCategory,
    /// Price per person.
    pub price: Money,
    /// Human-readable length, e.g. "7 days".
    pub duration: String,
    /// Human-readable group size, e.g. "2-8 people".
    pub group_size: String,
    pub location: String,
    /// Image reference (URL).
    pub image: String,
    pub description: String,
    /// Selling points in display order.
    pub highlights: Vec<String>,
    pub difficulty: Difficulty,
    /// Average rating, 0 to 5.
    pub rating: f64,
    /// Number of reviews behind `rating`.
    pub reviews: u32,
}

impl Tour {
    /// Case-insensitive substring match against title, location or description.
    pub fn matches_text(&self, needle: &str) -> bool {
        let needle = needle.to_lowercase();
        [&self.title, &self.location, &self.description]
            .iter()
            .any(|field| field.to_lowercase().contains(&needle))
    }
}
