//! Customer reviews of tours.

use crate::ids::{ReviewId, TourId};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A review left for a tour.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Review {
    pub id: ReviewId,
    /// Reviewer name.
    pub name: String,
    /// Star rating, 1 to 5.
    pub rating: u8,
    pub text: String,
    /// The reviewed tour.
    pub tour: TourId,
    pub date: NaiveDate,
}
