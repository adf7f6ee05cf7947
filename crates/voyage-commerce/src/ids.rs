//! Newtype IDs for type-safe identifiers.
//!
//! Catalog records use string ids. Bookings and inquiries use
//! [`RecordId`], a millisecond timestamp that only ever moves forward.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::sync::atomic::{AtomicU64, Ordering};

/// Macro to generate newtype ID structs.
macro_rules! define_id {
    ($name:ident) => {
        /// A unique identifier.
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Create a new ID from a string.
            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            /// Get the ID as a string slice.
            pub fn as_str(&self) -> &str {
                &self.0
            }

            /// Consume and return the inner string.
            pub fn into_inner(self) -> String {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<String> for $name {
            fn from(s: String) -> Self {
                Self(s)
            }
        }

        impl From<&str> for $name {
            fn from(s: &str) -> Self {
                Self(s.to_string())
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }
    };
}

define_id!(TourId);
define_id!(VehicleId);
define_id!(ReviewId);

/// Highest record id handed out by this process.
static LAST_RECORD_ID: AtomicU64 = AtomicU64::new(0);

/// Identifier of a booking or inquiry: milliseconds since the Unix epoch at
/// creation, bumped forward when two records land in the same millisecond.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecordId(u64);

impl RecordId {
    /// Wrap a raw id.
    pub fn new(id: u64) -> Self {
        Self(id)
    }

    /// The raw value.
    pub fn get(&self) -> u64 {
        self.0
    }

    /// Generate an id for a record created at `now_ms`.
    ///
    /// The result is strictly greater than every id previously generated in
    /// this process and than `floor`, which callers set to the newest id
    /// already persisted in the target log.
    pub fn generate_after(floor: Option<RecordId>, now_ms: i64) -> Self {
        let floor = floor.map_or(0, |id| id.0);
        let now = u64::try_from(now_ms).unwrap_or(0);
        let candidate = |prev: u64| now.max(prev.max(floor).saturating_add(1));

        let prev = LAST_RECORD_ID
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |prev| {
                Some(candidate(prev))
            })
            .unwrap_or_else(|prev| prev);
        Self(candidate(prev))
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for RecordId {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim().trim_start_matches('#').parse().map(Self)
    }
}
