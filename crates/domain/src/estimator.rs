//! Crate quantity estimation from party size.

use serde::{Deserialize, Serialize};

/// Bottles in one crate.
pub const CRATE_CAPACITY: u64 = 25;

/// Bottles consumed per guest per hour.
pub const SERVINGS_PER_GUEST_HOUR: u64 = 1;

/// Total bottles needed for the party.
pub fn total_servings(guests: u32, hours: u32) -> u64 {
    u64::from(guests) * u64::from(hours) * SERVINGS_PER_GUEST_HOUR
}

/// Recommended crate count: `ceil(servings / 25)`, never below one.
pub fn estimate_crates(guests: u32, hours: u32) -> u32 {
    let crates = total_servings(guests, hours).div_ceil(CRATE_CAPACITY).max(1);
    u32::try_from(crates).unwrap_or(u32::MAX)
}

/// Where a crate count came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum QuantitySource {
    /// Derived from guests and duration.
    Estimated,
    /// Supplied by the organizer.
    Overridden,
}

/// A resolved crate count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CrateQuantity {
    pub crates: u32,
    pub source: QuantitySource,
}

impl CrateQuantity {
    /// Uses `manual` verbatim when present (floored at one), otherwise the estimate.
    pub fn resolve(guests: u32, hours: u32, manual: Option<u32>) -> Self {
        match manual {
            Some(crates) => Self {
                crates: crates.max(1),
                source: QuantitySource::Overridden,
            },
            None => Self {
                crates: estimate_crates(guests, hours),
                source: QuantitySource::Estimated,
            },
        }
    }
}
