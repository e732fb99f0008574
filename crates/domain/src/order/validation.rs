//! Field checks applied before an order is accepted.

use thiserror::Error;

use super::{BrandMix, Coordinates, OrderIntake};

/// Smallest party an order can be placed for.
pub const MIN_GUESTS: i64 = 10;
/// Largest party an order can be placed for.
pub const MAX_GUESTS: i64 = 1000;
/// Shortest event, in hours.
pub const MIN_DURATION_HOURS: i64 = 1;
/// Longest event, in hours.
pub const MAX_DURATION_HOURS: i64 = 24;
/// Smallest crate count for an order.
pub const MIN_CRATES: i64 = 1;

/// Reasons an intake is rejected. One variant per check.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Number of guests is required")]
    GuestsMissing,

    #[error("Number of guests must be between 10 and 1000 (got {0})")]
    GuestsOutOfRange(i64),

    #[error("Event duration is required")]
    DurationMissing,

    #[error("Event duration must be between 1 and 24 hours (got {0})")]
    DurationOutOfRange(i64),

    #[error("Crate count is required")]
    CratesMissing,

    #[error("Crate count must be at least 1 (got {0})")]
    CratesBelowMinimum(i64),

    #[error("Crate count is too large for a single order (got {0})")]
    CratesTooLarge(i64),

    #[error("Delivery address is required")]
    DeliveryAddressMissing,

    #[error("Smart mix is required and must map brand names to crate counts")]
    MixMissing,
}

impl ValidationError {
    /// Human-readable reason for the boundary layer.
    pub fn reason(&self) -> String {
        self.to_string()
    }
}

/// An intake that passed every check, with fields narrowed to their domain types.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidOrder {
    pub guests: u32,
    pub event_duration_hours: u32,
    pub crates: u32,
    pub mix: BrandMix,
    pub delivery_address: String,
    pub coordinates: Option<Coordinates>,
}

/// Runs the checks in order and stops at the first failure.
///
/// Does not compare the mix total with `crates`.
pub fn validate(intake: &OrderIntake) -> Result<ValidOrder, ValidationError> {
    let guests = check_guests(intake.guests)?;
    let event_duration_hours = check_duration(intake.event_duration_hours)?;
    let crates = check_crates(intake.crates)?;

    let delivery_address = intake
        .delivery_address
        .as_deref()
        .map(str::trim)
        .filter(|a| !a.is_empty())
        .ok_or(ValidationError::DeliveryAddressMissing)?
        .to_string();

    let mix = intake.mix.clone().ok_or(ValidationError::MixMissing)?;

    Ok(ValidOrder {
        guests,
        event_duration_hours,
        crates,
        mix,
        delivery_address,
        coordinates: intake.coordinates,
    })
}

pub(crate) fn check_guests(guests: Option<i64>) -> Result<u32, ValidationError> {
    let guests = guests.ok_or(ValidationError::GuestsMissing)?;
    if !(MIN_GUESTS..=MAX_GUESTS).contains(&guests) {
        return Err(ValidationError::GuestsOutOfRange(guests));
    }
    u32::try_from(guests).map_err(|_| ValidationError::GuestsOutOfRange(guests))
}

pub(crate) fn check_duration(hours: Option<i64>) -> Result<u32, ValidationError> {
    let hours = hours.ok_or(ValidationError::DurationMissing)?;
    if !(MIN_DURATION_HOURS..=MAX_DURATION_HOURS).contains(&hours) {
        return Err(ValidationError::DurationOutOfRange(hours));
    }
    u32::try_from(hours).map_err(|_| ValidationError::DurationOutOfRange(hours))
}

fn check_crates(crates: Option<i64>) -> Result<u32, ValidationError> {
    let crates = crates.ok_or(ValidationError::CratesMissing)?;
    if crates < MIN_CRATES {
        return Err(ValidationError::CratesBelowMinimum(crates));
    }
    u32::try_from(crates).map_err(|_| ValidationError::CratesTooLarge(crates))
}
