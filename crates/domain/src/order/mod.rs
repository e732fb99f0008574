//! Orders: intake, validation, status lifecycle and the service that owns them.

mod entity;
mod intake;
mod service;
mod state;
mod validation;
mod value_objects;

pub use entity::{Order, delivery_lead_time};
pub use intake::OrderIntake;
pub use service::OrderService;
pub use state::{OrderStatus, UnknownStatus};
pub use validation::{
    MAX_DURATION_HOURS, MAX_GUESTS, MIN_CRATES, MIN_DURATION_HOURS, MIN_GUESTS, ValidOrder,
    ValidationError, validate,
};
pub use value_objects::{BrandMix, Coordinates, Money};

pub(crate) use validation::{check_duration, check_guests};

#[cfg(test)]
pub(crate) use entity::fixtures;
