//! Shared identifiers for the crate ordering service.

mod types;

pub use types::{OrderId, OrderNumber, OrderSequence};
