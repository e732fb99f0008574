//! HTTP route handlers.

pub mod catalog;
pub mod health;
pub mod metrics;
pub mod orders;
pub mod planning;
pub mod stats;
