//! Domain layer for the crate ordering service.
//!
//! This crate provides:
//! - Product catalog and pricing
//! - Crate quantity estimation and brand allocation
//! - Smart mix planning for quotes
//! - Order intake, validation and the status lifecycle
//! - Order service owning the collection, and summary statistics

pub mod allocator;
pub mod catalog;
pub mod error;
pub mod estimator;
pub mod order;
pub mod planner;
pub mod statistics;
pub mod store;

pub use allocator::{allocate, apply_overrides, default_split};
pub use catalog::{ALL_BRANDS, Catalog, CatalogError, Product};
pub use error::DomainError;
pub use estimator::{CrateQuantity, QuantitySource, estimate_crates};
pub use order::{
    BrandMix, Coordinates, Money, Order, OrderIntake, OrderService, OrderStatus, ValidOrder,
    ValidationError, validate,
};
pub use planner::{BrandSelection, MixPlan, PlanError, PlanRequest, SmartMixPlanner};
pub use statistics::{OrderStatistics, StatusCounts, summarize};
pub use store::{InMemoryOrderStore, OrderStore, StoreError};
