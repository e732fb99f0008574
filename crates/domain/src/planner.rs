//! Smart mix planning: the quote an organizer sees before placing an order.
//!
//! Combines the estimator, the allocator and catalog pricing into one pure
//! computation. Re-run it whenever guests, duration, the crate override, the
//! brand selection or a per-brand override changes.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::allocator::{allocate, apply_overrides, default_split};
use crate::catalog::{ALL_BRANDS, AVERAGE_CRATE_PRICE, Catalog};
use crate::estimator::{CrateQuantity, QuantitySource, total_servings};
use crate::order::{BrandMix, Money, ValidationError, check_duration, check_guests};

/// Which brands the crates are spread over.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(tag = "kind", content = "brands", rename_all = "camelCase")]
pub enum BrandSelection {
    /// The house 40/30/30 split over Nile, Club and Castle.
    #[default]
    Default,

    /// An even split over the chosen brands, in the order given.
    Custom(Vec<String>),

    /// No per-brand breakdown.
    AllBrands,
}

/// Inputs to the planner.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanRequest {
    pub guests: i64,
    pub event_duration_hours: i64,
    #[serde(default)]
    pub crate_override: Option<u32>,
    #[serde(default)]
    pub selection: BrandSelection,
    /// Manual per-brand counts; they win over computed ones.
    #[serde(default)]
    pub brand_overrides: BrandMix,
}

impl PlanRequest {
    /// A request using the estimate and the house split.
    pub fn new(guests: i64, event_duration_hours: i64) -> Self {
        Self {
            guests,
            event_duration_hours,
            crate_override: None,
            selection: BrandSelection::Default,
            brand_overrides: BrandMix::new(),
        }
    }

    pub fn with_crates(mut self, crates: u32) -> Self {
        self.crate_override = Some(crates);
        self
    }

    pub fn with_selection(mut self, selection: BrandSelection) -> Self {
        self.selection = selection;
        self
    }

    pub fn with_brand_override(mut self, brand: impl Into<String>, crates: u32) -> Self {
        self.brand_overrides.insert(brand, crates);
        self
    }
}

/// Result of planning.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MixPlan {
    /// Crates to order; always equals the sum of `mix`.
    pub crates: u32,
    pub quantity_source: QuantitySource,
    /// Bottles the party is expected to drink.
    pub servings: u64,
    pub mix: BrandMix,
    pub estimated_cost: Money,
}

/// Reasons a plan cannot be produced.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PlanError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("Select at least one brand")]
    EmptySelection,

    #[error("Unknown brand: {0}")]
    UnknownBrand(String),

    #[error("Brand selected more than once: {0}")]
    DuplicateBrand(String),

    #[error("Brand override for {0} is not part of the selection")]
    OverrideOutsideSelection(String),

    #[error("The mix must contain at least one crate")]
    NoCrates,

    #[error("The mix adds up to {0} crates, more than a single order can hold")]
    TooManyCrates(u64),
}

/// Plans crate quantities and mixes against a catalog.
#[derive(Debug, Clone, Copy)]
pub struct SmartMixPlanner<'a> {
    catalog: &'a Catalog,
}

impl<'a> SmartMixPlanner<'a> {
    pub fn new(catalog: &'a Catalog) -> Self {
        Self { catalog }
    }

    /// Resolves the crate count, spreads it over the selection, applies
    /// manual per-brand counts and prices the result.
    pub fn plan(&self, request: &PlanRequest) -> Result<MixPlan, PlanError> {
        let guests = check_guests(Some(request.guests))?;
        let hours = check_duration(Some(request.event_duration_hours))?;
        let quantity = CrateQuantity::resolve(guests, hours, request.crate_override);

        let computed = match &request.selection {
            BrandSelection::Default => default_split(quantity.crates),
            BrandSelection::Custom(brands) => {
                self.check_selection(brands)?;
                allocate(quantity.crates, brands)
            }
            BrandSelection::AllBrands => [(ALL_BRANDS, quantity.crates)].into_iter().collect(),
        };

        if let Some(brand) = request
            .brand_overrides
            .brands()
            .find(|b| !computed.contains(b) || *b == ALL_BRANDS)
        {
            return Err(PlanError::OverrideOutsideSelection(brand.to_string()));
        }

        let mix = apply_overrides(&computed, &request.brand_overrides);
        let total = mix.total();
        let crates = u32::try_from(total).map_err(|_| PlanError::TooManyCrates(total))?;
        if crates == 0 {
            return Err(PlanError::NoCrates);
        }

        let quantity_source = if crates == quantity.crates {
            quantity.source
        } else {
            QuantitySource::Overridden
        };

        let estimated_cost = match request.selection {
            BrandSelection::AllBrands => AVERAGE_CRATE_PRICE.multiply(crates),
            _ => self.catalog.cost_of(&mix),
        };

        Ok(MixPlan {
            crates,
            quantity_source,
            servings: total_servings(guests, hours),
            mix,
            estimated_cost,
        })
    }

    fn check_selection(&self, brands: &[String]) -> Result<(), PlanError> {
        if brands.is_empty() {
            return Err(PlanError::EmptySelection);
        }
        for (i, brand) in brands.iter().enumerate() {
            if !self.catalog.contains(brand) {
                return Err(PlanError::UnknownBrand(brand.clone()));
            }
            if brands[..i].contains(brand) {
                return Err(PlanError::DuplicateBrand(brand.clone()));
            }
        }
        Ok(())
    }
}
