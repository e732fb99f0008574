//! Product catalog seeded at startup.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::order::{BrandMix, Money};

/// Brand key for Nile Special.
pub const NILE: &str = "nile";
/// Brand key for Club Pilsener.
pub const CLUB: &str = "club";
/// Brand key for Castle Lite.
pub const CASTLE: &str = "castle";
/// Brand key for Eagle Lager.
pub const EAGLE: &str = "eagle";

/// Mix key meaning "no per-brand breakdown is tracked".
pub const ALL_BRANDS: &str = "All Brands";

/// Average crate price used to quote orders without a per-brand breakdown.
pub const AVERAGE_CRATE_PRICE: Money = Money::from_ugx(85_000);

/// A product that can be ordered by the crate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Brand key, unique within the catalog.
    pub name: String,

    /// Display name.
    pub label: String,

    /// Price of one crate.
    pub unit_price: Money,

    /// Product category label.
    pub category: String,
}

impl Product {
    fn new(name: &str, label: &str, unit_price: i64, category: &str) -> Self {
        Self {
            name: name.to_string(),
            label: label.to_string(),
            unit_price: Money::from_ugx(unit_price),
            category: category.to_string(),
        }
    }
}

/// Rejected product lists.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    #[error("Product {brand} must have a positive unit price (got {price})")]
    NonPositivePrice { brand: String, price: Money },
}

/// Read-only mapping from brand key to product.
#[derive(Debug, Clone)]
pub struct Catalog {
    products: BTreeMap<String, Product>,
}

impl Catalog {
    /// The standard brewery catalog.
    pub fn standard() -> Self {
        Self::keyed([
            Product::new(NILE, "Nile Special", 75_000, "Premium Lager"),
            Product::new(CLUB, "Club Pilsener", 65_000, "Pilsner"),
            Product::new(CASTLE, "Castle Lite", 70_000, "Light Lager"),
            Product::new(EAGLE, "Eagle Lager", 55_000, "Sorghum Lager"),
        ])
    }

    /// Builds a catalog from an explicit product list. Later duplicates win.
    ///
    /// Every unit price must be positive.
    pub fn from_products(
        products: impl IntoIterator<Item = Product>,
    ) -> Result<Self, CatalogError> {
        let products: Vec<Product> = products.into_iter().collect();
        if let Some(bad) = products.iter().find(|p| !p.unit_price.is_positive()) {
            return Err(CatalogError::NonPositivePrice {
                brand: bad.name.clone(),
                price: bad.unit_price,
            });
        }
        Ok(Self::keyed(products))
    }

    fn keyed(products: impl IntoIterator<Item = Product>) -> Self {
        Self {
            products: products
                .into_iter()
                .map(|p| (p.name.clone(), p))
                .collect(),
        }
    }

    /// Looks up a product by brand key.
    pub fn get(&self, brand: &str) -> Option<&Product> {
        self.products.get(brand)
    }

    /// Returns true if the brand key is a catalog product.
    pub fn contains(&self, brand: &str) -> bool {
        self.products.contains_key(brand)
    }

    /// Price of one crate of the brand.
    pub fn unit_price(&self, brand: &str) -> Option<Money> {
        self.get(brand).map(|p| p.unit_price)
    }

    /// All products in brand-key order.
    pub fn products(&self) -> impl Iterator<Item = &Product> {
        self.products.values()
    }

    /// The full brand-key to product mapping.
    pub fn as_map(&self) -> &BTreeMap<String, Product> {
        &self.products
    }

    /// Number of products.
    pub fn len(&self) -> usize {
        self.products.len()
    }

    /// Returns true if the catalog has no products.
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Cost of a mix. Entries that are not catalog products contribute zero.
    pub fn cost_of(&self, mix: &BrandMix) -> Money {
        mix.iter()
            .filter_map(|(brand, crates)| self.unit_price(brand).map(|p| p.multiply(crates)))
            .sum()
    }

    /// Mix keys that are neither catalog products nor the `"All Brands"` sentinel.
    pub fn unknown_brands<'a>(&self, mix: &'a BrandMix) -> Vec<&'a str> {
        mix.brands()
            .filter(|b| *b != ALL_BRANDS && !self.contains(b))
            .collect()
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::standard()
    }
}
