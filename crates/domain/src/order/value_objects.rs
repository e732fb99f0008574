//! Value objects for the order domain.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Money amount in whole Uganda shillings.
///
/// The currency has no minor unit in practice, so amounts are plain integers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Money {
    amount: i64,
}

impl Money {
    /// Creates a new Money amount from whole shillings.
    pub const fn from_ugx(amount: i64) -> Self {
        Self { amount }
    }

    /// Returns zero money.
    pub const fn zero() -> Self {
        Self { amount: 0 }
    }

    /// Returns the amount in shillings.
    pub fn amount(&self) -> i64 {
        self.amount
    }

    /// Returns true if the amount is positive.
    pub fn is_positive(&self) -> bool {
        self.amount > 0
    }

    /// Multiplies by a crate count, saturating at the `i64` bounds.
    pub fn multiply(&self, quantity: u32) -> Money {
        Money {
            amount: self.amount.saturating_mul(i64::from(quantity)),
        }
    }
}

impl Default for Money {
    fn default() -> Self {
        Self::zero()
    }
}

impl std::fmt::Display for Money {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let digits = self.amount.unsigned_abs().to_string();
        let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
        for (i, ch) in digits.chars().enumerate() {
            if i > 0 && (digits.len() - i) % 3 == 0 {
                grouped.push(',');
            }
            grouped.push(ch);
        }
        if self.amount < 0 {
            write!(f, "-UGX {grouped}")
        } else {
            write!(f, "UGX {grouped}")
        }
    }
}

impl std::ops::Add for Money {
    type Output = Money;

    fn add(self, rhs: Self) -> Self::Output {
        Money {
            amount: self.amount.saturating_add(rhs.amount),
        }
    }
}

impl std::ops::AddAssign for Money {
    fn add_assign(&mut self, rhs: Self) {
        self.amount = self.amount.saturating_add(rhs.amount);
    }
}

impl std::iter::Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Self {
        iter.fold(Money::zero(), |acc, m| acc + m)
    }
}

/// Per-brand crate breakdown of an order (the "smart mix").
///
/// Keys are catalog brand keys, or the single `"All Brands"` sentinel when no
/// per-brand breakdown is tracked.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BrandMix(BTreeMap<String, u32>);

impl BrandMix {
    /// Creates an empty mix.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the crate count for a brand, replacing any previous value.
    pub fn insert(&mut self, brand: impl Into<String>, crates: u32) -> Option<u32> {
        self.0.insert(brand.into(), crates)
    }

    /// Returns the crate count for a brand.
    pub fn get(&self, brand: &str) -> Option<u32> {
        self.0.get(brand).copied()
    }

    /// Returns true if the brand has an entry.
    pub fn contains(&self, brand: &str) -> bool {
        self.0.contains_key(brand)
    }

    /// Sum of all crate counts.
    pub fn total(&self) -> u64 {
        self.0.values().map(|&c| u64::from(c)).sum()
    }

    /// Number of brand entries.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true if there are no entries.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterates `(brand, crates)` pairs in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, u32)> {
        self.0.iter().map(|(k, &v)| (k.as_str(), v))
    }

    /// Iterates brand keys in key order.
    pub fn brands(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }
}

impl<K: Into<String>> FromIterator<(K, u32)> for BrandMix {
    fn from_iter<T: IntoIterator<Item = (K, u32)>>(iter: T) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k.into(), v)).collect())
    }
}

/// Optional geocoded position of the delivery address.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub lat: f64,
    pub lng: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_money_display_groups_thousands() {
        assert_eq!(Money::from_ugx(1_130_000).to_string(), "UGX 1,130,000");
        assert_eq!(Money::from_ugx(75_000).to_string(), "UGX 75,000");
        assert_eq!(Money::from_ugx(500).to_string(), "UGX 500");
        assert_eq!(Money::zero().to_string(), "UGX 0");
        assert_eq!(Money::from_ugx(-1_000).to_string(), "-UGX 1,000");
    }

    #[test]
    fn test_money_arithmetic() {
        let price = Money::from_ugx(75_000);
        assert_eq!(price.multiply(7).amount(), 525_000);
        assert_eq!((price + Money::from_ugx(5_000)).amount(), 80_000);

        let total: Money = [Money::from_ugx(1), Money::from_ugx(2)].into_iter().sum();
        assert_eq!(total.amount(), 3);
    }

    #[test]
    fn test_money_arithmetic_saturates() {
        let huge = Money::from_ugx(i64::MAX - 1);
        assert_eq!(huge.multiply(2).amount(), i64::MAX);
        assert_eq!((huge + Money::from_ugx(10)).amount(), i64::MAX);

        let mut acc = huge;
        acc += huge;
        assert_eq!(acc.amount(), i64::MAX);
    }

    #[test]
    fn test_money_serializes_as_plain_integer() {
        let json = serde_json::to_string(&Money::from_ugx(65_000)).unwrap();
        assert_eq!(json, "65000");
    }

    #[test]
    fn test_brand_mix_total_and_lookup() {
        let mix: BrandMix = [("nile", 7), ("club", 5), ("castle", 4)].into_iter().collect();
        assert_eq!(mix.total(), 16);
        assert_eq!(mix.get("club"), Some(5));
        assert_eq!(mix.get("eagle"), None);
        assert_eq!(mix.len(), 3);
    }

    #[test]
    fn test_brand_mix_serializes_as_object() {
        let mix: BrandMix = [("nile", 2)].into_iter().collect();
        let json = serde_json::to_value(&mix).unwrap();
        assert_eq!(json, serde_json::json!({ "nile": 2 }));
    }
}
