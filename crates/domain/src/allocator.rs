//! Distribution of a crate total across brands.

use crate::catalog::{CASTLE, CLUB, NILE};
use crate::order::BrandMix;

/// Splits `total` across `brands` so that counts differ by at most one.
///
/// The first `total % n` brands (in input order) receive one extra crate.
/// Returns an empty mix when `brands` is empty or `total` is zero. Repeated
/// brand names are counted once.
pub fn allocate<S: AsRef<str>>(total: u32, brands: &[S]) -> BrandMix {
    let mut distinct: Vec<&str> = Vec::with_capacity(brands.len());
    for brand in brands {
        let brand = brand.as_ref();
        if !distinct.contains(&brand) {
            distinct.push(brand);
        }
    }

    if distinct.is_empty() || total == 0 {
        return BrandMix::new();
    }

    let count = u32::try_from(distinct.len()).unwrap_or(u32::MAX);
    let base = total / count;
    let remainder = total - base * count;

    distinct
        .into_iter()
        .enumerate()
        .map(|(i, brand)| {
            let extra = u32::from(i < remainder as usize);
            (brand, base + extra)
        })
        .collect()
}

/// The house split for orders without a custom brand selection.
///
/// Nile gets 40% and Club 30%, each rounded up; Castle takes whatever is left
/// so the counts always add up to `total`.
pub fn default_split(total: u32) -> BrandMix {
    if total == 0 {
        return BrandMix::new();
    }

    let nile = percent_ceil(total, 40);
    let club = percent_ceil(total, 30).min(total - nile);
    let castle = total - nile - club;

    [(NILE, nile), (CLUB, club), (CASTLE, castle)]
        .into_iter()
        .collect()
}

/// Replaces computed counts with manual ones for brands already in `mix`.
///
/// Returns the adjusted mix; its total becomes the new crate count. Overrides
/// for brands outside the mix are skipped.
pub fn apply_overrides(mix: &BrandMix, overrides: &BrandMix) -> BrandMix {
    mix.iter()
        .map(|(brand, computed)| (brand, overrides.get(brand).unwrap_or(computed)))
        .collect()
}

fn percent_ceil(total: u32, percent: u64) -> u32 {
    let value = (u64::from(total) * percent).div_ceil(100);
    u32::try_from(value).unwrap_or(u32::MAX)
}
