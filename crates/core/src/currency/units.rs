//! Conversion between per-tier counts and copper totals.
//!
//! All arithmetic is done on a single copper total so that no operation has
//! to juggle five radices at once. Decomposing a total back into coins is a
//! policy decision and lives in [`normalize`](super::normalize).

use rust_decimal::Decimal;

use super::tier::{TIER_COUNT, Tier};

/// Copper value of a count vector indexed by [`Tier::index`].
///
/// Returns `None` if the total does not fit in a `u64`.
#[must_use]
pub fn to_smallest_unit(counts: &[u64; TIER_COUNT]) -> Option<u64> {
    Tier::ALL.iter().try_fold(0u64, |total, tier| {
        counts[tier.index()]
            .checked_mul(tier.cumulative_factor())?
            .checked_add(total)
    })
}

/// Exact value of a copper total expressed in `tier` coins.
///
/// Every cumulative factor is a product of 2s and 5s, so the quotient is
/// always a terminating decimal.
#[must_use]
pub fn value_in(total: u64, tier: Tier) -> Decimal {
    Decimal::from(total) / Decimal::from(tier.cumulative_factor())
}
