//! The coin amount value type.

use std::hash::{Hash, Hasher};

use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use serde_with::{DeserializeFromStr, SerializeDisplay};

use super::error::ValidationError;
use super::tier::{COIN_WEIGHT, TIER_COUNT, Tier};
use super::units;

/// A non-negative amount of coin, held as a count per tier.
///
/// The copper total is derived from the counts when the amount is built and
/// never drifts from them. Amounts are plain values: operations in
/// [`Ladder`](super::Ladder) return new amounts rather than mutating.
///
/// `auto_normalize` decides what operations do with the coins. When set,
/// results collapse into the ladder's canonical form. When unset, coins are
/// kept tier by tier as given, like a saddlebag of loose change.
///
/// Equality and hashing look at the per-tier counts only.
#[derive(Debug, Clone, Copy, SerializeDisplay, DeserializeFromStr)]
pub struct Amount {
    counts: [u64; TIER_COUNT],
    total: u64,
    auto_normalize: bool,
}

impl Amount {
    /// Zero coins.
    #[must_use]
    pub const fn zero() -> Self {
        Self {
            counts: [0; TIER_COUNT],
            total: 0,
            auto_normalize: true,
        }
    }

    /// Builds a raw amount from signed per-tier counts, lowest tier first.
    ///
    /// Negative counts are rejected, never clamped.
    pub fn from_tier_counts(counts: [i64; TIER_COUNT]) -> Result<Self, ValidationError> {
        let mut coins = [0u64; TIER_COUNT];
        for tier in Tier::ALL {
            let count = counts[tier.index()];
            coins[tier.index()] =
                u64::try_from(count).map_err(|_| ValidationError::NegativeCount { tier, count })?;
        }
        Self::from_coins(coins)
    }

    /// Builds a raw amount from per-tier coin counts, lowest tier first.
    pub fn from_coins(counts: [u64; TIER_COUNT]) -> Result<Self, ValidationError> {
        let total = units::to_smallest_unit(&counts).ok_or(ValidationError::Overflow)?;
        Ok(Self {
            counts,
            total,
            auto_normalize: false,
        })
    }

    /// A raw amount of a single tier.
    pub fn of(tier: Tier, count: u64) -> Result<Self, ValidationError> {
        let mut counts = [0u64; TIER_COUNT];
        counts[tier.index()] = count;
        Self::from_coins(counts)
    }

    /// Trusted constructor for counts whose total is already known.
    pub(crate) fn from_parts(counts: [u64; TIER_COUNT], total: u64, auto_normalize: bool) -> Self {
        debug_assert_eq!(units::to_smallest_unit(&counts), Some(total));
        Self {
            counts,
            total,
            auto_normalize,
        }
    }

    /// Returns a copy with the auto-normalize flag changed.
    ///
    /// The coins themselves are untouched; use
    /// [`Ladder::normalize`](super::Ladder::normalize) to collapse them.
    #[must_use]
    pub const fn with_auto_normalize(mut self, auto_normalize: bool) -> Self {
        self.auto_normalize = auto_normalize;
        self
    }

    /// Whether operations on this amount collapse it into canonical form.
    #[must_use]
    pub const fn auto_normalize(&self) -> bool {
        self.auto_normalize
    }

    /// Number of coins of `tier`.
    #[must_use]
    pub const fn count(&self, tier: Tier) -> u64 {
        self.counts[tier.index()]
    }

    /// All counts, lowest tier first.
    #[must_use]
    pub const fn counts(&self) -> [u64; TIER_COUNT] {
        self.counts
    }

    /// Value in copper pieces.
    #[must_use]
    pub const fn smallest_unit_value(&self) -> u64 {
        self.total
    }

    /// Returns true if the amount is worth nothing.
    #[must_use]
    pub const fn is_zero(&self) -> bool {
        self.total == 0
    }

    /// Returns true if this amount is worth at least `other`.
    #[must_use]
    pub const fn can_cover(&self, other: &Self) -> bool {
        self.total >= other.total
    }

    /// Total number of coins, whatever their tier.
    #[must_use]
    pub fn coin_count(&self) -> u64 {
        // Each count is bounded by the total, so the sum cannot overflow.
        self.counts.iter().sum()
    }

    /// Weight of the coins in pounds.
    #[must_use]
    pub fn weight(&self) -> Decimal {
        Decimal::from(self.coin_count()) * COIN_WEIGHT
    }

    /// Exact value expressed in `tier` coins.
    #[must_use]
    pub fn value_in(&self, tier: Tier) -> Decimal {
        units::value_in(self.total, tier)
    }

    /// Exact value in gold pieces.
    #[must_use]
    pub fn top_tier_value(&self) -> Decimal {
        self.value_in(Tier::STANDARD)
    }

    /// Value in gold pieces as a float, for display only.
    #[must_use]
    pub fn top_tier_value_f64(&self) -> f64 {
        self.top_tier_value().to_f64().unwrap_or_default()
    }
}

impl Default for Amount {
    fn default() -> Self {
        Self::zero()
    }
}

impl PartialEq for Amount {
    fn eq(&self, other: &Self) -> bool {
        self.counts == other.counts
    }
}

impl Eq for Amount {}

impl Hash for Amount {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.counts.hash(state);
    }
}
