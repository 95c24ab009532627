//! Greedy decomposition of a copper total into coins.
//!
//! The ladder's targets are walked from highest to lowest. Each target takes
//! as many whole coins as the remaining copper allows; whatever is left at
//! the end goes to copper, whether or not copper is a target, so no value is
//! ever lost.

use super::amount::Amount;
use super::ladder::Ladder;
use super::tier::{TIER_COUNT, Tier};

/// Splits `total` copper over `targets`, highest first.
///
/// Every tier is always present in the result; unused tiers are zero.
pub(crate) fn decompose(targets: &[Tier], total: u64) -> [u64; TIER_COUNT] {
    let mut counts = [0u64; TIER_COUNT];
    if total == 0 {
        return counts;
    }

    let mut remaining = total;
    for &tier in targets {
        let factor = tier.cumulative_factor();
        debug_assert!(factor > 0, "cumulative factor of {tier} must be positive");
        let count = remaining / factor;
        counts[tier.index()] = count;
        remaining -= count * factor;
    }
    counts[Tier::Copper.index()] += remaining;
    counts
}

impl Ladder {
    /// Collapses `amount` into this ladder's canonical form.
    ///
    /// The amount's own flag is kept.
    #[must_use]
    pub fn normalize(&self, amount: &Amount) -> Amount {
        self.collapse(amount.smallest_unit_value(), amount.auto_normalize())
    }

    /// Canonical amount worth `total` copper, carrying this ladder's flag.
    #[must_use]
    pub fn from_smallest_unit(&self, total: u64) -> Amount {
        self.collapse(total, self.auto_normalize())
    }

    pub(crate) fn collapse(&self, total: u64, auto_normalize: bool) -> Amount {
        Amount::from_parts(decompose(self.targets(), total), total, auto_normalize)
    }
}
