//! The target ladder: which tiers to maximize when collapsing coins.
//!
//! A [`Ladder`] is the engine value every currency operation hangs off. It is
//! built explicitly (from code or configuration) and passed to whoever needs
//! it; there is no process-wide default instance.

use coinpurse_shared::LadderConfig;

use super::amount::Amount;
use super::error::{LadderError, ValidationError};
use super::tier::{TIER_COUNT, Tier};

/// Normalization policy and defaults for new amounts.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Ladder {
    targets: Vec<Tier>,
    auto_normalize: bool,
}

impl Ladder {
    /// Gold, silver and copper are maximized; electrum and platinum only
    /// appear when given explicitly.
    #[must_use]
    pub fn standard() -> Self {
        Self {
            targets: vec![Tier::Gold, Tier::Silver, Tier::Copper],
            auto_normalize: true,
        }
    }

    /// Gold, `middle` and copper are maximized.
    ///
    /// `middle` must be silver or electrum.
    pub fn with_middle(middle: Tier) -> Result<Self, LadderError> {
        if middle <= Tier::Copper || middle >= Tier::Gold {
            return Err(LadderError::InvalidMiddleTier(middle));
        }
        Ok(Self {
            targets: vec![Tier::Gold, middle, Tier::Copper],
            auto_normalize: true,
        })
    }

    /// Every tier is maximized, platinum first.
    #[must_use]
    pub fn all_tiers() -> Self {
        Self {
            targets: Tier::ALL.iter().rev().copied().collect(),
            auto_normalize: true,
        }
    }

    /// A custom target ladder, listed from highest to lowest tier.
    pub fn from_targets(targets: Vec<Tier>) -> Result<Self, LadderError> {
        if targets.is_empty() {
            return Err(LadderError::EmptyTargets);
        }
        if targets.windows(2).any(|pair| pair[0] <= pair[1]) {
            return Err(LadderError::UnorderedTargets(targets));
        }
        debug_assert!(targets.len() <= TIER_COUNT);
        Ok(Self {
            targets,
            auto_normalize: true,
        })
    }

    /// Builds a ladder from configuration.
    pub fn from_config(config: &LadderConfig) -> Result<Self, LadderError> {
        let ladder = if config.all_tiers {
            Self::all_tiers()
        } else {
            let middle = config
                .middle_tier
                .parse::<Tier>()
                .map_err(LadderError::UnknownTier)?;
            Self::with_middle(middle)?
        };
        Ok(ladder.with_auto_normalize(config.auto_normalize))
    }

    /// Returns a copy whose new amounts carry the given flag.
    #[must_use]
    pub fn with_auto_normalize(mut self, auto_normalize: bool) -> Self {
        self.auto_normalize = auto_normalize;
        self
    }

    /// Tiers maximized by normalization, highest first.
    #[must_use]
    pub fn targets(&self) -> &[Tier] {
        &self.targets
    }

    /// Flag given to amounts this ladder creates.
    #[must_use]
    pub const fn auto_normalize(&self) -> bool {
        self.auto_normalize
    }

    /// Zero coins, carrying this ladder's flag.
    #[must_use]
    pub const fn zero(&self) -> Amount {
        Amount::zero().with_auto_normalize(self.auto_normalize)
    }

    /// `count` coins of one tier.
    pub fn amount_of(&self, tier: Tier, count: u64) -> Result<Amount, ValidationError> {
        let amount = Amount::of(tier, count)?.with_auto_normalize(self.auto_normalize);
        Ok(self.settle(amount))
    }

    /// Builds an amount from signed per-tier counts, lowest tier first.
    ///
    /// With `auto_normalize` set the coins are collapsed immediately.
    pub fn from_tier_counts(
        &self,
        counts: [i64; TIER_COUNT],
        auto_normalize: bool,
    ) -> Result<Amount, ValidationError> {
        let amount = Amount::from_tier_counts(counts)?.with_auto_normalize(auto_normalize);
        Ok(self.settle(amount))
    }

    /// Normalizes `amount` if its flag asks for it.
    pub(crate) fn settle(&self, amount: Amount) -> Amount {
        if amount.auto_normalize() {
            self.normalize(&amount)
        } else {
            amount
        }
    }
}

impl Default for Ladder {
    fn default() -> Self {
        Self::standard()
    }
}
