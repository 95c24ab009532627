//! Coin tiers and the fixed exchange ratios between them.
//!
//! ```text
//! platinum --5--> gold --2--> electrum --5--> silver --10--> copper
//! ```

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::error::UnsupportedOperation;

/// Number of coin tiers.
pub const TIER_COUNT: usize = 5;

/// Weight of a single coin of any tier, in pounds.
pub const COIN_WEIGHT: Decimal = Decimal::from_parts(2, 0, 0, false, 2);

/// Silver to copper conversion factor.
const SILVER_TO_COPPER: u64 = 10;

/// Electrum to silver conversion factor.
const ELECTRUM_TO_SILVER: u64 = 5;

/// Gold to electrum conversion factor.
const GOLD_TO_ELECTRUM: u64 = 2;

/// Platinum to gold conversion factor.
const PLATINUM_TO_GOLD: u64 = 5;

/// A coin denomination, ordered from lowest to highest value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tier {
    /// Copper pieces.
    Copper,
    /// Silver pieces.
    Silver,
    /// Electrum pieces.
    Electrum,
    /// Gold pieces.
    Gold,
    /// Platinum pieces.
    Platinum,
}

impl Tier {
    /// All tiers, lowest first.
    pub const ALL: [Self; TIER_COUNT] = [
        Self::Copper,
        Self::Silver,
        Self::Electrum,
        Self::Gold,
        Self::Platinum,
    ];

    /// The coin prices are quoted in: bare numbers, display totals and the
    /// single-number persistence form are all gold pieces.
    pub const STANDARD: Self = Self::Gold;

    /// Position of this tier in a count array.
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Self::Copper => 0,
            Self::Silver => 1,
            Self::Electrum => 2,
            Self::Gold => 3,
            Self::Platinum => 4,
        }
    }

    /// Two-letter suffix used in amounts, e.g. `gp`.
    #[must_use]
    pub const fn suffix(self) -> &'static str {
        match self {
            Self::Copper => "cp",
            Self::Silver => "sp",
            Self::Electrum => "ep",
            Self::Gold => "gp",
            Self::Platinum => "pp",
        }
    }

    /// Human-readable name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Copper => "copper pieces",
            Self::Silver => "silver pieces",
            Self::Electrum => "electrum pieces",
            Self::Gold => "gold pieces",
            Self::Platinum => "platinum pieces",
        }
    }

    /// Looks up a tier by its two-letter suffix or one-letter short form,
    /// ignoring case.
    #[must_use]
    pub fn from_suffix(suffix: &str) -> Option<Self> {
        match suffix.to_ascii_lowercase().as_str() {
            "cp" | "c" => Some(Self::Copper),
            "sp" | "s" => Some(Self::Silver),
            "ep" | "e" => Some(Self::Electrum),
            "gp" | "g" => Some(Self::Gold),
            "pp" | "p" => Some(Self::Platinum),
            _ => None,
        }
    }

    /// The tier immediately below this one.
    pub fn decrement(self) -> Result<Self, UnsupportedOperation> {
        match self {
            Self::Copper => Err(UnsupportedOperation {
                tier: self,
                operation: "decrement",
            }),
            Self::Silver => Ok(Self::Copper),
            Self::Electrum => Ok(Self::Silver),
            Self::Gold => Ok(Self::Electrum),
            Self::Platinum => Ok(Self::Gold),
        }
    }

    /// Number of coins of the next-lower tier worth one coin of this tier.
    pub fn decrement_factor(self) -> Result<u64, UnsupportedOperation> {
        match self {
            Self::Copper => Err(UnsupportedOperation {
                tier: self,
                operation: "take the decrement factor of",
            }),
            Self::Silver => Ok(SILVER_TO_COPPER),
            Self::Electrum => Ok(ELECTRUM_TO_SILVER),
            Self::Gold => Ok(GOLD_TO_ELECTRUM),
            Self::Platinum => Ok(PLATINUM_TO_GOLD),
        }
    }

    /// The tier immediately above this one, if any.
    #[must_use]
    pub const fn increment(self) -> Option<Self> {
        match self {
            Self::Copper => Some(Self::Silver),
            Self::Silver => Some(Self::Electrum),
            Self::Electrum => Some(Self::Gold),
            Self::Gold => Some(Self::Platinum),
            Self::Platinum => None,
        }
    }

    /// Copper pieces worth one coin of this tier.
    #[must_use]
    pub const fn cumulative_factor(self) -> u64 {
        const SILVER: u64 = SILVER_TO_COPPER;
        const ELECTRUM: u64 = SILVER * ELECTRUM_TO_SILVER;
        const GOLD: u64 = ELECTRUM * GOLD_TO_ELECTRUM;
        const PLATINUM: u64 = GOLD * PLATINUM_TO_GOLD;

        match self {
            Self::Copper => 1,
            Self::Silver => SILVER,
            Self::Electrum => ELECTRUM,
            Self::Gold => GOLD,
            Self::Platinum => PLATINUM,
        }
    }
}

impl std::fmt::Display for Tier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.suffix())
    }
}

impl std::str::FromStr for Tier {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if let Some(tier) = Self::from_suffix(trimmed) {
            return Ok(tier);
        }
        match trimmed.to_ascii_lowercase().as_str() {
            "copper" => Ok(Self::Copper),
            "silver" => Ok(Self::Silver),
            "electrum" => Ok(Self::Electrum),
            "gold" => Ok(Self::Gold),
            "platinum" => Ok(Self::Platinum),
            _ => Err(format!("Unknown coin tier: {s}")),
        }
    }
}
