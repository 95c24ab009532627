//! Coin amounts across five tiers.
//!
//! Amounts are parsed from text, collapsed onto a target [`Ladder`],
//! combined with exact integer arithmetic on copper totals, and written back
//! in a canonical form the parser accepts again.

pub mod amount;
pub mod arithmetic;
pub mod error;
pub mod format;
pub mod ladder;
pub mod normalize;
pub mod parser;
pub mod tier;
pub mod units;

#[cfg(test)]
mod props;

pub use amount::Amount;
pub use error::{CurrencyError, LadderError, ParseError, UnsupportedOperation, ValidationError};
pub use ladder::Ladder;
pub use tier::{COIN_WEIGHT, TIER_COUNT, Tier};
