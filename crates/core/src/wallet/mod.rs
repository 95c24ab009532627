//! Holding and spending coin.

pub mod purse;

pub use purse::Purse;
