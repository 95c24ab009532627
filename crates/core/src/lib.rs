//! Core coin logic for Coinpurse.
//!
//! This crate is pure computation: no I/O, no logging, no global state.
//! Every operation hangs off an explicitly constructed
//! [`Ladder`](currency::Ladder).
//!
//! # Modules
//!
//! - `currency` - Tiers, amounts, parsing, normalization and arithmetic
//! - `wallet` - A purse that holds a balance and pays for things

pub mod currency;
pub mod wallet;

pub use currency::{Amount, CurrencyError, Ladder, Tier};
pub use wallet::Purse;
