//! Reading amounts from free-form text.
//!
//! Accepted forms (case-insensitive):
//! - `0` on its own
//! - a bare number, read as gold pieces: `500`, `10.5`
//! - one or more `<number><coin>` parts in any order: `5gp`, `5 gp 3 sp`,
//!   `2pp, 1,5sp`, `3gp + 2gp` (parts of the same coin add up)
//!
//! A comma between digits is a decimal separator, and a trailing one is
//! ignored (`5.sp` is 5 sp). A minus sign before a number, even with spaces
//! in between, is rejected. Anything else that is not part of a number or a
//! coin suffix is skipped.
//!
//! Fractions carry downwards: `5.11gp` is 5 gp plus 0.22 ep, which is 1 sp
//! plus 0.1 sp, which is 1 cp. A fraction left over at copper cannot be
//! carried any further and is an error.

use std::str::FromStr;

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};

use super::amount::Amount;
use super::error::ParseError;
use super::ladder::Ladder;
use super::tier::{TIER_COUNT, Tier};

/// Carried fractions are rounded to thousandths of the lower coin before
/// recursing.
const CARRY_SCALE: Decimal = Decimal::from_parts(1000, 0, 0, false, 0);

/// One number from the input with its optional coin.
#[derive(Debug, Clone, PartialEq, Eq)]
struct Token<'a> {
    /// The exact slice of input, suffix included.
    text: &'a str,
    amount: Decimal,
    tier: Option<Tier>,
}

const fn is_separator(byte: u8) -> bool {
    byte == b'.' || byte == b','
}

fn digit_at(bytes: &[u8], index: usize) -> bool {
    bytes.get(index).is_some_and(u8::is_ascii_digit)
}

/// Splits `input` into numbers and their coin suffixes.
fn tokenize(input: &str) -> Result<Vec<Token<'_>>, ParseError> {
    let bytes = input.as_bytes();
    let mut tokens = Vec::new();
    let mut i = 0;

    while i < bytes.len() {
        let byte = bytes[i];
        let leading_separator = is_separator(byte)
            && digit_at(bytes, i + 1)
            && (i == 0 || !bytes[i - 1].is_ascii_alphanumeric());
        if !byte.is_ascii_digit() && !leading_separator {
            i += 1;
            continue;
        }

        let start = i;
        if leading_separator {
            i += 1;
        }
        while digit_at(bytes, i) {
            i += 1;
        }
        if !leading_separator && i < bytes.len() && is_separator(bytes[i]) {
            // A separator with no digits after it still ends the number: `5.sp`.
            i += 1;
            while digit_at(bytes, i) {
                i += 1;
            }
        }
        if i < bytes.len() && is_separator(bytes[i]) && digit_at(bytes, i + 1) {
            let mut end = i;
            while end < bytes.len() && (bytes[end].is_ascii_digit() || is_separator(bytes[end])) {
                end += 1;
            }
            return Err(ParseError::MalformedNumber {
                token: input[start..end].to_string(),
            });
        }
        let number_end = i;

        let mut suffix_start = number_end;
        while suffix_start < bytes.len() && (bytes[suffix_start] == b' ' || bytes[suffix_start] == b'\t')
        {
            suffix_start += 1;
        }
        let mut suffix_end = suffix_start;
        while suffix_end < bytes.len() && bytes[suffix_end].is_ascii_alphabetic() {
            suffix_end += 1;
        }

        let (tier, end) = if suffix_end > suffix_start {
            let suffix = &input[suffix_start..suffix_end];
            let tier = Tier::from_suffix(suffix).ok_or_else(|| ParseError::UnknownDenomination {
                token: input[start..suffix_end].to_string(),
                suffix: suffix.to_string(),
            })?;
            (Some(tier), suffix_end)
        } else {
            (None, number_end)
        };

        let before = input[..start].trim_end_matches([' ', '\t']);
        if before.ends_with('-') {
            return Err(ParseError::NegativeAmount {
                token: input[before.len() - 1..end].to_string(),
            });
        }

        let number = &input[start..number_end];
        let mut literal = number.replace(',', ".");
        if literal.starts_with('.') {
            literal.insert(0, '0');
        }
        if literal.ends_with('.') {
            literal.pop();
        }
        let amount = Decimal::from_str(&literal).map_err(|_| ParseError::MalformedNumber {
            token: number.to_string(),
        })?;

        tokens.push(Token {
            text: &input[start..end],
            amount,
            tier,
        });
        i = end;
    }

    Ok(tokens)
}

/// Adds `amount` coins of `tier`, carrying any fraction into lower coins.
fn carry(
    counts: &mut [u64; TIER_COUNT],
    tier: Tier,
    amount: Decimal,
    token: &str,
) -> Result<(), ParseError> {
    if amount.is_zero() {
        return Ok(());
    }

    let whole = amount.trunc();
    let fraction = amount - whole;
    let overflow = || ParseError::Overflow {
        token: token.to_string(),
    };
    let whole = whole.to_u64().ok_or_else(overflow)?;
    let slot = &mut counts[tier.index()];
    *slot = slot.checked_add(whole).ok_or_else(overflow)?;

    if fraction.is_zero() {
        return Ok(());
    }

    let indivisible = |source| ParseError::Indivisible {
        token: token.to_string(),
        source,
    };
    let lower = tier.decrement().map_err(indivisible)?;
    let factor = tier.decrement_factor().map_err(indivisible)?;
    let carried = (fraction * Decimal::from(factor) * CARRY_SCALE)
        .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
        / CARRY_SCALE;

    carry(counts, lower, carried, token)
}

/// Reads the coins exactly as written, without collapsing them.
fn parse_coins(input: &str) -> Result<Amount, ParseError> {
    let compact: String = input.chars().filter(|c| !c.is_whitespace()).collect();
    if compact.is_empty() {
        return Err(ParseError::Empty);
    }
    if compact == "0" {
        return Ok(Amount::zero().with_auto_normalize(false));
    }

    let tokens = tokenize(input)?;
    let bare = match tokens.as_slice() {
        [] => {
            return Err(ParseError::NoAmount {
                token: input.trim().to_string(),
            });
        }
        [only] => only.tier.is_none(),
        _ => false,
    };

    let mut counts = [0u64; TIER_COUNT];
    for token in &tokens {
        let tier = match token.tier {
            Some(tier) => tier,
            None if bare => Tier::STANDARD,
            None => {
                return Err(ParseError::MissingDenomination {
                    token: token.text.to_string(),
                });
            }
        };
        carry(&mut counts, tier, token.amount, token.text)?;
    }

    Amount::from_coins(counts).map_err(|_| ParseError::Overflow {
        token: input.trim().to_string(),
    })
}

impl Ladder {
    /// Parses an amount, collapsing it when this ladder auto-normalizes.
    pub fn parse(&self, input: &str) -> Result<Amount, ParseError> {
        let amount = parse_coins(input)?.with_auto_normalize(self.auto_normalize());
        Ok(self.settle(amount))
    }

    /// Parses an amount keeping each coin as written: `3gp 2gp 10sp` is
    /// 5 gold and 10 silver, not 6 gold.
    pub fn parse_raw(&self, input: &str) -> Result<Amount, ParseError> {
        parse_coins(input)
    }
}

impl FromStr for Amount {
    type Err = ParseError;

    /// Parses the coins exactly as written; the result does not
    /// auto-normalize.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_coins(s)
    }
}
