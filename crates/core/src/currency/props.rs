//! Property-based tests for currency operations.
//!
//! - Canonical text parses back to the same coins
//! - Normalization is idempotent and keeps the copper total
//! - Add, subtract and split neither lose nor create copper

use proptest::prelude::*;

use super::amount::Amount;
use super::error::ValidationError;
use super::ladder::Ladder;
use super::tier::Tier;

/// Copper totals up to a million gold pieces.
fn copper_total() -> impl Strategy<Value = u64> {
    0u64..100_000_000
}

/// Raw per-tier coin counts.
fn raw_counts() -> impl Strategy<Value = [u64; 5]> {
    prop::array::uniform5(0u64..10_000)
}

/// Every ladder shape the engine offers.
fn any_ladder() -> impl Strategy<Value = Ladder> {
    prop_oneof![
        Just(Ladder::standard()),
        Just(Ladder::all_tiers()),
        Just(Ladder::with_middle(Tier::Electrum).unwrap()),
        Just(Ladder::from_targets(vec![Tier::Platinum, Tier::Silver]).unwrap()),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// Canonical text reads back as the same canonical coins.
    #[test]
    fn prop_canonical_string_round_trips(ladder in any_ladder(), total in copper_total()) {
        let amount = ladder.from_smallest_unit(total);
        let text = ladder.to_canonical_string(&amount);
        let reparsed = ladder.parse(&text).unwrap();
        prop_assert_eq!(reparsed, amount);
        prop_assert_eq!(ladder.to_canonical_string(&reparsed), text);
    }

    /// Raw text reads back as the same raw coins.
    #[test]
    fn prop_raw_display_round_trips(counts in raw_counts()) {
        let amount = Amount::from_coins(counts).unwrap();
        let reparsed: Amount = amount.to_string().parse().unwrap();
        prop_assert_eq!(reparsed.counts(), counts);
    }

    /// The decimal gold form keeps the copper total.
    #[test]
    fn prop_decimal_string_round_trips(total in copper_total()) {
        let ladder = Ladder::standard();
        let amount = ladder.from_smallest_unit(total);
        let reparsed = ladder.parse(&ladder.to_decimal_string(&amount)).unwrap();
        prop_assert_eq!(reparsed.smallest_unit_value(), total);
    }

    /// Normalizing twice changes nothing, and value is conserved.
    #[test]
    fn prop_normalize_idempotent(ladder in any_ladder(), counts in raw_counts()) {
        let raw = Amount::from_coins(counts).unwrap();
        let once = ladder.normalize(&raw);
        prop_assert_eq!(once.smallest_unit_value(), raw.smallest_unit_value());
        prop_assert_eq!(ladder.normalize(&once), once);
    }

    /// Normalization never uses more coins than it was given.
    #[test]
    fn prop_normalize_never_adds_weight(counts in raw_counts()) {
        let ladder = Ladder::all_tiers();
        let raw = Amount::from_coins(counts).unwrap();
        prop_assert!(ladder.normalize(&raw).coin_count() <= raw.coin_count());
    }

    /// Addition conserves copper, normalized or raw.
    #[test]
    fn prop_add_conserves_value(
        a in raw_counts(),
        b in raw_counts(),
        normalized in any::<bool>(),
    ) {
        let ladder = Ladder::standard();
        let a = Amount::from_coins(a).unwrap().with_auto_normalize(normalized);
        let b = Amount::from_coins(b).unwrap();
        let sum = ladder.add(&a, &b).unwrap();
        prop_assert_eq!(
            sum.smallest_unit_value(),
            a.smallest_unit_value() + b.smallest_unit_value()
        );
        prop_assert_eq!(sum.auto_normalize(), normalized);
    }

    /// Subtraction fails exactly when the right side is worth more, and the
    /// shortfall is the missing copper.
    #[test]
    fn prop_subtract_errors_iff_short(
        a in copper_total(),
        b in copper_total(),
        normalized in any::<bool>(),
    ) {
        let ladder = Ladder::standard();
        let left = ladder.from_smallest_unit(a).with_auto_normalize(normalized);
        let right = ladder.from_smallest_unit(b);
        match ladder.subtract(&left, &right) {
            Ok(diff) => {
                prop_assert!(b <= a);
                prop_assert_eq!(diff.smallest_unit_value(), a - b);
            }
            Err(ValidationError::NegativeResult { shortfall }) => {
                prop_assert!(b > a);
                prop_assert_eq!(shortfall.smallest_unit_value(), b - a);
                prop_assert_eq!(shortfall, ladder.from_smallest_unit(b - a));
            }
            Err(other) => prop_assert!(false, "unexpected error: {other}"),
        }
    }

    /// Adding then subtracting the same amount gives the original value.
    #[test]
    fn prop_add_then_subtract(a in copper_total(), b in copper_total()) {
        let ladder = Ladder::standard();
        let left = ladder.from_smallest_unit(a);
        let right = ladder.from_smallest_unit(b);
        let back = ladder.subtract(&ladder.add(&left, &right).unwrap(), &right).unwrap();
        prop_assert_eq!(back, left);
    }

    /// Split parts add up to the whole and differ by at most one copper.
    #[test]
    fn prop_split_conserves_value(total in copper_total(), recipients in 1usize..50) {
        let ladder = Ladder::standard();
        let amount = ladder.from_smallest_unit(total);
        let parts = ladder.split(&amount, recipients).unwrap();
        prop_assert_eq!(parts.len(), recipients);

        let values: Vec<u64> = parts.iter().map(Amount::smallest_unit_value).collect();
        prop_assert_eq!(values.iter().sum::<u64>(), total);
        let max = values.iter().max().copied().unwrap_or_default();
        let min = values.iter().min().copied().unwrap_or_default();
        prop_assert!(max - min <= 1);
    }

    /// Proportional parts add up to the whole.
    #[test]
    fn prop_split_by_shares_conserves_value(
        total in copper_total(),
        shares in prop::collection::vec(1u32..1_000, 1..10),
    ) {
        let ladder = Ladder::standard();
        let amount = ladder.from_smallest_unit(total);
        let parts = ladder.split_by_shares(&amount, &shares).unwrap();
        prop_assert_eq!(parts.len(), shares.len());
        prop_assert_eq!(
            parts.iter().map(Amount::smallest_unit_value).sum::<u64>(),
            total
        );
    }

    /// Scaling by a whole number multiplies the copper total exactly.
    #[test]
    fn prop_scale_by_integer(total in copper_total(), factor in 0u32..100) {
        let ladder = Ladder::standard();
        let amount = ladder.from_smallest_unit(total);
        let scaled = ladder.scale(&amount, factor.into()).unwrap();
        prop_assert_eq!(scaled.smallest_unit_value(), total * u64::from(factor));
    }
}
