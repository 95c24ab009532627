//! Adding, subtracting, scaling and splitting amounts.
//!
//! All arithmetic runs on copper totals. The left operand's flag decides the
//! shape of the result: with `auto_normalize` set the result is collapsed by
//! the ladder, otherwise coins are kept tier by tier wherever that is
//! possible without making change.
//!
//! Splitting uses the largest remainder method so the parts always add back
//! up to the original total; no copper is lost or created.

use rust_decimal::prelude::*;

use super::amount::Amount;
use super::error::ValidationError;
use super::ladder::Ladder;
use super::tier::TIER_COUNT;

impl Ladder {
    /// Sum of two amounts.
    ///
    /// Fails only if the copper total no longer fits in 64 bits.
    pub fn add(&self, a: &Amount, b: &Amount) -> Result<Amount, ValidationError> {
        let total = a
            .smallest_unit_value()
            .checked_add(b.smallest_unit_value())
            .ok_or(ValidationError::Overflow)?;

        if a.auto_normalize() {
            return Ok(self.collapse(total, true));
        }

        let mut counts = [0u64; TIER_COUNT];
        for (slot, (x, y)) in counts.iter_mut().zip(a.counts().iter().zip(b.counts())) {
            *slot = x.checked_add(y).ok_or(ValidationError::Overflow)?;
        }
        Ok(Amount::from_parts(counts, total, false))
    }

    /// Takes `b` away from `a`.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::NegativeResult`] carrying the normalized
    /// shortfall when `b` is worth more than `a`.
    pub fn subtract(&self, a: &Amount, b: &Amount) -> Result<Amount, ValidationError> {
        let have = a.smallest_unit_value();
        let need = b.smallest_unit_value();
        if need > have {
            return Err(ValidationError::NegativeResult {
                shortfall: self.collapse(need - have, true),
            });
        }

        let total = have - need;
        if a.auto_normalize() {
            return Ok(self.collapse(total, true));
        }

        // Raw amounts pay coin for coin when every tier suffices.
        let mut counts = a.counts();
        for (slot, taken) in counts.iter_mut().zip(b.counts()) {
            match slot.checked_sub(taken) {
                Some(left) => *slot = left,
                None => return Ok(self.collapse(total, false)),
            }
        }
        Ok(Amount::from_parts(counts, total, false))
    }

    /// Multiplies an amount by a non-negative factor.
    ///
    /// The copper total is rounded half away from zero, so `2sp * 0.75`
    /// is `15cp`. The result is always collapsed, keeping `a`'s flag.
    pub fn scale(&self, a: &Amount, factor: Decimal) -> Result<Amount, ValidationError> {
        if factor.is_sign_negative() && !factor.is_zero() {
            return Err(ValidationError::NegativeFactor(factor));
        }

        let total = Decimal::from(a.smallest_unit_value())
            .checked_mul(factor)
            .ok_or(ValidationError::Overflow)?
            .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
            .to_u64()
            .ok_or(ValidationError::Overflow)?;

        Ok(self.collapse(total, a.auto_normalize()))
    }

    /// [`scale`](Self::scale) for callers holding a float factor.
    ///
    /// NaN and infinite factors are rejected.
    pub fn scale_f64(&self, a: &Amount, factor: f64) -> Result<Amount, ValidationError> {
        let factor = Decimal::from_f64(factor)
            .ok_or_else(|| ValidationError::InvalidFactor(factor.to_string()))?;
        self.scale(a, factor)
    }

    /// Splits an amount into `recipients` near-equal parts.
    ///
    /// Parts differ by at most one copper; the earlier parts get the extra
    /// pieces.
    pub fn split(&self, a: &Amount, recipients: usize) -> Result<Vec<Amount>, ValidationError> {
        if recipients == 0 {
            return Err(ValidationError::NoRecipients);
        }
        let too_many = ValidationError::TooManyRecipients { recipients };
        let count = u64::try_from(recipients).map_err(|_| too_many.clone())?;
        let mut parts = Vec::new();
        parts.try_reserve_exact(recipients).map_err(|_| too_many)?;

        let total = a.smallest_unit_value();
        let base = total / count;
        let extra = total % count;

        parts.extend(
            (0..count).map(|i| self.collapse(base + u64::from(i < extra), a.auto_normalize())),
        );
        Ok(parts)
    }

    /// Splits an amount in proportion to `shares`.
    ///
    /// Each part gets its exact share rounded down. Leftover copper goes one
    /// piece at a time to the parts with the largest remainders, earlier
    /// parts first on ties.
    pub fn split_by_shares(
        &self,
        a: &Amount,
        shares: &[u32],
    ) -> Result<Vec<Amount>, ValidationError> {
        let share_sum: u128 = shares.iter().map(|&s| u128::from(s)).sum();
        if share_sum == 0 {
            return Err(ValidationError::NoRecipients);
        }

        let total = u128::from(a.smallest_unit_value());
        let exact: Vec<(u128, u128)> = shares
            .iter()
            .map(|&share| {
                let scaled = total * u128::from(share);
                (scaled / share_sum, scaled % share_sum)
            })
            .collect();

        let mut parts: Vec<u128> = exact.iter().map(|(floor, _)| *floor).collect();
        let allocated: u128 = parts.iter().sum();
        let leftover = usize::try_from(total - allocated).map_err(|_| ValidationError::Overflow)?;

        if leftover > 0 {
            let mut order: Vec<usize> = (0..exact.len()).collect();
            order.sort_by(|&x, &y| exact[y].1.cmp(&exact[x].1));
            for idx in order.into_iter().take(leftover) {
                parts[idx] += 1;
            }
        }

        parts
            .into_iter()
            .map(|part| {
                let part = u64::try_from(part).map_err(|_| ValidationError::Overflow)?;
                Ok(self.collapse(part, a.auto_normalize()))
            })
            .collect()
    }
}
