//! Canonical text for amounts.
//!
//! `Display` writes every non-zero tier, highest first, as `<count><suffix>`
//! separated by single spaces (`151gp 5sp 1cp`). Nothing at all is written
//! as `0gp` so the output is always valid parser input.

use std::fmt;

use super::amount::Amount;
use super::ladder::Ladder;
use super::tier::Tier;

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut written = false;
        for tier in Tier::ALL.iter().rev() {
            let count = self.count(*tier);
            if count == 0 {
                continue;
            }
            if written {
                f.write_str(" ")?;
            }
            write!(f, "{count}{}", tier.suffix())?;
            written = true;
        }
        if !written {
            write!(f, "0{}", Tier::STANDARD.suffix())?;
        }
        Ok(())
    }
}

impl Ladder {
    /// Normalizes `amount` and renders it.
    #[must_use]
    pub fn to_canonical_string(&self, amount: &Amount) -> String {
        self.normalize(amount).to_string()
    }

    /// Renders the value as a single gold-piece number, e.g. `151.51`.
    ///
    /// This is the form used where amounts are stored as one number; it
    /// parses back to the same copper total.
    #[must_use]
    pub fn to_decimal_string(&self, amount: &Amount) -> String {
        amount.top_tier_value().normalize().to_string()
    }
}
