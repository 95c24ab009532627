//! A balance of coin that can be paid from and topped up.

use rust_decimal::Decimal;

use crate::currency::{Amount, CurrencyError, Ladder, TIER_COUNT, ValidationError};

/// Coins owned by one character, container or shop.
///
/// Payments that cannot be afforded fail with the shortfall and leave the
/// balance untouched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Purse {
    ladder: Ladder,
    balance: Amount,
}

impl Purse {
    /// Creates a purse holding `balance`, collapsed if the ladder
    /// auto-normalizes.
    #[must_use]
    pub fn new(ladder: Ladder, balance: Amount) -> Self {
        let balance = balance.with_auto_normalize(ladder.auto_normalize());
        let balance = ladder.settle(balance);
        Self { ladder, balance }
    }

    /// Creates an empty purse.
    #[must_use]
    pub fn empty(ladder: Ladder) -> Self {
        let balance = ladder.zero();
        Self { ladder, balance }
    }

    /// Creates a purse that keeps loose coins as they are, never making
    /// change unless a payment requires it.
    pub fn saddlebag(ladder: Ladder, coins: [u64; TIER_COUNT]) -> Result<Self, ValidationError> {
        let ladder = ladder.with_auto_normalize(false);
        let balance = Amount::from_coins(coins)?;
        Ok(Self { ladder, balance })
    }

    /// Current balance.
    #[must_use]
    pub const fn balance(&self) -> &Amount {
        &self.balance
    }

    /// Ladder used for every operation on this purse.
    #[must_use]
    pub const fn ladder(&self) -> &Ladder {
        &self.ladder
    }

    /// Returns true if the balance is worth at least `price`.
    #[must_use]
    pub const fn can_afford(&self, price: &Amount) -> bool {
        self.balance.can_cover(price)
    }

    /// Pays `price` from the balance and returns what is left.
    ///
    /// # Errors
    ///
    /// Fails with the normalized shortfall ("you need N more") when the
    /// balance is too small.
    pub fn pay(&mut self, price: &Amount) -> Result<&Amount, CurrencyError> {
        self.balance = self.ladder.subtract(&self.balance, price)?;
        Ok(&self.balance)
    }

    /// Adds coins to the balance.
    pub fn deposit(&mut self, amount: &Amount) -> Result<&Amount, CurrencyError> {
        self.balance = self.ladder.add(&self.balance, amount)?;
        Ok(&self.balance)
    }

    /// Parses `price` with this purse's ladder and pays it.
    pub fn pay_str(&mut self, price: &str) -> Result<&Amount, CurrencyError> {
        let price = self.ladder.parse(price)?;
        self.pay(&price)
    }

    /// Weight of the coins carried, in pounds.
    #[must_use]
    pub fn weight(&self) -> Decimal {
        self.balance.weight()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::currency::Tier;
    use rust_decimal_macros::dec;

    fn purse(balance: &str) -> Purse {
        let ladder = Ladder::standard();
        let balance = ladder.parse(balance).unwrap();
        Purse::new(ladder, balance)
    }

    #[test]
    fn test_new_purse_normalizes() {
        let ladder = Ladder::standard();
        let raw = Amount::of(Tier::Silver, 25).unwrap();
        let purse = Purse::new(ladder, raw);
        assert_eq!(purse.balance().to_string(), "2gp 5sp");
        assert!(purse.balance().auto_normalize());
    }

    #[test]
    fn test_empty_purse() {
        let purse = Purse::empty(Ladder::standard());
        assert!(purse.balance().is_zero());
        assert_eq!(purse.weight(), Decimal::ZERO);
        assert!(purse.can_afford(&Amount::zero()));
    }

    #[test]
    fn test_can_afford() {
        let purse = purse("1gp");
        let ladder = purse.ladder().clone();
        assert!(purse.can_afford(&ladder.parse("99cp").unwrap()));
        assert!(purse.can_afford(&ladder.parse("1gp").unwrap()));
        assert!(!purse.can_afford(&ladder.parse("1gp 1cp").unwrap()));
    }

    #[test]
    fn test_pay_reduces_balance() {
        let mut purse = purse("10gp");
        let left = purse.pay_str("2gp 5sp").unwrap();
        assert_eq!(left.to_string(), "7gp 5sp");
        assert_eq!(purse.balance().smallest_unit_value(), 750);
    }

    #[test]
    fn test_pay_too_much_leaves_balance() {
        let mut purse = purse("2sp");
        let err = purse.pay_str("1gp").unwrap_err();
        assert_eq!(err.to_string(), "Insufficient funds: you need 8sp more");
        match err {
            CurrencyError::Validation(ValidationError::NegativeResult { shortfall }) => {
                assert_eq!(shortfall.smallest_unit_value(), 80);
            }
            other => panic!("unexpected error: {other}"),
        }
        assert_eq!(purse.balance().to_string(), "2sp");
    }

    #[test]
    fn test_pay_rejects_bad_text() {
        let mut purse = purse("2sp");
        assert!(matches!(
            purse.pay_str("lots"),
            Err(CurrencyError::Parse(_))
        ));
        assert_eq!(purse.balance().smallest_unit_value(), 20);
    }

    #[test]
    fn test_deposit() {
        let mut purse = Purse::empty(Ladder::standard());
        let coins = purse.ladder().parse("150cp").unwrap();
        purse.deposit(&coins).unwrap();
        purse.deposit(&coins).unwrap();
        assert_eq!(purse.balance().to_string(), "3gp");
    }

    #[test]
    fn test_saddlebag_keeps_loose_coins() {
        let mut bag = Purse::saddlebag(Ladder::standard(), [30, 20, 0, 0, 0]).unwrap();
        assert_eq!(bag.weight(), dec!(1.00));

        let more = Amount::of(Tier::Copper, 20).unwrap();
        bag.deposit(&more).unwrap();
        assert_eq!(bag.balance().counts(), [50, 20, 0, 0, 0]);

        bag.pay(&Amount::of(Tier::Silver, 5).unwrap()).unwrap();
        assert_eq!(bag.balance().counts(), [50, 15, 0, 0, 0]);
        assert!(!bag.balance().auto_normalize());
    }

    #[test]
    fn test_saddlebag_makes_change_when_needed() {
        let mut bag = Purse::saddlebag(Ladder::standard(), [0, 0, 0, 1, 0]).unwrap();
        bag.pay(&Amount::of(Tier::Copper, 1).unwrap()).unwrap();
        assert_eq!(bag.balance().counts(), [9, 9, 0, 0, 0]);
        assert_eq!(bag.balance().smallest_unit_value(), 99);
    }
}
