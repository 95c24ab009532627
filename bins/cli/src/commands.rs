//! Command execution and output rendering.

use std::fmt;

use coinpurse_core::currency::{Amount, CurrencyError, Ladder};
use rust_decimal::Decimal;
use serde::Serialize;
use tracing::debug;

use crate::cli::Command;

/// An amount with its derived figures.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Summary {
    /// Coins, in display form.
    pub amount: Amount,
    /// Value in copper pieces.
    pub copper: u64,
    /// Value in gold pieces.
    pub gold: String,
    /// Weight in pounds.
    pub weight: Decimal,
}

impl Summary {
    fn new(ladder: &Ladder, amount: Amount) -> Self {
        Self {
            amount,
            copper: amount.smallest_unit_value(),
            gold: ladder.to_decimal_string(&amount),
            weight: amount.weight(),
        }
    }
}

/// Result of one command.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Output {
    /// A single amount, printed as coins.
    Amount(Summary),
    /// Several amounts, one per line.
    Parts(Vec<Summary>),
    /// A single amount with every figure shown. Coins are collapsed, weight
    /// is that of the coins as parsed.
    Value(Summary),
}

impl fmt::Display for Output {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Amount(summary) => write!(f, "{}", summary.amount),
            Self::Parts(parts) => {
                for (i, part) in parts.iter().enumerate() {
                    if i > 0 {
                        writeln!(f)?;
                    }
                    write!(f, "{}", part.amount)?;
                }
                Ok(())
            }
            Self::Value(summary) => {
                writeln!(f, "{}", summary.amount)?;
                writeln!(f, "copper: {}", summary.copper)?;
                writeln!(f, "gold:   {}", summary.gold)?;
                write!(f, "weight: {} lb", summary.weight)
            }
        }
    }
}

/// Runs `command` against `ladder`.
pub fn run(ladder: &Ladder, command: &Command) -> Result<Output, CurrencyError> {
    debug!(?command, "Running command");

    let output = match command {
        Command::Parse { amount } => Output::Amount(Summary::new(ladder, ladder.parse(amount)?)),
        Command::Add { amounts } => {
            let mut total = ladder.zero();
            for text in amounts {
                total = ladder.add(&total, &ladder.parse(text)?)?;
            }
            Output::Amount(Summary::new(ladder, total))
        }
        Command::Sub { from, amount } => {
            let left = ladder.parse(from)?;
            let right = ladder.parse(amount)?;
            Output::Amount(Summary::new(ladder, ladder.subtract(&left, &right)?))
        }
        Command::Scale { amount, factor } => {
            let scaled = ladder.scale(&ladder.parse(amount)?, *factor)?;
            Output::Amount(Summary::new(ladder, scaled))
        }
        Command::Split {
            amount,
            ways,
            shares,
        } => {
            let whole = ladder.parse(amount)?;
            let parts = match shares {
                Some(shares) => ladder.split_by_shares(&whole, shares)?,
                None => {
                    let ways = usize::try_from(*ways).unwrap_or(usize::MAX);
                    ladder.split(&whole, ways)?
                }
            };
            Output::Parts(
                parts
                    .into_iter()
                    .map(|part| Summary::new(ladder, part))
                    .collect(),
            )
        }
        Command::Value { amount } => {
            let parsed = ladder.parse(amount)?;
            // Weight is what the coins as written weigh, not their collapsed form.
            let mut summary = Summary::new(ladder, ladder.normalize(&parsed));
            summary.weight = parsed.weight();
            Output::Value(summary)
        }
    };

    Ok(output)
}

#[cfg(test)]
mod tests {
    use super::*;
    use coinpurse_core::currency::ValidationError;
    use rstest::rstest;
    use rust_decimal_macros::dec;

    fn parse(amount: &str) -> Command {
        Command::Parse {
            amount: amount.to_string(),
        }
    }

    #[rstest]
    #[case(parse("15151cp"), "151gp 5sp 1cp")]
    #[case(parse("0"), "0gp")]
    #[case(Command::Add { amounts: vec!["1cp".into(), "10gp".into(), "1pp".into()] }, "15gp 1cp")]
    #[case(Command::Sub { from: "1gp".into(), amount: "2sp".into() }, "8sp")]
    #[case(Command::Scale { amount: "2sp".into(), factor: dec!(0.75) }, "1sp 5cp")]
    #[case(Command::Split { amount: "1gp".into(), ways: 3, shares: None }, "3sp 4cp\n3sp 3cp\n3sp 3cp")]
    #[case(Command::Split { amount: "1gp".into(), ways: 2, shares: Some(vec![3, 1]) }, "7sp 5cp\n2sp 5cp")]
    fn test_text_output(#[case] command: Command, #[case] expected: &str) {
        let output = run(&Ladder::standard(), &command).unwrap();
        assert_eq!(output.to_string(), expected);
    }

    #[rstest]
    #[case(Ladder::standard(), "150cp", "1gp 5sp\ncopper: 150\ngold:   1.5\nweight: 0.12 lb")]
    #[case(Ladder::standard().with_auto_normalize(false), "150cp", "1gp 5sp\ncopper: 150\ngold:   1.5\nweight: 3.00 lb")]
    #[case(Ladder::standard().with_auto_normalize(false), "1gp 5sp", "1gp 5sp\ncopper: 150\ngold:   1.5\nweight: 0.12 lb")]
    fn test_value_weight_follows_parsed_coins(
        #[case] ladder: Ladder,
        #[case] amount: &str,
        #[case] expected: &str,
    ) {
        let value = Command::Value {
            amount: amount.to_string(),
        };
        let output = run(&ladder, &value).unwrap();
        assert_eq!(output.to_string(), expected);
    }

    #[test]
    fn test_value_output() {
        let output = run(&Ladder::standard(), &parse("5.11gp")).unwrap();
        let Output::Amount(summary) = output else {
            panic!("parse should yield a single amount");
        };
        assert_eq!(summary.copper, 511);
        assert_eq!(summary.gold, "5.11");
        assert_eq!(summary.weight, dec!(0.14));
    }

    #[test]
    fn test_raw_ladder_keeps_coins() {
        let ladder = Ladder::standard().with_auto_normalize(false);
        let output = run(&ladder, &parse("150cp")).unwrap();
        assert_eq!(output.to_string(), "150cp");
    }

    #[test]
    fn test_json_output() {
        let output = run(&Ladder::standard(), &parse("1pp 1cp")).unwrap();
        let json = serde_json::to_value(&output).unwrap();
        assert_eq!(json["amount"], "5gp 1cp");
        assert_eq!(json["copper"], 501);
        assert_eq!(json["gold"], "5.01");
        assert_eq!(json["weight"], "0.12");
    }

    #[test]
    fn test_errors_pass_through() {
        let ladder = Ladder::standard();
        let sub = Command::Sub {
            from: "2cp".to_string(),
            amount: "0.01pp".to_string(),
        };
        let err = run(&ladder, &sub).unwrap_err();
        assert!(matches!(
            err,
            CurrencyError::Validation(ValidationError::NegativeResult { .. })
        ));

        let err = run(&ladder, &parse("5xp")).unwrap_err();
        assert_eq!(err.error_code(), "UNKNOWN_DENOMINATION");
    }
}
