//! Command-line argument parsing.

use clap::{Parser, Subcommand};
use coinpurse_shared::LadderConfig;
use rust_decimal::Decimal;

/// Upper bound on the number of equal parts `split` accepts.
const MAX_WAYS: i64 = 10_000;

/// Coin amount calculator.
#[derive(Parser, Debug, Clone)]
#[command(name = "coinpurse")]
#[command(about = "Parse, combine and format coin amounts")]
#[command(version)]
pub struct Cli {
    /// Print results as JSON.
    #[arg(long, global = true)]
    pub json: bool,

    /// Keep coins as written instead of collapsing them.
    #[arg(long, global = true)]
    pub raw: bool,

    /// Maximize every tier, platinum and electrum included.
    #[arg(long, global = true)]
    pub all_tiers: bool,

    /// Middle tier of the ladder (sp or ep).
    #[arg(long, global = true)]
    pub middle: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

/// What to do with the amounts.
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Parse an amount and print it in canonical form.
    Parse {
        /// Amount text, e.g. "5gp 3sp" or "10.5".
        amount: String,
    },

    /// Add two or more amounts.
    Add {
        /// Amounts to sum.
        #[arg(required = true, num_args = 2..)]
        amounts: Vec<String>,
    },

    /// Subtract one amount from another.
    Sub {
        /// Amount to subtract from.
        from: String,
        /// Amount to take away.
        amount: String,
    },

    /// Multiply an amount by a factor.
    Scale {
        /// Amount to scale.
        amount: String,
        /// Non-negative factor, e.g. 0.75.
        #[arg(allow_hyphen_values = true)]
        factor: Decimal,
    },

    /// Split an amount into parts.
    Split {
        /// Amount to split.
        amount: String,
        /// Number of equal parts.
        #[arg(
            long,
            short = 'n',
            default_value_t = 2,
            value_parser = clap::value_parser!(u32).range(1..=MAX_WAYS),
            conflicts_with = "shares"
        )]
        ways: u32,
        /// Comma-separated proportional shares, e.g. 2,1,1.
        #[arg(long, value_delimiter = ',')]
        shares: Option<Vec<u32>>,
    },

    /// Show value, weight and gold-piece form of an amount.
    Value {
        /// Amount to inspect.
        amount: String,
    },
}

impl Cli {
    /// Parse command-line arguments.
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Applies command-line overrides on top of the loaded ladder settings.
    pub fn apply_overrides(&self, config: &mut LadderConfig) {
        if self.raw {
            config.auto_normalize = false;
        }
        if self.all_tiers {
            config.all_tiers = true;
        }
        if let Some(middle) = &self.middle {
            config.middle_tier.clone_from(middle);
        }
    }
}
