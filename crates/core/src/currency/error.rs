//! Currency error types.
//!
//! Every failure in the coin engine is returned to the caller as one of
//! these types; nothing here logs, retries, or panics on bad input.

use coinpurse_shared::AppError;
use rust_decimal::Decimal;
use thiserror::Error;

use super::amount::Amount;
use super::tier::Tier;

/// An operation that has no meaning for the given tier.
///
/// Raised when something tries to go below copper, the lowest coin.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Cannot {operation} {}", .tier.name())]
pub struct UnsupportedOperation {
    /// The tier the operation was attempted on.
    pub tier: Tier,
    /// The attempted operation.
    pub operation: &'static str,
}

/// Errors raised while reading an amount from text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// Input is blank.
    #[error("Amount is empty")]
    Empty,

    /// Input contains no number at all.
    #[error("No amount found in '{token}'")]
    NoAmount {
        /// The offending input.
        token: String,
    },

    /// A number in a multi-part amount has no coin suffix.
    #[error("Amount '{token}' has no coin type (expected cp, sp, ep, gp or pp)")]
    MissingDenomination {
        /// The number without a suffix.
        token: String,
    },

    /// A number is followed by letters that name no coin.
    #[error("Amount '{token}' ends with '{suffix}' which is not cp, sp, ep, gp or pp")]
    UnknownDenomination {
        /// The full token.
        token: String,
        /// The unrecognised suffix.
        suffix: String,
    },

    /// A number could not be read.
    #[error("Malformed number '{token}'")]
    MalformedNumber {
        /// The offending number.
        token: String,
    },

    /// A number is preceded by a minus sign.
    #[error("Amount '{token}' is negative")]
    NegativeAmount {
        /// The offending token, sign included.
        token: String,
    },

    /// A fraction could not be carried into a lower coin.
    #[error("Cannot further subdivide '{token}': {source}")]
    Indivisible {
        /// The token whose fraction ran out of coins.
        token: String,
        /// The failed decrement.
        source: UnsupportedOperation,
    },

    /// The amount does not fit in the copper total.
    #[error("Amount '{token}' is too large")]
    Overflow {
        /// The offending input.
        token: String,
    },
}

impl ParseError {
    /// Returns the error code for API responses.
    #[must_use]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::Empty => "EMPTY_AMOUNT",
            Self::NoAmount { .. } => "NO_AMOUNT",
            Self::MissingDenomination { .. } => "MISSING_DENOMINATION",
            Self::UnknownDenomination { .. } => "UNKNOWN_DENOMINATION",
            Self::MalformedNumber { .. } => "MALFORMED_NUMBER",
            Self::NegativeAmount { .. } => "NEGATIVE_AMOUNT",
            Self::Indivisible { .. } => "INDIVISIBLE_AMOUNT",
            Self::Overflow { .. } => "AMOUNT_OVERFLOW",
        }
    }

    /// Returns the offending part of the input, if any.
    #[must_use]
    pub fn token(&self) -> Option<&str> {
        match self {
            Self::Empty => None,
            Self::NoAmount { token }
            | Self::MissingDenomination { token }
            | Self::UnknownDenomination { token, .. }
            | Self::MalformedNumber { token }
            | Self::NegativeAmount { token }
            | Self::Indivisible { token, .. }
            | Self::Overflow { token } => Some(token),
        }
    }
}

/// Errors raised when an amount would leave its valid range.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A per-tier count is negative.
    #[error("Negative count {count} for {}", .tier.name())]
    NegativeCount {
        /// The tier with the bad count.
        tier: Tier,
        /// The rejected count.
        count: i64,
    },

    /// The copper total does not fit in 64 bits.
    #[error("Amount exceeds the largest representable value")]
    Overflow,

    /// Scaling by a negative factor.
    #[error("Scaling factor cannot be negative: {0}")]
    NegativeFactor(Decimal),

    /// Scaling factor is not a finite number.
    #[error("Invalid scaling factor: {0}")]
    InvalidFactor(String),

    /// Splitting among nobody.
    #[error("Cannot split an amount among zero recipients")]
    NoRecipients,

    /// Too many parts to hold in memory.
    #[error("Cannot split an amount among {recipients} recipients")]
    TooManyRecipients {
        /// The requested number of parts.
        recipients: usize,
    },

    /// Subtraction would go below zero.
    #[error("Insufficient funds: you need {shortfall} more")]
    NegativeResult {
        /// How much is missing, normalized.
        shortfall: Amount,
    },
}

impl ValidationError {
    /// Returns the error code for API responses.
    #[must_use]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::NegativeCount { .. } => "NEGATIVE_COUNT",
            Self::Overflow => "AMOUNT_OVERFLOW",
            Self::NegativeFactor(_) => "NEGATIVE_FACTOR",
            Self::InvalidFactor(_) => "INVALID_FACTOR",
            Self::NoRecipients => "NO_RECIPIENTS",
            Self::TooManyRecipients { .. } => "TOO_MANY_RECIPIENTS",
            Self::NegativeResult { .. } => "INSUFFICIENT_FUNDS",
        }
    }

    /// Returns the shortfall of a failed subtraction.
    #[must_use]
    pub fn shortfall(&self) -> Option<&Amount> {
        match self {
            Self::NegativeResult { shortfall } => Some(shortfall),
            _ => None,
        }
    }
}

/// Errors raised when building a [`Ladder`](super::Ladder).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LadderError {
    /// No tiers to maximize.
    #[error("Target ladder must contain at least one tier")]
    EmptyTargets,

    /// Targets are not strictly highest-to-lowest.
    #[error("Target ladder must list tiers from highest to lowest without repeats: {0:?}")]
    UnorderedTargets(Vec<Tier>),

    /// Middle tier is not strictly between copper and gold.
    #[error("Middle tier must be between copper and gold, got {}", .0.name())]
    InvalidMiddleTier(Tier),

    /// Tier name not recognised.
    #[error("{0}")]
    UnknownTier(String),
}

/// Any currency error.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CurrencyError {
    /// Text could not be parsed.
    #[error(transparent)]
    Parse(#[from] ParseError),

    /// Amount left its valid range.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Operation undefined for a tier.
    #[error(transparent)]
    Unsupported(#[from] UnsupportedOperation),

    /// Ladder could not be built.
    #[error(transparent)]
    Ladder(#[from] LadderError),
}

impl CurrencyError {
    /// Returns the error code for API responses.
    #[must_use]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::Parse(err) => err.error_code(),
            Self::Validation(err) => err.error_code(),
            Self::Unsupported(_) => "UNSUPPORTED_OPERATION",
            Self::Ladder(_) => "INVALID_LADDER",
        }
    }

    /// Returns true if the caller can fix this by changing its input.
    #[must_use]
    pub fn is_user_error(&self) -> bool {
        !matches!(self, Self::Unsupported(_))
    }
}

impl From<CurrencyError> for AppError {
    fn from(err: CurrencyError) -> Self {
        let message = err.to_string();
        match err {
            CurrencyError::Parse(_) => Self::Parse(message),
            CurrencyError::Validation(ValidationError::NegativeResult { shortfall }) => {
                Self::InsufficientFunds(format!("you need {shortfall} more"))
            }
            CurrencyError::Validation(_) => Self::Validation(message),
            CurrencyError::Unsupported(_) => Self::Internal(message),
            CurrencyError::Ladder(_) => Self::Config(message),
        }
    }
}
