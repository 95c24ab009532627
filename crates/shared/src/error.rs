//! Application-wide error types.

use thiserror::Error;

/// Result type alias using `AppError`.
pub type AppResult<T> = Result<T, AppError>;

/// Application error types.
#[derive(Debug, Error)]
pub enum AppError {
    /// Input text could not be read as an amount.
    #[error("Parse error: {0}")]
    Parse(String),

    /// Validation error.
    #[error("Validation error: {0}")]
    Validation(String),

    /// Not enough coin to complete an operation.
    #[error("Insufficient funds: {0}")]
    InsufficientFunds(String),

    /// Configuration could not be loaded or is invalid.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Internal error.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl AppError {
    /// Returns the process exit code for this error.
    #[must_use]
    pub const fn exit_code(&self) -> u8 {
        match self {
            Self::Parse(_) | Self::Validation(_) => 2,
            Self::InsufficientFunds(_) => 3,
            Self::Config(_) => 78,
            Self::Internal(_) => 70,
        }
    }

    /// Returns the machine-readable error code.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::Parse(_) => "PARSE_ERROR",
            Self::Validation(_) => "VALIDATION_ERROR",
            Self::InsufficientFunds(_) => "INSUFFICIENT_FUNDS",
            Self::Config(_) => "CONFIG_ERROR",
            Self::Internal(_) => "INTERNAL_ERROR",
        }
    }
}

impl From<config::ConfigError> for AppError {
    fn from(err: config::ConfigError) -> Self {
        Self::Config(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(AppError::Parse(String::new()), 2, "PARSE_ERROR")]
    #[case(AppError::Validation(String::new()), 2, "VALIDATION_ERROR")]
    #[case(AppError::InsufficientFunds(String::new()), 3, "INSUFFICIENT_FUNDS")]
    #[case(AppError::Config(String::new()), 78, "CONFIG_ERROR")]
    #[case(AppError::Internal(String::new()), 70, "INTERNAL_ERROR")]
    fn test_error_codes(#[case] err: AppError, #[case] exit: u8, #[case] code: &str) {
        assert_eq!(err.exit_code(), exit);
        assert_eq!(err.error_code(), code);
    }

    #[test]
    fn test_error_display() {
        assert_eq!(AppError::Parse("msg".into()).to_string(), "Parse error: msg");
        assert_eq!(
            AppError::Validation("msg".into()).to_string(),
            "Validation error: msg"
        );
        assert_eq!(
            AppError::InsufficientFunds("you need 3cp more".into()).to_string(),
            "Insufficient funds: you need 3cp more"
        );
        assert_eq!(
            AppError::Config("msg".into()).to_string(),
            "Configuration error: msg"
        );
        assert_eq!(
            AppError::Internal("msg".into()).to_string(),
            "Internal error: msg"
        );
    }

    #[test]
    fn test_from_config_error() {
        let err: AppError = config::ConfigError::NotFound("ladder".into()).into();
        assert_eq!(err.error_code(), "CONFIG_ERROR");
    }
}
