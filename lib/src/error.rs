use thiserror::Error;

/// An error that can occur when constructing a [`Rule`](crate::Rule).
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
pub enum RuleError {
    /// The rule number is outside the range `0..=255`.
    #[error("The rule number must be between 0 and 255")]
    OutOfRange,

    /// The rule string is not a number.
    #[error("The rule string is not a number")]
    NotANumber,
}

/// An error that can occur when validating a [`Config`](crate::Config).
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// The rule number is invalid.
    #[error(transparent)]
    Rule(#[from] RuleError),

    /// The number of time steps is zero.
    #[error("The number of time steps must be at least 1")]
    ZeroSteps,
}
