//! Error types for promo configuration parsing and evaluation

use thiserror::Error;

/// Result type for promo-windows operations
pub type Result<T> = std::result::Result<T, ConfigError>;

/// Fatal configuration input error.
///
/// Every malformed configuration is rejected with one of these variants.
/// There is no recoverable class: a failing parse aborts the whole query and
/// never yields a partial schedule.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Configuration string was empty or whitespace-only
    #[error("empty configuration string")]
    EmptyConfig,

    /// Day label is not a three-letter English weekday abbreviation
    #[error("invalid day in configuration: {0:?}")]
    InvalidDay(String),

    /// Time range is malformed, out of range, or non-positive
    #[error("invalid time range in configuration: {0:?}")]
    InvalidTimeRange(String),

    /// Day label left without a matching time range (odd token count)
    #[error("day label {0:?} has no time range")]
    DanglingDay(String),
}
