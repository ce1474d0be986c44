//! Core error types for WealthSpectrum.
//!
//! The layout engine itself never fails: degenerate input is resolved by
//! fallback policies. Errors only arise at the input boundary, when
//! positions coming from an editor are validated before being handed over.

use thiserror::Error;

/// Type alias for Result using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Root error type for the core crate.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Input validation failed: {0}")]
    Validation(#[from] ValidationError),

    #[error("Position not found: {0}")]
    PositionNotFound(String),

    #[error("Invalid color: {0}")]
    InvalidColor(String),

    #[error("Invalid configuration value: {0}")]
    InvalidConfigValue(String),
}

/// Validation errors for user input and data parsing.
#[derive(Error, Debug)]
pub enum ValidationError {
    #[error("Required field '{0}' is missing")]
    MissingField(String),

    #[error("Amount for position '{id}' must be a non-negative number, got {amount}")]
    NegativeAmount { id: String, amount: String },

    #[error("Duplicate position id: {0}")]
    DuplicateId(String),

    #[error("Total of all amounts exceeds the supported range")]
    TotalOverflow,
}
