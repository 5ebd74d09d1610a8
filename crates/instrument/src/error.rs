//! Error types for the instrument crate.

use thiserror::Error;

/// Result type alias for instrument operations.
pub type InstrumentResult<T> = Result<T, InstrumentError>;

/// Errors that can occur in instrument operations.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum InstrumentError {
    /// Contract already exists.
    #[error("Contract already exists: {0}")]
    AlreadyExists(String),

    /// Invalid contract symbol.
    #[error("Invalid contract symbol: {0}")]
    InvalidSymbol(String),

    /// Unknown option type string.
    #[error("Invalid option type: '{0}'. Expected one of: call, put, underlying")]
    InvalidOptionType(String),

    /// Invalid strike price.
    #[error("Invalid strike price for {symbol}: {strike}. Strike must be positive.")]
    InvalidStrike { symbol: String, strike: f64 },

    /// Invalid contract size.
    #[error("Invalid contract size for {symbol}: {size}. Size must be positive.")]
    InvalidSize { symbol: String, size: f64 },
}

impl From<common::Error> for InstrumentError {
    fn from(err: common::Error) -> Self {
        InstrumentError::InvalidSymbol(err.to_string())
    }
}
