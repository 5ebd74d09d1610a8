//! Spread engine error types

use thiserror::Error;

/// Errors raised while evaluating or rendering a spread
#[derive(Error, Debug)]
pub enum SpreadError {
    /// Contract or quote could not be resolved for a leg
    #[error("Unknown symbol: {0}")]
    UnknownSymbol(String),

    /// Writing chart output failed
    #[error("Output error: {0}")]
    Output(#[from] std::io::Error),

    /// Encoding chart output failed
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl From<serde_json::Error> for SpreadError {
    fn from(err: serde_json::Error) -> Self {
        SpreadError::Serialization(err.to_string())
    }
}

/// Errors raised while turning raw user input into a spread request
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RequestError {
    /// Leg symbol is malformed
    #[error("Leg {row}: invalid symbol: {message}")]
    InvalidSymbol { row: usize, message: String },

    /// Leg quantity is not a signed integer
    #[error("Leg {symbol}: quantity '{value}' is not an integer")]
    InvalidQuantity { symbol: String, value: String },

    /// More legs than the form allows
    #[error("Too many legs: {count} given, at most {max} allowed")]
    TooManyLegs { count: usize, max: usize },

    /// start, stop or step left blank
    #[error("Price range field '{0}' is required")]
    MissingRangeField(&'static str),

    /// start, stop or step is not an integer
    #[error("Price range field '{field}': '{value}' is not an integer")]
    InvalidRangeField { field: &'static str, value: String },

    /// Range walks below zero
    #[error("Price range reaches {price}; underlying prices must be non-negative")]
    NegativePrice { price: i64 },

    /// Command-line leg not in SYMBOL:QTY form
    #[error("Invalid leg argument '{0}'. Expected SYMBOL:QTY")]
    InvalidLegArgument(String),
}
