//! Market data error types

use thiserror::Error;

/// Errors that can occur during market data operations
#[derive(Error, Debug, Clone, PartialEq)]
pub enum MarketDataError {
    /// Invalid symbol
    #[error("Invalid symbol: {0}")]
    InvalidSymbol(String),

    /// Price is not a finite number
    #[error("Invalid price for {symbol}: {price}")]
    InvalidPrice { symbol: String, price: f64 },

    /// Duplicate quote in a batch load
    #[error("Duplicate quote: {0}")]
    DuplicateQuote(String),

    /// Contract reference data could not be loaded
    #[error("Contract error: {0}")]
    Contract(#[from] instrument::InstrumentError),
}

impl From<common::Error> for MarketDataError {
    fn from(err: common::Error) -> Self {
        MarketDataError::InvalidSymbol(err.to_string())
    }
}
