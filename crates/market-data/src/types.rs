//! Shared types for Market Data

use crate::error::MarketDataError;
use crate::Result;
use chrono::{DateTime, Utc};
use common::Symbol;
use serde::{Deserialize, Serialize};

/// Last traded price of one instrument
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Quote {
    pub symbol: Symbol,
    pub last_price: f64,
    /// When the price was observed, if the source reports it
    pub updated_at: Option<DateTime<Utc>>,
}

impl Quote {
    /// Create a quote; the price must be finite.
    ///
    /// Negative prices are accepted: futures can trade below zero. Whether a
    /// negative option premium makes sense is checked by config validation.
    pub fn new(symbol: Symbol, last_price: f64) -> Result<Self> {
        if !last_price.is_finite() {
            return Err(MarketDataError::InvalidPrice {
                symbol: symbol.to_string(),
                price: last_price,
            });
        }
        Ok(Self {
            symbol,
            last_price,
            updated_at: None,
        })
    }

    /// Create from a config quote entry
    pub fn from_config(quote: &config::QuoteConfig) -> Result<Self> {
        let mut parsed = Self::new(Symbol::new(&quote.symbol)?, quote.last_price)?;
        parsed.updated_at = quote.updated_at;
        Ok(parsed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;
    use chrono::TimeZone;

    #[test]
    fn test_quote_rejects_non_finite_prices() {
        let symbol = Symbol::new("IO2406-C-3800").unwrap();
        assert_matches!(
            Quote::new(symbol.clone(), f64::NAN),
            Err(MarketDataError::InvalidPrice { .. })
        );
        assert_matches!(
            Quote::new(symbol.clone(), f64::INFINITY),
            Err(MarketDataError::InvalidPrice { .. })
        );
        assert_eq!(Quote::new(symbol, 0.0).unwrap().last_price, 0.0);
    }

    #[test]
    fn test_quote_accepts_negative_price() {
        let quote = Quote::new(Symbol::new("CL2405").unwrap(), -37.63).unwrap();
        assert_eq!(quote.last_price, -37.63);
    }

    #[test]
    fn test_quote_from_config() {
        let ts = Utc.with_ymd_and_hms(2024, 5, 20, 7, 0, 0).unwrap();
        let cfg = config::QuoteConfig {
            symbol: "IF2406".to_string(),
            last_price: 3850.2,
            updated_at: Some(ts),
        };
        let quote = Quote::from_config(&cfg).unwrap();
        assert_eq!(quote.symbol.as_str(), "IF2406");
        assert_eq!(quote.updated_at, Some(ts));

        let blank = config::QuoteConfig {
            symbol: " ".to_string(),
            ..cfg
        };
        assert_matches!(Quote::from_config(&blank), Err(MarketDataError::InvalidSymbol(_)));
    }
}
