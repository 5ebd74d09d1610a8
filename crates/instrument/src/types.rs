//! Core domain types for contracts.
//!
//! - `OptionType`: Call, Put, or the Underlying itself (futures / spot leg)
//! - `OptionContract`: immutable reference data for one tradeable symbol

use crate::error::{InstrumentError, InstrumentResult};
use common::Symbol;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Type of contract a spread leg refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OptionType {
    /// Call option - right to buy at strike price.
    Call,
    /// Put option - right to sell at strike price.
    Put,
    /// The underlying (or its future); no strike.
    Underlying,
}

impl OptionType {
    /// Convert to config string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            OptionType::Call => "call",
            OptionType::Put => "put",
            OptionType::Underlying => "underlying",
        }
    }

    /// Parse from config string representation (case-insensitive).
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "call" | "c" => Some(OptionType::Call),
            "put" | "p" => Some(OptionType::Put),
            "underlying" | "u" => Some(OptionType::Underlying),
            _ => None,
        }
    }

    /// True for calls and puts, whose strike is meaningful.
    pub fn has_strike(&self) -> bool {
        matches!(self, OptionType::Call | OptionType::Put)
    }
}

impl fmt::Display for OptionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OptionType::Call => write!(f, "Call"),
            OptionType::Put => write!(f, "Put"),
            OptionType::Underlying => write!(f, "Underlying"),
        }
    }
}

impl std::str::FromStr for OptionType {
    type Err = InstrumentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| InstrumentError::InvalidOptionType(s.to_string()))
    }
}

/// Contract reference data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OptionContract {
    /// Exchange symbol.
    pub symbol: Symbol,
    /// Call, Put or Underlying.
    pub option_type: OptionType,
    /// Strike price. Zero for underlying contracts.
    pub strike: f64,
    /// Contract multiplier.
    pub size: f64,
}

impl OptionContract {
    /// Create a validated contract.
    ///
    /// Calls and puts need a positive strike; every contract needs a
    /// positive, finite size. The strike of an underlying contract is
    /// ignored and stored as zero.
    pub fn new(
        symbol: Symbol,
        option_type: OptionType,
        strike: f64,
        size: f64,
    ) -> InstrumentResult<Self> {
        if !size.is_finite() || size <= 0.0 {
            return Err(InstrumentError::InvalidSize {
                symbol: symbol.to_string(),
                size,
            });
        }

        let strike = if option_type.has_strike() {
            if !strike.is_finite() || strike <= 0.0 {
                return Err(InstrumentError::InvalidStrike {
                    symbol: symbol.to_string(),
                    strike,
                });
            }
            strike
        } else {
            0.0
        };

        Ok(Self {
            symbol,
            option_type,
            strike,
            size,
        })
    }

    /// Create a call contract.
    pub fn call(symbol: Symbol, strike: f64, size: f64) -> InstrumentResult<Self> {
        Self::new(symbol, OptionType::Call, strike, size)
    }

    /// Create a put contract.
    pub fn put(symbol: Symbol, strike: f64, size: f64) -> InstrumentResult<Self> {
        Self::new(symbol, OptionType::Put, strike, size)
    }

    /// Create an underlying (futures / spot) contract.
    pub fn underlying(symbol: Symbol, size: f64) -> InstrumentResult<Self> {
        Self::new(symbol, OptionType::Underlying, 0.0, size)
    }

    /// Create from a config contract entry.
    pub fn from_config(contract: &config::ContractConfig) -> InstrumentResult<Self> {
        let symbol = Symbol::new(&contract.symbol)?;
        let option_type: OptionType = contract.option_type.parse()?;
        Self::new(
            symbol,
            option_type,
            contract.strike.unwrap_or(0.0),
            contract.size,
        )
    }
}

impl fmt::Display for OptionContract {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.option_type.has_strike() {
            write!(
                f,
                "{} ({} {} x{})",
                self.symbol, self.option_type, self.strike, self.size
            )
        } else {
            write!(f, "{} ({} x{})", self.symbol, self.option_type, self.size)
        }
    }
}
