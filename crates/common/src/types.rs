//! Common types used across the workbench
//!
//! Instrument symbols are shared by the contract lookup, the quote lookup
//! and spread positions, so they live here.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Signed position size in contracts (positive = long, negative = short)
pub type Quantity = i64;

/// Instrument symbol (e.g. `IO2406-C-3800`)
///
/// Symbols are trimmed on construction and must not be empty or contain
/// whitespace.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Symbol(String);

impl Symbol {
    /// Create a symbol, rejecting blank or whitespace-containing input
    pub fn new(symbol: impl AsRef<str>) -> Result<Self> {
        let trimmed = symbol.as_ref().trim();
        if trimmed.is_empty() {
            return Err(Error::invalid_input("symbol must not be empty"));
        }
        if trimmed.chars().any(char::is_whitespace) {
            return Err(Error::invalid_input(format!(
                "symbol must not contain whitespace: '{}'",
                trimmed
            )));
        }
        Ok(Self(trimmed.to_string()))
    }

    /// Get the inner string value
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for Symbol {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::borrow::Borrow<str> for Symbol {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for Symbol {
    type Error = Error;

    fn try_from(s: String) -> Result<Self> {
        Self::new(s)
    }
}

impl TryFrom<&str> for Symbol {
    type Error = Error;

    fn try_from(s: &str) -> Result<Self> {
        Self::new(s)
    }
}

impl From<Symbol> for String {
    fn from(symbol: Symbol) -> Self {
        symbol.0
    }
}

impl std::str::FromStr for Symbol {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::new(s)
    }
}
