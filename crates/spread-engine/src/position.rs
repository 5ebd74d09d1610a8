//! Leg and spread positions.

use crate::error::RequestError;
use common::{Quantity, Symbol};
use serde::{Deserialize, Serialize};

/// One leg of a spread: a symbol and a signed quantity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LegPosition {
    pub symbol: Symbol,
    /// Positive = long, negative = short
    pub quantity: Quantity,
}

impl LegPosition {
    pub fn new(symbol: Symbol, quantity: Quantity) -> Self {
        Self { symbol, quantity }
    }

    pub fn is_long(&self) -> bool {
        self.quantity > 0
    }

    pub fn is_short(&self) -> bool {
        self.quantity < 0
    }
}

/// Symbol to quantity mapping, in insertion order.
///
/// Symbols are unique. Inserting a symbol that is already present replaces
/// its quantity in place, so a later entry wins without reordering the legs.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpreadPosition {
    legs: Vec<LegPosition>,
}

impl SpreadPosition {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the quantity for `symbol`, returning the quantity it replaced.
    pub fn insert(&mut self, symbol: Symbol, quantity: Quantity) -> Option<Quantity> {
        match self.legs.iter_mut().find(|leg| leg.symbol == symbol) {
            Some(leg) => Some(std::mem::replace(&mut leg.quantity, quantity)),
            None => {
                self.legs.push(LegPosition::new(symbol, quantity));
                None
            }
        }
    }

    /// Builder form of [`insert`](Self::insert).
    pub fn with_leg(mut self, symbol: Symbol, quantity: Quantity) -> Self {
        self.insert(symbol, quantity);
        self
    }

    pub fn remove(&mut self, symbol: &str) -> Option<Quantity> {
        let index = self.legs.iter().position(|leg| leg.symbol.as_str() == symbol)?;
        Some(self.legs.remove(index).quantity)
    }

    pub fn quantity(&self, symbol: &str) -> Option<Quantity> {
        self.legs
            .iter()
            .find(|leg| leg.symbol.as_str() == symbol)
            .map(|leg| leg.quantity)
    }

    pub fn legs(&self) -> &[LegPosition] {
        &self.legs
    }

    pub fn iter(&self) -> std::slice::Iter<'_, LegPosition> {
        self.legs.iter()
    }

    pub fn len(&self) -> usize {
        self.legs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.legs.is_empty()
    }

    /// Build from the `spread.legs` section of a workbench config.
    pub fn from_config(legs: &[config::LegConfig]) -> Result<Self, RequestError> {
        let mut position = Self::new();
        for (row, leg) in legs.iter().enumerate() {
            let symbol = Symbol::new(&leg.symbol).map_err(|e| RequestError::InvalidSymbol {
                row: row + 1,
                message: e.to_string(),
            })?;
            position.insert(symbol, leg.quantity);
        }
        Ok(position)
    }
}

impl FromIterator<LegPosition> for SpreadPosition {
    fn from_iter<I: IntoIterator<Item = LegPosition>>(iter: I) -> Self {
        let mut position = Self::new();
        for leg in iter {
            position.insert(leg.symbol, leg.quantity);
        }
        position
    }
}

impl<'a> IntoIterator for &'a SpreadPosition {
    type Item = &'a LegPosition;
    type IntoIter = std::slice::Iter<'a, LegPosition>;

    fn into_iter(self) -> Self::IntoIter {
        self.legs.iter()
    }
}
