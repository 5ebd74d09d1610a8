//! Contract lookup trait and the in-memory store.
//!
//! `ContractLookup` is the only capability the spread engine needs from the
//! reference-data side. Adapters (a trading gateway, a database, a test double)
//! implement it externally.

use crate::error::{InstrumentError, InstrumentResult};
use crate::types::OptionContract;
use common::Symbol;
use parking_lot::RwLock;
use std::collections::HashMap;
use std::sync::Arc;
use tracing::debug;

/// Resolves a symbol to its contract reference data.
///
/// # Example
///
/// ```ignore
/// use instrument::ContractLookup;
///
/// fn strike_of(lookup: &dyn ContractLookup) -> Option<f64> {
///     lookup.contract("IO2406-C-3800").map(|c| c.strike)
/// }
/// ```
pub trait ContractLookup: Send + Sync {
    /// Get the contract for `symbol`, or `None` if it is unknown.
    fn contract(&self, symbol: &str) -> Option<OptionContract>;

    /// Check if a symbol is known.
    fn contains(&self, symbol: &str) -> bool {
        self.contract(symbol).is_some()
    }
}

impl<T: ContractLookup + ?Sized> ContractLookup for Arc<T> {
    fn contract(&self, symbol: &str) -> Option<OptionContract> {
        (**self).contract(symbol)
    }
}

impl<T: ContractLookup + ?Sized> ContractLookup for &T {
    fn contract(&self, symbol: &str) -> Option<OptionContract> {
        (**self).contract(symbol)
    }
}

/// In-memory implementation of ContractLookup.
///
/// Clones share the same underlying map.
#[derive(Debug)]
pub struct InMemoryContractStore {
    contracts: Arc<RwLock<HashMap<Symbol, OptionContract>>>,
}

impl InMemoryContractStore {
    /// Create a new in-memory store.
    pub fn new() -> Self {
        Self {
            contracts: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Build a store from config contract entries.
    ///
    /// Fails on the first invalid or duplicate entry.
    pub fn from_config(contracts: &[config::ContractConfig]) -> InstrumentResult<Self> {
        let store = Self::new();
        for entry in contracts {
            store.insert(OptionContract::from_config(entry)?)?;
        }
        debug!(count = store.len(), "Contract store loaded from config");
        Ok(store)
    }

    /// Insert a new contract. Fails if the symbol already exists.
    pub fn insert(&self, contract: OptionContract) -> InstrumentResult<()> {
        let mut contracts = self.contracts.write();
        if contracts.contains_key(&contract.symbol) {
            return Err(InstrumentError::AlreadyExists(contract.symbol.to_string()));
        }
        contracts.insert(contract.symbol.clone(), contract);
        Ok(())
    }

    /// Insert or replace a contract, returning the previous one.
    pub fn upsert(&self, contract: OptionContract) -> Option<OptionContract> {
        self.contracts
            .write()
            .insert(contract.symbol.clone(), contract)
    }

    /// Remove a contract by symbol.
    pub fn remove(&self, symbol: &str) -> Option<OptionContract> {
        self.contracts.write().remove(symbol)
    }

    /// All known symbols, sorted.
    pub fn symbols(&self) -> Vec<Symbol> {
        let mut symbols: Vec<Symbol> = self.contracts.read().keys().cloned().collect();
        symbols.sort();
        symbols
    }

    /// Get the number of contracts in the store.
    pub fn len(&self) -> usize {
        self.contracts.read().len()
    }

    /// Check if the store is empty.
    pub fn is_empty(&self) -> bool {
        self.contracts.read().is_empty()
    }
}

impl Default for InMemoryContractStore {
    fn default() -> Self {
        Self::new()
    }
}

impl Clone for InMemoryContractStore {
    fn clone(&self) -> Self {
        Self {
            contracts: Arc::clone(&self.contracts),
        }
    }
}

impl ContractLookup for InMemoryContractStore {
    fn contract(&self, symbol: &str) -> Option<OptionContract> {
        self.contracts.read().get(symbol).cloned()
    }
}
