//! Market snapshot: contract reference data and quotes behind one provider.

use crate::store::{InMemoryQuoteStore, QuoteLookup};
use crate::types::Quote;
use crate::Result;
use instrument::{ContractLookup, InMemoryContractStore, OptionContract};
use tracing::info;

/// Anything that can resolve both contracts and quotes.
pub trait MarketDataProvider: ContractLookup + QuoteLookup {}

impl<T: ContractLookup + QuoteLookup + ?Sized> MarketDataProvider for T {}

/// In-memory market data provider.
///
/// Clones share both stores.
#[derive(Debug, Clone, Default)]
pub struct MarketSnapshot {
    contracts: InMemoryContractStore,
    quotes: InMemoryQuoteStore,
}

impl MarketSnapshot {
    pub fn new(contracts: InMemoryContractStore, quotes: InMemoryQuoteStore) -> Self {
        Self { contracts, quotes }
    }

    /// Load contracts and quotes from the `market` section of a workbench config
    pub fn from_config(market: &config::MarketConfig) -> Result<Self> {
        let contracts = InMemoryContractStore::from_config(&market.contracts)?;
        let quotes = InMemoryQuoteStore::from_config(&market.quotes)?;

        info!(
            contracts = contracts.len(),
            quotes = quotes.len(),
            "Market snapshot loaded"
        );

        Ok(Self::new(contracts, quotes))
    }

    pub fn contracts(&self) -> &InMemoryContractStore {
        &self.contracts
    }

    pub fn quotes(&self) -> &InMemoryQuoteStore {
        &self.quotes
    }
}

impl ContractLookup for MarketSnapshot {
    fn contract(&self, symbol: &str) -> Option<OptionContract> {
        self.contracts.contract(symbol)
    }
}

impl QuoteLookup for MarketSnapshot {
    fn quote(&self, symbol: &str) -> Option<Quote> {
        self.quotes.quote(symbol)
    }
}
