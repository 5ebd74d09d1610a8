//! Quote lookup trait and the in-memory quote store.

use crate::error::MarketDataError;
use crate::types::Quote;
use crate::Result;
use common::Symbol;
use parking_lot::RwLock;
use std::collections::HashMap;
use std::sync::Arc;
use tracing::debug;

/// Resolves a symbol to its latest quote.
pub trait QuoteLookup: Send + Sync {
    /// Get the latest quote for `symbol`, or `None` if there is none.
    fn quote(&self, symbol: &str) -> Option<Quote>;

    /// Shortcut for the last traded price.
    fn last_price(&self, symbol: &str) -> Option<f64> {
        self.quote(symbol).map(|q| q.last_price)
    }
}

impl<T: QuoteLookup + ?Sized> QuoteLookup for Arc<T> {
    fn quote(&self, symbol: &str) -> Option<Quote> {
        (**self).quote(symbol)
    }
}

impl<T: QuoteLookup + ?Sized> QuoteLookup for &T {
    fn quote(&self, symbol: &str) -> Option<Quote> {
        (**self).quote(symbol)
    }
}

/// In-memory quote store.
///
/// Clones share the same map, so a feed handler can keep updating prices
/// while evaluators read them.
#[derive(Debug)]
pub struct InMemoryQuoteStore {
    quotes: Arc<RwLock<HashMap<Symbol, Quote>>>,
}

impl InMemoryQuoteStore {
    pub fn new() -> Self {
        Self {
            quotes: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Build a store from config quote entries. Duplicate symbols are rejected.
    pub fn from_config(quotes: &[config::QuoteConfig]) -> Result<Self> {
        let store = Self::new();
        {
            let mut map = store.quotes.write();
            for entry in quotes {
                let quote = Quote::from_config(entry)?;
                if map.contains_key(&quote.symbol) {
                    return Err(MarketDataError::DuplicateQuote(quote.symbol.to_string()));
                }
                map.insert(quote.symbol.clone(), quote);
            }
        }
        debug!(count = store.len(), "Quote store loaded from config");
        Ok(store)
    }

    /// Insert or replace a quote, returning the previous one.
    pub fn update(&self, quote: Quote) -> Option<Quote> {
        self.quotes.write().insert(quote.symbol.clone(), quote)
    }

    /// Set the last price of a symbol.
    pub fn update_price(&self, symbol: Symbol, last_price: f64) -> Result<Option<Quote>> {
        let quote = Quote::new(symbol, last_price)?;
        Ok(self.update(quote))
    }

    pub fn remove(&self, symbol: &str) -> Option<Quote> {
        self.quotes.write().remove(symbol)
    }

    pub fn len(&self) -> usize {
        self.quotes.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.quotes.read().is_empty()
    }
}

impl Default for InMemoryQuoteStore {
    fn default() -> Self {
        Self::new()
    }
}

impl Clone for InMemoryQuoteStore {
    fn clone(&self) -> Self {
        Self {
            quotes: Arc::clone(&self.quotes),
        }
    }
}

impl QuoteLookup for InMemoryQuoteStore {
    fn quote(&self, symbol: &str) -> Option<Quote> {
        self.quotes.read().get(symbol).cloned()
    }
}
