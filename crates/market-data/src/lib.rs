//! Market Data for the option spread workbench
//!
//! This crate provides last-traded quotes and a combined market snapshot.
//!
//! # Core Components
//!
//! - [`types`] - `Quote`
//! - [`store`] - `QuoteLookup` trait and `InMemoryQuoteStore`
//! - [`snapshot`] - `MarketSnapshot`, contracts and quotes behind one provider
//!
//! # Key Invariants
//!
//! - Market data is read-only from the evaluator's point of view
//! - Quotes may be replaced between evaluations; no staleness guarantee is made
//! - A symbol is only usable in a spread when both a contract and a quote resolve

pub mod error;
pub mod snapshot;
pub mod store;
pub mod types;

pub use error::MarketDataError;
pub use snapshot::{MarketDataProvider, MarketSnapshot};
pub use store::{InMemoryQuoteStore, QuoteLookup};
pub use types::Quote;

pub type Result<T> = std::result::Result<T, MarketDataError>;
