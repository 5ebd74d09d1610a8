//! # Instrument Crate
//!
//! Contract reference data for the option spread workbench.
//!
//! ## Key Components
//!
//! - **Domain Types**: `OptionContract`, `OptionType`
//! - **Traits**: `ContractLookup` resolves a symbol to its contract
//! - **In-Memory Store**: `InMemoryContractStore`, loaded from config or filled by hand
//!
//! ## Architecture
//!
//! The spread engine only ever sees the `ContractLookup` trait. Where the
//! reference data comes from (a config file, a trading gateway, a test double)
//! is decided by whoever constructs the evaluator.
//!
//! ```text
//! ┌──────────────────────┐      ┌─────────────────────────┐
//! │    spread-engine     │ ───▶ │  dyn ContractLookup     │
//! └──────────────────────┘      └─────────────────────────┘
//!                                          ▲
//!                               ┌──────────┴──────────────┐
//!                               │  InMemoryContractStore  │
//!                               └─────────────────────────┘
//! ```

pub mod error;
pub mod store;
pub mod types;

// Re-export main types for convenience
pub use error::{InstrumentError, InstrumentResult};
pub use store::{ContractLookup, InMemoryContractStore};
pub use types::{OptionContract, OptionType};
