//! Common types and utilities for the option spread workbench
//!
//! This crate provides shared types used across all workspace crates.
//!
//! # Modules
//!
//! - [`error`] - Common error types
//! - [`types`] - Shared domain types (Symbol, Quantity)

pub mod error;
pub mod types;

pub use error::{Error, Result};
pub use types::*;
