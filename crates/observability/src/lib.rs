//! Observability infrastructure for the option spread workbench
//!
//! This crate provides structured logging via tracing. Logs always go to
//! stderr so command output on stdout stays machine-readable.
//!
//! # Quick Start
//!
//! ```ignore
//! use observability::{init_logging, LogFormat};
//!
//! init_logging("spreadx", LogFormat::Pretty)?;
//! ```

pub mod logging;

pub use logging::{init_logging, LogFormat};
