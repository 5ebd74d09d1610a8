//! Option Spread PnL Engine
//!
//! Computes the profit/loss of a multi-leg option spread across a sweep of
//! underlying prices.
//!
//! # Core Components
//!
//! - [`evaluator`] - `SpreadPnlEvaluator`: leg, spread and series PnL
//! - [`position`] - `LegPosition` and `SpreadPosition`
//! - [`scenario`] - `ScenarioRange` and `PriceScenario`
//! - [`series`] - `PnlSeries`, per-leg curves and the summary
//! - [`request`] - typed boundary for text-field input
//! - [`chart`] - `SpreadChart`, the payload handed to a display
//! - [`sink`] - `ChartSink` with table and JSON implementations
//!
//! # Leg PnL
//!
//! ```text
//! call:       (max(P - K, 0) - last) * size * qty
//! put:        (max(K - P, 0) - last) * size * qty
//! underlying: (P - last)             * size * qty
//! ```
//!
//! `last` is the current traded price of the leg, not an entry cost.
//!
//! # Quick Start
//!
//! ```ignore
//! use spread_engine::{PriceScenario, SpreadPnlEvaluator, SpreadPosition};
//!
//! let evaluator = SpreadPnlEvaluator::from_provider(&snapshot);
//! let series = evaluator.compute_spread_pnl_series(
//!     &position,
//!     &PriceScenario::from_range(3500, 4300, 50),
//! )?;
//! ```

pub mod chart;
pub mod error;
pub mod evaluator;
pub mod position;
pub mod request;
pub mod scenario;
pub mod series;
pub mod sink;

pub use chart::SpreadChart;
pub use error::{RequestError, SpreadError};
pub use evaluator::{leg_pnl, ResolvedLeg, SpreadPnlEvaluator};
pub use position::{LegPosition, SpreadPosition};
pub use request::{parse_leg_arg, parse_legs, LegInput, RangeInput, SpreadRequest};
pub use scenario::{PriceScenario, ScenarioRange};
pub use series::{LegPnlSeries, PnlPoint, PnlSeries, PnlSummary};
pub use sink::{ChartSink, JsonSink, TableSink};

/// Result type for spread evaluation
pub type Result<T> = std::result::Result<T, SpreadError>;
