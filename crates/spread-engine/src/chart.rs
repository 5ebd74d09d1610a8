//! Chart payload handed to a display.

use crate::evaluator::SpreadPnlEvaluator;
use crate::position::SpreadPosition;
use crate::scenario::PriceScenario;
use crate::series::{LegPnlSeries, PnlSeries, PnlSummary};
use crate::Result;
use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::info;

pub const CHART_TITLE: &str = "Option spread portfolio";
pub const X_LABEL: &str = "Underlying price";
pub const Y_LABEL: &str = "Spread PnL";

/// Everything a display needs to draw one spread PnL curve.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SpreadChart {
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    /// Analysis name from the workbench config
    pub name: String,
    pub generated_at: DateTime<Utc>,
    pub series: PnlSeries,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub legs: Vec<LegPnlSeries>,
    pub summary: PnlSummary,
}

impl SpreadChart {
    pub fn new(name: impl Into<String>, series: PnlSeries) -> Self {
        let summary = series.summary();
        Self {
            title: CHART_TITLE.to_string(),
            x_label: X_LABEL.to_string(),
            y_label: Y_LABEL.to_string(),
            name: name.into(),
            generated_at: Utc::now(),
            series,
            legs: Vec::new(),
            summary,
        }
    }

    pub fn with_legs(mut self, legs: Vec<LegPnlSeries>) -> Self {
        self.legs = legs;
        self
    }

    /// Evaluate `position` over `scenario` and wrap the result.
    pub fn build(
        evaluator: &SpreadPnlEvaluator<'_>,
        position: &SpreadPosition,
        scenario: &PriceScenario,
        name: &str,
        include_legs: bool,
    ) -> Result<Self> {
        let series = evaluator.compute_spread_pnl_series(position, scenario)?;
        let mut chart = Self::new(name, series);
        if include_legs {
            chart.legs = evaluator.compute_leg_breakdown(position, scenario)?;
        }

        info!(
            name,
            points = chart.series.len(),
            legs = position.len(),
            breakevens = chart.summary.breakevens.len(),
            "Spread chart built"
        );
        Ok(chart)
    }
}
