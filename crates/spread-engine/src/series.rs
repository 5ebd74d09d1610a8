//! PnL series and their summary.

use common::{Quantity, Symbol};
use serde::{Deserialize, Serialize};

/// One `(underlying price, pnl)` point.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PnlPoint {
    pub price: f64,
    pub pnl: f64,
}

impl PnlPoint {
    pub fn new(price: f64, pnl: f64) -> Self {
        Self { price, pnl }
    }
}

/// Ordered PnL points, one per scenario price, in scenario order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PnlSeries {
    points: Vec<PnlPoint>,
}

impl PnlSeries {
    pub fn new(points: Vec<PnlPoint>) -> Self {
        Self { points }
    }

    pub fn points(&self) -> &[PnlPoint] {
        &self.points
    }

    pub fn iter(&self) -> std::slice::Iter<'_, PnlPoint> {
        self.points.iter()
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// x values, for plotting
    pub fn prices(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.price).collect()
    }

    /// y values, for plotting
    pub fn pnls(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.pnl).collect()
    }

    pub fn to_pairs(&self) -> Vec<(f64, f64)> {
        self.points.iter().map(|p| (p.price, p.pnl)).collect()
    }

    /// Highest and lowest points plus zero crossings.
    ///
    /// A crossing between two consecutive points of strictly opposite sign
    /// is located by linear interpolation; points that are exactly zero are
    /// reported at their own price.
    pub fn summary(&self) -> PnlSummary {
        let mut max_profit: Option<PnlPoint> = None;
        let mut max_loss: Option<PnlPoint> = None;

        for point in &self.points {
            if max_profit.map_or(true, |best| point.pnl > best.pnl) {
                max_profit = Some(*point);
            }
            if max_loss.map_or(true, |worst| point.pnl < worst.pnl) {
                max_loss = Some(*point);
            }
        }

        let mut breakevens = Vec::new();
        for (i, a) in self.points.iter().enumerate() {
            if a.pnl == 0.0 {
                breakevens.push(a.price);
            }
            if let Some(b) = self.points.get(i + 1) {
                let crosses = (a.pnl < 0.0 && b.pnl > 0.0) || (a.pnl > 0.0 && b.pnl < 0.0);
                if crosses {
                    let ratio = -a.pnl / (b.pnl - a.pnl);
                    breakevens.push(a.price + ratio * (b.price - a.price));
                }
            }
        }

        PnlSummary {
            max_profit,
            max_loss,
            breakevens,
        }
    }
}

impl FromIterator<PnlPoint> for PnlSeries {
    fn from_iter<I: IntoIterator<Item = PnlPoint>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a PnlSeries {
    type Item = &'a PnlPoint;
    type IntoIter = std::slice::Iter<'a, PnlPoint>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.iter()
    }
}

/// PnL curve of a single leg.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LegPnlSeries {
    pub symbol: Symbol,
    pub quantity: Quantity,
    pub series: PnlSeries,
}

/// Extremes and break-even prices of a series.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PnlSummary {
    /// Point with the highest PnL, first one on ties
    pub max_profit: Option<PnlPoint>,
    /// Point with the lowest PnL, first one on ties
    pub max_loss: Option<PnlPoint>,
    pub breakevens: Vec<f64>,
}
