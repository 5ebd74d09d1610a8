//! Underlying price scenarios.
//!
//! A range behaves like a half-open integer range with a signed step:
//! positive steps walk up while below `stop`, negative steps walk down while
//! above `stop`. A zero step, or a step pointing away from `stop`, yields no
//! prices. That is accepted input, not an error.

use serde::{Deserialize, Serialize};

/// `start`, `stop`, `step` triple describing a price sweep.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScenarioRange {
    pub start: i64,
    pub stop: i64,
    pub step: i64,
}

impl ScenarioRange {
    pub fn new(start: i64, stop: i64, step: i64) -> Self {
        Self { start, stop, step }
    }

    /// Iterate the prices of the range.
    pub fn iter(&self) -> RangeIter {
        RangeIter {
            next: Some(self.start),
            stop: self.stop,
            step: self.step,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Number of prices the range yields.
    pub fn len(&self) -> u64 {
        let Self { start, stop, step } = *self;
        let (span, stride) = match step {
            s if s > 0 && start < stop => (stop.abs_diff(start), s.unsigned_abs()),
            s if s < 0 && start > stop => (start.abs_diff(stop), s.unsigned_abs()),
            _ => return 0,
        };
        span.div_ceil(stride)
    }

    /// Lowest price the range yields, `None` if it yields none.
    pub fn lowest(&self) -> Option<i64> {
        let len = self.len();
        if len == 0 {
            return None;
        }
        if self.step > 0 {
            return Some(self.start);
        }
        let last = i128::from(self.start) + i128::from(self.step) * i128::from(len - 1);
        i64::try_from(last).ok()
    }
}

impl From<config::ScenarioConfig> for ScenarioRange {
    fn from(scenario: config::ScenarioConfig) -> Self {
        Self::new(scenario.start, scenario.stop, scenario.step)
    }
}

impl IntoIterator for ScenarioRange {
    type Item = i64;
    type IntoIter = RangeIter;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Iterator over a [`ScenarioRange`].
#[derive(Debug, Clone)]
pub struct RangeIter {
    next: Option<i64>,
    stop: i64,
    step: i64,
}

impl Iterator for RangeIter {
    type Item = i64;

    fn next(&mut self) -> Option<i64> {
        let current = self.next?;
        let in_range = match self.step {
            s if s > 0 => current < self.stop,
            s if s < 0 => current > self.stop,
            _ => false,
        };
        if !in_range {
            self.next = None;
            return None;
        }
        self.next = current.checked_add(self.step);
        Some(current)
    }
}

/// Ordered underlying prices to evaluate a spread at.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PriceScenario {
    prices: Vec<f64>,
}

impl PriceScenario {
    /// Prices of `start..stop` walked by `step`.
    pub fn from_range(start: i64, stop: i64, step: i64) -> Self {
        ScenarioRange::new(start, stop, step).into()
    }

    /// Use the given prices as-is, in the given order.
    pub fn from_prices(prices: Vec<f64>) -> Self {
        Self { prices }
    }

    pub fn prices(&self) -> &[f64] {
        &self.prices
    }

    pub fn iter(&self) -> std::slice::Iter<'_, f64> {
        self.prices.iter()
    }

    pub fn len(&self) -> usize {
        self.prices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.prices.is_empty()
    }
}

impl From<ScenarioRange> for PriceScenario {
    fn from(range: ScenarioRange) -> Self {
        Self {
            prices: range.iter().map(|p| p as f64).collect(),
        }
    }
}

impl From<Vec<f64>> for PriceScenario {
    fn from(prices: Vec<f64>) -> Self {
        Self::from_prices(prices)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn prices(start: i64, stop: i64, step: i64) -> Vec<f64> {
        PriceScenario::from_range(start, stop, step).prices().to_vec()
    }

    #[test]
    fn test_ascending_range_is_half_open() {
        assert_eq!(prices(10, 20, 5), vec![10.0, 15.0]);
        assert_eq!(prices(10, 21, 5), vec![10.0, 15.0, 20.0]);
    }

    #[test]
    fn test_empty_ranges() {
        assert!(prices(10, 10, 1).is_empty());
        assert!(prices(20, 10, 5).is_empty());
        assert!(prices(10, 20, -5).is_empty());
        assert!(prices(10, 20, 0).is_empty());
        assert!(ScenarioRange::new(10, 10, 1).is_empty());
    }

    #[test]
    fn test_descending_range() {
        assert_eq!(prices(20, 10, -5), vec![20.0, 15.0]);
    }

    #[test]
    fn test_len_and_lowest_match_generated_prices() {
        let cases = [(10, 20, 5), (10, 21, 5), (20, 10, -5), (20, -1, -5), (7, 7, 1)];
        for (start, stop, step) in cases {
            let range = ScenarioRange::new(start, stop, step);
            let generated: Vec<i64> = range.iter().collect();
            assert_eq!(range.len(), generated.len() as u64);
            assert_eq!(range.lowest(), generated.iter().copied().min());
        }
    }

    #[test]
    fn test_range_near_i64_max_terminates() {
        let range = ScenarioRange::new(i64::MAX - 1, i64::MAX, 5);
        assert_eq!(range.iter().collect::<Vec<_>>(), vec![i64::MAX - 1]);
    }

    #[test]
    fn test_explicit_prices_keep_order() {
        let scenario = PriceScenario::from_prices(vec![110.0, 90.0, 100.0]);
        assert_eq!(scenario.prices(), &[110.0, 90.0, 100.0]);
        assert_eq!(scenario.len(), 3);
    }

    #[test]
    fn test_from_config() {
        let range: ScenarioRange = config::ScenarioConfig {
            start: 3500,
            stop: 3600,
            step: 50,
        }
        .into();
        assert_eq!(range.iter().collect::<Vec<_>>(), vec![3500, 3550]);
    }
}
