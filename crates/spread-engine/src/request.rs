//! Typed boundary for raw text input.
//!
//! Leg rows and range fields arrive as strings (form fields, command-line
//! arguments). Everything is parsed and checked here, so the evaluator only
//! ever sees a well-formed [`SpreadPosition`] and [`ScenarioRange`].

use crate::error::RequestError;
use crate::position::SpreadPosition;
use crate::scenario::{PriceScenario, ScenarioRange};
use common::{Quantity, Symbol};
use tracing::debug;

/// One leg row as typed by the user.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LegInput {
    pub symbol: String,
    pub quantity: String,
}

impl LegInput {
    pub fn new(symbol: impl Into<String>, quantity: impl Into<String>) -> Self {
        Self {
            symbol: symbol.into(),
            quantity: quantity.into(),
        }
    }

    /// Rows with a blank symbol are unused slots.
    pub fn is_blank(&self) -> bool {
        self.symbol.trim().is_empty()
    }
}

/// Price range fields as typed by the user.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RangeInput {
    pub start: String,
    pub stop: String,
    pub step: String,
}

impl RangeInput {
    pub fn new(
        start: impl Into<String>,
        stop: impl Into<String>,
        step: impl Into<String>,
    ) -> Self {
        Self {
            start: start.into(),
            stop: stop.into(),
            step: step.into(),
        }
    }

    /// Parse the three fields. A range that yields a negative price is
    /// rejected; an empty range is not.
    pub fn parse(&self) -> Result<ScenarioRange, RequestError> {
        let range = ScenarioRange::new(
            parse_range_field("start", &self.start)?,
            parse_range_field("stop", &self.stop)?,
            parse_range_field("step", &self.step)?,
        );
        match range.lowest() {
            Some(price) if price < 0 => Err(RequestError::NegativePrice { price }),
            _ => Ok(range),
        }
    }
}

fn parse_range_field(field: &'static str, value: &str) -> Result<i64, RequestError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(RequestError::MissingRangeField(field));
    }
    trimmed
        .parse()
        .map_err(|_| RequestError::InvalidRangeField {
            field,
            value: value.to_string(),
        })
}

fn parse_quantity(symbol: &Symbol, value: &str) -> Result<Quantity, RequestError> {
    value
        .trim()
        .parse()
        .map_err(|_| RequestError::InvalidQuantity {
            symbol: symbol.to_string(),
            value: value.to_string(),
        })
}

/// Parse leg rows into a position, skipping blank rows.
///
/// Row numbers in errors are 1-based and count blank rows too, so they match
/// what the user sees.
pub fn parse_legs(legs: &[LegInput], max_legs: usize) -> Result<SpreadPosition, RequestError> {
    let filled = legs.iter().filter(|leg| !leg.is_blank()).count();
    if filled > max_legs {
        return Err(RequestError::TooManyLegs {
            count: filled,
            max: max_legs,
        });
    }

    let mut position = SpreadPosition::new();
    for (row, leg) in legs.iter().enumerate() {
        if leg.is_blank() {
            continue;
        }
        let symbol = Symbol::new(&leg.symbol).map_err(|e| RequestError::InvalidSymbol {
            row: row + 1,
            message: e.to_string(),
        })?;
        let quantity = parse_quantity(&symbol, &leg.quantity)?;
        position.insert(symbol, quantity);
    }
    Ok(position)
}

/// Parse a `SYMBOL:QTY` command-line leg.
///
/// Splits on the last `:` so symbols containing colons still work.
pub fn parse_leg_arg(arg: &str) -> Result<LegInput, RequestError> {
    let (symbol, quantity) = arg
        .rsplit_once(':')
        .ok_or_else(|| RequestError::InvalidLegArgument(arg.to_string()))?;
    if symbol.trim().is_empty() || quantity.trim().is_empty() {
        return Err(RequestError::InvalidLegArgument(arg.to_string()));
    }
    Ok(LegInput::new(symbol.trim(), quantity.trim()))
}

/// A validated spread evaluation request.
#[derive(Debug, Clone, PartialEq)]
pub struct SpreadRequest {
    pub position: SpreadPosition,
    pub range: ScenarioRange,
}

impl SpreadRequest {
    pub fn new(position: SpreadPosition, range: ScenarioRange) -> Self {
        Self { position, range }
    }

    pub fn from_inputs(
        legs: &[LegInput],
        range: &RangeInput,
        max_legs: usize,
    ) -> Result<Self, RequestError> {
        let position = parse_legs(legs, max_legs)?;
        let range = range.parse()?;
        debug!(legs = position.len(), ?range, "Spread request parsed");
        Ok(Self::new(position, range))
    }

    pub fn scenario(&self) -> PriceScenario {
        self.range.into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    #[test]
    fn test_blank_rows_are_skipped() {
        let legs = vec![
            LegInput::new("IO2406-C-3800", "1"),
            LegInput::new("", ""),
            LegInput::new("IO2406-C-4000", " -1 "),
            LegInput::new("   ", "7"),
        ];
        let position = parse_legs(&legs, 4).unwrap();

        assert_eq!(position.len(), 2);
        assert_eq!(position.quantity("IO2406-C-4000"), Some(-1));
    }

    #[test]
    fn test_bad_quantity() {
        let legs = vec![LegInput::new("IO2406-C-3800", "1.5")];
        assert_matches!(
            parse_legs(&legs, 4),
            Err(RequestError::InvalidQuantity { ref value, .. }) if value == "1.5"
        );

        let legs = vec![LegInput::new("IO2406-C-3800", "")];
        assert_matches!(parse_legs(&legs, 4), Err(RequestError::InvalidQuantity { .. }));
    }

    #[test]
    fn test_bad_symbol_reports_row() {
        let legs = vec![LegInput::new("", ""), LegInput::new("IO 2406", "1")];
        assert_matches!(
            parse_legs(&legs, 4),
            Err(RequestError::InvalidSymbol { row: 2, .. })
        );
    }

    #[test]
    fn test_too_many_legs() {
        let legs: Vec<LegInput> = (0..5).map(|i| LegInput::new(format!("S{i}"), "1")).collect();
        assert_eq!(
            parse_legs(&legs, 4),
            Err(RequestError::TooManyLegs { count: 5, max: 4 })
        );
    }

    #[test]
    fn test_duplicate_symbol_last_wins() {
        let legs = vec![LegInput::new("A", "1"), LegInput::new("A", "-2")];
        let position = parse_legs(&legs, 4).unwrap();
        assert_eq!(position.len(), 1);
        assert_eq!(position.quantity("A"), Some(-2));
    }

    #[test]
    fn test_range_parse() {
        let range = RangeInput::new(" 3500", "4300 ", "50").parse().unwrap();
        assert_eq!(range, ScenarioRange::new(3500, 4300, 50));

        assert_eq!(
            RangeInput::new("", "4300", "50").parse(),
            Err(RequestError::MissingRangeField("start"))
        );
        assert_matches!(
            RangeInput::new("3500", "4300", "fifty").parse(),
            Err(RequestError::InvalidRangeField { field: "step", .. })
        );
    }

    #[test]
    fn test_negative_prices_rejected() {
        assert_eq!(
            RangeInput::new("-200", "0", "100").parse(),
            Err(RequestError::NegativePrice { price: -200 })
        );
        assert_eq!(
            RangeInput::new("20", "-6", "-5").parse(),
            Err(RequestError::NegativePrice { price: -5 })
        );
        // walks down to exactly zero
        assert_eq!(
            RangeInput::new("20", "-1", "-5").parse(),
            Ok(ScenarioRange::new(20, -1, -5))
        );
        // negative bounds that yield nothing stay an empty scenario
        assert!(RangeInput::new("-10", "-20", "5").parse().unwrap().is_empty());
    }

    #[test]
    fn test_reversed_range_is_accepted() {
        let request = SpreadRequest::from_inputs(
            &[LegInput::new("A", "1")],
            &RangeInput::new("20", "10", "5"),
            4,
        )
        .unwrap();
        assert!(request.scenario().is_empty());
    }

    #[test]
    fn test_leg_arg() {
        assert_eq!(
            parse_leg_arg("IO2406-C-3800:-2").unwrap(),
            LegInput::new("IO2406-C-3800", "-2")
        );
        assert_eq!(parse_leg_arg("X:Y:3").unwrap(), LegInput::new("X:Y", "3"));
        assert_matches!(parse_leg_arg("IO2406"), Err(RequestError::InvalidLegArgument(_)));
        assert_matches!(parse_leg_arg(":1"), Err(RequestError::InvalidLegArgument(_)));
    }
}
