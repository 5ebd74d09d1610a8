//! Spread PnL evaluator.
//!
//! The evaluator is stateless: it borrows a contract lookup and a quote
//! lookup and reads them at call time. Series evaluation resolves every leg
//! once up front, so all prices of one sweep see the same quote snapshot.

use crate::error::SpreadError;
use crate::position::SpreadPosition;
use crate::scenario::PriceScenario;
use crate::series::{LegPnlSeries, PnlPoint, PnlSeries};
use crate::Result;
use common::Quantity;
use instrument::{ContractLookup, OptionContract, OptionType};
use market_data::{MarketDataProvider, QuoteLookup};
use tracing::debug;

/// PnL of `quantity` contracts at `underlying_price`, marked against
/// `last_price`.
pub fn leg_pnl(
    contract: &OptionContract,
    last_price: f64,
    quantity: Quantity,
    underlying_price: f64,
) -> f64 {
    let pnl_per_unit = match contract.option_type {
        OptionType::Call => (underlying_price - contract.strike).max(0.0) - last_price,
        OptionType::Put => (contract.strike - underlying_price).max(0.0) - last_price,
        OptionType::Underlying => underlying_price - last_price,
    };
    pnl_per_unit * contract.size * quantity as f64
}

/// A leg with its contract and quote already looked up.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedLeg {
    pub contract: OptionContract,
    pub last_price: f64,
    pub quantity: Quantity,
}

impl ResolvedLeg {
    pub fn pnl_at(&self, underlying_price: f64) -> f64 {
        leg_pnl(&self.contract, self.last_price, self.quantity, underlying_price)
    }
}

/// Computes leg, spread and series PnL from injected market data.
#[derive(Clone, Copy)]
pub struct SpreadPnlEvaluator<'a> {
    contracts: &'a dyn ContractLookup,
    quotes: &'a dyn QuoteLookup,
}

impl<'a> SpreadPnlEvaluator<'a> {
    pub fn new(contracts: &'a dyn ContractLookup, quotes: &'a dyn QuoteLookup) -> Self {
        Self { contracts, quotes }
    }

    /// Use one provider for both contracts and quotes.
    pub fn from_provider<P: MarketDataProvider>(provider: &'a P) -> Self {
        Self::new(provider, provider)
    }

    /// Look up contract and quote for a leg.
    ///
    /// Fails with [`SpreadError::UnknownSymbol`] if either is missing.
    pub fn resolve_leg(&self, symbol: &str, quantity: Quantity) -> Result<ResolvedLeg> {
        let contract = self
            .contracts
            .contract(symbol)
            .ok_or_else(|| SpreadError::UnknownSymbol(symbol.to_string()))?;
        let quote = self
            .quotes
            .quote(symbol)
            .ok_or_else(|| SpreadError::UnknownSymbol(symbol.to_string()))?;

        debug!(
            symbol,
            option_type = %contract.option_type,
            strike = contract.strike,
            size = contract.size,
            last_price = quote.last_price,
            quantity,
            "Leg resolved"
        );

        Ok(ResolvedLeg {
            contract,
            last_price: quote.last_price,
            quantity,
        })
    }

    /// Resolve every leg of a position, in position order.
    pub fn resolve_legs(&self, position: &SpreadPosition) -> Result<Vec<ResolvedLeg>> {
        position
            .iter()
            .map(|leg| self.resolve_leg(leg.symbol.as_str(), leg.quantity))
            .collect()
    }

    pub fn compute_leg_pnl(
        &self,
        symbol: &str,
        quantity: Quantity,
        underlying_price: f64,
    ) -> Result<f64> {
        Ok(self.resolve_leg(symbol, quantity)?.pnl_at(underlying_price))
    }

    /// Sum of leg PnLs at one price. An empty position is worth zero.
    pub fn compute_spread_pnl(
        &self,
        position: &SpreadPosition,
        underlying_price: f64,
    ) -> Result<f64> {
        let mut spread_pnl = 0.0;
        for leg in position {
            spread_pnl +=
                self.compute_leg_pnl(leg.symbol.as_str(), leg.quantity, underlying_price)?;
        }
        Ok(spread_pnl)
    }

    /// Spread PnL at every scenario price, in scenario order.
    ///
    /// An empty scenario gives an empty series without touching market data.
    #[tracing::instrument(skip_all, fields(legs = position.len(), prices = scenario.len()))]
    pub fn compute_spread_pnl_series(
        &self,
        position: &SpreadPosition,
        scenario: &PriceScenario,
    ) -> Result<PnlSeries> {
        if scenario.is_empty() {
            return Ok(PnlSeries::default());
        }

        let legs = self.resolve_legs(position)?;
        let series: PnlSeries = scenario
            .iter()
            .map(|&price| {
                let mut pnl = 0.0;
                for leg in &legs {
                    pnl += leg.pnl_at(price);
                }
                PnlPoint::new(price, pnl)
            })
            .collect();

        debug!(points = series.len(), "Spread PnL series computed");
        Ok(series)
    }

    /// One PnL curve per leg, in position order.
    pub fn compute_leg_breakdown(
        &self,
        position: &SpreadPosition,
        scenario: &PriceScenario,
    ) -> Result<Vec<LegPnlSeries>> {
        if scenario.is_empty() {
            return Ok(position
                .iter()
                .map(|leg| LegPnlSeries {
                    symbol: leg.symbol.clone(),
                    quantity: leg.quantity,
                    series: PnlSeries::default(),
                })
                .collect());
        }

        let legs = self.resolve_legs(position)?;
        Ok(legs
            .into_iter()
            .map(|leg| LegPnlSeries {
                series: scenario
                    .iter()
                    .map(|&price| PnlPoint::new(price, leg.pnl_at(price)))
                    .collect(),
                symbol: leg.contract.symbol,
                quantity: leg.quantity,
            })
            .collect())
    }
}

impl std::fmt::Debug for SpreadPnlEvaluator<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SpreadPnlEvaluator").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;
    use common::Symbol;
    use instrument::InMemoryContractStore;
    use market_data::{InMemoryQuoteStore, MarketSnapshot, Quote};
    use mockall::mock;

    mock! {
        Contracts {}
        impl ContractLookup for Contracts {
            fn contract(&self, symbol: &str) -> Option<OptionContract>;
        }
    }

    mock! {
        Quotes {}
        impl QuoteLookup for Quotes {
            fn quote(&self, symbol: &str) -> Option<Quote>;
        }
    }

    fn sym(s: &str) -> Symbol {
        Symbol::new(s).unwrap()
    }

    fn snapshot(entries: &[(&str, OptionType, f64, f64, f64)]) -> MarketSnapshot {
        let contracts = InMemoryContractStore::new();
        let quotes = InMemoryQuoteStore::new();
        for &(symbol, option_type, strike, size, last) in entries {
            contracts
                .insert(OptionContract::new(sym(symbol), option_type, strike, size).unwrap())
                .unwrap();
            quotes.update_price(sym(symbol), last).unwrap();
        }
        MarketSnapshot::new(contracts, quotes)
    }

    #[test]
    fn test_call_leg() {
        let market = snapshot(&[("C100", OptionType::Call, 100.0, 10.0, 2.0)]);
        let evaluator = SpreadPnlEvaluator::from_provider(&market);

        // (max(P - K, 0) - last) * size * qty
        assert_eq!(evaluator.compute_leg_pnl("C100", 1, 90.0).unwrap(), -20.0);
        assert_eq!(evaluator.compute_leg_pnl("C100", 1, 115.0).unwrap(), 130.0);
        assert_eq!(evaluator.compute_leg_pnl("C100", -3, 115.0).unwrap(), -390.0);
    }

    #[test]
    fn test_put_leg() {
        let market = snapshot(&[("P100", OptionType::Put, 100.0, 10.0, 1.5)]);
        let evaluator = SpreadPnlEvaluator::from_provider(&market);

        assert_eq!(evaluator.compute_leg_pnl("P100", 2, 90.0).unwrap(), 170.0);
        assert_eq!(evaluator.compute_leg_pnl("P100", 2, 120.0).unwrap(), -30.0);
    }

    #[test]
    fn test_underlying_leg() {
        let market = snapshot(&[("FUT", OptionType::Underlying, 0.0, 300.0, 3850.0)]);
        let evaluator = SpreadPnlEvaluator::from_provider(&market);

        assert_eq!(evaluator.compute_leg_pnl("FUT", 1, 3860.0).unwrap(), 3000.0);
        assert_eq!(evaluator.compute_leg_pnl("FUT", -2, 3860.0).unwrap(), -6000.0);
    }

    #[test]
    fn test_zero_quantity_leg_contributes_zero() {
        let market = snapshot(&[("C100", OptionType::Call, 100.0, 1.0, 2.0)]);
        let evaluator = SpreadPnlEvaluator::from_provider(&market);
        assert_eq!(evaluator.compute_leg_pnl("C100", 0, 150.0).unwrap(), 0.0);
    }

    #[test]
    fn test_single_call_series() {
        let market = snapshot(&[("C100", OptionType::Call, 100.0, 1.0, 2.0)]);
        let evaluator = SpreadPnlEvaluator::from_provider(&market);
        let position = SpreadPosition::new().with_leg(sym("C100"), 1);

        let series = evaluator
            .compute_spread_pnl_series(
                &position,
                &PriceScenario::from_prices(vec![90.0, 100.0, 110.0]),
            )
            .unwrap();

        assert_eq!(series.prices(), vec![90.0, 100.0, 110.0]);
        assert_eq!(series.pnls(), vec![-2.0, -2.0, 8.0]);
    }

    #[test]
    fn test_bull_call_spread_at_105() {
        let market = snapshot(&[
            ("C100", OptionType::Call, 100.0, 1.0, 3.0),
            ("C110", OptionType::Call, 110.0, 1.0, 1.0),
        ]);
        let evaluator = SpreadPnlEvaluator::from_provider(&market);
        let position = SpreadPosition::new()
            .with_leg(sym("C100"), 1)
            .with_leg(sym("C110"), -1);

        assert_eq!(evaluator.compute_leg_pnl("C100", 1, 105.0).unwrap(), 2.0);
        assert_eq!(evaluator.compute_leg_pnl("C110", -1, 105.0).unwrap(), 1.0);
        assert_eq!(evaluator.compute_spread_pnl(&position, 105.0).unwrap(), 3.0);
    }

    #[test]
    fn test_spread_is_additive() {
        let market = snapshot(&[
            ("C100", OptionType::Call, 100.0, 10.0, 3.25),
            ("P95", OptionType::Put, 95.0, 10.0, 1.75),
        ]);
        let evaluator = SpreadPnlEvaluator::from_provider(&market);
        let position = SpreadPosition::new()
            .with_leg(sym("C100"), 2)
            .with_leg(sym("P95"), -1);

        for price in [80.0, 95.0, 100.0, 104.5, 130.0] {
            let a = evaluator.compute_leg_pnl("C100", 2, price).unwrap();
            let b = evaluator.compute_leg_pnl("P95", -1, price).unwrap();
            assert_eq!(evaluator.compute_spread_pnl(&position, price).unwrap(), a + b);
        }
    }

    #[test]
    fn test_empty_position_is_zero() {
        let market = snapshot(&[]);
        let evaluator = SpreadPnlEvaluator::from_provider(&market);
        let position = SpreadPosition::new();

        assert_eq!(evaluator.compute_spread_pnl(&position, 0.0).unwrap(), 0.0);
        assert_eq!(evaluator.compute_spread_pnl(&position, 4000.0).unwrap(), 0.0);

        let series = evaluator
            .compute_spread_pnl_series(&position, &PriceScenario::from_range(0, 50, 10))
            .unwrap();
        assert_eq!(series.pnls(), vec![0.0; 5]);
    }

    #[test]
    fn test_series_preserves_length_and_order() {
        let market = snapshot(&[("P100", OptionType::Put, 100.0, 1.0, 4.0)]);
        let evaluator = SpreadPnlEvaluator::from_provider(&market);
        let position = SpreadPosition::new().with_leg(sym("P100"), 1);
        let scenario = PriceScenario::from_prices(vec![120.0, 80.0, 100.0, 80.0]);

        let series = evaluator.compute_spread_pnl_series(&position, &scenario).unwrap();
        assert_eq!(series.len(), scenario.len());
        assert_eq!(series.prices(), scenario.prices().to_vec());
        assert_eq!(series.pnls(), vec![-4.0, 16.0, -4.0, 16.0]);
    }

    #[test]
    fn test_empty_scenario_gives_empty_series() {
        let market = snapshot(&[]);
        let evaluator = SpreadPnlEvaluator::from_provider(&market);
        let position = SpreadPosition::new().with_leg(sym("MISSING"), 1);

        let series = evaluator
            .compute_spread_pnl_series(&position, &PriceScenario::from_range(20, 10, 5))
            .unwrap();
        assert!(series.is_empty());
    }

    #[test]
    fn test_unknown_symbol() {
        let market = snapshot(&[("C100", OptionType::Call, 100.0, 1.0, 2.0)]);
        let evaluator = SpreadPnlEvaluator::from_provider(&market);

        assert_matches!(
            evaluator.compute_leg_pnl("NOPE", 1, 100.0),
            Err(SpreadError::UnknownSymbol(ref s)) if s == "NOPE"
        );

        let position = SpreadPosition::new()
            .with_leg(sym("C100"), 1)
            .with_leg(sym("NOPE"), 1);
        assert_matches!(
            evaluator.compute_spread_pnl(&position, 100.0),
            Err(SpreadError::UnknownSymbol(_))
        );
        assert_matches!(
            evaluator.compute_spread_pnl_series(&position, &PriceScenario::from_range(90, 110, 10)),
            Err(SpreadError::UnknownSymbol(_))
        );
    }

    #[test]
    fn test_contract_without_quote_is_unknown() {
        let contracts = InMemoryContractStore::new();
        contracts
            .insert(OptionContract::call(sym("C100"), 100.0, 1.0).unwrap())
            .unwrap();
        let quotes = InMemoryQuoteStore::new();
        let evaluator = SpreadPnlEvaluator::new(&contracts, &quotes);

        assert_matches!(
            evaluator.compute_leg_pnl("C100", 1, 100.0),
            Err(SpreadError::UnknownSymbol(_))
        );
    }

    #[test]
    fn test_series_resolves_each_leg_once() {
        let mut contracts = MockContracts::new();
        contracts
            .expect_contract()
            .times(1)
            .returning(|_| Some(OptionContract::call(sym("C100"), 100.0, 1.0).unwrap()));

        let mut quotes = MockQuotes::new();
        quotes
            .expect_quote()
            .times(1)
            .returning(|_| Some(Quote::new(sym("C100"), 2.0).unwrap()));

        let evaluator = SpreadPnlEvaluator::new(&contracts, &quotes);
        let position = SpreadPosition::new().with_leg(sym("C100"), 1);
        let series = evaluator
            .compute_spread_pnl_series(&position, &PriceScenario::from_range(90, 120, 10))
            .unwrap();

        assert_eq!(series.pnls(), vec![-2.0, -2.0, 8.0]);
    }

    #[test]
    fn test_missing_quote_skips_nothing_else() {
        let mut contracts = MockContracts::new();
        contracts
            .expect_contract()
            .returning(|s| Some(OptionContract::call(sym(s), 100.0, 1.0).unwrap()));

        let mut quotes = MockQuotes::new();
        quotes.expect_quote().returning(|_| None);

        let evaluator = SpreadPnlEvaluator::new(&contracts, &quotes);
        assert_matches!(
            evaluator.compute_leg_pnl("C100", 1, 100.0),
            Err(SpreadError::UnknownSymbol(ref s)) if s == "C100"
        );
    }

    #[test]
    fn test_leg_breakdown_matches_total() {
        let market = snapshot(&[
            ("C100", OptionType::Call, 100.0, 1.0, 3.0),
            ("C110", OptionType::Call, 110.0, 1.0, 1.0),
        ]);
        let evaluator = SpreadPnlEvaluator::from_provider(&market);
        let position = SpreadPosition::new()
            .with_leg(sym("C100"), 1)
            .with_leg(sym("C110"), -1);
        let scenario = PriceScenario::from_range(95, 120, 5);

        let legs = evaluator.compute_leg_breakdown(&position, &scenario).unwrap();
        let total = evaluator.compute_spread_pnl_series(&position, &scenario).unwrap();

        assert_eq!(legs.len(), 2);
        assert_eq!(legs[0].symbol.as_str(), "C100");
        assert_eq!(legs[1].quantity, -1);
        for (i, point) in total.iter().enumerate() {
            let sum = legs[0].series.points()[i].pnl + legs[1].series.points()[i].pnl;
            assert_eq!(point.pnl, sum);
        }
    }
}
