//! The `analyze` command.
//!
//! Command-line legs and range fields take precedence over the config file.
//! Whatever the command line replaces is neither read nor validated from the
//! file.

use anyhow::{Context, Result};
use cli::OutputFormat;
use config::{validate_config_scoped, ScenarioConfig, ValidationScope, WorkbenchConfig};
use market_data::MarketSnapshot;
use spread_engine::{
    parse_leg_arg, parse_legs, ChartSink, JsonSink, LegInput, RangeInput, SpreadChart,
    SpreadPnlEvaluator, SpreadPosition, SpreadRequest, TableSink,
};
use tracing::{debug, error, info, warn};

/// Values from the command line that replace parts of the config.
#[derive(Debug, Clone, Default)]
pub struct AnalyzeOverrides {
    pub legs: Vec<String>,
    pub start: Option<String>,
    pub stop: Option<String>,
    pub step: Option<String>,
    pub format: Option<OutputFormat>,
}

impl AnalyzeOverrides {
    /// Config sections still in use after the overrides are applied.
    pub fn validation_scope(&self) -> ValidationScope {
        let full_range = self.start.is_some() && self.stop.is_some() && self.step.is_some();
        ValidationScope {
            spread_legs: self.legs.is_empty(),
            scenario: !full_range,
        }
    }

    /// Each range field falls back to the config scenario; a field missing in
    /// both stays blank and is reported by the request parser.
    pub fn range_input(&self, workbench: &WorkbenchConfig) -> RangeInput {
        let scenario = workbench.spread.scenario;
        let field = |flag: &Option<String>, from_config: fn(&ScenarioConfig) -> i64| {
            flag.clone()
                .or_else(|| scenario.as_ref().map(|s| from_config(s).to_string()))
                .unwrap_or_default()
        };
        RangeInput::new(
            field(&self.start, |s| s.start),
            field(&self.stop, |s| s.stop),
            field(&self.step, |s| s.step),
        )
    }

    pub fn position(&self, workbench: &WorkbenchConfig) -> Result<SpreadPosition> {
        if self.legs.is_empty() {
            return Ok(SpreadPosition::from_config(&workbench.spread.legs)?);
        }
        let inputs = self
            .legs
            .iter()
            .map(|arg| parse_leg_arg(arg))
            .collect::<std::result::Result<Vec<LegInput>, _>>()?;
        debug!(legs = inputs.len(), "Using legs from command line");
        Ok(parse_legs(&inputs, workbench.analysis.max_legs)?)
    }

    pub fn request(&self, workbench: &WorkbenchConfig) -> Result<SpreadRequest> {
        Ok(SpreadRequest::new(
            self.position(workbench)?,
            self.range_input(workbench).parse()?,
        ))
    }

    pub fn output_format(&self, workbench: &WorkbenchConfig) -> OutputFormat {
        self.format.unwrap_or_else(|| {
            if workbench.output.format.eq_ignore_ascii_case("json") {
                OutputFormat::Json
            } else {
                OutputFormat::Table
            }
        })
    }
}

/// Validate the parts of `workbench` that `overrides` leaves in use.
pub fn check_config(workbench: &WorkbenchConfig, overrides: &AnalyzeOverrides) -> Result<()> {
    let report = validate_config_scoped(workbench, overrides.validation_scope());

    if !report.warnings.is_empty() {
        warn!("Configuration warnings:");
        for warning in &report.warnings {
            warn!(field = %warning.field, message = %warning.message);
        }
    }

    if !report.is_valid() {
        error!(
            error_count = report.errors.len(),
            "Configuration validation failed"
        );
        for err in &report.errors {
            error!("{}", err);
        }
        anyhow::bail!("Cannot analyze spread due to configuration errors");
    }

    Ok(())
}

pub fn analyze_command(workbench: &WorkbenchConfig, overrides: AnalyzeOverrides) -> Result<()> {
    check_config(workbench, &overrides)?;

    let snapshot =
        MarketSnapshot::from_config(&workbench.market).context("Failed to load market data")?;

    let request = overrides.request(workbench)?;
    let scenario = request.scenario();
    if scenario.is_empty() {
        warn!(range = ?request.range, "Price range yields no prices");
    }

    info!(
        name = %workbench.analysis.name,
        legs = request.position.len(),
        prices = scenario.len(),
        "Evaluating spread"
    );

    let evaluator = SpreadPnlEvaluator::from_provider(&snapshot);
    let chart = SpreadChart::build(
        &evaluator,
        &request.position,
        &scenario,
        &workbench.analysis.name,
        workbench.output.show_legs,
    )?;

    let stdout = std::io::stdout().lock();
    match overrides.output_format(workbench) {
        OutputFormat::Table => TableSink::new(stdout)
            .with_precision(workbench.output.precision)
            .with_legs(workbench.output.show_legs)
            .render(&chart)?,
        OutputFormat::Json => JsonSink::new(stdout).render(&chart)?,
    }

    Ok(())
}
