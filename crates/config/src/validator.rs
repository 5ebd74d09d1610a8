use crate::*;
use std::collections::HashSet;
use thiserror::Error;

/// Option type strings accepted in `market.contracts[].option_type`
pub const OPTION_TYPES: [&str; 6] = ["call", "c", "put", "p", "underlying", "u"];

/// Output formats accepted in `output.format`
pub const OUTPUT_FORMATS: [&str; 2] = ["table", "json"];

/// Log formats accepted in `output.log_format`
pub const LOG_FORMATS: [&str; 3] = ["pretty", "json", "compact"];

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    #[error("Analysis name is required")]
    MissingAnalysisName,

    #[error("analysis.max_legs must be a positive integer")]
    InvalidMaxLegs,

    #[error("Contract {symbol}: {message}")]
    InvalidContract { symbol: String, message: String },

    #[error("Duplicate contract symbol '{0}'")]
    DuplicateContract(String),

    #[error("Quote {symbol}: {message}")]
    InvalidQuote { symbol: String, message: String },

    #[error("Duplicate quote symbol '{0}'")]
    DuplicateQuote(String),

    #[error("Leg {symbol}: {message}")]
    InvalidLeg { symbol: String, message: String },

    #[error("Spread has {count} legs but analysis.max_legs is {max}")]
    TooManyLegs { count: usize, max: usize },

    #[error("Scenario: {message}")]
    InvalidScenario { message: String },

    #[error("Invalid output format: {0}. Must be one of: table, json")]
    InvalidOutputFormat(String),

    #[error("Invalid log format: {0}. Must be one of: pretty, json, compact")]
    InvalidLogFormat(String),

    #[error("Environment variable placeholder left unresolved in '{field}'")]
    UnresolvedEnvVar { field: String },
}

#[derive(Debug, Clone)]
pub struct ValidationWarning {
    pub field: String,
    pub message: String,
}

#[derive(Debug, Clone)]
pub struct DefaultApplied {
    pub field: String,
    pub value: String,
}

#[derive(Debug, Clone)]
pub struct ValidationReport {
    pub errors: Vec<ValidationError>,
    pub warnings: Vec<ValidationWarning>,
    pub defaults_applied: Vec<DefaultApplied>,
}

impl ValidationReport {
    pub fn new() -> Self {
        Self {
            errors: Vec::new(),
            warnings: Vec::new(),
            defaults_applied: Vec::new(),
        }
    }

    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn add_error(&mut self, error: ValidationError) {
        self.errors.push(error);
    }

    pub fn add_warning(&mut self, field: &str, message: &str) {
        self.warnings.push(ValidationWarning {
            field: field.to_string(),
            message: message.to_string(),
        });
    }

    pub fn add_default(&mut self, field: &str, value: &str) {
        self.defaults_applied.push(DefaultApplied {
            field: field.to_string(),
            value: value.to_string(),
        });
    }
}

impl Default for ValidationReport {
    fn default() -> Self {
        Self::new()
    }
}

/// Which parts of `spread` a caller actually takes from the file.
///
/// `analysis`, `market` and `output` are always validated. Legs or a scenario
/// that are replaced from elsewhere (e.g. the command line) can be skipped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValidationScope {
    pub spread_legs: bool,
    pub scenario: bool,
}

impl ValidationScope {
    /// Validate the whole file
    pub fn full() -> Self {
        Self {
            spread_legs: true,
            scenario: true,
        }
    }
}

impl Default for ValidationScope {
    fn default() -> Self {
        Self::full()
    }
}

pub fn validate_config(config: &WorkbenchConfig) -> ValidationReport {
    validate_config_scoped(config, ValidationScope::full())
}

pub fn validate_config_scoped(
    config: &WorkbenchConfig,
    scope: ValidationScope,
) -> ValidationReport {
    let mut report = ValidationReport::new();

    validate_analysis(&config.analysis, &mut report);
    validate_market(&config.market, &mut report);
    if scope.spread_legs {
        validate_legs(
            &config.spread,
            &config.market,
            config.analysis.max_legs,
            &mut report,
        );
    }
    if scope.scenario {
        validate_scenario_section(&config.spread, &mut report);
    }
    validate_output(&config.output, &mut report);

    report
}

/// True when `option_type` is one of [`OPTION_TYPES`] (case-insensitive)
pub fn is_known_option_type(option_type: &str) -> bool {
    let lowered = option_type.trim().to_lowercase();
    OPTION_TYPES.contains(&lowered.as_str())
}

/// Number of prices the half-open range `[start, stop)` walked by `step` yields
pub fn scenario_len(scenario: &ScenarioConfig) -> u64 {
    let ScenarioConfig { start, stop, step } = *scenario;
    let (span, stride) = match step {
        s if s > 0 && start < stop => (stop.abs_diff(start), s.unsigned_abs()),
        s if s < 0 && start > stop => (start.abs_diff(stop), s.unsigned_abs()),
        _ => return 0,
    };
    span.div_ceil(stride)
}

/// Lowest price the scenario generates, or `None` when it generates none
pub fn scenario_lowest_price(scenario: &ScenarioConfig) -> Option<i64> {
    let len = scenario_len(scenario);
    if len == 0 {
        return None;
    }
    if scenario.step > 0 {
        return Some(scenario.start);
    }
    // Last generated price lies between start and stop, so it fits in i64
    let last = i128::from(scenario.start) + i128::from(scenario.step) * i128::from(len - 1);
    i64::try_from(last).ok()
}

fn is_underlying_type(option_type: &str) -> bool {
    matches!(option_type.trim().to_lowercase().as_str(), "underlying" | "u")
}

fn validate_analysis(analysis: &AnalysisConfig, report: &mut ValidationReport) {
    if analysis.name.trim().is_empty() {
        report.add_error(ValidationError::MissingAnalysisName);
    }

    if has_placeholder(&analysis.name) {
        report.add_error(ValidationError::UnresolvedEnvVar {
            field: "analysis.name".to_string(),
        });
    }

    if analysis.max_legs == 0 {
        report.add_error(ValidationError::InvalidMaxLegs);
    }
}

fn validate_market(market: &MarketConfig, report: &mut ValidationReport) {
    let mut contract_symbols = HashSet::new();
    for (i, contract) in market.contracts.iter().enumerate() {
        validate_contract(i, contract, report);
        if !contract_symbols.insert(contract.symbol.trim()) {
            report.add_error(ValidationError::DuplicateContract(contract.symbol.clone()));
        }
    }

    let mut quote_symbols = HashSet::new();
    for quote in &market.quotes {
        let allows_negative = market
            .contract(&quote.symbol)
            .is_some_and(|c| is_underlying_type(&c.option_type));
        validate_quote(quote, allows_negative, report);
        if !quote_symbols.insert(quote.symbol.trim()) {
            report.add_error(ValidationError::DuplicateQuote(quote.symbol.clone()));
        }
        if !contract_symbols.contains(quote.symbol.trim()) {
            report.add_warning(
                "market.quotes",
                &format!("Quote for '{}' has no matching contract", quote.symbol),
            );
        }
    }

    for contract in &market.contracts {
        if !quote_symbols.contains(contract.symbol.trim()) {
            report.add_warning(
                "market.contracts",
                &format!("Contract '{}' has no quote", contract.symbol),
            );
        }
    }
}

fn validate_contract(index: usize, contract: &ContractConfig, report: &mut ValidationReport) {
    let symbol = display_symbol(&contract.symbol);

    if contract.symbol.trim().is_empty() || contract.symbol.trim().contains(char::is_whitespace) {
        report.add_error(ValidationError::InvalidContract {
            symbol: symbol.clone(),
            message: "Symbol must be non-empty and contain no whitespace".to_string(),
        });
    }

    if has_placeholder(&contract.symbol) {
        report.add_error(ValidationError::UnresolvedEnvVar {
            field: format!("market.contracts[{}].symbol", index),
        });
    }

    if !contract.size.is_finite() || contract.size <= 0.0 {
        report.add_error(ValidationError::InvalidContract {
            symbol: symbol.clone(),
            message: format!("size must be positive, got: {}", contract.size),
        });
    }

    if !is_known_option_type(&contract.option_type) {
        report.add_error(ValidationError::InvalidContract {
            symbol,
            message: format!(
                "Unknown option_type '{}'. Must be one of: call, put, underlying",
                contract.option_type
            ),
        });
        return;
    }

    let is_underlying = is_underlying_type(&contract.option_type);

    match (is_underlying, contract.strike) {
        (true, None) => {
            report.add_default(&format!("market.contracts[{}].strike", index), "0 (underlying)");
        }
        (true, Some(_)) => {
            report.add_warning(
                &format!("market.contracts[{}].strike", index),
                "Strike is ignored for underlying contracts",
            );
        }
        (false, None) => {
            report.add_error(ValidationError::InvalidContract {
                symbol,
                message: "strike is required for call and put contracts".to_string(),
            });
        }
        (false, Some(strike)) if !strike.is_finite() || strike <= 0.0 => {
            report.add_error(ValidationError::InvalidContract {
                symbol,
                message: format!("strike must be positive, got: {}", strike),
            });
        }
        (false, Some(_)) => {}
    }
}

/// Futures can trade below zero; option premiums cannot.
fn validate_quote(quote: &QuoteConfig, allows_negative: bool, report: &mut ValidationReport) {
    if !quote.last_price.is_finite() {
        report.add_error(ValidationError::InvalidQuote {
            symbol: display_symbol(&quote.symbol),
            message: format!("last_price must be a finite number, got: {}", quote.last_price),
        });
    } else if quote.last_price < 0.0 && !allows_negative {
        report.add_error(ValidationError::InvalidQuote {
            symbol: display_symbol(&quote.symbol),
            message: format!(
                "last_price of an option must be non-negative, got: {}",
                quote.last_price
            ),
        });
    }
}

fn validate_legs(
    spread: &SpreadConfig,
    market: &MarketConfig,
    max_legs: usize,
    report: &mut ValidationReport,
) {
    if max_legs > 0 && spread.legs.len() > max_legs {
        report.add_error(ValidationError::TooManyLegs {
            count: spread.legs.len(),
            max: max_legs,
        });
    }

    let mut seen = HashSet::new();
    for leg in &spread.legs {
        let symbol = display_symbol(&leg.symbol);

        if market.contract(&leg.symbol).is_none() {
            report.add_error(ValidationError::InvalidLeg {
                symbol: symbol.clone(),
                message: "No contract defined for this symbol".to_string(),
            });
        }

        if market.quote(&leg.symbol).is_none() {
            report.add_error(ValidationError::InvalidLeg {
                symbol: symbol.clone(),
                message: "No quote defined for this symbol".to_string(),
            });
        }

        if leg.quantity == 0 {
            report.add_warning(
                "spread.legs",
                &format!("Leg '{}' has zero quantity and contributes nothing", symbol),
            );
        }

        if !seen.insert(leg.symbol.trim()) {
            report.add_warning(
                "spread.legs",
                &format!("Leg '{}' listed more than once; the last entry wins", symbol),
            );
        }
    }
}

fn validate_scenario_section(spread: &SpreadConfig, report: &mut ValidationReport) {
    match &spread.scenario {
        None => {
            report.add_warning(
                "spread.scenario",
                "No scenario configured; start/stop/step must be given on the command line",
            );
        }
        Some(scenario) => validate_scenario(scenario, report),
    }
}

fn validate_scenario(scenario: &ScenarioConfig, report: &mut ValidationReport) {
    // Zero or direction-mismatched steps are accepted and produce no prices.
    let Some(lowest) = scenario_lowest_price(scenario) else {
        report.add_warning(
            "spread.scenario",
            &format!(
                "start={} stop={} step={} produces an empty price scenario",
                scenario.start, scenario.stop, scenario.step
            ),
        );
        return;
    };

    if lowest < 0 {
        report.add_error(ValidationError::InvalidScenario {
            message: format!(
                "underlying prices must be non-negative, range reaches {} (start={} stop={} step={})",
                lowest, scenario.start, scenario.stop, scenario.step
            ),
        });
    }
}

fn validate_output(output: &OutputConfig, report: &mut ValidationReport) {
    if !OUTPUT_FORMATS.contains(&output.format.to_lowercase().as_str()) {
        report.add_error(ValidationError::InvalidOutputFormat(output.format.clone()));
    }

    if !LOG_FORMATS.contains(&output.log_format.to_lowercase().as_str()) {
        report.add_error(ValidationError::InvalidLogFormat(output.log_format.clone()));
    }

    if output.precision > 10 {
        report.add_warning(
            "output.precision",
            "More than 10 decimal places adds noise to table output",
        );
    }
}

fn display_symbol(symbol: &str) -> String {
    if symbol.trim().is_empty() {
        "unknown".to_string()
    } else {
        symbol.to_string()
    }
}

fn has_placeholder(value: &str) -> bool {
    has_unresolved_env_vars(value).unwrap_or(false)
}
