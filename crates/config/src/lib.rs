use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub mod defaults;
pub mod parser;
pub mod substitution;
pub mod validator;

pub use defaults::*;
pub use parser::*;
pub use substitution::*;
pub use validator::*;

// ==================================================================================
// ANALYSIS CONFIG
// ==================================================================================

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AnalysisConfig {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    /// Maximum number of legs accepted per spread
    #[serde(rename = "max_legs")]
    #[serde(default = "default_max_legs")]
    pub max_legs: usize,
}

// ==================================================================================
// MARKET CONFIG (contract reference data + last prices)
// ==================================================================================

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct MarketConfig {
    #[serde(default)]
    pub contracts: Vec<ContractConfig>,
    #[serde(default)]
    pub quotes: Vec<QuoteConfig>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ContractConfig {
    pub symbol: String,
    /// call, put or underlying
    #[serde(rename = "option_type")]
    pub option_type: String,
    /// Required for call and put, ignored for underlying
    #[serde(default)]
    pub strike: Option<f64>,
    /// Contract multiplier
    #[serde(default = "default_contract_size")]
    pub size: f64,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct QuoteConfig {
    pub symbol: String,
    #[serde(rename = "last_price")]
    pub last_price: f64,
    #[serde(rename = "updated_at")]
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

// ==================================================================================
// SPREAD CONFIG
// ==================================================================================

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct SpreadConfig {
    #[serde(default)]
    pub legs: Vec<LegConfig>,
    #[serde(default)]
    pub scenario: Option<ScenarioConfig>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LegConfig {
    pub symbol: String,
    /// Signed contracts: positive = long, negative = short
    pub quantity: i64,
}

/// Half-open underlying price range `[start, stop)` walked by `step`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
pub struct ScenarioConfig {
    pub start: i64,
    pub stop: i64,
    pub step: i64,
}

// ==================================================================================
// OUTPUT CONFIG
// ==================================================================================

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct OutputConfig {
    /// table or json
    #[serde(default = "default_output_format")]
    pub format: String,
    /// pretty, json or compact
    #[serde(rename = "log_format")]
    #[serde(default = "default_log_format")]
    pub log_format: String,
    /// Print one column per leg next to the spread total
    #[serde(rename = "show_legs")]
    #[serde(default = "default_show_legs")]
    pub show_legs: bool,
    /// Decimal places in table output
    #[serde(default = "default_precision")]
    pub precision: usize,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: default_output_format(),
            log_format: default_log_format(),
            show_legs: default_show_legs(),
            precision: default_precision(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct WorkbenchConfig {
    pub analysis: AnalysisConfig,
    #[serde(default)]
    pub market: MarketConfig,
    #[serde(default)]
    pub spread: SpreadConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

impl MarketConfig {
    /// Find a contract entry by symbol, ignoring surrounding whitespace
    pub fn contract(&self, symbol: &str) -> Option<&ContractConfig> {
        let symbol = symbol.trim();
        self.contracts.iter().find(|c| c.symbol.trim() == symbol)
    }

    /// Find a quote entry by symbol, ignoring surrounding whitespace
    pub fn quote(&self, symbol: &str) -> Option<&QuoteConfig> {
        let symbol = symbol.trim();
        self.quotes.iter().find(|q| q.symbol.trim() == symbol)
    }
}
