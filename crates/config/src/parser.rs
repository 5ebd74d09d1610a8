use crate::*;
use anyhow::{Context, Result};
use std::fs;
use std::path::Path;
use tracing::{debug, info, instrument};

#[instrument(skip(path))]
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<WorkbenchConfig> {
    let path = path.as_ref();
    info!("Loading configuration from: {:?}", path);

    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {:?}", path))?;

    debug!("Config file content length: {} bytes", content.len());

    let config = parse_config(&content)?;

    info!(
        contracts = config.market.contracts.len(),
        quotes = config.market.quotes.len(),
        legs = config.spread.legs.len(),
        "Configuration loaded successfully"
    );
    Ok(config)
}

/// Parse a workbench config from YAML text, substituting environment variables first
pub fn parse_config(content: &str) -> Result<WorkbenchConfig> {
    let substituted = substitution::substitute_env_vars(content)?;
    debug!("Environment variable substitution completed");

    serde_yaml::from_str(&substituted).with_context(|| "Failed to parse YAML configuration")
}

/// A bull call spread on an index option chain, with the index future as an
/// optional hedge leg.
#[instrument]
pub fn generate_default_config() -> WorkbenchConfig {
    WorkbenchConfig {
        analysis: AnalysisConfig {
            name: "IO2406 bull call spread".to_string(),
            description: Some("Long 3800 call, short 4000 call".to_string()),
            max_legs: default_max_legs(),
        },
        market: MarketConfig {
            contracts: vec![
                ContractConfig {
                    symbol: "IF2406".to_string(),
                    option_type: "underlying".to_string(),
                    strike: None,
                    size: 300.0,
                },
                ContractConfig {
                    symbol: "IO2406-C-3800".to_string(),
                    option_type: "call".to_string(),
                    strike: Some(3800.0),
                    size: 100.0,
                },
                ContractConfig {
                    symbol: "IO2406-C-4000".to_string(),
                    option_type: "call".to_string(),
                    strike: Some(4000.0),
                    size: 100.0,
                },
                ContractConfig {
                    symbol: "IO2406-P-3600".to_string(),
                    option_type: "put".to_string(),
                    strike: Some(3600.0),
                    size: 100.0,
                },
            ],
            quotes: vec![
                QuoteConfig {
                    symbol: "IF2406".to_string(),
                    last_price: 3850.0,
                    updated_at: None,
                },
                QuoteConfig {
                    symbol: "IO2406-C-3800".to_string(),
                    last_price: 92.4,
                    updated_at: None,
                },
                QuoteConfig {
                    symbol: "IO2406-C-4000".to_string(),
                    last_price: 28.6,
                    updated_at: None,
                },
                QuoteConfig {
                    symbol: "IO2406-P-3600".to_string(),
                    last_price: 17.2,
                    updated_at: None,
                },
            ],
        },
        spread: SpreadConfig {
            legs: vec![
                LegConfig {
                    symbol: "IO2406-C-3800".to_string(),
                    quantity: 1,
                },
                LegConfig {
                    symbol: "IO2406-C-4000".to_string(),
                    quantity: -1,
                },
            ],
            scenario: Some(ScenarioConfig {
                start: 3500,
                stop: 4300,
                step: 50,
            }),
        },
        output: OutputConfig::default(),
    }
}

#[instrument]
pub fn save_config<P: AsRef<Path> + std::fmt::Debug>(
    config: &WorkbenchConfig,
    path: P,
) -> Result<()> {
    let path = path.as_ref();
    info!("Saving configuration to: {:?}", path);

    let yaml = serde_yaml::to_string(config)
        .with_context(|| "Failed to serialize configuration to YAML")?;

    fs::write(path, yaml).with_context(|| format!("Failed to write config file: {:?}", path))?;

    info!("Configuration saved successfully");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = generate_default_config();
        let report = validate_config(&config);
        assert!(report.is_valid(), "errors: {:?}", report.errors);
        assert!(report.warnings.is_empty(), "warnings: {:?}", report.warnings);
    }

    #[test]
    fn test_default_config_survives_yaml() {
        let yaml = serde_yaml::to_string(&generate_default_config()).unwrap();
        let parsed = parse_config(&yaml).unwrap();
        assert_eq!(parsed.market.contracts.len(), 4);
        assert_eq!(parsed.spread.legs.len(), 2);
        assert_eq!(parsed.spread.scenario.unwrap().step, 50);
    }

    #[test]
    fn test_load_missing_file_has_context() {
        let err = load_config("/definitely/not/here/workbench.yaml").unwrap_err();
        assert!(err.to_string().contains("Failed to read config file"));
    }

    #[test]
    fn test_save_and_load() {
        let path = std::env::temp_dir().join(format!("spreadx-config-{}.yaml", std::process::id()));
        save_config(&generate_default_config(), &path).unwrap();

        let loaded = load_config(&path).unwrap();
        assert_eq!(loaded.analysis.name, "IO2406 bull call spread");

        let _ = std::fs::remove_file(&path);
    }
}
