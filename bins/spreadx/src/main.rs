//! Option spread workbench binary
//!
//! Entry point for `spreadx`. It provides commands for initializing and
//! validating a workbench configuration and for evaluating a spread's PnL
//! across a sweep of underlying prices.

mod analyze;

use analyze::{analyze_command, AnalyzeOverrides};
use anyhow::{Context, Result};
use cli::{Cli, Commands, LogFormatArg};
use config::{
    generate_default_config, load_config, save_config, scenario_len, validate_config,
    WorkbenchConfig,
};
use observability::{init_logging, LogFormat};
use std::path::{Path, PathBuf};
use tracing::{error, info};

fn main() -> Result<()> {
    let cli = Cli::parse_args();

    match cli.command {
        Commands::Analyze {
            config,
            legs,
            start,
            stop,
            step,
            format,
        } => {
            // Load before logging starts so the config can pick the log format
            let loaded = load_config(&config);
            setup_logging(cli.log_format, loaded.as_ref().ok())?;
            info!("Executing 'analyze' command");

            let workbench = loaded.map_err(|e| {
                error!(path = ?config, "Failed to load configuration");
                e
            })?;
            let overrides = AnalyzeOverrides {
                legs,
                start,
                stop,
                step,
                format,
            };
            analyze_command(&workbench, overrides)
        }
        Commands::Validate { config } => {
            setup_logging(cli.log_format, None)?;
            info!("Executing 'validate' command");
            validate_command(config)
        }
        Commands::Init { output } => {
            setup_logging(cli.log_format, None)?;
            info!("Executing 'init' command");
            init_command(output)
        }
    }
}

/// Command-line flag first, then the config's `output.log_format`, then pretty.
fn setup_logging(flag: Option<LogFormatArg>, config: Option<&WorkbenchConfig>) -> Result<()> {
    let format = flag
        .and_then(|f| LogFormat::parse(f.as_str()))
        .or_else(|| config.and_then(|c| LogFormat::parse(&c.output.log_format)))
        .unwrap_or_default();
    init_logging("spreadx", format)
}

fn validate_command<P: AsRef<Path>>(config_path: P) -> Result<()> {
    info!(path = ?config_path.as_ref(), "Validating configuration");

    let config = match load_config(&config_path) {
        Ok(c) => c,
        Err(e) => {
            error!(%e, "Failed to load configuration");
            anyhow::bail!(e);
        }
    };

    let report = validate_config(&config);

    // Print summary
    println!("\n=== Configuration Validation Report ===\n");

    if !report.defaults_applied.is_empty() {
        println!("Defaults Applied ({}):", report.defaults_applied.len());
        for default in &report.defaults_applied {
            println!("  [info] {} = {}", default.field, default.value);
        }
        println!();
    }

    if !report.warnings.is_empty() {
        println!("Warnings ({}):", report.warnings.len());
        for warning in &report.warnings {
            println!("  [warn] [{}] {}", warning.field, warning.message);
        }
        println!();
    }

    if !report.errors.is_empty() {
        println!("Errors ({}):", report.errors.len());
        for err in &report.errors {
            println!("  [error] {}", err);
        }
        println!();
        anyhow::bail!("Configuration validation failed");
    }

    println!("[ok] Configuration is valid!");
    println!();
    println!("Analysis: {}", config.analysis.name);
    println!("Contracts: {}", config.market.contracts.len());
    println!("Quotes: {}", config.market.quotes.len());
    println!("Legs: {}", config.spread.legs.len());
    match config.spread.scenario {
        Some(s) => println!(
            "Price range: {}..{} step {} ({} prices)",
            s.start,
            s.stop,
            s.step,
            scenario_len(&s)
        ),
        None => println!("Price range: not set"),
    }

    Ok(())
}

fn init_command(output_path: PathBuf) -> Result<()> {
    let output_path = output_path.as_path();
    info!(?output_path, "Initializing new configuration file");

    let config = generate_default_config();

    if let Some(parent) = output_path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory: {:?}", parent))?;
    }

    save_config(&config, output_path)?;

    println!("[ok] Configuration file created successfully!");
    println!();
    println!("Location: {:?}", output_path);
    println!();
    println!("This configuration includes:");
    println!(
        "  - {} contracts with last prices",
        config.market.contracts.len()
    );
    println!(
        "  - A {}-leg spread: {}",
        config.spread.legs.len(),
        config.analysis.name
    );
    println!("  - A price range for the underlying");
    println!();
    println!("Next steps:");
    println!("  1. Edit the contracts, quotes and legs to match your position");
    println!(
        "  2. Run 'spreadx validate --config {:?}' to check configuration",
        output_path
    );
    println!(
        "  3. Run 'spreadx analyze --config {:?}' to chart the spread",
        output_path
    );

    Ok(())
}
