use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "spreadx")]
#[command(about = "Option spread workbench - PnL of multi-leg option positions")]
#[command(version = "0.1.0")]
pub struct Cli {
    /// Log output format
    #[arg(long, global = true, value_enum, env = "SPREADX_LOG_FORMAT")]
    pub log_format: Option<LogFormatArg>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Evaluate a spread over a range of underlying prices
    Analyze {
        /// Path to the workbench configuration file
        #[arg(short, long, default_value = "spread_config.yaml")]
        config: PathBuf,

        /// Spread leg as SYMBOL:QTY, repeatable. Replaces the legs in the config
        #[arg(short, long = "leg", value_name = "SYMBOL:QTY", allow_hyphen_values = true)]
        legs: Vec<String>,

        /// First underlying price of the sweep
        #[arg(long, allow_hyphen_values = true)]
        start: Option<String>,

        /// End of the sweep (exclusive)
        #[arg(long, allow_hyphen_values = true)]
        stop: Option<String>,

        /// Price increment, may be negative
        #[arg(long, allow_hyphen_values = true)]
        step: Option<String>,

        /// Override the output format from the config
        #[arg(short, long, value_enum)]
        format: Option<OutputFormat>,
    },

    /// Validate a workbench configuration
    Validate {
        /// Path to the workbench configuration file
        #[arg(short, long, default_value = "spread_config.yaml")]
        config: PathBuf,
    },

    /// Write a sample configuration file with all defaults
    Init {
        /// Output path for the new configuration file
        #[arg(short, long, default_value = "spread_config.yaml")]
        output: PathBuf,
    },
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum OutputFormat {
    /// Fixed-width text table
    Table,

    /// JSON document
    Json,
}

impl OutputFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            OutputFormat::Table => "table",
            OutputFormat::Json => "json",
        }
    }
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum LogFormatArg {
    Pretty,
    Json,
    Compact,
}

impl LogFormatArg {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogFormatArg::Pretty => "pretty",
            LogFormatArg::Json => "json",
            LogFormatArg::Compact => "compact",
        }
    }
}

impl Cli {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_analyze_overrides() {
        let cli = Cli::try_parse_from([
            "spreadx",
            "analyze",
            "-c",
            "my.yaml",
            "--leg",
            "IO2406-C-3800:1",
            "--leg",
            "IO2406-C-4000:-1",
            "--start",
            "4300",
            "--stop",
            "3500",
            "--step",
            "-50",
            "--format",
            "json",
        ])
        .unwrap();

        match cli.command {
            Commands::Analyze {
                config,
                legs,
                start,
                step,
                format,
                ..
            } => {
                assert_eq!(config, PathBuf::from("my.yaml"));
                assert_eq!(legs, vec!["IO2406-C-3800:1", "IO2406-C-4000:-1"]);
                assert_eq!(start.as_deref(), Some("4300"));
                assert_eq!(step.as_deref(), Some("-50"));
                assert_eq!(format, Some(OutputFormat::Json));
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_defaults() {
        let cli = Cli::try_parse_from(["spreadx", "validate"]).unwrap();
        assert!(cli.log_format.is_none());
        match cli.command {
            Commands::Validate { config } => {
                assert_eq!(config, PathBuf::from("spread_config.yaml"))
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_global_log_format() {
        let cli = Cli::try_parse_from(["spreadx", "init", "--log-format", "compact"]).unwrap();
        assert_eq!(cli.log_format, Some(LogFormatArg::Compact));
        assert_eq!(LogFormatArg::Compact.as_str(), "compact");
    }

    #[test]
    fn test_unknown_format_rejected() {
        assert!(Cli::try_parse_from(["spreadx", "analyze", "--format", "svg"]).is_err());
    }
}
