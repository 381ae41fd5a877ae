use clap::{Parser, ValueEnum};

/// How View and Analyze results are printed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Fixed-width text tables
    #[default]
    Table,
    /// One JSON document per command
    Json,
}

/// Command line arguments, each with an environment variable fallback
#[derive(Debug, Parser)]
#[command(name = "bp-monitor")]
#[command(about = "Record and analyze blood pressure readings", version)]
pub struct Cli {
    /// Start with an empty record store instead of the demonstration readings
    #[arg(long, env = "BP_MONITOR_NO_SAMPLE_DATA")]
    pub no_sample_data: bool,

    /// Output format for View and Analyze
    #[arg(long, value_enum, env = "BP_MONITOR_OUTPUT", default_value_t = OutputFormat::Table)]
    pub output: OutputFormat,

    /// Log filter used when RUST_LOG is not set
    #[arg(long, env = "BP_MONITOR_LOG", default_value = "warn")]
    pub log_level: String,
}

/// Resolved application settings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub load_sample_data: bool,
    pub output: OutputFormat,
    pub log_level: String,
}

impl From<Cli> for AppConfig {
    fn from(cli: Cli) -> Self {
        Self {
            load_sample_data: !cli.no_sample_data,
            output: cli.output,
            log_level: cli.log_level,
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            load_sample_data: true,
            output: OutputFormat::Table,
            log_level: "warn".to_string(),
        }
    }
}
