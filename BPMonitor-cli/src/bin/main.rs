use std::io;

use anyhow::Context;
use clap::Parser;
use dotenv::dotenv;
use tracing::info;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use bp_monitor_cli::config::{AppConfig, Cli};
use bp_monitor_cli::console::Console;
use bp_monitor_domain::{create_blood_pressure_service, sample_readings};

/// The main entry point for the blood pressure monitor console
///
/// This function:
/// 1. Loads environment variables from a .env file, if any
/// 2. Parses the command line into an `AppConfig`
/// 3. Sets up tracing, writing to stderr so logs stay out of the console
/// 4. Seeds the record store and runs the menu loop on stdin/stdout
fn main() -> anyhow::Result<()> {
    // A missing .env file is fine, flags and the environment still apply
    dotenv().ok();

    let config = AppConfig::from(Cli::parse());

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    tracing_subscriber::registry()
        .with(fmt::layer()
            .with_target(false)
            .with_writer(io::stderr))
        .with(env_filter)
        .init();

    let initial = if config.load_sample_data {
        info!("Loading sample blood pressure data");
        sample_readings()
    } else {
        Vec::new()
    };

    let service = create_blood_pressure_service(initial)
        .context("failed to seed the record store")?;

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut console = Console::new(service, stdin.lock(), stdout.lock(), config.output);
    console.run()?;

    info!("Console session finished");
    Ok(())
}
