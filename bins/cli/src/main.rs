//! Coinpurse command line
//!
//! Parses, combines and formats coin amounts from the terminal.
//!
//! ```text
//! coinpurse parse "15151cp"            # 151gp 5sp 1cp
//! coinpurse add 1cp 10gp 1pp           # 15gp 1cp
//! coinpurse sub 1gp 2sp                # 8sp
//! coinpurse scale 2sp 0.75             # 1sp 5cp
//! coinpurse split 1gp --shares 2,1     # 6sp 7cp / 3sp 3cp
//! coinpurse --json value "5.11gp"
//! ```

mod cli;
mod commands;

use std::process::ExitCode;

use anyhow::Context;
use tracing::debug;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use coinpurse_core::currency::Ladder;
use coinpurse_shared::{AppConfig, AppError, AppResult, LoggingConfig};

use crate::cli::Cli;

fn main() -> anyhow::Result<ExitCode> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse_args();

    let config = match load_config(&cli) {
        Ok(config) => config,
        Err(err) => return Ok(fail(&err)),
    };

    init_tracing(&config.logging)?;

    match run(&cli, &config) {
        Ok(text) => {
            println!("{text}");
            Ok(ExitCode::SUCCESS)
        }
        Err(err) => Ok(fail(&err)),
    }
}

/// Reports `err` once on stderr and maps it to the process exit code.
fn fail(err: &AppError) -> ExitCode {
    debug!(code = err.error_code(), "Command failed");
    eprintln!("{err}");
    ExitCode::from(err.exit_code())
}

fn load_config(cli: &Cli) -> AppResult<AppConfig> {
    let mut config = AppConfig::load()?;
    cli.apply_overrides(&mut config.ladder);
    Ok(config)
}

/// Logs go to stderr so stdout carries only results.
fn init_tracing(config: &LoggingConfig) -> anyhow::Result<()> {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| config.filter.as_str().into());

    let json = config.json.then(|| {
        tracing_subscriber::fmt::layer()
            .json()
            .with_writer(std::io::stderr)
    });
    let plain = (!config.json)
        .then(|| tracing_subscriber::fmt::layer().with_writer(std::io::stderr));

    tracing_subscriber::registry()
        .with(filter)
        .with(json)
        .with(plain)
        .try_init()
        .context("Failed to install log subscriber")
}

fn run(cli: &Cli, config: &AppConfig) -> AppResult<String> {
    let ladder = Ladder::from_config(&config.ladder)
        .map_err(|err| AppError::Config(err.to_string()))?;
    debug!(
        targets = ?ladder.targets(),
        auto_normalize = ladder.auto_normalize(),
        "Ladder configured"
    );

    let output = commands::run(&ladder, &cli.command)?;
    debug!(json = cli.json, "Command succeeded");

    if cli.json {
        serde_json::to_string_pretty(&output).map_err(|err| AppError::Internal(err.to_string()))
    } else {
        Ok(output.to_string())
    }
}
