//! people-search: query a people-search API and summarize the result
//!
//! This is the main entry point for the application.

use anyhow::{Context, Result};
use clap::Parser;
use people_search::{cli::Cli, config, Renderer, SearchClient, SearchError};
use std::process::ExitCode;
use tracing::debug;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

/// Exit status for configuration failures
const EXIT_CONFIG: u8 = 2;

/// Exit status for any other failure outside the search outcome
const EXIT_FAILURE: u8 = 1;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    // Initialize logging; stdout is reserved for the report
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(cli.log_level()));
    FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    debug!("Starting people-search v{}", people_search::VERSION);

    match run(cli).await {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            let is_config = e
                .downcast_ref::<SearchError>()
                .is_some_and(SearchError::is_config);
            ExitCode::from(if is_config { EXIT_CONFIG } else { EXIT_FAILURE })
        }
    }
}

async fn run(cli: Cli) -> Result<ExitCode> {
    // Load configuration
    let mut settings =
        config::load(cli.config.as_deref()).context("failed to load settings")?;
    cli.apply(&mut settings);
    settings.validate().context("invalid settings")?;

    let client = SearchClient::from_settings(&settings).context("failed to build HTTP client")?;

    let mut renderer = Renderer::new(std::io::stdout());
    renderer.progress(&settings).context("failed to write report")?;

    let outcome = client.execute().await;
    renderer.render(&outcome).context("failed to write report")?;

    if settings.output.fail_on_error && !outcome.is_success() {
        return Ok(ExitCode::from(outcome.exit_code() as u8));
    }
    Ok(ExitCode::SUCCESS)
}
