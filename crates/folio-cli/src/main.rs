//! Folio CLI
//!
//! Command-line interface for inspecting and validating portfolio content.

#![warn(clippy::all)]
#![forbid(unsafe_code)]

use std::process::ExitCode;

use clap::Parser;
use folio_cli::{commands, Cli, Error};

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    // Initialize logging
    let default_filter = if cli.verbose { "info,folio=debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    tracing::debug!(command = ?cli.command, "Starting folio");

    match commands::run(cli).await {
        Ok(()) => Ok(ExitCode::SUCCESS),
        Err(Error::ValidationFailed { invalid, total }) => {
            tracing::warn!(invalid, total, "Content validation failed");
            Ok(ExitCode::FAILURE)
        }
        Err(e) => Err(e.into()),
    }
}
