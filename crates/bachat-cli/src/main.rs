//! Bachat CLI - Expense prediction and budget planning
//!
//! Usage:
//!   bachat analyze --age 28 --income 75000 --risk medium
//!   bachat status
//!   bachat serve --port 3000

mod cli;
mod commands;

#[cfg(test)]
mod tests;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use cli::*;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set up logging
    // Priority: RUST_LOG env var > --verbose flag > default (info)
    let filter = if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(false).compact())
        .init();

    match cli.command {
        Commands::Analyze {
            age,
            income,
            occupation,
            city_tier,
            dependents,
            risk,
            json,
        } => {
            commands::cmd_analyze(
                cli.artifacts.as_deref(),
                age,
                income,
                &occupation,
                &city_tier,
                dependents,
                risk.as_deref(),
                json,
            )
            .await
        }
        Commands::Status => commands::cmd_status(cli.artifacts.as_deref()).await,
        Commands::Serve {
            port,
            host,
            allow_origin,
        } => commands::cmd_serve(cli.artifacts.as_deref(), &host, port, allow_origin).await,
    }
}
