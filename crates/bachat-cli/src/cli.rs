//! CLI argument definitions using clap
//!
//! This module contains all the clap structs and enums for parsing CLI
//! arguments. The actual command implementations are in the `commands`
//! module.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Bachat - Expense prediction and budget planning
#[derive(Parser)]
#[command(name = "bachat")]
#[command(about = "Predict monthly expenses and plan a risk-tiered budget", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Artifacts directory holding the trained model and codecs
    ///
    /// Overrides the artifacts_dir from the config file.
    #[arg(long, global = true)]
    pub artifacts: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Analyze a financial profile and print the budget plan
    Analyze {
        /// Age in years (18-65)
        #[arg(long)]
        age: u32,

        /// Monthly income
        #[arg(long)]
        income: f64,

        /// Occupation: employee, business, professional, student, retired
        #[arg(long, default_value = "employee")]
        occupation: String,

        /// City tier: tier1, tier2, tier3
        #[arg(long, default_value = "tier2")]
        city_tier: String,

        /// Number of dependents (0-5)
        #[arg(long, default_value = "0")]
        dependents: u8,

        /// Risk appetite: low, medium, high (defaults to medium)
        #[arg(long)]
        risk: Option<String>,

        /// Emit the full advice payload as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show artifact and prediction-backend status
    Status,

    /// Start the web server
    Serve {
        /// Port to listen on
        #[arg(short, long, default_value = "3000")]
        port: u16,

        /// Host to bind to
        #[arg(long, default_value = "127.0.0.1")]
        host: String,

        /// Allowed CORS origin (repeatable)
        #[arg(long)]
        allow_origin: Vec<String>,
    },
}
