//! Command implementations

mod analyze;
mod serve;
mod status;

pub use analyze::cmd_analyze;
pub use serve::cmd_serve;
pub use status::cmd_status;

use std::path::Path;

use anyhow::{Context, Result};

use bachat_core::{Advisor, EngineConfig};

/// Resolve config and build the advisor shared by all commands
pub fn build_advisor(artifacts_override: Option<&Path>) -> Result<Advisor> {
    let mut config = EngineConfig::load().context("Failed to load configuration")?;
    if let Some(dir) = artifacts_override {
        config.artifacts_dir = dir.to_path_buf();
    }
    let advisor = Advisor::from_config(&config).context("Failed to initialize the engine")?;
    tracing::debug!(
        artifacts = %config.artifacts_dir.display(),
        model = advisor.model(),
        "Engine initialized"
    );
    Ok(advisor)
}

/// Format an amount as rupees with thousands separators ("₹75,000")
pub fn format_inr(amount: f64) -> String {
    let rounded = amount.round() as i64;
    let negative = rounded < 0;
    let digits = rounded.abs().to_string();

    let mut grouped = String::new();
    for (i, c) in digits.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    let grouped: String = grouped.chars().rev().collect();

    if negative {
        format!("-₹{}", grouped)
    } else {
        format!("₹{}", grouped)
    }
}
