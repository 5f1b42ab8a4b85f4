//! Status command implementation

use std::path::Path;

use anyhow::{Context, Result};

use bachat_core::{EngineConfig, CITY_CODEC_FILE, MODEL_FILE, OCCUPATION_CODEC_FILE};

use super::build_advisor;

pub async fn cmd_status(artifacts: Option<&Path>) -> Result<()> {
    let mut config = EngineConfig::load().context("Failed to load configuration")?;
    if let Some(dir) = artifacts {
        config.artifacts_dir = dir.to_path_buf();
    }

    println!("Bachat status");
    println!("   Artifacts dir: {}", config.artifacts_dir.display());

    for file in [MODEL_FILE, OCCUPATION_CODEC_FILE, CITY_CODEC_FILE] {
        let path = config.artifacts_dir.join(file);
        let marker = if path.exists() { "✅" } else { "❌" };
        println!("   {} {}", marker, file);
    }

    match build_advisor(artifacts) {
        Ok(advisor) => {
            let healthy = advisor.health_check().await;
            println!();
            println!("   Model:   {}", advisor.model());
            println!("   Backend: {}", advisor.backend_host());
            println!(
                "   Health:  {}",
                if healthy { "✅ ready" } else { "⚠️  unreachable" }
            );
        }
        Err(e) => {
            println!();
            println!("   ❌ Engine unavailable: {:#}", e);
            println!("      Train the model and place its artifacts in the directory above.");
        }
    }

    Ok(())
}
