//! Server command implementation

use std::path::Path;

use anyhow::Result;

use bachat_server::ServerConfig;

use super::build_advisor;

pub async fn cmd_serve(
    artifacts: Option<&Path>,
    host: &str,
    port: u16,
    allow_origin: Vec<String>,
) -> Result<()> {
    println!("🚀 Starting Bachat web server...");
    println!("   Listening: http://{}:{}", host, port);
    if !allow_origin.is_empty() {
        println!("   CORS origins: {}", allow_origin.join(", "));
    }
    println!();
    println!("   Press Ctrl+C to stop");

    let advisor = build_advisor(artifacts)?;
    let config = ServerConfig {
        allowed_origins: allow_origin,
    };

    bachat_server::serve(advisor, host, port, config).await
}
