//! SymptoScan Daemon - health-topics search proxy
//!
//! Forwards symptom queries to the remote search service and falls back to
//! the local symptom table when it fails.

use anyhow::Result;
use symptoscan_common::ServerConfig;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    info!("SymptoScan Daemon v{} starting", env!("CARGO_PKG_VERSION"));

    let config = ServerConfig::load()?;
    symptoscand::server::run(config).await
}
