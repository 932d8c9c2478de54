//! Skizze Server
//!
//! Run with: cargo run
//!
//! Environment variables:
//! - SKZ_CONFIG: Path to a TOML config file (optional)
//! - SKZ_DATA_DIR: Directory for persisted sketches (default: ~/skizze-data)
//! - SKZ_INFO_DIR: Historical info directory (default: ~/skizze-data)
//! - SKZ_PORT: Port number (default: 3596)
//! - SKZ_SAVE_TRESHOLD_SECS: Checkpoint period in seconds (default: 5, min: 3)
//! - RUST_LOG: Log level (default: info)

use std::sync::Arc;

use skizze::api::run_server;
use skizze::config::Config;
use skizze::manager::Manager;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "skizze=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::load()?;

    tracing::info!("Skizze v{} configuration:", env!("CARGO_PKG_VERSION"));
    tracing::info!("  Data dir: {}", config.data_dir.display());
    tracing::info!("  Port: {}", config.port);
    tracing::info!(
        "  Checkpoint period: {} seconds",
        config.save_threshold_seconds
    );

    let manager = Arc::new(Manager::open(&config)?);
    run_server(&config, manager).await
}
