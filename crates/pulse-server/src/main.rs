//! Pulse dashboard server entry point.

use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use pulse_core::Catalog;
use pulse_server::{Server, ServerConfig};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load configuration
    let config_path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "config/pulse.toml".to_string());

    let found = std::path::Path::new(&config_path).exists();
    let server_config = if found {
        ServerConfig::from_file(&config_path)?
    } else {
        ServerConfig::default()
    };

    // Initialize logging
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| server_config.log_filter.clone()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Pulse Server v{}", env!("CARGO_PKG_VERSION"));
    if found {
        info!("Loaded configuration from {}", config_path);
    } else {
        info!("Using default configuration");
    }

    // Content must be complete before anything renders
    let catalog = Catalog::load()?;
    info!(
        metrics = catalog.metrics.len(),
        insights = catalog.ceo_insights.len(),
        "Dashboard content loaded"
    );

    let server = Server::new(server_config, catalog)?;
    server.start().await?;

    Ok(())
}
