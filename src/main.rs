//! ProbeTrail - aggregation service for uptime dashboards.

use probetrail::config::ServerConfig;
use probetrail::web::Server;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(tracing_subscriber::EnvFilter::from_default_env()
            .add_directive("probetrail=info".parse()?))
        .init();

    // Load configuration
    let cfg = ServerConfig::load();
    tracing::info!("Starting ProbeTrail on port {}...", cfg.http_port);
    tracing::info!(
        "Default history width {}, chart window {}",
        cfg.history_width,
        cfg.chart_window
    );

    let server = Server::new(cfg);
    server.start().await?;

    Ok(())
}
