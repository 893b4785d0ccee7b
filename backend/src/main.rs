//! VanSuraksha Forest Fire Risk Platform - Backend Server
//!
//! Serves the rule-based fire risk classifier, the regional sample data
//! and the dashboard aggregates over HTTP.

use std::net::SocketAddr;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use vansuraksha_backend::{config::Config, create_app, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "vansuraksha_server=debug,vansuraksha_backend=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    dotenvy::dotenv().ok();
    let config = Config::load()?;

    tracing::info!("Starting VanSuraksha Server");
    tracing::info!("Environment: {}", config.environment);
    if config.prediction.simulated_delay_ms > 0 {
        tracing::info!(
            "Simulated prediction delay: {}ms",
            config.prediction.simulated_delay_ms
        );
    }

    let addr: SocketAddr = format!("{}:{}", config.server.host, config.server.port).parse()?;
    let state = AppState::new(config);
    let app = create_app(state);

    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
