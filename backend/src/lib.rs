//! VanSuraksha backend library
//!
//! Exposes the router so the binary and the integration tests build the
//! same application.

use std::sync::Arc;

use axum::{routing::get, Router};
use shared::SampleStore;
use tower::ServiceBuilder;
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

pub mod config;
pub mod error;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;

pub use crate::config::Config;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub store: Arc<SampleStore>,
}

impl AppState {
    /// State backed by the built-in sample data
    pub fn new(config: Config) -> Self {
        Self::with_store(config, SampleStore::seeded())
    }

    pub fn with_store(config: Config, store: SampleStore) -> Self {
        Self {
            config: Arc::new(config),
            store: Arc::new(store),
        }
    }
}

/// Create the application router with all routes and middleware
pub fn create_app(state: AppState) -> Router {
    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(root))
        .route("/health", get(health_check))
        .nest("/api/v1", routes::api_routes())
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CompressionLayer::new())
                .layer(cors),
        )
        .with_state(state)
}

/// Root endpoint
async fn root() -> &'static str {
    "VanSuraksha Forest Fire Risk API v1.0"
}

/// Health check endpoint
async fn health_check() -> &'static str {
    "OK"
}
