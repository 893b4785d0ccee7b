//! Route definitions for the VanSuraksha platform

use axum::{
    routing::{get, post},
    Router,
};

use crate::{handlers, AppState};

/// Create API routes
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(handlers::health_check))
        .route(
            "/predict",
            get(handlers::predict_risk_from_query).post(handlers::predict_risk),
        )
        .route("/risk-levels", get(handlers::list_risk_levels))
        .nest("/regions", region_routes())
        .route("/map", get(handlers::get_map))
        .route("/dashboard", get(handlers::get_dashboard))
        .route("/contact", post(handlers::submit_contact))
}

/// Regional sample routes
fn region_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(handlers::list_regions))
        .route("/:region_id", get(handlers::get_region))
}
