//! Dashboard handler

use axum::{extract::State, Json};

use crate::models::DashboardOverview;
use crate::services::DashboardService;
use crate::AppState;

/// Get dashboard stats, distribution and recent predictions
pub async fn get_dashboard(State(state): State<AppState>) -> Json<DashboardOverview> {
    let service = DashboardService::new(state.store.clone());
    Json(service.overview())
}
