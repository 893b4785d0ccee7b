//! HTTP handlers for regional samples and the risk map

use axum::{
    extract::{Path, Query, State},
    http::header,
    response::IntoResponse,
    Json,
};
use serde::Deserialize;
use shared::{MapView, RegionalSample, RiskLevel};

use crate::error::AppResult;
use crate::services::RegionService;
use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct RegionQuery {
    pub level: Option<String>,
    pub format: Option<String>, // "json" or "csv"
}

/// List regional samples
pub async fn list_regions(
    State(state): State<AppState>,
    Query(query): Query<RegionQuery>,
) -> AppResult<impl IntoResponse> {
    let level = query
        .level
        .as_deref()
        .map(str::parse::<RiskLevel>)
        .transpose()?;

    let service = RegionService::new(state.store.clone());
    let data = service.list(level);

    if query.format.as_deref() == Some("csv") {
        let csv = RegionService::export_to_csv(&data)?;
        Ok((
            [
                (header::CONTENT_TYPE, "text/csv"),
                (
                    header::CONTENT_DISPOSITION,
                    "attachment; filename=\"regions.csv\"",
                ),
            ],
            csv,
        )
            .into_response())
    } else {
        Ok(Json(data).into_response())
    }
}

/// Get a regional sample by ID
pub async fn get_region(
    State(state): State<AppState>,
    Path(region_id): Path<String>,
) -> AppResult<Json<RegionalSample>> {
    let service = RegionService::new(state.store.clone());
    let region = service.get(&region_id)?;
    Ok(Json(region))
}

/// Map viewport with one marker per region
pub async fn get_map(State(state): State<AppState>) -> Json<MapView> {
    let service = RegionService::new(state.store.clone());
    Json(service.map_view())
}
