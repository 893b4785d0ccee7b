//! HTTP handlers for fire risk prediction
//!
//! Both endpoints always answer 200: readings that are missing or cannot
//! be parsed are replaced with defaults rather than rejected.

use axum::{
    body::Bytes,
    extract::{Query, State},
    Json,
};
use shared::{ReadingInput, RiskAssessment, RiskLevel};

use crate::models::RiskLevelInfo;
use crate::services::PredictionService;
use crate::AppState;

/// Predict fire risk from a JSON body
pub async fn predict_risk(State(state): State<AppState>, body: Bytes) -> Json<RiskAssessment> {
    let input = ReadingInput::from_json(&body);
    tracing::debug!("Prediction body read as {:?}", input);

    let service = PredictionService::new(state.config.prediction.simulated_delay_ms);
    Json(service.predict(&input).await)
}

/// Predict fire risk from query parameters.
///
/// The query is taken as raw pairs so a repeated key cannot reject the
/// request; the first value of each key is used.
pub async fn predict_risk_from_query(
    State(state): State<AppState>,
    query: Option<Query<Vec<(String, String)>>>,
) -> Json<RiskAssessment> {
    let pairs = query.map(|Query(pairs)| pairs).unwrap_or_default();
    let input = ReadingInput::from_pairs(pairs.iter().map(|(k, v)| (k.as_str(), v.as_str())));

    let service = PredictionService::new(state.config.prediction.simulated_delay_ms);
    Json(service.predict(&input).await)
}

/// Legend of all risk levels with their fixed rule outputs
pub async fn list_risk_levels() -> Json<Vec<RiskLevelInfo>> {
    Json(RiskLevel::ALL.into_iter().map(RiskLevelInfo::from).collect())
}
