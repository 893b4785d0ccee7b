//! Models for the VanSuraksha platform
//!
//! Re-exports models from the shared crate and adds backend-specific models

pub use shared::models::*;

use serde::Serialize;

/// Legend entry describing one risk level
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RiskLevelInfo {
    pub level: RiskLevel,
    pub label: &'static str,
    pub color: &'static str,
    pub radius_meters: u32,
    pub confidence: f64,
    pub recommendation: &'static str,
}

impl From<RiskLevel> for RiskLevelInfo {
    fn from(level: RiskLevel) -> Self {
        Self {
            level,
            label: level.label(),
            color: level.color(),
            radius_meters: level.map_radius_meters(),
            confidence: level.confidence(),
            recommendation: level.recommendation(),
        }
    }
}

/// Everything the dashboard page renders
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardOverview {
    pub stats: DashboardStats,
    pub distribution: Vec<RiskDistributionEntry>,
    pub recent_predictions: Vec<RegionalSample>,
    pub priority_regions: usize,
}
