//! Regional risk samples and dashboard aggregates

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::risk::RiskLevel;
use crate::types::GpsCoordinates;

/// A pre-labelled regional risk record shown on the dashboard and map
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RegionalSample {
    pub id: String,
    pub region: String,
    pub latitude: f64,
    pub longitude: f64,
    pub risk_level: RiskLevel,
    pub temperature: f64,
    pub humidity: f64,
    pub wind_speed: f64,
    /// Rainfall in mm
    pub rainfall: f64,
    pub predicted_date: NaiveDate,
    pub confidence: f64,
}

impl RegionalSample {
    pub fn coordinates(&self) -> GpsCoordinates {
        GpsCoordinates::new(self.latitude, self.longitude)
    }
}

/// Aggregate counters for the dashboard header
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    pub total_predictions: u64,
    pub high_risk_zones: u32,
    pub average_confidence: f64,
    pub regions_monitored: u32,
}

/// Share of samples at one risk level
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RiskDistributionEntry {
    pub level: RiskLevel,
    pub label: String,
    pub count: usize,
    pub percentage: f64,
}

/// Count samples per level, most severe first
pub fn risk_distribution(samples: &[RegionalSample]) -> Vec<RiskDistributionEntry> {
    let total = samples.len();
    RiskLevel::ALL
        .iter()
        .rev()
        .map(|&level| {
            let count = samples.iter().filter(|s| s.risk_level == level).count();
            let percentage = if total == 0 {
                0.0
            } else {
                count as f64 / total as f64 * 100.0
            };
            RiskDistributionEntry {
                level,
                label: level.label().to_string(),
                count,
                percentage,
            }
        })
        .collect()
}

/// Map marker derived from a sample
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MapMarker {
    pub id: String,
    pub region: String,
    pub position: GpsCoordinates,
    pub risk_level: RiskLevel,
    pub color: String,
    pub radius_meters: u32,
}

impl From<&RegionalSample> for MapMarker {
    fn from(sample: &RegionalSample) -> Self {
        Self {
            id: sample.id.clone(),
            region: sample.region.clone(),
            position: sample.coordinates(),
            risk_level: sample.risk_level,
            color: sample.risk_level.color().to_string(),
            radius_meters: sample.risk_level.map_radius_meters(),
        }
    }
}

/// Initial viewport and markers for the risk map
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MapView {
    pub center: GpsCoordinates,
    pub zoom: u8,
    pub markers: Vec<MapMarker>,
}
