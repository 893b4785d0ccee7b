//! Static sample store backing the dashboard and the risk map
//!
//! The records are fixed seed data. They are labelled by hand and are never
//! produced by the classifier.

use chrono::NaiveDate;

use crate::models::{
    risk_distribution, DashboardStats, MapMarker, MapView, RegionalSample, RiskDistributionEntry,
    RiskLevel,
};
use crate::types::{MAP_CENTER, MAP_ZOOM};

/// Number of samples listed as recent predictions on the dashboard
pub const RECENT_PREDICTIONS: usize = 5;

/// Immutable in-memory store of regional samples and dashboard counters
#[derive(Debug, Clone)]
pub struct SampleStore {
    samples: Vec<RegionalSample>,
    stats: DashboardStats,
}

impl SampleStore {
    pub fn new(samples: Vec<RegionalSample>, stats: DashboardStats) -> Self {
        Self { samples, stats }
    }

    /// Store loaded with the built-in seed dataset
    pub fn seeded() -> Self {
        let predicted = NaiveDate::from_ymd_opt(2025, 11, 16).unwrap_or_default();
        let sample = |id: &str,
                      region: &str,
                      (latitude, longitude): (f64, f64),
                      risk_level: RiskLevel,
                      (temperature, humidity, wind_speed, rainfall): (f64, f64, f64, f64),
                      confidence: f64| RegionalSample {
            id: id.to_string(),
            region: region.to_string(),
            latitude,
            longitude,
            risk_level,
            temperature,
            humidity,
            wind_speed,
            rainfall,
            predicted_date: predicted,
            confidence,
        };

        let samples = vec![
            sample(
                "1",
                "Western Ghats, Karnataka",
                (12.9716, 77.5946),
                RiskLevel::High,
                (38.0, 25.0, 15.0, 0.0),
                0.87,
            ),
            sample(
                "2",
                "Aravalli Range, Rajasthan",
                (26.9124, 75.7873),
                RiskLevel::Severe,
                (42.0, 18.0, 22.0, 0.0),
                0.92,
            ),
            sample(
                "3",
                "Nilgiri Hills, Tamil Nadu",
                (11.4102, 76.6950),
                RiskLevel::Moderate,
                (32.0, 45.0, 8.0, 2.0),
                0.75,
            ),
            sample(
                "4",
                "Simlipal Forest, Odisha",
                (21.6281, 86.2529),
                RiskLevel::Low,
                (28.0, 65.0, 5.0, 15.0),
                0.68,
            ),
            sample(
                "5",
                "Jim Corbett National Park, Uttarakhand",
                (29.5317, 78.7568),
                RiskLevel::High,
                (36.0, 30.0, 18.0, 0.0),
                0.84,
            ),
            sample(
                "6",
                "Sundarbans, West Bengal",
                (21.9497, 89.1833),
                RiskLevel::Low,
                (30.0, 75.0, 10.0, 25.0),
                0.71,
            ),
        ];

        let stats = DashboardStats {
            total_predictions: 1247,
            high_risk_zones: 23,
            average_confidence: 0.82,
            regions_monitored: 156,
        };

        Self::new(samples, stats)
    }

    pub fn regions(&self) -> &[RegionalSample] {
        &self.samples
    }

    pub fn region(&self, id: &str) -> Option<&RegionalSample> {
        self.samples.iter().find(|s| s.id == id)
    }

    /// Samples labelled with `level`, in seed order
    pub fn regions_at(&self, level: RiskLevel) -> Vec<&RegionalSample> {
        self.samples.iter().filter(|s| s.risk_level == level).collect()
    }

    /// The first `n` samples
    pub fn recent(&self, n: usize) -> &[RegionalSample] {
        &self.samples[..n.min(self.samples.len())]
    }

    pub fn stats(&self) -> DashboardStats {
        self.stats
    }

    pub fn distribution(&self) -> Vec<RiskDistributionEntry> {
        risk_distribution(&self.samples)
    }

    /// Samples at high or severe risk
    pub fn priority_region_count(&self) -> usize {
        self.samples.iter().filter(|s| s.risk_level.is_priority()).count()
    }

    pub fn map_view(&self) -> MapView {
        MapView {
            center: MAP_CENTER,
            zoom: MAP_ZOOM,
            markers: self.samples.iter().map(MapMarker::from).collect(),
        }
    }
}

impl Default for SampleStore {
    fn default() -> Self {
        Self::seeded()
    }
}
