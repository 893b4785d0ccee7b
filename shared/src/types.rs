//! Common types used across the platform

use serde::{Deserialize, Serialize};

/// GPS coordinates
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct GpsCoordinates {
    pub latitude: f64,
    pub longitude: f64,
}

impl GpsCoordinates {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }
}

/// Centre of the risk map (geographic centre of India)
pub const MAP_CENTER: GpsCoordinates = GpsCoordinates {
    latitude: 20.5937,
    longitude: 78.9629,
};

/// Initial zoom of the risk map
pub const MAP_ZOOM: u8 = 5;
