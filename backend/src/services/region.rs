//! Region service over the static sample store

use std::sync::Arc;

use shared::{MapView, RegionalSample, RiskLevel, SampleStore};

use crate::error::{AppError, AppResult};

/// Read-only access to regional samples
#[derive(Clone)]
pub struct RegionService {
    store: Arc<SampleStore>,
}

impl RegionService {
    pub fn new(store: Arc<SampleStore>) -> Self {
        Self { store }
    }

    /// List samples, optionally only those at one level
    pub fn list(&self, level: Option<RiskLevel>) -> Vec<RegionalSample> {
        match level {
            Some(level) => self.store.regions_at(level).into_iter().cloned().collect(),
            None => self.store.regions().to_vec(),
        }
    }

    pub fn get(&self, id: &str) -> AppResult<RegionalSample> {
        self.store
            .region(id)
            .cloned()
            .ok_or_else(|| AppError::NotFound(format!("Region {}", id)))
    }

    pub fn map_view(&self) -> MapView {
        self.store.map_view()
    }

    /// Export samples as CSV
    pub fn export_to_csv(samples: &[RegionalSample]) -> AppResult<String> {
        let mut wtr = csv::Writer::from_writer(vec![]);
        for record in samples {
            wtr.serialize(record)
                .map_err(|e| AppError::Internal(format!("CSV serialization error: {}", e)))?;
        }
        let csv_data = String::from_utf8(
            wtr.into_inner()
                .map_err(|e| AppError::Internal(format!("CSV writer error: {}", e)))?,
        )
        .map_err(|e| AppError::Internal(format!("UTF-8 conversion error: {}", e)))?;
        Ok(csv_data)
    }
}
