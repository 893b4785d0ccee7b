//! Dashboard aggregates

use std::sync::Arc;

use shared::{SampleStore, RECENT_PREDICTIONS};

use crate::models::DashboardOverview;

#[derive(Clone)]
pub struct DashboardService {
    store: Arc<SampleStore>,
}

impl DashboardService {
    pub fn new(store: Arc<SampleStore>) -> Self {
        Self { store }
    }

    pub fn overview(&self) -> DashboardOverview {
        DashboardOverview {
            stats: self.store.stats(),
            distribution: self.store.distribution(),
            recent_predictions: self.store.recent(RECENT_PREDICTIONS).to_vec(),
            priority_regions: self.store.priority_region_count(),
        }
    }
}
