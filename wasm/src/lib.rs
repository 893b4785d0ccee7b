//! WebAssembly module for the VanSuraksha fire risk platform
//!
//! Provides client-side computation for:
//! - Fire risk classification
//! - Risk badge and map marker metadata
//! - Static regional sample data for the dashboard and map
//! - Prediction form state

use serde::Serialize;
use wasm_bindgen::prelude::*;

// Re-export shared types for use in JavaScript
pub use shared::models::*;
pub use shared::store::*;
pub use shared::types::*;
pub use shared::validation::*;

use shared::lenient::parse_number;

/// Latency the prediction page shows before revealing a result, in ms
pub const SIMULATED_DELAY_MS: u32 = 2000;

/// Initialize the WASM module
#[wasm_bindgen(start)]
pub fn init() {
    #[cfg(target_arch = "wasm32")]
    web_sys::console::log_1(&"VanSuraksha risk module loaded".into());
}

fn to_json<T: Serialize>(value: &T) -> String {
    serde_json::to_string(value).unwrap_or_default()
}

/// Classify fire risk; any reading left undefined is defaulted.
/// Returns the assessment as JSON.
#[wasm_bindgen]
pub fn classify_fire_risk(
    temperature: Option<f64>,
    humidity: Option<f64>,
    wind_speed: Option<f64>,
    vegetation_index: Option<f64>,
) -> String {
    let input = ReadingInput {
        temperature,
        humidity,
        wind_speed,
        vegetation_index,
        rainfall: None,
    };
    to_json(&RiskClassifier::new().classify_input(&input))
}

/// Classify fire risk from a JSON object of readings.
/// Unreadable JSON is treated as an empty object.
#[wasm_bindgen]
pub fn predict_fire_risk_json(input_json: &str) -> String {
    let input = ReadingInput::from_json(input_json.as_bytes());
    to_json(&RiskClassifier::new().classify_input(&input))
}

/// Badge label for a risk level name, e.g. "high" -> "High Risk"
#[wasm_bindgen]
pub fn risk_level_label(level: &str) -> Option<String> {
    level.parse::<RiskLevel>().ok().map(|l| l.label().to_string())
}

/// Marker colour for a risk level name
#[wasm_bindgen]
pub fn risk_level_color(level: &str) -> Option<String> {
    level.parse::<RiskLevel>().ok().map(|l| l.color().to_string())
}

/// Map circle radius in metres for a risk level name
#[wasm_bindgen]
pub fn risk_level_radius(level: &str) -> Option<u32> {
    level.parse::<RiskLevel>().ok().map(|l| l.map_radius_meters())
}

/// All regional samples as JSON
#[wasm_bindgen]
pub fn sample_regions_json() -> String {
    to_json(&SampleStore::seeded().regions())
}

/// Map viewport and markers as JSON
#[wasm_bindgen]
pub fn map_view_json() -> String {
    to_json(&SampleStore::seeded().map_view())
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct Dashboard<'a> {
    stats: DashboardStats,
    distribution: Vec<RiskDistributionEntry>,
    recent_predictions: &'a [RegionalSample],
    priority_regions: usize,
}

/// Dashboard stats, distribution and recent predictions as JSON
#[wasm_bindgen]
pub fn dashboard_json() -> String {
    let store = SampleStore::seeded();
    to_json(&Dashboard {
        stats: store.stats(),
        distribution: store.distribution(),
        recent_predictions: store.recent(RECENT_PREDICTIONS),
        priority_regions: store.priority_region_count(),
    })
}

/// State of one prediction page.
///
/// Fields hold the raw text typed by the user. Each page owns its own form.
#[wasm_bindgen]
#[derive(Debug, Clone, Default)]
pub struct PredictionForm {
    temperature: String,
    humidity: String,
    wind_speed: String,
    rainfall: String,
    vegetation: String,
}

#[wasm_bindgen]
impl PredictionForm {
    #[wasm_bindgen(constructor)]
    pub fn new() -> PredictionForm {
        PredictionForm::default()
    }

    /// Update one field by its form name. Returns false for unknown names.
    pub fn set_field(&mut self, name: &str, value: &str) -> bool {
        let slot = match name {
            "temperature" => &mut self.temperature,
            "humidity" => &mut self.humidity,
            "windSpeed" => &mut self.wind_speed,
            "rainfall" => &mut self.rainfall,
            "vegetation" => &mut self.vegetation,
            _ => return false,
        };
        *slot = value.to_string();
        true
    }

    /// Name of the first empty field, if any
    pub fn missing_field(&self) -> Option<String> {
        validate_required_fields(&self.fields())
            .err()
            .map(str::to_string)
    }

    /// The submit button is enabled only once every field is filled in
    pub fn is_complete(&self) -> bool {
        self.missing_field().is_none()
    }

    /// Classify the current field values and return the assessment as JSON
    pub fn predict(&self) -> String {
        to_json(&self.assess())
    }

    pub fn reset(&mut self) {
        *self = PredictionForm::default();
    }

    pub fn simulated_delay_ms(&self) -> u32 {
        SIMULATED_DELAY_MS
    }
}

impl PredictionForm {
    fn fields(&self) -> [(&'static str, &str); 5] {
        [
            ("temperature", self.temperature.as_str()),
            ("humidity", self.humidity.as_str()),
            ("windSpeed", self.wind_speed.as_str()),
            ("rainfall", self.rainfall.as_str()),
            ("vegetation", self.vegetation.as_str()),
        ]
    }

    fn reading_input(&self) -> ReadingInput {
        ReadingInput {
            temperature: parse_number(&self.temperature),
            humidity: parse_number(&self.humidity),
            wind_speed: parse_number(&self.wind_speed),
            vegetation_index: parse_number(&self.vegetation),
            rainfall: parse_number(&self.rainfall),
        }
    }

    /// Classify the current field values
    pub fn assess(&self) -> RiskAssessment {
        RiskClassifier::new().classify_input(&self.reading_input())
    }
}
