//! Fire risk levels and the rule-based risk classifier

use crate::lenient;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::str::FromStr;
use thiserror::Error;

/// Default temperature (°C) used when a reading is missing or malformed
pub const DEFAULT_TEMPERATURE: f64 = 35.0;
/// Default relative humidity (%)
pub const DEFAULT_HUMIDITY: f64 = 30.0;
/// Default wind speed (km/h)
pub const DEFAULT_WIND_SPEED: f64 = 15.0;
/// Default NDVI vegetation index
pub const DEFAULT_VEGETATION_INDEX: f64 = 0.65;

/// Ordinal fire risk category
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "lowercase")]
pub enum RiskLevel {
    Low,
    Moderate,
    High,
    Severe,
}

impl RiskLevel {
    /// All levels, least to most severe
    pub const ALL: [RiskLevel; 4] = [
        RiskLevel::Low,
        RiskLevel::Moderate,
        RiskLevel::High,
        RiskLevel::Severe,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            RiskLevel::Low => "low",
            RiskLevel::Moderate => "moderate",
            RiskLevel::High => "high",
            RiskLevel::Severe => "severe",
        }
    }

    /// Badge label
    pub fn label(&self) -> &'static str {
        match self {
            RiskLevel::Low => "Low Risk",
            RiskLevel::Moderate => "Moderate Risk",
            RiskLevel::High => "High Risk",
            RiskLevel::Severe => "Severe Risk",
        }
    }

    /// Hex colour used for badges and map markers
    pub fn color(&self) -> &'static str {
        match self {
            RiskLevel::Low => "#22c55e",
            RiskLevel::Moderate => "#eab308",
            RiskLevel::High => "#f97316",
            RiskLevel::Severe => "#ef4444",
        }
    }

    /// Radius in metres of the risk circle drawn around a map marker
    pub fn map_radius_meters(&self) -> u32 {
        match self {
            RiskLevel::Low => 15_000,
            RiskLevel::Moderate => 20_000,
            RiskLevel::High => 25_000,
            RiskLevel::Severe => 30_000,
        }
    }

    /// Fixed confidence attached to the rule that yields this level.
    /// Not a probability.
    pub fn confidence(&self) -> f64 {
        match self {
            RiskLevel::Low => 0.71,
            RiskLevel::Moderate => 0.78,
            RiskLevel::High => 0.85,
            RiskLevel::Severe => 0.92,
        }
    }

    pub fn recommendation(&self) -> &'static str {
        match self {
            RiskLevel::Low => "Low risk. Continue standard forest management practices.",
            RiskLevel::Moderate => {
                "Moderate risk. Continue regular monitoring and maintain alert status."
            }
            RiskLevel::High => {
                "High risk detected. Increase monitoring and prepare firefighting resources."
            }
            RiskLevel::Severe => {
                "Immediate action required. Deploy fire prevention teams and issue public warnings."
            }
        }
    }

    /// High and severe regions are flagged for priority attention
    pub fn is_priority(&self) -> bool {
        matches!(self, RiskLevel::High | RiskLevel::Severe)
    }
}

impl std::fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown risk level: {0}")]
pub struct ParseRiskLevelError(pub String);

impl FromStr for RiskLevel {
    type Err = ParseRiskLevelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "low" => Ok(RiskLevel::Low),
            "moderate" => Ok(RiskLevel::Moderate),
            "high" => Ok(RiskLevel::High),
            "severe" => Ok(RiskLevel::Severe),
            _ => Err(ParseRiskLevelError(s.to_string())),
        }
    }
}

/// Environmental readings after defaulting
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct EnvironmentalReading {
    /// Air temperature in °C
    pub temperature: f64,
    /// Relative humidity in %
    pub humidity: f64,
    /// Wind speed in km/h
    pub wind_speed: f64,
    /// NDVI, 0 to 1
    pub vegetation_index: f64,
}

impl Default for EnvironmentalReading {
    fn default() -> Self {
        Self {
            temperature: DEFAULT_TEMPERATURE,
            humidity: DEFAULT_HUMIDITY,
            wind_speed: DEFAULT_WIND_SPEED,
            vegetation_index: DEFAULT_VEGETATION_INDEX,
        }
    }
}

/// Raw, possibly incomplete readings as supplied by a caller.
///
/// Every field tolerates malformed input: anything that is not a finite
/// number or a string with a leading number is `None`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ReadingInput {
    pub temperature: Option<f64>,
    pub humidity: Option<f64>,
    pub wind_speed: Option<f64>,
    pub vegetation_index: Option<f64>,
    /// Collected by the prediction form, not used by the classifier
    pub rainfall: Option<f64>,
}

impl ReadingInput {
    /// Read a JSON object keyed by `temperature`, `humidity`, `windSpeed`,
    /// `vegetationIndex` and `rainfall`.
    ///
    /// Each member is read on its own; a body that is not a JSON object
    /// leaves every field absent.
    pub fn from_json(bytes: &[u8]) -> Self {
        let members = lenient::raw_object(bytes);
        Self::from_fields(|name| members.get(name).and_then(|raw| lenient::number_from_raw(raw)))
    }

    /// Read text key/value pairs such as a query string. When a key repeats,
    /// its first value is used.
    pub fn from_pairs<'a, I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let mut first: HashMap<&str, &str> = HashMap::new();
        for (key, value) in pairs {
            first.entry(key).or_insert(value);
        }
        Self::from_fields(|name| first.get(name).and_then(|value| lenient::parse_number(value)))
    }

    fn from_fields(field: impl Fn(&str) -> Option<f64>) -> Self {
        ReadingInput {
            temperature: field("temperature"),
            humidity: field("humidity"),
            wind_speed: field("windSpeed"),
            vegetation_index: field("vegetationIndex"),
            rainfall: field("rainfall"),
        }
    }

    /// Apply the fixed defaults to absent or non-finite readings
    pub fn resolve(&self) -> EnvironmentalReading {
        let pick = |value: Option<f64>, default: f64| {
            value.filter(|v| v.is_finite()).unwrap_or(default)
        };
        EnvironmentalReading {
            temperature: pick(self.temperature, DEFAULT_TEMPERATURE),
            humidity: pick(self.humidity, DEFAULT_HUMIDITY),
            wind_speed: pick(self.wind_speed, DEFAULT_WIND_SPEED),
            vegetation_index: pick(self.vegetation_index, DEFAULT_VEGETATION_INDEX),
        }
    }
}

/// Result of classifying one reading
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RiskAssessment {
    pub risk_level: RiskLevel,
    pub confidence: f64,
    /// The defaulted readings the decision was made on
    pub factors: EnvironmentalReading,
    pub recommendation: String,
}

/// Classify fire risk from temperature and humidity.
///
/// Rules are checked from most to least severe and the first match wins.
/// Both legs of every rule are strict, so e.g. 40°C / 20% is not severe.
pub fn classify_risk_level(temperature: f64, humidity: f64) -> RiskLevel {
    if temperature > 40.0 && humidity < 20.0 {
        RiskLevel::Severe
    } else if temperature > 35.0 && humidity < 30.0 {
        RiskLevel::High
    } else if temperature > 30.0 && humidity < 40.0 {
        RiskLevel::Moderate
    } else {
        RiskLevel::Low
    }
}

/// Rule-table classifier turning readings into a [`RiskAssessment`]
#[derive(Debug, Clone, Copy, Default)]
pub struct RiskClassifier;

impl RiskClassifier {
    pub fn new() -> Self {
        Self
    }

    /// Classify fully specified readings
    pub fn classify(
        &self,
        temperature: f64,
        humidity: f64,
        wind_speed: f64,
        vegetation_index: f64,
    ) -> RiskAssessment {
        self.assess(EnvironmentalReading {
            temperature,
            humidity,
            wind_speed,
            vegetation_index,
        })
    }

    /// Classify raw input, defaulting whatever is missing
    pub fn classify_input(&self, input: &ReadingInput) -> RiskAssessment {
        self.assess(input.resolve())
    }

    pub fn assess(&self, reading: EnvironmentalReading) -> RiskAssessment {
        let level = classify_risk_level(reading.temperature, reading.humidity);
        RiskAssessment {
            risk_level: level,
            confidence: level.confidence(),
            factors: reading,
            recommendation: level.recommendation().to_string(),
        }
    }
}
