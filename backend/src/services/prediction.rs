//! Prediction service wrapping the rule-based risk classifier

use std::time::Duration;

use shared::{ReadingInput, RiskAssessment, RiskClassifier};

/// Runs the classifier, optionally after an artificial delay
#[derive(Clone, Debug, Default)]
pub struct PredictionService {
    classifier: RiskClassifier,
    simulated_delay: Option<Duration>,
}

impl PredictionService {
    pub fn new(simulated_delay_ms: u64) -> Self {
        Self {
            classifier: RiskClassifier::new(),
            simulated_delay: (simulated_delay_ms > 0)
                .then(|| Duration::from_millis(simulated_delay_ms)),
        }
    }

    /// Classify raw readings. Never fails: missing values are defaulted.
    pub async fn predict(&self, input: &ReadingInput) -> RiskAssessment {
        if let Some(delay) = self.simulated_delay {
            tokio::time::sleep(delay).await;
        }

        let assessment = self.classifier.classify_input(input);
        tracing::debug!(
            risk_level = %assessment.risk_level,
            temperature = assessment.factors.temperature,
            humidity = assessment.factors.humidity,
            "Classified fire risk"
        );
        assessment
    }
}
