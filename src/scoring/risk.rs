// Risk score formula.
//
// The 0-100 score is a weighted combination of three signals: threat
// probability, bullying probability, and the complement of the anomaly
// score. The anomaly score is clamped to [-1, 1] before folding so a
// detector outside its documented range degrades the score instead of
// pushing it out of bounds.
//
// `score = round(100 * (threat*0.4 + bullying*0.4 + (1 - anomaly)*0.2), 2)`

use crate::error::Result;
use crate::features::FeatureVector;
use crate::models::traits::SEQUENCE_STEPS;
use crate::models::ModelSet;

/// Configurable weights for the risk formula.
pub struct RiskWeights {
    /// Weight of the threat classifier probability (default 0.4)
    pub threat_weight: f64,
    /// Weight of the bullying classifier probability (default 0.4)
    pub bullying_weight: f64,
    /// Weight of the anomaly complement, 1 - anomaly score (default 0.2)
    pub anomaly_weight: f64,
    /// Escalation probability above this predicts escalation (default 0.7,
    /// strict comparison)
    pub escalation_threshold: f64,
}

impl Default for RiskWeights {
    fn default() -> Self {
        Self {
            threat_weight: 0.4,
            bullying_weight: 0.4,
            anomaly_weight: 0.2,
            escalation_threshold: 0.7,
        }
    }
}

/// Raw model outputs plus the combined risk score.
#[derive(Debug, Clone)]
pub struct ScoreOutputs {
    pub threat_probability: f64,
    pub bullying_probability: f64,
    pub anomaly_score: f64,
    pub escalation_probability: f64,
    pub escalation_predicted: bool,
    /// Rounded to 2 decimals and clamped to [0, 100]
    pub risk_score: f64,
}

/// Run every model slot on the feature vector and combine the outputs.
///
/// Fallback slots make this infallible in practice; a loaded model can
/// still fail at inference time, which surfaces as an error.
pub fn score(
    features: &FeatureVector,
    models: &ModelSet,
    weights: &RiskWeights,
) -> Result<ScoreOutputs> {
    let threat = models.threat.predict_proba(features)?;
    let bullying = models.bullying.predict_proba(features)?;
    let anomaly = models.anomaly.decision_function(features)?;
    let escalation = models
        .escalation
        .predict(&sequence_window(features.as_slice()))?;

    Ok(ScoreOutputs {
        threat_probability: threat,
        bullying_probability: bullying,
        anomaly_score: anomaly,
        escalation_probability: escalation,
        // Strict comparison on the raw probability, before any rounding
        escalation_predicted: escalation > weights.escalation_threshold,
        risk_score: combine(threat, bullying, anomaly, weights),
    })
}

/// Combine the three signals into the rounded, clamped 0-100 risk score.
pub fn combine(threat: f64, bullying: f64, anomaly: f64, weights: &RiskWeights) -> f64 {
    let anomaly = anomaly.clamp(-1.0, 1.0);
    let raw = (threat * weights.threat_weight
        + bullying * weights.bullying_weight
        + (1.0 - anomaly) * weights.anomaly_weight)
        * 100.0;

    round2(raw.clamp(0.0, 100.0))
}

/// Reshape feature values into the sequence model's input window:
/// zero-padded or truncated to exactly SEQUENCE_STEPS values.
pub fn sequence_window(values: &[f32]) -> [f32; SEQUENCE_STEPS] {
    let mut window = [0.0f32; SEQUENCE_STEPS];
    for (slot, value) in window.iter_mut().zip(values) {
        *slot = *value;
    }
    window
}

/// Round to 2 decimal places (the risk score's resolution).
pub fn round2(x: f64) -> f64 {
    (x * 100.0).round() / 100.0
}

/// Round to 4 decimal places (the probability fields' resolution).
pub fn round4(x: f64) -> f64 {
    (x * 10_000.0).round() / 10_000.0
}
