// Pipeline entry — runs the full analysis for one text sample.
//
// Stages run strictly left to right: feature extraction, model scoring,
// indicator extraction, recommendation. The result is computed once and
// returned; persisting it is the caller's responsibility.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{AnalysisError, Result};
use crate::features;
use crate::indicators;
use crate::language::Language;
use crate::models::ModelSet;
use crate::scoring::recommend::{self, RecommendedAction};
use crate::scoring::risk::{self, RiskWeights};

/// Complete analysis for one text sample, ready for JSON serialization.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisResult {
    /// 0-100, rounded to 2 decimals
    pub risk_score: f64,
    /// Probabilities rounded to 4 decimals
    pub threat_probability: f64,
    pub bullying_probability: f64,
    pub anomaly_score: f64,
    pub escalation_predicted: bool,
    pub escalation_probability: f64,
    /// Human-readable flags, in fixed check order; may be empty
    pub key_indicators: Vec<String>,
    pub recommended_action: RecommendedAction,
}

/// Analyze a text sample with the default weights.
pub fn analyze(text: &str, language: Language, models: &ModelSet) -> Result<AnalysisResult> {
    analyze_with_weights(text, language, models, &RiskWeights::default())
}

/// Analyze a text sample with explicit weights.
pub fn analyze_with_weights(
    text: &str,
    language: Language,
    models: &ModelSet,
    weights: &RiskWeights,
) -> Result<AnalysisResult> {
    // The one malformed shape a &str caller can still hand us. Reject it
    // instead of silently passing it downstream.
    if text.contains('\0') {
        return Err(AnalysisError::invalid_input(
            "text contains an interior NUL character",
        ));
    }

    let features = features::extract(text, language);
    let outputs = risk::score(&features, models, weights)?;
    let key_indicators = indicators::extract(text);
    let recommended_action =
        recommend::recommend(outputs.risk_score, outputs.escalation_probability);

    debug!(
        risk = outputs.risk_score,
        action = recommended_action.as_str(),
        indicators = key_indicators.len(),
        language = language.as_str(),
        "Analyzed sample"
    );

    Ok(AnalysisResult {
        risk_score: outputs.risk_score,
        threat_probability: risk::round4(outputs.threat_probability),
        bullying_probability: risk::round4(outputs.bullying_probability),
        anomaly_score: risk::round4(outputs.anomaly_score),
        escalation_predicted: outputs.escalation_predicted,
        escalation_probability: risk::round4(outputs.escalation_probability),
        key_indicators,
        recommended_action,
    })
}
