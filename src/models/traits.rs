// Model capability traits — the swap-ready abstraction.
//
// Each slot in the pipeline is a capability: binary classifiers for threat
// and bullying, an anomaly detector, and a sequence model for escalation.
// Every capability has an ONNX-backed implementation and a constant
// fallback; the loader picks one per slot at startup, so call sites never
// branch on model availability.

use crate::error::Result;
use crate::features::FeatureVector;

/// Time steps the sequence model consumes. Feature vectors are zero-padded
/// or truncated to exactly this many values before prediction.
pub const SEQUENCE_STEPS: usize = 10;

/// Class-1 probability when no classifier is loaded.
pub const NEUTRAL_PROBABILITY: f64 = 0.5;

/// Anomaly score when no detector is loaded.
pub const NEUTRAL_ANOMALY: f64 = 0.0;

/// Binary classifier capability: class-1 probability for a feature vector.
///
/// Implementations must be safe to share across threads; loaded models are
/// treated as read-only for the lifetime of the process.
pub trait Classifier: Send + Sync {
    fn predict_proba(&self, features: &FeatureVector) -> Result<f64>;
}

/// Anomaly detector capability: real-valued score where lower is more
/// anomalous.
pub trait AnomalyDetector: Send + Sync {
    fn decision_function(&self, features: &FeatureVector) -> Result<f64>;
}

/// Sequence model capability: probability from a fixed 10-step window.
pub trait SequenceModel: Send + Sync {
    fn predict(&self, window: &[f32; SEQUENCE_STEPS]) -> Result<f64>;
}

/// Fallback classifier returning a fixed probability. Installed when no
/// model file is available: a deliberate neutral default, not an error.
pub struct ConstantClassifier(pub f64);

impl Classifier for ConstantClassifier {
    fn predict_proba(&self, _features: &FeatureVector) -> Result<f64> {
        Ok(self.0)
    }
}

/// Fallback anomaly detector returning a fixed score.
pub struct ConstantAnomalyDetector(pub f64);

impl AnomalyDetector for ConstantAnomalyDetector {
    fn decision_function(&self, _features: &FeatureVector) -> Result<f64> {
        Ok(self.0)
    }
}

/// Fallback sequence model returning a fixed probability.
pub struct ConstantSequenceModel(pub f64);

impl SequenceModel for ConstantSequenceModel {
    fn predict(&self, _window: &[f32; SEQUENCE_STEPS]) -> Result<f64> {
        Ok(self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features;
    use crate::language::Language;

    #[test]
    fn constant_fallbacks_return_their_values() {
        let features = features::extract("anything", Language::En);

        assert_eq!(
            ConstantClassifier(NEUTRAL_PROBABILITY)
                .predict_proba(&features)
                .unwrap(),
            0.5
        );
        assert_eq!(
            ConstantAnomalyDetector(NEUTRAL_ANOMALY)
                .decision_function(&features)
                .unwrap(),
            0.0
        );
        assert_eq!(
            ConstantSequenceModel(NEUTRAL_PROBABILITY)
                .predict(&[0.0; SEQUENCE_STEPS])
                .unwrap(),
            0.5
        );
    }
}
