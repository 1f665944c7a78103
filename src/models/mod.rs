// Model loading and the injected model set.
//
// ModelSet holds one implementation per capability slot and is passed into
// the scoring functions explicitly; there is no process-global model
// state. Loading never fails: each slot falls back to its neutral constant
// when the model file is missing or unreadable, and the degradation is
// logged rather than surfaced.

use std::path::{Path, PathBuf};

use tracing::{info, warn};

pub mod onnx;
pub mod traits;

use traits::{
    AnomalyDetector, Classifier, ConstantAnomalyDetector, ConstantClassifier,
    ConstantSequenceModel, SequenceModel, NEUTRAL_ANOMALY, NEUTRAL_PROBABILITY,
};

pub const THREAT_MODEL_FILE: &str = "threat.onnx";
pub const BULLYING_MODEL_FILE: &str = "bullying.onnx";
pub const ANOMALY_MODEL_FILE: &str = "anomaly.onnx";
pub const ESCALATION_MODEL_FILE: &str = "escalation.onnx";

/// Which slots hold a real model rather than the constant fallback.
#[derive(Debug, Clone, Copy, Default)]
pub struct ModelStatus {
    pub threat: bool,
    pub bullying: bool,
    pub anomaly: bool,
    pub escalation: bool,
}

/// The four model slots the scorer draws from.
pub struct ModelSet {
    pub threat: Box<dyn Classifier>,
    pub bullying: Box<dyn Classifier>,
    pub anomaly: Box<dyn AnomalyDetector>,
    pub escalation: Box<dyn SequenceModel>,
    status: ModelStatus,
}

impl ModelSet {
    /// Build a set from explicit implementations (all slots counted as
    /// real). Mainly useful for wiring custom models in tests and callers
    /// that manage their own loading.
    pub fn new(
        threat: Box<dyn Classifier>,
        bullying: Box<dyn Classifier>,
        anomaly: Box<dyn AnomalyDetector>,
        escalation: Box<dyn SequenceModel>,
    ) -> Self {
        Self {
            threat,
            bullying,
            anomaly,
            escalation,
            status: ModelStatus {
                threat: true,
                bullying: true,
                anomaly: true,
                escalation: true,
            },
        }
    }

    /// Load models from the given directory, installing the neutral
    /// fallback for any slot whose file is missing or fails to load.
    pub fn load(dir: &Path) -> Self {
        let (threat, threat_ok) = load_classifier(dir.join(THREAT_MODEL_FILE));
        let (bullying, bullying_ok) = load_classifier(dir.join(BULLYING_MODEL_FILE));
        let (anomaly, anomaly_ok) = load_anomaly(dir.join(ANOMALY_MODEL_FILE));
        let (escalation, escalation_ok) = load_sequence(dir.join(ESCALATION_MODEL_FILE));

        Self {
            threat,
            bullying,
            anomaly,
            escalation,
            status: ModelStatus {
                threat: threat_ok,
                bullying: bullying_ok,
                anomaly: anomaly_ok,
                escalation: escalation_ok,
            },
        }
    }

    /// All-fallback set: every slot returns its documented neutral value
    /// (0.5 probabilities, 0.0 anomaly).
    pub fn fallback() -> Self {
        Self {
            threat: Box::new(ConstantClassifier(NEUTRAL_PROBABILITY)),
            bullying: Box::new(ConstantClassifier(NEUTRAL_PROBABILITY)),
            anomaly: Box::new(ConstantAnomalyDetector(NEUTRAL_ANOMALY)),
            escalation: Box::new(ConstantSequenceModel(NEUTRAL_PROBABILITY)),
            status: ModelStatus::default(),
        }
    }

    pub fn status(&self) -> ModelStatus {
        self.status
    }
}

/// Default directory for model files: the platform data dir, e.g.
/// ~/.local/share/vigil/models/ on Linux.
pub fn default_model_dir() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("vigil")
        .join("models")
}

fn load_classifier(path: PathBuf) -> (Box<dyn Classifier>, bool) {
    if !path.exists() {
        info!("No model at {}, using neutral fallback", path.display());
        return (Box::new(ConstantClassifier(NEUTRAL_PROBABILITY)), false);
    }
    match onnx::OnnxClassifier::load(&path) {
        Ok(model) => (Box::new(model), true),
        Err(e) => {
            warn!(
                "Failed to load {}: {e:#}. Using neutral fallback",
                path.display()
            );
            (Box::new(ConstantClassifier(NEUTRAL_PROBABILITY)), false)
        }
    }
}

fn load_anomaly(path: PathBuf) -> (Box<dyn AnomalyDetector>, bool) {
    if !path.exists() {
        info!("No model at {}, using neutral fallback", path.display());
        return (Box::new(ConstantAnomalyDetector(NEUTRAL_ANOMALY)), false);
    }
    match onnx::OnnxAnomalyDetector::load(&path) {
        Ok(model) => (Box::new(model), true),
        Err(e) => {
            warn!(
                "Failed to load {}: {e:#}. Using neutral fallback",
                path.display()
            );
            (Box::new(ConstantAnomalyDetector(NEUTRAL_ANOMALY)), false)
        }
    }
}

fn load_sequence(path: PathBuf) -> (Box<dyn SequenceModel>, bool) {
    if !path.exists() {
        info!("No model at {}, using neutral fallback", path.display());
        return (Box::new(ConstantSequenceModel(NEUTRAL_PROBABILITY)), false);
    }
    match onnx::OnnxSequenceModel::load(&path) {
        Ok(model) => (Box::new(model), true),
        Err(e) => {
            warn!(
                "Failed to load {}: {e:#}. Using neutral fallback",
                path.display()
            );
            (Box::new(ConstantSequenceModel(NEUTRAL_PROBABILITY)), false)
        }
    }
}
