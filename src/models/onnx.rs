// Local ONNX implementations of the model capability traits.
//
// Models are exported from the platform's training pipeline as ONNX graphs
// over the numeric feature vector (the escalation model consumes a 10-step
// window instead). Each graph has a single f32 output and a single input
// named "features" ("sequence" for the escalation model).
// Inference runs entirely on the local CPU; sessions are serialized behind
// a mutex because ort::Session::run takes &mut self.

use std::path::Path;
use std::sync::Mutex;

use anyhow::Context;
use ort::session::Session;
use ort::value::Tensor;
use tracing::debug;

use super::traits::{AnomalyDetector, Classifier, SequenceModel, SEQUENCE_STEPS};
use crate::error::{AnalysisError, Result};
use crate::features::{FeatureVector, FEATURE_LEN};

/// ONNX-backed binary classifier (threat or bullying slot).
pub struct OnnxClassifier {
    session: Mutex<Session>,
}

impl OnnxClassifier {
    /// Load a classifier graph from an ONNX file.
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        Ok(Self {
            session: Mutex::new(load_session(path)?),
        })
    }
}

impl Classifier for OnnxClassifier {
    fn predict_proba(&self, features: &FeatureVector) -> Result<f64> {
        let row = run_features(&self.session, features)?;
        Ok(class_one_probability(&row))
    }
}

/// ONNX-backed anomaly detector. The graph outputs the raw decision score,
/// lower meaning more anomalous.
pub struct OnnxAnomalyDetector {
    session: Mutex<Session>,
}

impl OnnxAnomalyDetector {
    /// Load an anomaly detector graph from an ONNX file.
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        Ok(Self {
            session: Mutex::new(load_session(path)?),
        })
    }
}

impl AnomalyDetector for OnnxAnomalyDetector {
    fn decision_function(&self, features: &FeatureVector) -> Result<f64> {
        let row = run_features(&self.session, features)?;
        row.first()
            .map(|v| *v as f64)
            .ok_or_else(|| AnalysisError::inference("anomaly model produced no output"))
    }
}

/// ONNX-backed sequence model for escalation prediction. The graph ends in
/// a sigmoid, so its single output is already a probability.
pub struct OnnxSequenceModel {
    session: Mutex<Session>,
}

impl OnnxSequenceModel {
    /// Load a sequence model graph from an ONNX file.
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        Ok(Self {
            session: Mutex::new(load_session(path)?),
        })
    }
}

impl SequenceModel for OnnxSequenceModel {
    fn predict(&self, window: &[f32; SEQUENCE_STEPS]) -> Result<f64> {
        // Input shape [1, SEQUENCE_STEPS, 1]: one sample, ten time steps of
        // one value each.
        let shape = [1i64, SEQUENCE_STEPS as i64, 1];
        let tensor = Tensor::from_array((shape, window.to_vec()))
            .map_err(|e| AnalysisError::inference(format!("failed to build sequence tensor: {e}")))?;

        let mut session = self
            .session
            .lock()
            .map_err(|e| AnalysisError::inference(format!("session lock poisoned: {e}")))?;

        let outputs = session
            .run(ort::inputs! { "sequence" => tensor })
            .map_err(|e| AnalysisError::inference(format!("sequence inference failed: {e}")))?;

        let (_shape, data) = outputs[0]
            .try_extract_tensor::<f32>()
            .map_err(|e| AnalysisError::inference(format!("failed to extract output tensor: {e}")))?;

        data.first()
            .map(|v| *v as f64)
            .ok_or_else(|| AnalysisError::inference("sequence model produced no output"))
    }
}

/// Load an ONNX session from a file with readable failure context.
fn load_session(path: &Path) -> anyhow::Result<Session> {
    let session = Session::builder()
        .context("Failed to create ONNX session builder")?
        .commit_from_file(path)
        .with_context(|| format!("Failed to load ONNX model from {}", path.display()))?;

    debug!("Loaded ONNX model from {}", path.display());
    Ok(session)
}

/// Run a feature-vector graph and return its flat output row.
fn run_features(session: &Mutex<Session>, features: &FeatureVector) -> Result<Vec<f32>> {
    let shape = [1i64, FEATURE_LEN as i64];
    let tensor = Tensor::from_array((shape, features.as_slice().to_vec()))
        .map_err(|e| AnalysisError::inference(format!("failed to build feature tensor: {e}")))?;

    let mut session = session
        .lock()
        .map_err(|e| AnalysisError::inference(format!("session lock poisoned: {e}")))?;

    let outputs = session
        .run(ort::inputs! { "features" => tensor })
        .map_err(|e| AnalysisError::inference(format!("inference failed: {e}")))?;

    let (_shape, data) = outputs[0]
        .try_extract_tensor::<f32>()
        .map_err(|e| AnalysisError::inference(format!("failed to extract output tensor: {e}")))?;

    Ok(data.to_vec())
}

/// Read the class-1 probability from a classifier output row.
///
/// A two-column row is a class-probability pair; a single value is a raw
/// logit and goes through sigmoid.
fn class_one_probability(row: &[f32]) -> f64 {
    match row {
        [_, class_one, ..] => *class_one as f64,
        [logit] => sigmoid(*logit as f64),
        [] => 0.0,
    }
}

/// Sigmoid activation: maps any real number to (0, 1).
fn sigmoid(x: f64) -> f64 {
    1.0 / (1.0 + (-x).exp())
}
