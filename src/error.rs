// Library error type.
//
// Only two conditions are distinguishable: malformed input, and a loaded
// model failing at inference time. Model *absence* is not an error; the
// loader installs constant fallbacks instead, and the pipeline runs in
// degraded mode without surfacing anything to the caller.

/// Result type alias for pipeline operations.
pub type Result<T> = std::result::Result<T, AnalysisError>;

#[derive(Debug, thiserror::Error)]
pub enum AnalysisError {
    /// The input text is malformed (e.g. contains an interior NUL).
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// A loaded model failed during inference.
    #[error("inference error: {0}")]
    Inference(String),
}

impl AnalysisError {
    /// Create a new invalid-input error
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }

    /// Create a new inference error
    pub fn inference(msg: impl Into<String>) -> Self {
        Self::Inference(msg.into())
    }
}
