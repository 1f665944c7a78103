use std::env;
use std::path::PathBuf;

use anyhow::Result;

use crate::language::Language;
use crate::models;

/// Central configuration loaded from environment variables.
///
/// Everything has a default; the .env file is loaded automatically at
/// startup via dotenvy and may be absent.
pub struct Config {
    /// Directory containing the ONNX model files
    pub model_dir: PathBuf,
    /// Language assumed for samples without an explicit tag
    pub default_language: Language,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn load() -> Result<Self> {
        let model_dir = env::var("VIGIL_MODEL_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| models::default_model_dir());

        // Unknown codes fall back to English, same as the analyze path
        let default_language = env::var("VIGIL_LANGUAGE")
            .map(|code| Language::from_code(&code))
            .unwrap_or(Language::En);

        Ok(Self {
            model_dir,
            default_language,
        })
    }
}
