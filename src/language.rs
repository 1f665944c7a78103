// Supported languages for threat keyword lookup.
//
// The intake platform serves reports in 12 languages. Codes outside this
// set fall back to English rather than failing; an unrecognized language
// tag is routine input, not an error.

use serde::{Deserialize, Serialize};

/// A supported report language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    /// English
    En,
    /// Hindi
    Hi,
    /// Tamil
    Ta,
    /// Telugu
    Te,
    /// Malayalam
    Ml,
    /// Kannada
    Kn,
    /// Marathi
    Mr,
    /// Bengali
    Bn,
    /// Gujarati
    Gu,
    /// Punjabi
    Pa,
    /// Odia
    Or,
    /// Urdu
    Ur,
}

impl Language {
    /// Every supported language, in a stable order.
    pub const ALL: [Language; 12] = [
        Language::En,
        Language::Hi,
        Language::Ta,
        Language::Te,
        Language::Ml,
        Language::Kn,
        Language::Mr,
        Language::Bn,
        Language::Gu,
        Language::Pa,
        Language::Or,
        Language::Ur,
    ];

    /// Parse a language code. Unknown codes fall back to English.
    pub fn from_code(code: &str) -> Self {
        match code {
            "en" => Language::En,
            "hi" => Language::Hi,
            "ta" => Language::Ta,
            "te" => Language::Te,
            "ml" => Language::Ml,
            "kn" => Language::Kn,
            "mr" => Language::Mr,
            "bn" => Language::Bn,
            "gu" => Language::Gu,
            "pa" => Language::Pa,
            "or" => Language::Or,
            "ur" => Language::Ur,
            _ => Language::En,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Hi => "hi",
            Language::Ta => "ta",
            Language::Te => "te",
            Language::Ml => "ml",
            Language::Kn => "kn",
            Language::Mr => "mr",
            Language::Bn => "bn",
            Language::Gu => "gu",
            Language::Pa => "pa",
            Language::Or => "or",
            Language::Ur => "ur",
        }
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
