// Threat keyword tables — static configuration data, one set per language.
//
// These are the terms the feature extractor tests lowercased tokens
// against. The sentiment lists are English-only regardless of the report
// language; that mirrors the upstream lexicons and is a documented
// limitation, not something the extractor tries to compensate for.

use crate::language::Language;

/// Words counted toward the positive-sentiment feature.
pub const POSITIVE_WORDS: [&str; 5] = ["good", "happy", "great", "love", "like"];

/// Words counted toward the negative-sentiment feature.
pub const NEGATIVE_WORDS: [&str; 5] = ["bad", "hate", "kill", "hurt", "danger"];

const THREAT_EN: &[&str] = &["kill", "hurt", "die", "threat", "harm", "danger", "attack"];
const THREAT_HI: &[&str] = &["मार", "चोट", "खतरा", "हानि", "धमकी"];
const THREAT_TA: &[&str] = &["கொல்", "காயம்", "அபாயம்", "தீங்கு"];
const THREAT_TE: &[&str] = &["చంపు", "గాయం", "ప్రమాదం", "నష్టం"];
const THREAT_ML: &[&str] = &["കൊല്ലുക", "പരിക്ക്", "അപകടം", "നഷ്ടം"];
const THREAT_KN: &[&str] = &["ಕೊಲ್ಲು", "ಗಾಯ", "ಅಪಾಯ", "ನಷ್ಟ"];
const THREAT_MR: &[&str] = &["मार", "इजा", "धोका", "नुकसान"];
const THREAT_BN: &[&str] = &["হত্যা", "আঘাত", "বিপদ", "ক্ষতি"];
const THREAT_GU: &[&str] = &["મારી", "ઈજા", "ખતરો", "નુકસાન"];
const THREAT_PA: &[&str] = &["ਮਾਰ", "ਚੋਟ", "ਖਤਰਾ", "ਨੁਕਸਾਨ"];
const THREAT_OR: &[&str] = &["ମାର", "ଆଘାତ", "ବିପଦ", "କ୍ଷତି"];
const THREAT_UR: &[&str] = &["مار", "چوٹ", "خطرہ", "نقصان"];

/// Threat keywords for the given language.
///
/// Unsupported codes never reach this function; `Language::from_code`
/// already folds them into English.
pub fn threat_keywords(language: Language) -> &'static [&'static str] {
    match language {
        Language::En => THREAT_EN,
        Language::Hi => THREAT_HI,
        Language::Ta => THREAT_TA,
        Language::Te => THREAT_TE,
        Language::Ml => THREAT_ML,
        Language::Kn => THREAT_KN,
        Language::Mr => THREAT_MR,
        Language::Bn => THREAT_BN,
        Language::Gu => THREAT_GU,
        Language::Pa => THREAT_PA,
        Language::Or => THREAT_OR,
        Language::Ur => THREAT_UR,
    }
}
