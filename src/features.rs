// Feature extraction — raw text to a fixed-length numeric vector.
//
// Tokenization is plain whitespace splitting; no locale-aware segmentation.
// Every ratio floors its denominator at 1, so empty text produces a vector
// of zeros instead of dividing by zero.

use std::collections::HashSet;

use crate::keywords::{self, NEGATIVE_WORDS, POSITIVE_WORDS};
use crate::language::Language;

/// Number of values in every feature vector.
pub const FEATURE_LEN: usize = 12;

/// Fixed-length numeric view of a text sample.
///
/// Index order: 0 text length (chars), 1 word count, 2 unique-word ratio,
/// 3 threat-word count, 4 threat-word ratio, 5 positive-word count,
/// 6 negative-word count, 7 negative minus positive, 8 capitalization
/// ratio, 9 exclamation count, 10 question-mark count, 11 repeated-
/// character-run count. Immutable after construction.
#[derive(Debug, Clone, PartialEq)]
pub struct FeatureVector([f32; FEATURE_LEN]);

impl FeatureVector {
    pub fn as_slice(&self) -> &[f32] {
        &self.0
    }
}

/// Extract the feature vector for a text sample.
///
/// Never fails: any UTF-8 string, including the empty string, yields a
/// vector of exactly `FEATURE_LEN` values.
pub fn extract(text: &str, language: Language) -> FeatureVector {
    let char_count = text.chars().count();
    let tokens: Vec<&str> = text.split_whitespace().collect();
    let word_count = tokens.len();

    let distinct: HashSet<&str> = tokens.iter().copied().collect();
    let unique_ratio = distinct.len() as f32 / word_count.max(1) as f32;

    let lower = text.to_lowercase();
    let lower_tokens: Vec<&str> = lower.split_whitespace().collect();

    let threat_words = keywords::threat_keywords(language);
    let threat_count = lower_tokens
        .iter()
        .filter(|t| threat_words.contains(t))
        .count();
    let threat_ratio = threat_count as f32 / word_count.max(1) as f32;

    let pos_count = lower_tokens
        .iter()
        .filter(|t| POSITIVE_WORDS.contains(t))
        .count();
    let neg_count = lower_tokens
        .iter()
        .filter(|t| NEGATIVE_WORDS.contains(t))
        .count();

    let caps_count = text.chars().filter(|c| c.is_uppercase()).count();
    let caps_ratio = caps_count as f32 / char_count.max(1) as f32;

    let exclamations = text.chars().filter(|c| *c == '!').count();
    let questions = text.chars().filter(|c| *c == '?').count();

    // Runs of three identical consecutive characters, counted per starting
    // position: "aaaa" contains two.
    let chars: Vec<char> = text.chars().collect();
    let repeated = chars.windows(3).filter(|w| w[0] == w[1] && w[1] == w[2]).count();

    FeatureVector([
        char_count as f32,
        word_count as f32,
        unique_ratio,
        threat_count as f32,
        threat_ratio,
        pos_count as f32,
        neg_count as f32,
        neg_count as f32 - pos_count as f32,
        caps_ratio,
        exclamations as f32,
        questions as f32,
        repeated as f32,
    ])
}
