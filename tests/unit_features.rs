// Unit tests for feature extraction.
//
// Covers the fixed vector contract (length, index order), the floor-1
// denominators on empty input, per-language threat keyword counting, and
// the character-level features (capitalization, punctuation, repeated
// runs).

use vigil::features::{extract, FEATURE_LEN};
use vigil::language::Language;

// Index aliases for readability; the order is part of the contract.
const IDX_LEN: usize = 0;
const IDX_WORDS: usize = 1;
const IDX_UNIQUE_RATIO: usize = 2;
const IDX_THREAT_COUNT: usize = 3;
const IDX_THREAT_RATIO: usize = 4;
const IDX_POSITIVE: usize = 5;
const IDX_NEGATIVE: usize = 6;
const IDX_NEG_MINUS_POS: usize = 7;
const IDX_CAPS_RATIO: usize = 8;
const IDX_EXCLAIM: usize = 9;
const IDX_QUESTION: usize = 10;
const IDX_REPEATED: usize = 11;

// ============================================================
// Vector contract
// ============================================================

#[test]
fn vector_length_is_twelve() {
    assert_eq!(FEATURE_LEN, 12);
    let features = extract("some text", Language::En);
    assert_eq!(features.as_slice().len(), FEATURE_LEN);
}

#[test]
fn vector_length_constant_across_input_sizes() {
    for text in ["", "a", "two words here", &"long ".repeat(5_000)] {
        assert_eq!(extract(text, Language::En).as_slice().len(), FEATURE_LEN);
    }
}

#[test]
fn extraction_is_deterministic() {
    let a = extract("The same INPUT!!", Language::En);
    let b = extract("The same INPUT!!", Language::En);
    assert_eq!(a, b);
}

// ============================================================
// Empty text — no panics, zero/neutral values
// ============================================================

#[test]
fn empty_text_is_all_zeros() {
    let features = extract("", Language::En);
    assert!(
        features.as_slice().iter().all(|v| *v == 0.0),
        "Expected all zeros, got {:?}",
        features.as_slice()
    );
}

#[test]
fn whitespace_only_text_has_zero_words() {
    let features = extract("   \t  \n ", Language::En);
    assert_eq!(features.as_slice()[IDX_WORDS], 0.0);
    assert_eq!(features.as_slice()[IDX_UNIQUE_RATIO], 0.0);
    assert_eq!(features.as_slice()[IDX_THREAT_RATIO], 0.0);
}

// ============================================================
// Word counts and ratios
// ============================================================

#[test]
fn word_count_and_length() {
    let features = extract("one two three", Language::En);
    assert_eq!(features.as_slice()[IDX_LEN], 13.0);
    assert_eq!(features.as_slice()[IDX_WORDS], 3.0);
}

#[test]
fn text_length_counts_chars_not_bytes() {
    // 6 chars, 18 bytes
    let features = extract("हिन्दी", Language::Hi);
    assert_eq!(features.as_slice()[IDX_LEN], 6.0);
}

#[test]
fn unique_ratio_with_repeats() {
    let features = extract("go go go stop", Language::En);
    // 2 distinct of 4 tokens
    assert!((features.as_slice()[IDX_UNIQUE_RATIO] - 0.5).abs() < 1e-6);
}

#[test]
fn unique_ratio_all_distinct_is_one() {
    let features = extract("all words differ", Language::En);
    assert!((features.as_slice()[IDX_UNIQUE_RATIO] - 1.0).abs() < 1e-6);
}

// ============================================================
// Threat keyword counting
// ============================================================

#[test]
fn english_threat_words_counted() {
    let features = extract("i will kill and attack you", Language::En);
    assert_eq!(features.as_slice()[IDX_THREAT_COUNT], 2.0);
    // 2 of 6 tokens
    assert!((features.as_slice()[IDX_THREAT_RATIO] - 2.0 / 6.0).abs() < 1e-6);
}

#[test]
fn threat_matching_is_case_insensitive() {
    let features = extract("KILL Threat", Language::En);
    assert_eq!(features.as_slice()[IDX_THREAT_COUNT], 2.0);
}

#[test]
fn threat_matching_is_whole_token() {
    // "killer" and "skill" are not the token "kill"
    let features = extract("killer skill", Language::En);
    assert_eq!(features.as_slice()[IDX_THREAT_COUNT], 0.0);
}

#[test]
fn hindi_threat_words_counted() {
    let features = extract("मार धमकी", Language::Hi);
    assert_eq!(features.as_slice()[IDX_THREAT_COUNT], 2.0);
}

#[test]
fn hindi_words_not_counted_under_english_table() {
    let features = extract("मार धमकी", Language::En);
    assert_eq!(features.as_slice()[IDX_THREAT_COUNT], 0.0);
}

#[test]
fn unknown_language_code_uses_english_table() {
    // Language::from_code folds unknown codes to English before extraction
    let language = Language::from_code("xx");
    let features = extract("kill hurt", language);
    assert_eq!(features.as_slice()[IDX_THREAT_COUNT], 2.0);
}

// ============================================================
// Sentiment counts (English lists for every language)
// ============================================================

#[test]
fn sentiment_counts_and_difference() {
    let features = extract("good great bad hate kill", Language::En);
    assert_eq!(features.as_slice()[IDX_POSITIVE], 2.0);
    assert_eq!(features.as_slice()[IDX_NEGATIVE], 3.0);
    assert_eq!(features.as_slice()[IDX_NEG_MINUS_POS], 1.0);
}

#[test]
fn negative_minus_positive_can_go_below_zero() {
    let features = extract("good happy love", Language::En);
    assert_eq!(features.as_slice()[IDX_NEG_MINUS_POS], -3.0);
}

#[test]
fn english_sentiment_lists_apply_to_other_languages() {
    // Documented limitation: the sentiment lexicons are English-only
    let features = extract("hate", Language::Ta);
    assert_eq!(features.as_slice()[IDX_NEGATIVE], 1.0);
}

// ============================================================
// Character-level features
// ============================================================

#[test]
fn capitalization_ratio() {
    // 4 uppercase of 8 chars
    let features = extract("ABCD efg", Language::En);
    assert!((features.as_slice()[IDX_CAPS_RATIO] - 0.5).abs() < 1e-6);
}

#[test]
fn punctuation_counts() {
    let features = extract("what?! really?? yes!", Language::En);
    assert_eq!(features.as_slice()[IDX_EXCLAIM], 2.0);
    assert_eq!(features.as_slice()[IDX_QUESTION], 3.0);
}

#[test]
fn repeated_run_counting() {
    // One window of three identical chars
    assert_eq!(extract("aaa", Language::En).as_slice()[IDX_REPEATED], 1.0);
    // "aaaa" has two starting positions
    assert_eq!(extract("aaaa", Language::En).as_slice()[IDX_REPEATED], 2.0);
    // No run of three
    assert_eq!(extract("aabbaa", Language::En).as_slice()[IDX_REPEATED], 0.0);
}

#[test]
fn repeated_runs_count_any_character() {
    // "!!!" is a run too
    assert_eq!(extract("no!!!", Language::En).as_slice()[IDX_REPEATED], 1.0);
}

// ============================================================
// Worked example
// ============================================================

#[test]
fn shouted_threat_example() {
    let features = extract("I WILL KILL YOU!!!!", Language::En);
    let v = features.as_slice();

    assert_eq!(v[IDX_LEN], 19.0);
    assert_eq!(v[IDX_WORDS], 4.0);
    // Token "you!!!!" is not in the threat table; "kill" is
    assert_eq!(v[IDX_THREAT_COUNT], 1.0);
    assert!(v[IDX_CAPS_RATIO] > 0.5);
    assert_eq!(v[IDX_EXCLAIM], 4.0);
    // "!!!!" yields two windows of three
    assert_eq!(v[IDX_REPEATED], 2.0);
}
