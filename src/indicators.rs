// Key indicator extraction — human-readable flags explaining a score.
//
// Check order is fixed so indicator lists are stable across runs: violent
// language, then self-harm references, then excessive exclamation, then
// excessive capitalization. Matching is case-insensitive substring search
// over the raw text, so "skill" does trigger the violent-language check.
// The flags are triage hints, not verdicts.

const VIOLENT_TERMS: [&str; 3] = ["kill", "murder", "harm"];
const SELF_HARM_TERMS: [&str; 3] = ["die", "suicide", "end life"];

/// Exclamation marks beyond this count flag as excessive.
const EXCLAMATION_LIMIT: usize = 3;

/// Uppercase ratio above this flags as shouting.
const SHOUTING_RATIO: f64 = 0.5;

/// Extract the key indicators for a text sample, in fixed order.
///
/// Each check contributes at most one flag, so the list never holds
/// duplicates. Empty text yields an empty list.
pub fn extract(text: &str) -> Vec<String> {
    let mut indicators = Vec::new();
    let lower = text.to_lowercase();

    if VIOLENT_TERMS.iter().any(|t| lower.contains(t)) {
        indicators.push("Violent language detected".to_string());
    }

    if SELF_HARM_TERMS.iter().any(|t| lower.contains(t)) {
        indicators.push("Self-harm references detected".to_string());
    }

    if lower.chars().filter(|c| *c == '!').count() > EXCLAMATION_LIMIT {
        indicators.push("Excessive exclamation marks".to_string());
    }

    // Denominator floored at 1: the ratio is 0 for empty text rather than
    // a division by zero.
    let char_count = text.chars().count();
    let caps_count = text.chars().filter(|c| c.is_uppercase()).count();
    if caps_count as f64 / char_count.max(1) as f64 > SHOUTING_RATIO {
        indicators.push("Excessive capitalization (shouting)".to_string());
    }

    indicators
}
