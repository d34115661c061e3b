//! Boundary parsing for the loosely-typed profile and listing text fields.
//!
//! Everything here fails soft: bad input becomes an empty set or zero, never an error.

use std::collections::BTreeSet;
use std::sync::LazyLock;

use regex::Regex;

static DIGIT_RUN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[0-9]+").unwrap());

/// Lowercases and trims a single skill token.
pub fn normalize_skill(raw: &str) -> String {
    raw.trim().to_lowercase()
}

/// Splits a comma-separated skills field into normalized tokens.
/// Blank tokens (from `"a,,b"` or a trailing comma) are dropped.
pub fn parse_skill_set(raw: Option<&str>) -> BTreeSet<String> {
    raw.map(|text| {
        text.split(',')
            .map(normalize_skill)
            .filter(|token| !token.is_empty())
            .collect()
    })
    .unwrap_or_default()
}

/// Extracts the first run of digits from a free-text years field.
/// `"5-7 years"` → 5. Missing or non-numeric text → 0; a run too long for `u32` saturates.
pub fn parse_years_of_experience(raw: Option<&str>) -> u32 {
    raw.and_then(|text| DIGIT_RUN.find(text))
        // an ASCII digit run only fails to parse on overflow
        .map(|m| m.as_str().parse::<u32>().unwrap_or(u32::MAX))
        .unwrap_or(0)
}

/// Splits the raw skills text for display, keeping the author's casing.
pub fn split_display_skills(raw: Option<&str>) -> Vec<String> {
    raw.map(|text| text.split(',').map(|s| s.trim().to_string()).collect())
        .unwrap_or_default()
}
