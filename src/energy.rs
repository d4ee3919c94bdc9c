// 🔢 Energy Parser
// Normalizes mixed-unit energy text ("916 kJ", "219 kcal") into kilojoules

use regex::Regex;
use serde_json::Value;
use std::sync::LazyLock;

/// Kilojoules per kilocalorie
pub const KJ_PER_KCAL: f64 = 4.184;

// Digits with optional thousands separators, directly followed by the unit.
// The unit markers are case-sensitive as written in the source data.
static KJ_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([0-9][0-9,]*)\s*kJ").unwrap());
static KCAL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([0-9][0-9,]*)\s*kcal").unwrap());

/// Parse an energy string into kilojoules.
///
/// The kJ pattern is tried first; only when it does not match is the kcal
/// pattern tried. First match wins, so `"500 kJ (120 kcal)"` yields `500.0`.
/// Returns `None` when neither pattern matches.
pub fn parse_energy(text: &str) -> Option<f64> {
    if let Some(kj) = first_number(&KJ_RE, text) {
        return Some(kj);
    }

    first_number(&KCAL_RE, text).map(|kcal| kcal * KJ_PER_KCAL)
}

/// Parse a raw dataset cell. Anything that is not text is unparseable.
pub fn parse_energy_value(value: &Value) -> Option<f64> {
    match value {
        Value::String(text) => parse_energy(text),
        _ => None,
    }
}

fn first_number(re: &Regex, text: &str) -> Option<f64> {
    let captures = re.captures(text)?;
    let digits = captures.get(1)?.as_str().replace(',', "");

    digits.parse::<f64>().ok().filter(|v| v.is_finite())
}

// ============================================================================
// TESTS
// ============================================================================
