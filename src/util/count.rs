use serde::{Deserialize, Serialize};

/// A count as delivered by the upstream page: either a plain JSON number or a
/// human-formatted string such as "1.2K", "3.4M" or "1,234".
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(untagged)]
pub enum CountValue {
    Int(i64),
    Float(f64),
    Text(String),
}

/// Converts a raw count into an integer. Malformed input degrades to 0 and is
/// never surfaced to the caller.
pub fn normalize_count(value: &CountValue) -> i64 {
    match value {
        CountValue::Int(n) => *n,
        CountValue::Float(f) => *f as i64,
        CountValue::Text(s) => parse_count_text(s).unwrap_or(0),
    }
}

fn parse_count_text(raw: &str) -> Option<i64> {
    // Separators are stripped before suffix handling so "1,234.5K" works.
    let cleaned = raw.trim().to_uppercase().replace(',', "");

    if cleaned.contains('K') {
        let n = cleaned.replace('K', "").parse::<f64>().ok()?;
        Some((n * 1_000.0) as i64)
    } else if cleaned.contains('M') {
        let n = cleaned.replace('M', "").parse::<f64>().ok()?;
        Some((n * 1_000_000.0) as i64)
    } else {
        cleaned.parse::<f64>().ok().map(|n| n as i64)
    }
}
