use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // Ordered by trust: explicit ISSN label, bare hyphenated token, then the
    // electronic/print prefix variants
    static ref ISSN_PATTERNS: Vec<Regex> = vec![
        Regex::new(r"ISSN:?\s*(\d{4}-\d{4})").unwrap(),
        Regex::new(r"[\s(](\d{4}-\d{4})[\s)]").unwrap(),
        Regex::new(r"eISSN:?\s*(\d{4}-\d{4})").unwrap(),
        Regex::new(r"pISSN:?\s*(\d{4}-\d{4})").unwrap(),
    ];
}

/// Extract an ISSN (`DDDD-DDDD`) from free-form citation text.
///
/// Patterns are tried in priority order and the first structural match wins;
/// no checksum or semantic validation is applied. Returns the empty string
/// when nothing matches.
pub fn extract_issn(text: &str) -> String {
    for pattern in ISSN_PATTERNS.iter() {
        if let Some(cap) = pattern.captures(text) {
            if let Some(m) = cap.get(1) {
                return m.as_str().to_string();
            }
        }
    }
    String::new()
}
