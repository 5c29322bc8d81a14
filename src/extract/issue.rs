use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref ISSUE_PATTERNS: Vec<Regex> = vec![
        Regex::new(r"issue\s*(\d+)").unwrap(),
        Regex::new(r"no\.\s*(\d+)").unwrap(),
        Regex::new(r"\((\d+)\)").unwrap(),
        Regex::new(r"#(\d+)").unwrap(),
    ];
}

/// Extract an issue number from free-form citation text.
///
/// Input is lowercased before matching; patterns run in priority order
/// (`issue N`, `no. N`, `(N)`, `#N`) and the first match wins.
pub fn extract_issue(text: &str) -> String {
    let lowered = text.to_lowercase();
    for pattern in ISSUE_PATTERNS.iter() {
        if let Some(cap) = pattern.captures(&lowered) {
            if let Some(m) = cap.get(1) {
                return m.as_str().to_string();
            }
        }
    }
    String::new()
}
