use lazy_static::lazy_static;
use regex::{Captures, Regex};

lazy_static! {
    // Phase 1: range patterns in priority order. Explicit pp./page labels are
    // trusted over bare numeric ranges.
    static ref RANGE_PATTERNS: Vec<Regex> = vec![
        // "pp. 123-456" or "p. 123-456"
        Regex::new(r"pp?\.?\s*(\d+)\s*[-\u{2013}\u{2014}]\s*(\d+)").unwrap(),
        // "pages 123-456" or "page 123-456"
        Regex::new(r"pages?\s*(\d+)\s*[-\u{2013}\u{2014}]\s*(\d+)").unwrap(),
        // " 123-456 " or "(123-456)"
        Regex::new(r"[\s(](\d+)\s*[-\u{2013}\u{2014}]\s*(\d+)[\s)]").unwrap(),
        // "Article 7, pp. 123-456"
        Regex::new(r"Article\s+\d+,?\s+pp?\.?\s*(\d+)\s*[-\u{2013}\u{2014}]\s*(\d+)").unwrap(),
        // generic range with hyphen, en/em dash, or colon separator
        Regex::new(r"(\d+)\s*[-\u{2013}\u{2014}:]\s*(\d+)").unwrap(),
        // "Vol. 12, No. 3, pp. 123-456"
        Regex::new(r"Vol\.\s*\d+\s*[,:]\s*(?:No\.\s*\d+\s*[,:]\s*)?pp?\.?\s*(\d+)\s*[-\u{2013}\u{2014}]\s*(\d+)").unwrap(),
        // Elsevier-style "Pages 101E5-110E5"
        Regex::new(r"[Pp]ages?\s*(\d+)[Ee]\d+\s*[-\u{2013}\u{2014}]\s*(\d+)[Ee]\d+").unwrap(),
    ];

    // Phase 2: single page number after a pp./page label. The digit run is
    // greedy, so a trailing digit can never be split off the capture.
    static ref SINGLE_PAGE_PATTERNS: Vec<Regex> = vec![
        Regex::new(r"pp?\.?\s*(\d+)").unwrap(),
        Regex::new(r"pages?\s*(\d+)").unwrap(),
    ];

    static ref DIGIT_RUN: Regex = Regex::new(r"\d+").unwrap();
}

// Fallback bounds: plausible page numbers, minus anything that reads as a year
const FALLBACK_MAX_PAGE: i64 = 9999;
const YEAR_RANGE: std::ops::RangeInclusive<i64> = 1900..=2100;

/// Extract a page range from free-form citation text.
///
/// Returns `(start, end, count)` as strings, with leading zeros stripped and
/// `count == end - start + 1`. A range match whose captures fail to parse as
/// integers falls through silently to the next pattern. When no range is
/// found, a labelled single page yields `(n, n, "1")`; failing that, the
/// first bare digit run outside the year window does. All three strings are
/// empty when nothing plausible is found.
pub fn extract_pages(text: &str) -> (String, String, String) {
    for pattern in RANGE_PATTERNS.iter() {
        if let Some(cap) = pattern.captures(text) {
            if let Some(range) = build_range(&cap) {
                return range;
            }
        }
    }

    for pattern in SINGLE_PAGE_PATTERNS.iter() {
        if let Some(cap) = pattern.captures(text) {
            if let Some(page) = parse_page(&cap, 1) {
                return (page.to_string(), page.to_string(), "1".to_string());
            }
        }
    }

    // Last resort: any digit run that looks like a page and not like a year
    for m in DIGIT_RUN.find_iter(text) {
        if let Ok(n) = m.as_str().parse::<i64>() {
            if n >= 1 && n <= FALLBACK_MAX_PAGE && !YEAR_RANGE.contains(&n) {
                return (n.to_string(), n.to_string(), "1".to_string());
            }
        }
    }

    (String::new(), String::new(), String::new())
}

fn build_range(cap: &Captures) -> Option<(String, String, String)> {
    let start = parse_page(cap, 1)?;
    let end = parse_page(cap, 2)?;
    let count = end - start + 1;
    Some((start.to_string(), end.to_string(), count.to_string()))
}

// Parsing through i64 both validates the capture and strips leading zeros
fn parse_page(cap: &Captures, group: usize) -> Option<i64> {
    cap.get(group)?.as_str().parse().ok()
}
