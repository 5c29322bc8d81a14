use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // Explicit labels first, then the 978 prefix heuristic, then any bare
    // digit/hyphen span of plausible width
    static ref ISBN_PATTERNS: Vec<Regex> = vec![
        Regex::new(r"ISBN-13:?\s*([\d-]{17})").unwrap(),
        Regex::new(r"ISBN-10:?\s*([\d-]{13})").unwrap(),
        Regex::new(r"ISBN:?\s*([\d-]{13,17})").unwrap(),
        Regex::new(r"[\s(](978[\d-]{10,14})[\s)]").unwrap(),
        Regex::new(r"[\s(]([\d-]{10,13})[\s)]").unwrap(),
    ];
}

/// Extract an ISBN from free-form citation text.
///
/// Each candidate is normalized by stripping hyphens and spaces; a candidate
/// whose stripped form is not exactly 10 or 13 digits is rejected and the
/// next pattern is tried. Returns the digits only, or the empty string.
pub fn extract_isbn(text: &str) -> String {
    for pattern in ISBN_PATTERNS.iter() {
        if let Some(cap) = pattern.captures(text) {
            if let Some(m) = cap.get(1) {
                let digits: String = m
                    .as_str()
                    .chars()
                    .filter(|c| c.is_ascii_digit())
                    .collect();
                if digits.len() == 10 || digits.len() == 13 {
                    return digits;
                }
            }
        }
    }
    String::new()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_isbn13_label() {
        // The hyphenated form is 13 digits plus 4 hyphens, exactly the
        // 17-char span the labelled pattern captures
        let text = "Hardcover. ISBN-13: 978-0-123-45678-9 first edition";
        let isbn = extract_isbn(text);
        assert_eq!(isbn, "9780123456789");
        assert_eq!(isbn.len(), 13);
    }

    #[test]
    fn test_labelled_isbn13_wins_over_bare_span() {
        let text = "ISBN-13: 978-0-123-45678-9 reissued as (978-1-4028-9462-6)";
        assert_eq!(extract_isbn(text), "9780123456789");
    }

    #[test]
    fn test_isbn10_label() {
        assert_eq!(extract_isbn("ISBN-10: 0-123-45678-9"), "0123456789");
    }

    #[test]
    fn test_generic_isbn_label() {
        assert_eq!(extract_isbn("ISBN: 978-3-16-148410-0"), "9783161484100");
    }

    #[test]
    fn test_bare_978_prefix() {
        assert_eq!(extract_isbn("see (978-1-4028-9462-6) appendix"), "9781402894626");
    }

    #[test]
    fn test_bare_ten_digit_span() {
        assert_eq!(extract_isbn("catalogued as 0306406152 in print"), "0306406152");
    }

    #[test]
    fn test_rejects_wrong_length_and_falls_through() {
        // The generic label captures a 14-char span holding 12 digits and
        // rejects it; the bare 13-digit token later in the text still wins
        let text = "ISBN: 1234-5678-9012 or maybe 9781402894626 instead";
        assert_eq!(extract_isbn(text), "9781402894626");
    }

    #[test]
    fn test_no_isbn() {
        assert_eq!(extract_isbn("pp. 12-34, vol. 7, 2019"), "");
    }

    #[test]
    fn test_hyphens_and_length_check() {
        // 12 digits after stripping: rejected even though the span matched
        assert_eq!(extract_isbn("code (978-0-123-4567) here"), "");
    }
}
