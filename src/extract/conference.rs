use lazy_static::lazy_static;
use regex::Regex;

// Indicator order matters: the first indicator whose pattern matches the
// title supplies the capture
const CONFERENCE_INDICATORS: [&str; 5] =
    ["conference", "conf", "symposium", "workshop", "proceedings"];

lazy_static! {
    static ref CONFERENCE_PATTERNS: Vec<Regex> = CONFERENCE_INDICATORS
        .iter()
        .map(|indicator| {
            // Capture from the indicator word up to the next 4-digit year,
            // comma/period, or end of title
            Regex::new(&format!(
                r"(?i).*?({}.*?)(20\d{{2}}|19\d{{2}}|[.,]|$)",
                indicator
            ))
            .unwrap()
        })
        .collect();
}

/// Best-effort conference label from a publication's venue and title.
///
/// A non-empty venue is trusted and returned verbatim. Otherwise the title is
/// scanned for conference indicator words; the first hit yields a trimmed
/// span ending before the next year token, comma, or period. Returns the
/// empty string when neither source offers anything.
pub fn extract_conference_name(venue: &str, title: &str) -> String {
    if !venue.is_empty() {
        return venue.to_string();
    }

    for pattern in CONFERENCE_PATTERNS.iter() {
        if let Some(cap) = pattern.captures(title) {
            if let Some(m) = cap.get(1) {
                return m.as_str().trim().to_string();
            }
        }
    }
    String::new()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_venue_returned_verbatim() {
        assert_eq!(
            extract_conference_name("ACM SIGCOMM", "Some unrelated workshop title"),
            "ACM SIGCOMM"
        );
    }

    #[test]
    fn test_workshop_capture_stops_before_year() {
        let name = extract_conference_name("", "Proceedings of the Workshop on X, 2021");
        assert!(name.starts_with("Workshop"));
        assert!(!name.contains("2021"));
        assert_eq!(name, "Workshop on X");
    }

    #[test]
    fn test_conference_indicator() {
        assert_eq!(
            extract_conference_name("", "International Conference on Robotics 2019"),
            "Conference on Robotics"
        );
    }

    #[test]
    fn test_capture_stops_at_period() {
        assert_eq!(
            extract_conference_name("", "IEEE Symposium on Security. Extended abstract"),
            "Symposium on Security"
        );
    }

    #[test]
    fn test_indicator_case_insensitive() {
        assert_eq!(
            extract_conference_name("", "PROCEEDINGS OF ICML"),
            "PROCEEDINGS OF ICML"
        );
    }

    #[test]
    fn test_no_indicator_in_title() {
        assert_eq!(
            extract_conference_name("", "A study of citation networks"),
            ""
        );
    }

    #[test]
    fn test_empty_venue_and_title() {
        assert_eq!(extract_conference_name("", ""), "");
    }
}
