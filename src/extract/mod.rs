//! Field extractors for noisy citation text.
//!
//! Each extractor is a pure function mapping a text blob to one structured
//! field, using an ordered regex table with fallback heuristics. The empty
//! string is the canonical "not found" sentinel throughout; extractors never
//! return errors and never panic on malformed text.

pub mod conference;
pub mod isbn;
pub mod issn;
pub mod issue;
pub mod pages;

pub use conference::extract_conference_name;
pub use isbn::extract_isbn;
pub use issn::extract_issn;
pub use issue::extract_issue;
pub use pages::extract_pages;

use serde::Serialize;

use crate::scholar::Bib;

/// Structured fields recovered from one publication's corpus.
///
/// Any field may be empty, meaning "not found"; fields are never absent.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ExtractedFields {
    pub issn: String,
    pub isbn: String,
    pub issue: String,
    pub page_start: String,
    pub page_end: String,
    pub page_count: String,
    pub conference_name: String,
}

/// Concatenate a publication's free-text fields into the extraction corpus.
///
/// Order is fixed: citation, abstract, note, volume, pages. Absent fields
/// contribute nothing; no separators are inserted.
pub fn build_corpus(bib: &Bib) -> String {
    format!(
        "{}{}{}{}{}",
        bib.citation, bib.r#abstract, bib.note, bib.volume, bib.pages
    )
}

/// Run every field extractor over one publication.
///
/// The corpus feeds all extractors except conference-name, which looks at
/// venue and title instead. Extractors are independent and stateless, so
/// evaluation order is immaterial.
pub fn extract_all(corpus: &str, venue: &str, title: &str) -> ExtractedFields {
    let (page_start, page_end, page_count) = extract_pages(corpus);
    ExtractedFields {
        issn: extract_issn(corpus),
        isbn: extract_isbn(corpus),
        issue: extract_issue(corpus),
        page_start,
        page_end,
        page_count,
        conference_name: extract_conference_name(venue, title),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_corpus_concatenation_order() {
        let bib = Bib {
            citation: "cite".to_string(),
            r#abstract: "abs".to_string(),
            note: "note".to_string(),
            volume: "9".to_string(),
            pages: "1-5".to_string(),
            ..Bib::default()
        };
        assert_eq!(build_corpus(&bib), "citeabsnote91-5");
    }

    #[test]
    fn test_corpus_with_missing_fields() {
        let bib = Bib {
            citation: "only citation".to_string(),
            ..Bib::default()
        };
        assert_eq!(build_corpus(&bib), "only citation");
    }

    #[test]
    fn test_extract_all_combined() {
        let corpus = "In Proc. of Things, pp. 45-60, ISSN 1111-2222, issue 3";
        let fields = extract_all(corpus, "", "Workshop on Examples, 2020");

        assert_eq!(fields.page_start, "45");
        assert_eq!(fields.page_end, "60");
        assert_eq!(fields.page_count, "16");
        assert_eq!(fields.issn, "1111-2222");
        assert_eq!(fields.issue, "3");
        assert_eq!(fields.isbn, "");
        assert_eq!(fields.conference_name, "Workshop on Examples");
    }

    #[test]
    fn test_extract_all_empty_corpus() {
        let fields = extract_all("", "", "");
        assert_eq!(fields, ExtractedFields::default());
    }
}
