use log::info;
use serde::Serialize;

use crate::extract::ExtractedFields;
use crate::scholar::{Author, Publication};

/// Export column headers, in the exact order rows are written
pub const COLUMNS: [&str; 19] = [
    "Author Name",
    "Title",
    "Academic year",
    "Year",
    "Name of Conference",
    "Name of Journal",
    "Volume",
    "Issue",
    "Page start",
    "Page end",
    "Page count",
    "Cited by",
    "DOI",
    "Date",
    "h index",
    "i index",
    "Publisher",
    "ISSN",
    "ISBN",
];

/// One flat row of the output spreadsheet: extracted fields merged with
/// source-provided metadata. Immutable once assembled; every field is a
/// string with `""` standing in for missing values.
#[derive(Debug, Clone, Serialize)]
pub struct PublicationRecord {
    pub author_name: String,
    pub title: String,
    pub academic_year: String,
    pub year: String,
    pub conference_name: String,
    pub journal: String,
    pub volume: String,
    pub issue: String,
    pub page_start: String,
    pub page_end: String,
    pub page_count: String,
    pub cited_by: String,
    pub doi: String,
    pub date: String,
    pub h_index: String,
    pub i_index: String,
    pub publisher: String,
    pub issn: String,
    pub isbn: String,
}

impl PublicationRecord {
    /// Merge extractor output with the source's author and publication fields
    pub fn assemble(
        query: &str,
        author: &Author,
        publication: &Publication,
        fields: ExtractedFields,
    ) -> Self {
        let bib = &publication.bib;
        Self {
            author_name: query.to_string(),
            title: bib.title.clone(),
            academic_year: bib.pub_year.clone(),
            year: bib.pub_year.clone(),
            conference_name: fields.conference_name,
            journal: bib.journal.clone(),
            volume: bib.volume.clone(),
            issue: fields.issue,
            page_start: fields.page_start,
            page_end: fields.page_end,
            page_count: fields.page_count,
            cited_by: publication
                .num_citations
                .map(|n| n.to_string())
                .unwrap_or_default(),
            doi: publication.pub_url.clone(),
            date: bib.pub_year.clone(),
            h_index: author.hindex.map(|n| n.to_string()).unwrap_or_default(),
            i_index: author.i10index.map(|n| n.to_string()).unwrap_or_default(),
            publisher: bib.publisher.clone(),
            issn: fields.issn,
            isbn: fields.isbn,
        }
    }

    /// Field values in [`COLUMNS`] order
    pub fn to_row(&self) -> [&str; 19] {
        [
            &self.author_name,
            &self.title,
            &self.academic_year,
            &self.year,
            &self.conference_name,
            &self.journal,
            &self.volume,
            &self.issue,
            &self.page_start,
            &self.page_end,
            &self.page_count,
            &self.cited_by,
            &self.doi,
            &self.date,
            &self.h_index,
            &self.i_index,
            &self.publisher,
            &self.issn,
            &self.isbn,
        ]
    }
}

/// Counters from one harvest run
#[derive(Debug, Clone, Default)]
pub struct HarvestStats {
    pub attempts: usize,
    pub publications_seen: usize,
    pub publications_skipped: usize,
    pub records_collected: usize,
}

impl HarvestStats {
    pub fn log_summary(&self) {
        info!(
            "Harvest finished: {} attempt(s) | {} publications seen | {} skipped | {} records",
            self.attempts, self.publications_seen, self.publications_skipped, self.records_collected,
        );
    }
}
