//! # scholar-metadata-extraction
//!
//! Bibliographic metadata extraction from noisy, unstructured citation text
//! scraped from an academic search engine: ISSN, ISBN, page ranges and
//! counts, issue numbers, and conference names recovered from free-form
//! strings with no fixed grammar, merged with source-provided fields into
//! flat records and exported as a spreadsheet.
//!
//! ## Architecture
//!
//! - [`extract`]: independent, stateless field extractors over a combined
//!   text corpus, each an ordered regex table with fallback heuristics
//! - [`scholar`]: the external publication source abstraction
//!   ([`ScholarSource`]) and its entity types; the real network client lives
//!   outside this crate
//! - [`harvest`]: the record assembler with retry/backoff around the source
//!   and a politeness delay between publications
//! - [`export`]: tabular spreadsheet output
//! - [`common`]: shared record types, logging, and progress helpers

pub mod common;
pub mod export;
pub mod extract;
pub mod harvest;
pub mod scholar;

// Re-export commonly used types
pub use common::{PublicationRecord, COLUMNS};
pub use extract::ExtractedFields;
pub use harvest::{generate, generate_into, HarvestConfig, HarvestOutcome};
pub use scholar::{ScholarSource, SourceError};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
