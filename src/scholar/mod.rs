//! External publication source model.
//!
//! The network client that actually talks to Google Scholar lives outside this
//! crate; callers hand the harvester anything implementing [`ScholarSource`].
//! The trait mirrors the capability set of the upstream API: search for an
//! author by name, then `fill` stubs into complete entities.

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub mod mock;

pub use mock::MockSource;

/// Errors surfaced by a publication source
#[derive(Debug, Error)]
pub enum SourceError {
    /// Network or HTTP error
    #[error("network error: {0}")]
    Network(String),

    /// Error reported by the source API
    #[error("API error: {0}")]
    Api(String),

    /// Malformed response payload
    #[error("parse error: {0}")]
    Parse(String),

    /// Rate limit exceeded
    #[error("rate limit exceeded")]
    RateLimit,
}

/// Bibliographic fields the source provides for one publication.
///
/// Every field defaults to the empty string when the source omits it, so the
/// extractors never have to distinguish "absent" from "blank".
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Bib {
    pub title: String,
    pub pub_year: String,
    pub venue: String,
    pub journal: String,
    pub volume: String,
    pub pages: String,
    pub citation: String,
    pub r#abstract: String,
    pub note: String,
    pub publisher: String,
}

/// Author search result before `fill`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthorStub {
    pub id: String,
    pub name: String,
}

/// Fully-filled author profile
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Author {
    pub name: String,
    pub hindex: Option<u32>,
    pub i10index: Option<u32>,
    /// Publication list in source-provided order
    pub publications: Vec<PublicationStub>,
}

/// Publication entry on an author profile before `fill`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PublicationStub {
    pub id: String,
    pub title: String,
}

/// Fully-filled publication detail
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Publication {
    pub bib: Bib,
    pub num_citations: Option<u64>,
    pub pub_url: String,
}

/// Capability set of the upstream publication source.
///
/// Methods take `&mut self` because real clients carry session state; the
/// harvester is single-threaded and never shares a source.
pub trait ScholarSource {
    /// Search for authors matching a name query, in source ranking order
    fn search_author(&mut self, name: &str) -> Result<Vec<AuthorStub>, SourceError>;

    /// Fill an author stub into a complete profile with its publication list
    fn fill_author(&mut self, stub: &AuthorStub) -> Result<Author, SourceError>;

    /// Fill a publication stub into its complete bibliographic detail
    fn fill_publication(&mut self, stub: &PublicationStub) -> Result<Publication, SourceError>;
}
