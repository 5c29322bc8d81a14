//! In-memory source for tests and embedding without network access.

use std::collections::{HashMap, HashSet};

use super::{Author, AuthorStub, Publication, PublicationStub, ScholarSource, SourceError};

/// A scripted [`ScholarSource`] backed by in-memory data.
///
/// Supports injecting transient search failures and per-publication failures
/// so the harvester's retry and skip behavior can be exercised.
#[derive(Debug, Default)]
pub struct MockSource {
    author: Option<Author>,
    publications: HashMap<String, Publication>,
    search_failures: usize,
    failing_publications: HashSet<String>,
    /// Number of search_author calls observed
    pub search_calls: usize,
    /// Number of fill_publication calls observed
    pub fill_calls: usize,
}

impl MockSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register the single author the source will return
    pub fn with_author(mut self, name: &str, hindex: u32, i10index: u32) -> Self {
        self.author = Some(Author {
            name: name.to_string(),
            hindex: Some(hindex),
            i10index: Some(i10index),
            publications: Vec::new(),
        });
        self
    }

    /// Append a publication to the author's list
    pub fn with_publication(mut self, id: &str, publication: Publication) -> Self {
        let title = publication.bib.title.clone();
        if let Some(author) = self.author.as_mut() {
            author.publications.push(PublicationStub {
                id: id.to_string(),
                title,
            });
        }
        self.publications.insert(id.to_string(), publication);
        self
    }

    /// Make the next `count` search_author calls fail with a network error
    pub fn failing_searches(mut self, count: usize) -> Self {
        self.search_failures = count;
        self
    }

    /// Make fill_publication fail for the given id
    pub fn failing_publication(mut self, id: &str) -> Self {
        self.failing_publications.insert(id.to_string());
        self
    }
}

impl ScholarSource for MockSource {
    fn search_author(&mut self, _name: &str) -> Result<Vec<AuthorStub>, SourceError> {
        self.search_calls += 1;
        if self.search_failures > 0 {
            self.search_failures -= 1;
            return Err(SourceError::Network("connection reset".to_string()));
        }
        Ok(self
            .author
            .iter()
            .map(|author| AuthorStub {
                id: "author-1".to_string(),
                name: author.name.clone(),
            })
            .collect())
    }

    fn fill_author(&mut self, _stub: &AuthorStub) -> Result<Author, SourceError> {
        self.author
            .clone()
            .ok_or_else(|| SourceError::Api("author disappeared".to_string()))
    }

    fn fill_publication(&mut self, stub: &PublicationStub) -> Result<Publication, SourceError> {
        self.fill_calls += 1;
        if self.failing_publications.contains(&stub.id) {
            return Err(SourceError::Api(format!("fill failed for {}", stub.id)));
        }
        self.publications
            .get(&stub.id)
            .cloned()
            .ok_or_else(|| SourceError::Api(format!("unknown publication {}", stub.id)))
    }
}
