//! Record Assembler: drives the external source, runs the extractors, and
//! collects flat publication records.
//!
//! Single-threaded and blocking by design. The only coordination invariant is
//! per-publication: the corpus is fully assembled before extractors run, and
//! one record is appended atomically before the next publication is fetched.
//! Timing side effects (retry backoff, politeness delay) go through the
//! [`Sleeper`] trait so tests run without real waits.

use std::path::Path;
use std::time::Duration;

use anyhow::Result;
use log::{info, warn};
use rand::Rng;

use crate::common::{create_publication_progress_bar, create_spinner, HarvestStats, PublicationRecord};
use crate::export;
use crate::extract::{build_corpus, extract_all};
use crate::scholar::{Author, PublicationStub, ScholarSource, SourceError};

/// Linear backoff step between retry attempts: attempt N waits N x 5 seconds
pub const BACKOFF_STEP_SECS: u64 = 5;

/// Politeness delay window between publication fetches, in seconds
pub const POLITENESS_MIN_SECS: f64 = 2.0;
pub const POLITENESS_MAX_SECS: f64 = 5.0;

/// Knobs for one harvest run
#[derive(Debug, Clone, Copy)]
pub struct HarvestConfig {
    /// Attempts at the whole author-search-and-fetch sequence
    pub max_retries: usize,
}

impl Default for HarvestConfig {
    fn default() -> Self {
        Self { max_retries: 3 }
    }
}

/// Injectable sleep capability
pub trait Sleeper {
    fn sleep(&mut self, duration: Duration);
}

/// Production sleeper backed by `std::thread::sleep`
pub struct ThreadSleeper;

impl Sleeper for ThreadSleeper {
    fn sleep(&mut self, duration: Duration) {
        std::thread::sleep(duration);
    }
}

/// Records collected by a run plus its counters
#[derive(Debug)]
pub struct HarvestOutcome {
    /// Insertion order matches the source's publication order
    pub records: Vec<PublicationRecord>,
    pub stats: HarvestStats,
}

enum AttemptEnd {
    /// No author matched the query; terminal, never retried
    NoAuthor,
    /// Publication loop ran to completion
    Completed,
}

/// Harvest all publications for an author query.
///
/// Scraping variance never escapes: source errors during the author fetch are
/// retried with linear backoff up to `config.max_retries` attempts, then
/// degrade to whatever was collected; per-publication failures are logged and
/// skipped. An empty result therefore means "no author" or "everything
/// failed", not an error.
pub fn harvest_publications<S, T>(
    source: &mut S,
    query: &str,
    config: HarvestConfig,
    sleeper: &mut T,
) -> HarvestOutcome
where
    S: ScholarSource,
    T: Sleeper,
{
    let mut records = Vec::new();
    let mut stats = HarvestStats::default();

    for attempt in 0..config.max_retries {
        stats.attempts = attempt + 1;
        info!("Attempt {} of {}", attempt + 1, config.max_retries);

        match run_attempt(source, query, &mut records, &mut stats, sleeper) {
            Ok(AttemptEnd::NoAuthor) => {
                info!("No author found for query: {}", query);
                break;
            }
            Ok(AttemptEnd::Completed) => break,
            Err(err) => {
                warn!("Error during attempt {}: {}", attempt + 1, err);
                if attempt + 1 < config.max_retries {
                    let wait = Duration::from_secs((attempt as u64 + 1) * BACKOFF_STEP_SECS);
                    info!("Waiting {}s before retrying", wait.as_secs());
                    sleeper.sleep(wait);
                } else {
                    warn!(
                        "Max retries reached; returning {} collected record(s)",
                        records.len()
                    );
                }
            }
        }
    }

    stats.records_collected = records.len();
    stats.log_summary();
    HarvestOutcome { records, stats }
}

fn run_attempt<S, T>(
    source: &mut S,
    query: &str,
    records: &mut Vec<PublicationRecord>,
    stats: &mut HarvestStats,
    sleeper: &mut T,
) -> Result<AttemptEnd, SourceError>
where
    S: ScholarSource,
    T: Sleeper,
{
    // Clear the spinner before propagating a search failure so a retry
    // attempt starts with a clean line
    let spinner = create_spinner(&format!("Searching for author: {}", query));
    let search_result = source.search_author(query);
    spinner.finish_and_clear();

    let Some(stub) = search_result?.into_iter().next() else {
        return Ok(AttemptEnd::NoAuthor);
    };
    let author = source.fill_author(&stub)?;

    let progress = create_publication_progress_bar(author.publications.len() as u64);
    for pub_stub in &author.publications {
        stats.publications_seen += 1;

        match process_publication(source, query, &author, pub_stub) {
            Ok(record) => {
                progress.set_message(record.title.clone());
                info!("Processed publication: {}", record.title);
                records.push(record);
                politeness_pause(sleeper);
            }
            Err(err) => {
                stats.publications_skipped += 1;
                warn!("Skipping publication '{}': {}", pub_stub.title, err);
            }
        }
        progress.inc(1);
    }
    progress.finish_and_clear();

    Ok(AttemptEnd::Completed)
}

/// Fetch one publication, run the extractors, and assemble its record.
/// A failure here is isolated to this publication.
fn process_publication<S: ScholarSource>(
    source: &mut S,
    query: &str,
    author: &Author,
    stub: &PublicationStub,
) -> Result<PublicationRecord, SourceError> {
    let publication = source.fill_publication(stub)?;
    let corpus = build_corpus(&publication.bib);
    let fields = extract_all(&corpus, &publication.bib.venue, &publication.bib.title);
    Ok(PublicationRecord::assemble(query, author, &publication, fields))
}

// Random pause between publication fetches to avoid tripping anti-scraping
// defenses on the upstream side
fn politeness_pause<T: Sleeper>(sleeper: &mut T) {
    let secs = rand::thread_rng().gen_range(POLITENESS_MIN_SECS..=POLITENESS_MAX_SECS);
    sleeper.sleep(Duration::from_secs_f64(secs));
}

/// Harvest and export to a timestamped spreadsheet in the current directory.
///
/// Returns the filename on success, `None` when nothing was collected (no
/// author matched, or every publication failed). Only export I/O errors
/// propagate.
pub fn generate<S: ScholarSource>(
    source: &mut S,
    query: &str,
    max_retries: usize,
) -> Result<Option<String>> {
    generate_into(source, query, max_retries, ".")
}

/// Same as [`generate`], writing into the given directory
pub fn generate_into<S: ScholarSource>(
    source: &mut S,
    query: &str,
    max_retries: usize,
    out_dir: impl AsRef<Path>,
) -> Result<Option<String>> {
    let config = HarvestConfig { max_retries };
    let outcome = harvest_publications(source, query, config, &mut ThreadSleeper);

    if outcome.records.is_empty() {
        return Ok(None);
    }

    let filename = export::timestamped_filename();
    let path = out_dir.as_ref().join(&filename);
    export::write_workbook(&outcome.records, &path)?;
    info!("Data saved to {}", path.display());
    Ok(Some(filename))
}
