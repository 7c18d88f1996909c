//! Corpus builder: raw verse records -> [`Bible`].
//!
//! Two input encodings are accepted:
//! - a text blob holding any number of `(book, chapter, verse, 'text')`
//!   tuples, with arbitrary noise between them
//! - already structured [`VerseRecord`]s
//!
//! Records are applied in input order. When two records target the same
//! `(book, chapter, verse)` the later one wins; every overwrite is counted in
//! the [`BuildReport`].

use std::sync::LazyLock;

use regex::Regex;
use serde::Deserialize;
use thiserror::Error;

use super::catalog;
use super::document::Bible;
use crate::constants::corpus::MAX_VERSES_PER_CHAPTER;

/// Regex matching one `(46, 1, 1, 'text')` tuple.
#[allow(clippy::expect_used)]
static RE_RECORD: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\((\d+),\s*(\d+),\s*(\d+),\s*'([^']*)'\)").expect("valid regex: RE_RECORD")
});

/// One verse as found in the raw corpus.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(from = "RawRecord")]
pub struct VerseRecord {
    /// Numeric book id (see [`catalog`]).
    pub book: u32,
    /// Chapter number.
    pub chapter: u32,
    /// Verse number.
    pub verse: u32,
    /// Verse text, verbatim.
    pub text: String,
}

impl VerseRecord {
    /// Create a record.
    pub fn new(book: u32, chapter: u32, verse: u32, text: impl Into<String>) -> Self {
        Self { book, chapter, verse, text: text.into() }
    }
}

/// Structured records come either as `[book, chapter, verse, text]` or as objects.
#[derive(Deserialize)]
#[serde(untagged)]
enum RawRecord {
    Tuple(u32, u32, u32, String),
    Object { book: u32, chapter: u32, verse: u32, text: String },
}

impl From<RawRecord> for VerseRecord {
    fn from(raw: RawRecord) -> Self {
        match raw {
            RawRecord::Tuple(book, chapter, verse, text)
            | RawRecord::Object { book, chapter, verse, text } => {
                Self { book, chapter, verse, text }
            }
        }
    }
}

/// Scan a text blob for verse tuples.
///
/// Malformed or partial tuples, and tuples whose numbers do not fit in a
/// `u32`, are skipped without a warning.
pub fn extract_records(text: &str) -> impl Iterator<Item = VerseRecord> + '_ {
    RE_RECORD.captures_iter(text).filter_map(|caps| {
        let number = |i: usize| caps.get(i).and_then(|m| m.as_str().parse::<u32>().ok());
        let record = VerseRecord {
            book: number(1)?,
            chapter: number(2)?,
            verse: number(3)?,
            text: caps.get(4)?.as_str().to_string(),
        };
        Some(record)
    })
}

/// A record the builder dropped.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IngestionWarning {
    /// Book id not present in the catalog.
    #[error("Unknown book number: {book} (at {chapter}:{verse})")]
    UnknownBook {
        /// Offending book id.
        book: u32,
        /// Chapter of the dropped record.
        chapter: u32,
        /// Verse of the dropped record.
        verse: u32,
    },

    /// Chapter 0, verse 0, or a verse number beyond what a chapter can hold.
    #[error("Invalid position {chapter}:{verse} in {book}")]
    InvalidPosition {
        /// Canonical name of the book.
        book: &'static str,
        /// Chapter of the dropped record.
        chapter: u32,
        /// Verse of the dropped record.
        verse: u32,
    },
}

/// Statistics collected while building.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BuildReport {
    /// Records stored in the document.
    pub accepted: usize,
    /// Accepted records that replaced an earlier text at the same position.
    pub overwritten: usize,
    /// Dropped records.
    pub warnings: Vec<IngestionWarning>,
}

/// Result of a build: the document and what happened on the way.
#[derive(Debug, Clone)]
pub struct BuildOutput {
    /// The compiled document.
    pub bible: Bible,
    /// Ingestion statistics.
    pub report: BuildReport,
}

/// Raw corpus input.
#[derive(Debug, Clone)]
pub enum CorpusInput<'a> {
    /// Text blob containing `(book, chapter, verse, 'text')` tuples.
    Text(&'a str),
    /// Already structured records.
    Records(Vec<VerseRecord>),
}

/// Incremental document builder.
#[derive(Debug)]
pub struct CorpusBuilder {
    bible: Bible,
    report: BuildReport,
}

impl CorpusBuilder {
    /// Start an empty document with a version label.
    pub fn new(version: impl Into<String>) -> Self {
        Self {
            bible: Bible::new(version),
            report: BuildReport::default(),
        }
    }

    /// Apply a single record.
    pub fn push(&mut self, record: VerseRecord) {
        let VerseRecord { book, chapter, verse, text } = record;

        let Some(name) = catalog::book_name(book) else {
            tracing::warn!("Unknown book number: {book}");
            self.report.warnings.push(IngestionWarning::UnknownBook { book, chapter, verse });
            return;
        };

        if chapter == 0 || verse == 0 || verse > MAX_VERSES_PER_CHAPTER {
            tracing::warn!("Invalid position {chapter}:{verse} in {name}");
            self.report
                .warnings
                .push(IngestionWarning::InvalidPosition { book: name, chapter, verse });
            return;
        }

        let replaced = self
            .bible
            .books
            .entry(name.to_string())
            .or_default()
            .entry(chapter)
            .or_default()
            .set(verse, text);

        self.report.accepted += 1;
        if replaced {
            tracing::debug!("Overwrote {name} {chapter}:{verse}");
            self.report.overwritten += 1;
        }
    }

    /// Apply records in order.
    pub fn extend(&mut self, records: impl IntoIterator<Item = VerseRecord>) {
        for record in records {
            self.push(record);
        }
    }

    /// Scan a text blob and apply every tuple found.
    pub fn extend_from_text(&mut self, text: &str) {
        self.extend(extract_records(text));
    }

    /// Finish building.
    pub fn finish(self) -> BuildOutput {
        tracing::info!(
            "Built {} books from {} records ({} overwritten, {} dropped)",
            self.bible.book_count(),
            self.report.accepted,
            self.report.overwritten,
            self.report.warnings.len()
        );
        BuildOutput {
            bible: self.bible,
            report: self.report,
        }
    }
}

/// Build a document from raw input in one call.
pub fn build(input: CorpusInput<'_>, version: impl Into<String>) -> BuildOutput {
    let mut builder = CorpusBuilder::new(version);
    match input {
        CorpusInput::Text(text) => builder.extend_from_text(text),
        CorpusInput::Records(records) => builder.extend(records),
    }
    builder.finish()
}
