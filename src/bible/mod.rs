//! Scripture corpus compilation and reference lookup.
//!
//! The pipeline is pure and synchronous:
//!
//! 1. [`builder`] turns raw verse records into a [`Bible`] document
//! 2. [`reference`] parses a query into a [`ParsedReference`]
//! 3. [`normalize`] maps the book fragment onto a stored book key
//! 4. [`resolve`] walks the chapter(s) and produces a [`Passage`]
//! 5. [`format`] renders the result for display

pub mod builder;
pub mod catalog;
pub mod document;
pub mod error;
pub mod format;
pub mod normalize;
pub mod reference;
pub mod resolve;

pub use builder::{
    build, BuildOutput, BuildReport, CorpusBuilder, CorpusInput, IngestionWarning, VerseRecord,
};
pub use document::{Bible, Book, Chapter};
pub use error::LookupError;
pub use format::{format_passage, format_result, SearchResponse};
pub use normalize::{normalize_book_fragment, BookIndex};
pub use reference::{parse, ParsedReference};
pub use resolve::{resolve, Passage, QueryResult, RangeHit, RangeVerse, VerseHit};

/// An immutable document together with its book lookup index.
#[derive(Debug, Clone)]
pub struct Corpus {
    bible: Bible,
    index: BookIndex,
}

impl Corpus {
    /// Index a finished document.
    pub fn new(bible: Bible) -> Self {
        let index = BookIndex::new(&bible);
        Self { bible, index }
    }

    /// The underlying document.
    pub const fn bible(&self) -> &Bible {
        &self.bible
    }

    /// Parse and resolve a free-form query.
    pub fn search(&self, query: &str) -> QueryResult {
        let reference = parse(query)?;
        resolve(&self.bible, &self.index, &reference)
    }
}

impl From<Bible> for Corpus {
    fn from(bible: Bible) -> Self {
        Self::new(bible)
    }
}
