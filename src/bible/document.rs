//! Compiled corpus document: book -> chapter -> verse.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Chapters of one book, keyed by chapter number. Gaps are allowed.
pub type Book = BTreeMap<u32, Chapter>;

/// Verse texts of one chapter, positionally aligned (`verse - 1`).
///
/// Holes are `None` and serialize as JSON `null`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Chapter(Vec<Option<String>>);

impl Chapter {
    /// Text of a verse, treating holes and empty strings as absent.
    pub fn verse(&self, verse: u32) -> Option<&str> {
        let index = usize::try_from(verse.checked_sub(1)?).ok()?;
        self.0
            .get(index)?
            .as_deref()
            .filter(|text| !text.is_empty())
    }

    /// Store a verse, returning `true` if a previous text was replaced.
    ///
    /// `verse` must be at least 1.
    pub(crate) fn set(&mut self, verse: u32, text: String) -> bool {
        let Some(index) = verse.checked_sub(1).and_then(|v| usize::try_from(v).ok()) else {
            return false;
        };
        if self.0.len() <= index {
            self.0.resize(index + 1, None);
        }
        self.0[index].replace(text).is_some()
    }

    /// Stored length, including holes. This is the highest stored verse number.
    pub fn len(&self) -> u32 {
        u32::try_from(self.0.len()).unwrap_or(u32::MAX)
    }

    /// Whether the chapter stores no positions at all.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Present verses as `(number, text)` in ascending order.
    pub fn verses(&self) -> impl Iterator<Item = (u32, &str)> {
        (1..=self.len()).filter_map(move |number| self.verse(number).map(|text| (number, text)))
    }
}

impl From<Vec<Option<String>>> for Chapter {
    fn from(verses: Vec<Option<String>>) -> Self {
        Self(verses)
    }
}

/// The compiled corpus. Read-only once built.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bible {
    /// Free-form version label (e.g. "Nueva Reina Valera 2000").
    pub bible_version: String,
    /// Books keyed by canonical name.
    pub books: BTreeMap<String, Book>,
}

impl Bible {
    /// Create an empty document with a version label.
    pub fn new(version: impl Into<String>) -> Self {
        Self {
            bible_version: version.into(),
            books: BTreeMap::new(),
        }
    }

    /// Look up a chapter by stored book key.
    pub fn chapter(&self, book: &str, chapter: u32) -> Option<&Chapter> {
        self.books.get(book)?.get(&chapter)
    }

    /// Look up a verse text by stored book key.
    pub fn verse(&self, book: &str, chapter: u32, verse: u32) -> Option<&str> {
        self.chapter(book, chapter)?.verse(verse)
    }

    /// Number of books with at least one verse.
    pub fn book_count(&self) -> usize {
        self.books.len()
    }

    /// Number of present verses across all books.
    pub fn verse_count(&self) -> usize {
        self.books
            .values()
            .flat_map(BTreeMap::values)
            .map(|chapter| chapter.verses().count())
            .sum()
    }
}
