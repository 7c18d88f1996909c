//! Range resolution: [`ParsedReference`] + document -> [`Passage`].

use serde::Serialize;

use super::document::{Bible, Book, Chapter};
use super::error::LookupError;
use super::normalize::{display_name, BookIndex};
use super::reference::ParsedReference;

/// Outcome of a query.
pub type QueryResult = Result<Passage, LookupError>;

/// A single verse lookup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VerseHit {
    /// Stored book key.
    pub book: String,
    /// Chapter number.
    pub chapter: u32,
    /// Verse number.
    pub verse: u32,
    /// Verse text as stored.
    pub text: String,
    /// Citation, e.g. `1 samuel 1:1`.
    pub reference: String,
}

/// One verse inside a range.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RangeVerse {
    /// Chapter number.
    pub chapter: u32,
    /// Verse number.
    pub verse: u32,
    /// Verse text as stored.
    pub text: String,
}

/// A range lookup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RangeHit {
    /// Stored book key.
    pub book: String,
    /// Range label, always `book c1:v1-c2:v2`.
    pub label: String,
    /// Present verses in ascending `(chapter, verse)` order. Never empty.
    pub verses: Vec<RangeVerse>,
}

/// A successful query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Passage {
    /// Single verse.
    Verse(VerseHit),
    /// Verse range, possibly across chapters.
    Range(RangeHit),
}

impl Passage {
    /// Stored book key.
    pub fn book(&self) -> &str {
        match self {
            Self::Verse(hit) => &hit.book,
            Self::Range(hit) => &hit.book,
        }
    }
}

/// Resolve a parsed reference against a document.
pub fn resolve(bible: &Bible, index: &BookIndex, reference: &ParsedReference) -> QueryResult {
    let fragment = reference.book();
    let (name, book) = index
        .resolve(fragment)
        .and_then(|name| Some((name, bible.books.get(name)?)))
        .ok_or_else(|| LookupError::BookNotFound { book: fragment.to_string() })?;

    match *reference {
        ParsedReference::SingleVerse { chapter, verse, .. } => {
            resolve_single(name, book, chapter, verse).map(Passage::Verse)
        }
        ParsedReference::SameChapterRange { chapter, verse_start, verse_end, .. } => {
            let chapter_verses = book.get(&chapter).ok_or_else(|| LookupError::ChapterNotFound {
                book: name.to_string(),
                chapter,
            })?;
            let mut verses = Vec::new();
            collect_verses(chapter_verses, chapter, verse_start, verse_end, &mut verses);
            finish_range(name, (chapter, verse_start), (chapter, verse_end), verses)
        }
        ParsedReference::CrossChapterRange {
            chapter_start,
            verse_start,
            chapter_end,
            verse_end,
            ..
        } => {
            let mut verses = Vec::new();
            // BTreeMap::range panics on a reversed range
            if chapter_start <= chapter_end {
                for (&number, chapter_verses) in book.range(chapter_start..=chapter_end) {
                    let first = if number == chapter_start { verse_start } else { 1 };
                    let last = if number == chapter_end { verse_end } else { chapter_verses.len() };
                    collect_verses(chapter_verses, number, first, last, &mut verses);
                }
            }
            finish_range(name, (chapter_start, verse_start), (chapter_end, verse_end), verses)
        }
    }
}

fn resolve_single(
    name: &str,
    book: &Book,
    chapter: u32,
    verse: u32,
) -> Result<VerseHit, LookupError> {
    let chapter_verses = book.get(&chapter).ok_or_else(|| LookupError::ChapterNotFound {
        book: name.to_string(),
        chapter,
    })?;

    let text = chapter_verses.verse(verse).ok_or_else(|| LookupError::VerseNotFound {
        book: name.to_string(),
        chapter,
        verse,
    })?;

    Ok(VerseHit {
        book: name.to_string(),
        chapter,
        verse,
        text: text.to_string(),
        reference: format!("{} {chapter}:{verse}", display_name(name)),
    })
}

/// Append present verses `first..=last` of one chapter, clamped to its stored length.
fn collect_verses(
    chapter: &Chapter,
    number: u32,
    first: u32,
    last: u32,
    out: &mut Vec<RangeVerse>,
) {
    let last = last.min(chapter.len());
    for verse in first.max(1)..=last {
        if let Some(text) = chapter.verse(verse) {
            out.push(RangeVerse { chapter: number, verse, text: text.to_string() });
        }
    }
}

fn finish_range(
    name: &str,
    (chapter_start, verse_start): (u32, u32),
    (chapter_end, verse_end): (u32, u32),
    verses: Vec<RangeVerse>,
) -> QueryResult {
    let label = format!(
        "{} {chapter_start}:{verse_start}-{chapter_end}:{verse_end}",
        display_name(name)
    );

    if verses.is_empty() {
        return Err(LookupError::EmptyRange { book: name.to_string(), label });
    }

    Ok(Passage::Range(RangeHit { book: name.to_string(), label, verses }))
}
