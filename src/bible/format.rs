//! Display formatting for query results.
//!
//! Break markers stored in verse text are expanded here, at display time;
//! the document itself is never modified.

use std::borrow::Cow;
use std::fmt::{self, Write};

use serde::Serialize;

use super::normalize::display_name;
use super::resolve::{Passage, QueryResult, RangeVerse};
use crate::constants::display::LINE_BREAK_MARKERS;

/// Replace embedded break markers (`/n`, `\n`) with real line breaks.
pub fn expand_line_breaks(text: &str) -> Cow<'_, str> {
    let mut out = Cow::Borrowed(text);
    for marker in LINE_BREAK_MARKERS {
        if out.contains(marker) {
            out = Cow::Owned(out.replace(marker, "\n"));
        }
    }
    out
}

/// Render a passage.
///
/// Single verse: citation line, then the text. Range: label line, then one
/// `book chapter:verse - text` line per verse.
pub fn format_passage(passage: &Passage) -> String {
    match passage {
        Passage::Verse(hit) => format!("{}\n{}", hit.reference, expand_line_breaks(&hit.text)),
        Passage::Range(hit) => {
            let book = display_name(&hit.book);
            let mut out = hit.label.clone();
            out.push('\n');
            for RangeVerse { chapter, verse, text } in &hit.verses {
                // Writing to a String cannot fail
                let _ = write!(out, "\n{book} {chapter}:{verse} - {}", expand_line_breaks(text));
            }
            out
        }
    }
}

/// Render a query result, prefixing failures with `Error:`.
pub fn format_result(result: &QueryResult) -> String {
    match result {
        Ok(passage) => format_passage(passage),
        Err(err) => format!("Error: {err}"),
    }
}

impl fmt::Display for Passage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&format_passage(self))
    }
}

/// Serializable view of a [`QueryResult`] for machine-readable output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum SearchResponse {
    /// Single verse success.
    Verse {
        /// Always `true`.
        success: bool,
        /// Stored book key.
        book: String,
        /// Chapter number.
        chapter: u32,
        /// Verse number.
        verse: u32,
        /// Verse text as stored.
        text: String,
        /// Citation.
        reference: String,
    },
    /// Range success.
    Range {
        /// Always `true`.
        success: bool,
        /// Stored book key.
        book: String,
        /// Range label.
        range: String,
        /// Verses in order.
        verses: Vec<RangeVerse>,
    },
    /// Failure.
    Failure {
        /// Always `false`.
        success: bool,
        /// Human-readable message.
        error: String,
    },
}

impl From<&QueryResult> for SearchResponse {
    fn from(result: &QueryResult) -> Self {
        match result {
            Ok(Passage::Verse(hit)) => Self::Verse {
                success: true,
                book: hit.book.clone(),
                chapter: hit.chapter,
                verse: hit.verse,
                text: hit.text.clone(),
                reference: hit.reference.clone(),
            },
            Ok(Passage::Range(hit)) => Self::Range {
                success: true,
                book: hit.book.clone(),
                range: hit.label.clone(),
                verses: hit.verses.clone(),
            },
            Err(err) => Self::Failure {
                success: false,
                error: err.to_string(),
            },
        }
    }
}
