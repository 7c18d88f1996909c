//! Query parsing: free-form text -> [`ParsedReference`].
//!
//! Two grammars are tried in order. The range grammar goes first; trying the
//! single-verse grammar first would leave `genesis 1:2-5` to fail as a
//! malformed single reference.
//!
//! - range:  `<book> <chapter>:<verse>-[<chapter>:]<verse>`
//! - single: `<book> <chapter>:<verse>`
//!
//! The book fragment is the shortest prefix that still lets the rest match,
//! so it may contain digits and spaces (`1 samuel 1:1-5`).

use std::sync::LazyLock;

use regex::{Captures, Regex};

use super::error::LookupError;

/// Range grammar, applied to a normalized query.
#[allow(clippy::expect_used)]
static RE_RANGE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(.+?)\s+(\d+)\s*:\s*(\d+)\s*-\s*(?:(\d+)\s*:\s*)?(\d+)$")
        .expect("valid regex: RE_RANGE")
});

/// Single-verse grammar, applied to a normalized query.
#[allow(clippy::expect_used)]
static RE_SINGLE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(.+?)\s+(\d+)\s*:\s*(\d+)$").expect("valid regex: RE_SINGLE")
});

/// Whitespace runs.
#[allow(clippy::expect_used)]
static RE_WHITESPACE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\s+").expect("valid regex: RE_WHITESPACE")
});

/// A successfully parsed reference query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParsedReference {
    /// `genesis 1:2`
    SingleVerse {
        /// Book fragment as typed.
        book: String,
        /// Chapter number.
        chapter: u32,
        /// Verse number.
        verse: u32,
    },
    /// `genesis 1:2-5` or `genesis 1:2-1:5`
    SameChapterRange {
        /// Book fragment as typed.
        book: String,
        /// Chapter number.
        chapter: u32,
        /// First verse, inclusive.
        verse_start: u32,
        /// Last verse, inclusive.
        verse_end: u32,
    },
    /// `genesis 1:30-2:2`
    CrossChapterRange {
        /// Book fragment as typed.
        book: String,
        /// First chapter.
        chapter_start: u32,
        /// First verse within the first chapter.
        verse_start: u32,
        /// Last chapter.
        chapter_end: u32,
        /// Last verse within the last chapter.
        verse_end: u32,
    },
}

impl ParsedReference {
    /// The book fragment of any variant.
    pub fn book(&self) -> &str {
        match self {
            Self::SingleVerse { book, .. }
            | Self::SameChapterRange { book, .. }
            | Self::CrossChapterRange { book, .. } => book,
        }
    }
}

/// Trim, lowercase and collapse whitespace runs to a single space.
pub fn normalize_query(raw: &str) -> String {
    RE_WHITESPACE.replace_all(raw.trim(), " ").to_lowercase()
}

/// Parse a free-form reference query.
pub fn parse(raw: &str) -> Result<ParsedReference, LookupError> {
    let normalized = normalize_query(raw);
    let syntax_error = || LookupError::Syntax { query: raw.to_string() };

    if let Some(caps) = RE_RANGE.captures(&normalized) {
        return parse_range(&caps).ok_or_else(syntax_error);
    }

    if let Some(caps) = RE_SINGLE.captures(&normalized) {
        return parse_single(&caps).ok_or_else(syntax_error);
    }

    Err(syntax_error())
}

fn parse_range(caps: &Captures<'_>) -> Option<ParsedReference> {
    let book = caps.get(1)?.as_str().to_string();
    let chapter = number(caps, 2)?;
    let verse_start = number(caps, 3)?;
    let chapter_end = match caps.get(4) {
        Some(m) => m.as_str().parse::<u32>().ok()?,
        None => chapter,
    };
    let verse_end = number(caps, 5)?;

    if chapter_end == chapter {
        Some(ParsedReference::SameChapterRange { book, chapter, verse_start, verse_end })
    } else {
        Some(ParsedReference::CrossChapterRange {
            book,
            chapter_start: chapter,
            verse_start,
            chapter_end,
            verse_end,
        })
    }
}

fn parse_single(caps: &Captures<'_>) -> Option<ParsedReference> {
    Some(ParsedReference::SingleVerse {
        book: caps.get(1)?.as_str().to_string(),
        chapter: number(caps, 2)?,
        verse: number(caps, 3)?,
    })
}

/// Parse a capture group as `u32`; overflow counts as no match.
fn number(caps: &Captures<'_>, group: usize) -> Option<u32> {
    caps.get(group)?.as_str().parse().ok()
}
