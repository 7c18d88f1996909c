//! Query failure values.

use thiserror::Error;

/// Why a reference query produced no passage.
///
/// Every variant is a recoverable value; the caller decides presentation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LookupError {
    /// Query matches neither accepted grammar.
    #[error(
        "Invalid format: \"{query}\". Use: \"book_name chapter:verse\" \
         (e.g., \"genesis 1:2\" or \"1 samuel 1:1\") \
         or \"book_name chapter:verse-[chapter:]verse\" \
         (e.g., \"genesis 1:1-3\" or \"genesis 1:30 - 2:2\")"
    )]
    Syntax {
        /// The query as received.
        query: String,
    },

    /// No stored book matches the fragment after normalization.
    #[error("Book \"{book}\" not found. Check the spelling.")]
    BookNotFound {
        /// Book fragment as typed (after query normalization).
        book: String,
    },

    /// The book has no such chapter.
    #[error("Chapter {chapter} not found in {book}.")]
    ChapterNotFound {
        /// Stored book key.
        book: String,
        /// Requested chapter.
        chapter: u32,
    },

    /// The chapter has no text at that verse position.
    #[error("Verse {verse} not found in {book} chapter {chapter}.")]
    VerseNotFound {
        /// Stored book key.
        book: String,
        /// Requested chapter.
        chapter: u32,
        /// Requested verse.
        verse: u32,
    },

    /// A range matched no present verse.
    #[error("No verses found in range {label}")]
    EmptyRange {
        /// Stored book key.
        book: String,
        /// Range label, e.g. `genesis 1:40-1:50`.
        label: String,
    },

    /// No corpus has been loaded into the service yet.
    #[error("No Bible document is loaded.")]
    NotLoaded,
}
