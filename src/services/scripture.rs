//! Scripture lookup service.
//!
//! Holds the current corpus behind a copy-on-build swap: a reload builds a
//! complete new [`Corpus`] first and only then replaces the shared pointer,
//! so readers always see either the old or the new document in full.

use std::path::Path;
use std::sync::{Arc, PoisonError, RwLock};

use crate::bible::{Bible, Corpus, LookupError, QueryResult};
use crate::corpus_files;
use crate::error::Result;

/// Trait for scripture lookup providers.
///
/// Different implementations can provide scripture from various sources
/// (a compiled document on disk, embedded data, test fixtures).
pub trait ScriptureProvider {
    /// Parse and resolve a reference query.
    fn search(&self, query: &str) -> QueryResult;

    /// Version label of the loaded document, if any.
    fn version(&self) -> Option<String>;

    /// Check if a document is loaded.
    fn is_loaded(&self) -> bool {
        self.version().is_some()
    }
}

/// Shared, reloadable scripture lookup.
#[derive(Debug, Default)]
pub struct ScriptureService {
    current: RwLock<Option<Arc<Corpus>>>,
}

impl ScriptureService {
    /// Create a service with nothing loaded.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a service serving the given document.
    pub fn with_bible(bible: Bible) -> Self {
        Self {
            current: RwLock::new(Some(Arc::new(Corpus::new(bible)))),
        }
    }

    /// Swap in a new document, returning the previous corpus.
    ///
    /// The index is built before the write lock is taken.
    pub fn replace(&self, bible: Bible) -> Option<Arc<Corpus>> {
        let next = Arc::new(Corpus::new(bible));
        let mut guard = self.current.write().unwrap_or_else(PoisonError::into_inner);
        guard.replace(next)
    }

    /// Load a compiled JSON document from disk and swap it in.
    ///
    /// On failure the current corpus is left untouched.
    pub fn load_from(&self, path: &Path) -> Result<()> {
        let bible = corpus_files::load_bible(path)?;
        tracing::info!(
            "Loaded {} ({} books, {} verses) from {}",
            bible.bible_version,
            bible.book_count(),
            bible.verse_count(),
            path.display()
        );
        self.replace(bible);
        Ok(())
    }

    /// The current corpus, if any. Cheap; holds no lock after returning.
    pub fn snapshot(&self) -> Option<Arc<Corpus>> {
        self.current
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .as_ref()
            .map(Arc::clone)
    }
}

impl ScriptureProvider for ScriptureService {
    fn search(&self, query: &str) -> QueryResult {
        let corpus = self.snapshot().ok_or(LookupError::NotLoaded)?;
        corpus.search(query)
    }

    fn version(&self) -> Option<String> {
        self.snapshot().map(|corpus| corpus.bible().bible_version.clone())
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used, clippy::unwrap_used, clippy::panic)]

    use super::*;
    use crate::bible::{build, CorpusInput, Passage};

    fn bible(version: &str, text: &str) -> Bible {
        build(CorpusInput::Text(text), version).bible
    }

    #[test]
    fn test_not_loaded() {
        let service = ScriptureService::new();
        assert!(!service.is_loaded());
        assert_eq!(service.search("genesis 1:1"), Err(LookupError::NotLoaded));
    }

    #[test]
    fn test_replace_swaps_whole_corpus() {
        let service = ScriptureService::with_bible(bible("old", "(1, 1, 1, 'viejo')"));
        let held = service.snapshot().unwrap();

        let previous = service.replace(bible("new", "(1, 1, 1, 'nuevo')"));
        assert_eq!(previous.unwrap().bible().bible_version, "old");
        assert_eq!(service.version().as_deref(), Some("new"));

        match service.search("genesis 1:1").unwrap() {
            Passage::Verse(hit) => assert_eq!(hit.text, "nuevo"),
            Passage::Range(_) => panic!("Expected verse"),
        }
        // A reader holding the old snapshot is unaffected
        match held.search("genesis 1:1").unwrap() {
            Passage::Verse(hit) => assert_eq!(hit.text, "viejo"),
            Passage::Range(_) => panic!("Expected verse"),
        }
    }

    #[test]
    fn test_concurrent_readers() {
        let corpus = bible("v", "(1, 1, 1, 'a') (1, 1, 2, 'b')");
        let service = Arc::new(ScriptureService::with_bible(corpus));
        let handles: Vec<_> = (0..4)
            .map(|_| {
                let service = Arc::clone(&service);
                std::thread::spawn(move || service.search("genesis 1:1-2").is_ok())
            })
            .collect();
        for handle in handles {
            assert!(handle.join().unwrap());
        }
    }

    #[test]
    fn test_failed_load_keeps_current() {
        let service = ScriptureService::with_bible(bible("kept", "(1, 1, 1, 'a')"));
        assert!(service.load_from(Path::new("/nonexistent/versefind/bible.json")).is_err());
        assert_eq!(service.version().as_deref(), Some("kept"));
    }
}
