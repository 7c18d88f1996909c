//! Book-name normalization and the per-document lookup index.

use std::collections::HashMap;
use std::sync::LazyLock;

use regex::Regex;

use super::catalog;
use super::document::Bible;

/// Runs of whitespace and underscores.
#[allow(clippy::expect_used)]
static RE_SEPARATORS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[\s_]+").expect("valid regex: RE_SEPARATORS")
});

/// Canonical lookup key for a book name or user fragment.
///
/// Lowercases, then collapses every run of whitespace/underscore into one `_`,
/// so `"1   Samuel"`, `"1_samuel"` and `"1 SAMUEL"` all become `"1_samuel"`.
pub fn normalize_book_fragment(raw: &str) -> String {
    RE_SEPARATORS.replace_all(&raw.to_lowercase(), "_").into_owned()
}

/// Display form of a stored book key (`1_samuel` -> `1 samuel`).
pub fn display_name(book: &str) -> String {
    book.replace('_', " ")
}

/// Normalized key -> stored book key for one document.
///
/// When several stored keys normalize to the same value the one that comes
/// first in catalog order wins. Keys that are not in the catalog rank after
/// every catalog book, in lexical order.
#[derive(Debug, Clone, Default)]
pub struct BookIndex {
    keys: HashMap<String, String>,
}

impl BookIndex {
    /// Index every book key of a document.
    pub fn new(bible: &Bible) -> Self {
        let mut stored: Vec<&String> = bible.books.keys().collect();
        stored.sort_by(|a, b| catalog_rank(a).cmp(&catalog_rank(b)).then_with(|| a.cmp(b)));

        let mut keys = HashMap::with_capacity(stored.len());
        for name in stored {
            let key = normalize_book_fragment(name);
            if let Some(existing) = keys.get(&key) {
                tracing::debug!("Book key {name} collides with {existing}; keeping {existing}");
                continue;
            }
            keys.insert(key, name.clone());
        }

        Self { keys }
    }

    /// Stored key for a user fragment, matching exactly after normalization.
    pub fn resolve(&self, fragment: &str) -> Option<&str> {
        self.keys
            .get(&normalize_book_fragment(fragment))
            .map(String::as_str)
    }

    /// Number of distinct lookup keys.
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    /// Whether the index is empty.
    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }
}

fn catalog_rank(name: &str) -> u32 {
    catalog::book_id(name).unwrap_or(u32::MAX)
}
