//! Canonical book catalog.
//!
//! Fixed mapping from numeric book id (1..=66, standard Protestant order) to
//! the canonical document key: lowercase, words joined by `_`, leading
//! numerals kept as their own token.

use std::collections::HashMap;

use lazy_static::lazy_static;

/// Canonical book names, indexed by `id - 1`.
const BOOK_NAMES: [&str; 66] = [
    // Old Testament
    "genesis",
    "exodo",
    "levitico",
    "numeros",
    "deuteronomio",
    "josue",
    "jueces",
    "rut",
    "1_samuel",
    "2_samuel",
    "1_reyes",
    "2_reyes",
    "1_cronicas",
    "2_cronicas",
    "esdras",
    "nehemias",
    "ester",
    "job",
    "salmos",
    "proverbios",
    "eclesiastes",
    "cantares",
    "isaias",
    "jeremias",
    "lamentaciones",
    "ezequiel",
    "daniel",
    "oseas",
    "joel",
    "amos",
    "abdias",
    "jonas",
    "miqueas",
    "nahum",
    "habacuc",
    "sofonias",
    "hageo",
    "zacarias",
    "malaquias",
    // New Testament
    "mateo",
    "marcos",
    "lucas",
    "juan",
    "hechos",
    "romanos",
    "1_corintios",
    "2_corintios",
    "gálatas",
    "efesios",
    "filipenses",
    "colosenses",
    "1_tesalonicenses",
    "2_tesalonicenses",
    "1_timoteo",
    "2_timoteo",
    "tito",
    "filemon",
    "hebreos",
    "santiago",
    "1_pedro",
    "2_pedro",
    "1_juan",
    "2_juan",
    "3_juan",
    "judas",
    "apocalipsis",
];

/// Number of books in the catalog.
pub const BOOK_COUNT: u32 = 66;

lazy_static! {
    /// Reverse lookup: canonical name -> id
    static ref BOOK_IDS: HashMap<&'static str, u32> =
        books().map(|(id, name)| (name, id)).collect();
}

/// Canonical name for a numeric book id.
pub fn book_name(id: u32) -> Option<&'static str> {
    let index = usize::try_from(id.checked_sub(1)?).ok()?;
    BOOK_NAMES.get(index).copied()
}

/// Numeric id for a canonical name.
pub fn book_id(name: &str) -> Option<u32> {
    BOOK_IDS.get(name).copied()
}

/// All `(id, name)` pairs in catalog order.
pub fn books() -> impl Iterator<Item = (u32, &'static str)> {
    (1..=BOOK_COUNT).zip(BOOK_NAMES.iter().copied())
}
