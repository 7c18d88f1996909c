//! Application constants.
//!
//! Centralizes fixed values shared by ingestion, lookup and the CLI.

/// Corpus ingestion constants.
pub mod corpus {
    /// Version label used when none is configured.
    pub const DEFAULT_BIBLE_VERSION: &str = "Nueva Reina Valera 2000";

    /// Extension of raw corpus source files.
    pub const SOURCE_EXTENSION: &str = "txt";

    /// File name of the compiled document inside the data directory.
    pub const DOCUMENT_FILE_NAME: &str = "bible.json";

    /// Directory name under the platform data directory.
    pub const APP_DIR: &str = "versefind";

    /// Highest verse position the builder will allocate within a chapter.
    ///
    /// The longest chapter in the canon has 176 verses; anything far beyond
    /// that is a malformed record.
    pub const MAX_VERSES_PER_CHAPTER: u32 = 1000;
}

/// Display constants.
pub mod display {
    /// Literal sequences in verse text that stand for a line break.
    ///
    /// `/n` is the convention of the source corpus files.
    pub const LINE_BREAK_MARKERS: &[&str] = &["/n", "\\n"];
}

/// Interactive prompt constants.
pub mod repl {
    /// Prompt printed before each query.
    pub const PROMPT: &str = "> ";

    /// Inputs that end the session.
    pub const EXIT_COMMANDS: &[&str] = &["quit", "exit"];
}
