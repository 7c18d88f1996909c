//! Corpus source files and the compiled document on disk.
//!
//! Everything here is I/O around the pure [`crate::bible`] pipeline:
//! - discovering raw `.txt` sources under a directory
//! - concatenating them into one text blob
//! - writing and reading the compiled JSON document

use std::path::{Path, PathBuf};
use std::time::Instant;

use rayon::prelude::*;
use walkdir::WalkDir;

use crate::bible::{build, Bible, BuildReport, CorpusInput, VerseRecord};
use crate::constants::corpus::SOURCE_EXTENSION;
use crate::error::{Error, Result};

/// What a directory conversion produced.
#[derive(Debug, Clone)]
pub struct ConvertSummary {
    /// Source files read, in concatenation order.
    pub files: Vec<PathBuf>,
    /// Books in the written document.
    pub books: usize,
    /// Present verses in the written document.
    pub verses: usize,
    /// Ingestion statistics.
    pub report: BuildReport,
    /// Where the document was written.
    pub output: PathBuf,
}

/// Recursively find `.txt` files under `dir`, sorted by path.
///
/// Entries that cannot be read are logged and skipped.
pub fn discover_text_files(dir: &Path) -> Result<Vec<PathBuf>> {
    if !dir.is_dir() {
        return Err(Error::Corpus(format!(
            "Input path does not exist or is not a directory: {}",
            dir.display()
        )));
    }

    let mut files: Vec<PathBuf> = WalkDir::new(dir)
        .follow_links(true)
        .into_iter()
        .filter_map(|entry| match entry {
            Ok(entry) => Some(entry),
            Err(e) => {
                tracing::warn!("Error checking file under {}: {e}", dir.display());
                None
            }
        })
        .filter(|entry| entry.file_type().is_file())
        .filter(|entry| entry.path().extension().is_some_and(|ext| ext == SOURCE_EXTENSION))
        .map(walkdir::DirEntry::into_path)
        .collect();

    files.sort();
    Ok(files)
}

/// Read every file and join the contents in order, each followed by a space.
///
/// Files that are not valid UTF-8 are decoded lossily and logged.
pub fn read_and_concat(files: &[PathBuf]) -> Result<String> {
    let contents = files
        .par_iter()
        .map(|path| read_source(path))
        .collect::<Result<Vec<_>>>()?;

    let mut all = String::with_capacity(contents.iter().map(|c| c.len() + 1).sum());
    for content in &contents {
        all.push_str(content);
        all.push(' ');
    }
    Ok(all)
}

fn read_source(path: &Path) -> Result<String> {
    let bytes = fs_err::read(path).map_err(|e| Error::io(e, path.to_path_buf()))?;
    match String::from_utf8(bytes) {
        Ok(text) => Ok(text),
        Err(e) => {
            tracing::warn!(
                "{} is not valid UTF-8, replacing invalid bytes with U+FFFD",
                path.display()
            );
            Ok(String::from_utf8_lossy(e.as_bytes()).into_owned())
        }
    }
}

/// Convert a directory of raw sources into a JSON document at `output`.
pub fn convert_directory(input_dir: &Path, output: &Path, version: &str) -> Result<ConvertSummary> {
    let start = Instant::now();
    let files = discover_text_files(input_dir)?;
    if files.is_empty() {
        return Err(Error::Corpus(format!(
            "No .{SOURCE_EXTENSION} files found in {}",
            input_dir.display()
        )));
    }
    tracing::info!("Found {} files to process", files.len());

    let text = read_and_concat(&files)?;
    let built = build(CorpusInput::Text(&text), version);
    write_bible(&built.bible, output)?;

    let summary = ConvertSummary {
        books: built.bible.book_count(),
        verses: built.bible.verse_count(),
        report: built.report,
        files,
        output: output.to_path_buf(),
    };

    let elapsed = start.elapsed();
    tracing::info!(
        "Wrote {} books ({} verses) to {} in {elapsed:?}",
        summary.books,
        summary.verses,
        output.display()
    );
    Ok(summary)
}

/// Write a document as pretty JSON, creating parent directories as needed.
pub fn write_bible(bible: &Bible, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs_err::create_dir_all(parent).map_err(|e| Error::io(e, parent.to_path_buf()))?;
    }
    let json = serde_json::to_string_pretty(bible).map_err(|e| Error::json(e, path.to_path_buf()))?;
    fs_err::write(path, json).map_err(|e| Error::io(e, path.to_path_buf()))?;
    Ok(())
}

/// Read a compiled JSON document.
pub fn load_bible(path: &Path) -> Result<Bible> {
    let data = fs_err::read_to_string(path).map_err(|e| Error::io(e, path.to_path_buf()))?;
    serde_json::from_str(&data).map_err(|e| Error::json(e, path.to_path_buf()))
}

/// Read structured records: a JSON array of `[book, chapter, verse, text]`
/// arrays or `{book, chapter, verse, text}` objects.
pub fn read_records_json(path: &Path) -> Result<Vec<VerseRecord>> {
    let data = fs_err::read_to_string(path).map_err(|e| Error::io(e, path.to_path_buf()))?;
    serde_json::from_str(&data).map_err(|e| Error::json(e, path.to_path_buf()))
}

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used, clippy::unwrap_used, clippy::panic)]

    use super::*;

    #[test]
    fn test_missing_directory() {
        let missing = Path::new("/tmp/nonexistent_versefind_corpus_dir");
        let err = discover_text_files(missing).unwrap_err();
        assert!(matches!(err, Error::Corpus(_)));
    }

    #[test]
    fn test_read_and_concat_separates_with_space() {
        let dir = tempfile::tempdir().unwrap();
        let a = dir.path().join("a.txt");
        let b = dir.path().join("b.txt");
        std::fs::write(&a, "(1, 1, 1, 'a')").unwrap();
        std::fs::write(&b, "(1, 1, 2, 'b')").unwrap();

        let text = read_and_concat(&[a, b]).unwrap();
        assert_eq!(text, "(1, 1, 1, 'a') (1, 1, 2, 'b') ");
    }

    #[test]
    fn test_load_malformed_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bible.json");
        std::fs::write(&path, "{ not json").unwrap();
        assert!(matches!(load_bible(&path), Err(Error::Json { path: Some(_), .. })));
    }
}
