//! Integration tests for converting corpus directories and loading documents.

#![allow(clippy::expect_used, clippy::unwrap_used, clippy::panic)]

use std::fs;

use versefind::bible::{IngestionWarning, Passage};
use versefind::corpus_files::{
    convert_directory, discover_text_files, load_bible, read_records_json,
};
use versefind::error::Error;
use versefind::services::scripture::{ScriptureProvider, ScriptureService};

#[test]
fn discovers_nested_text_files_in_path_order() {
    let dir = tempfile::tempdir().unwrap();
    fs::create_dir_all(dir.path().join("nt/cartas")).unwrap();
    fs::write(dir.path().join("b.txt"), "").unwrap();
    fs::write(dir.path().join("a.txt"), "").unwrap();
    fs::write(dir.path().join("nt/cartas/c.txt"), "").unwrap();
    fs::write(dir.path().join("notes.md"), "").unwrap();

    let files = discover_text_files(dir.path()).unwrap();
    let names: Vec<_> = files
        .iter()
        .map(|p| p.strip_prefix(dir.path()).unwrap().to_string_lossy().replace('\\', "/"))
        .collect();
    assert_eq!(names, vec!["a.txt", "b.txt", "nt/cartas/c.txt"]);
}

#[test]
fn converts_directory_and_serves_queries() {
    let src = tempfile::tempdir().unwrap();
    fs::create_dir_all(src.path().join("at")).unwrap();
    fs::write(
        src.path().join("at/01_genesis.txt"),
        "(1, 1, 1, 'En el principio'), (1, 1, 2, 'Y la tierra')",
    )
    .unwrap();
    fs::write(
        src.path().join("nt.txt"),
        "(46, 13, 4, 'El amor es sufrido') (70, 1, 1, 'unknown book')",
    )
    .unwrap();

    let out = tempfile::tempdir().unwrap();
    let output = out.path().join("nested/dir/bible.json");
    let summary = convert_directory(src.path(), &output, "Nueva Reina Valera 2000").unwrap();

    assert_eq!(summary.files.len(), 2);
    assert_eq!(summary.books, 2);
    assert_eq!(summary.verses, 3);
    assert_eq!(
        summary.report.warnings,
        vec![IngestionWarning::UnknownBook { book: 70, chapter: 1, verse: 1 }]
    );

    let written = fs::read_to_string(&output).unwrap();
    let json: serde_json::Value = serde_json::from_str(&written).unwrap();
    assert_eq!(json["bible_version"], "Nueva Reina Valera 2000");
    assert_eq!(json["books"]["genesis"]["1"][1], "Y la tierra");
    assert_eq!(json["books"]["1_corintios"]["13"][3], "El amor es sufrido");
    assert!(json["books"]["1_corintios"]["13"][0].is_null());

    let service = ScriptureService::new();
    service.load_from(&output).unwrap();
    assert_eq!(service.version().as_deref(), Some("Nueva Reina Valera 2000"));
    match service.search("1 CORINTIOS 13:4").unwrap() {
        Passage::Verse(hit) => assert_eq!(hit.reference, "1 corintios 13:4"),
        Passage::Range(_) => panic!("Expected verse"),
    }
}

#[test]
fn empty_directory_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("bible.json");
    let err = convert_directory(dir.path(), &output, "v").unwrap_err();
    assert!(matches!(err, Error::Corpus(_)));
    assert!(!output.exists());
}

#[test]
fn loads_document_written_elsewhere() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("bible.json");
    fs::write(
        &path,
        r#"{"bible_version": "Test", "books": {"genesis": {"1": ["uno", null, "tres"]}}}"#,
    )
    .unwrap();

    let bible = load_bible(&path).unwrap();
    assert_eq!(bible.verse("genesis", 1, 3), Some("tres"));
    assert_eq!(bible.verse("genesis", 1, 2), None);
}

#[test]
fn missing_document_is_an_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("absent.json");
    match load_bible(&path).unwrap_err() {
        Error::Io { path: Some(p), .. } => assert_eq!(p, path),
        other => panic!("Expected Io error with path, got {other:?}"),
    }
}

#[test]
fn non_utf8_source_is_decoded_lossily() {
    let src = tempfile::tempdir().unwrap();
    fs::write(src.path().join("a.txt"), "(1, 1, 1, 'En el principio')").unwrap();
    // Latin-1 encoded "Jehová"
    fs::write(src.path().join("b.txt"), b"(19, 23, 1, 'Jehov\xe1 es mi pastor')").unwrap();

    let out = tempfile::tempdir().unwrap();
    let output = out.path().join("bible.json");
    let summary = convert_directory(src.path(), &output, "v").unwrap();
    assert_eq!(summary.verses, 2);

    let bible = load_bible(&output).unwrap();
    assert_eq!(bible.verse("genesis", 1, 1), Some("En el principio"));
    assert_eq!(bible.verse("salmos", 23, 1), Some("Jehov\u{fffd} es mi pastor"));
}

#[test]
fn reads_structured_records() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("records.json");
    fs::write(
        &path,
        r#"[[1, 1, 1, "a"], {"book": 1, "chapter": 1, "verse": 2, "text": "b"}]"#,
    )
    .unwrap();

    let records = read_records_json(&path).unwrap();
    assert_eq!(records.len(), 2);
    assert_eq!(records[1].text, "b");
}
