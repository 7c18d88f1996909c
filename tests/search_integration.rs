//! Integration tests for reference lookup against a built corpus.

#![allow(clippy::expect_used, clippy::unwrap_used, clippy::panic)]

use versefind::bible::{
    build, format_result, normalize_book_fragment, BuildOutput, Corpus, CorpusInput, LookupError,
    Passage, VerseRecord,
};

/// Genesis 1 with 31 verses, Genesis 2:1-4 and 3:1-2, a sparse 1 Samuel and Salmos 23:1.
fn corpus() -> Corpus {
    let mut text = String::from("-- dump start --\n");
    for verse in 1..=31 {
        text.push_str(&format!("(1, 1, {verse}, 'Génesis uno {verse}'),\n"));
    }
    text.push_str("(1, 2, 1, 'Génesis dos 1'), (1, 2, 2, 'Génesis dos 2');\n");
    text.push_str("(1, 2, 3, 'Génesis dos 3'), (1, 2, 4, 'Génesis dos 4');\n");
    text.push_str("(1, 3, 1, 'Génesis tres 1'), (1, 3, 2, 'Génesis tres 2');\n");
    text.push_str("(9, 1, 1, 'Hubo un varón'), (9, 1, 4, 'Y cuando llegaba el día');\n");
    text.push_str("(9, 3, 2, 'sparse only');\n");
    text.push_str("(19, 23, 1, 'Jehová es mi pastor;/nnada me faltará.')\n");
    text.push_str("-- dump end --");
    Corpus::new(build(CorpusInput::Text(&text), "Nueva Reina Valera 2000").bible)
}

fn range_positions(passage: Passage) -> Vec<(u32, u32)> {
    match passage {
        Passage::Range(hit) => hit.verses.into_iter().map(|v| (v.chapter, v.verse)).collect(),
        Passage::Verse(hit) => panic!("Expected range, got verse {}", hit.reference),
    }
}

#[test]
fn every_ingested_record_round_trips() {
    let records: Vec<VerseRecord> = (1..=5)
        .flat_map(|chapter| {
            (1..=3).map(move |verse| {
                VerseRecord::new(46, chapter, verse, format!("{chapter}-{verse}"))
            })
        })
        .collect();
    let BuildOutput { bible, report } = build(CorpusInput::Records(records.clone()), "v");
    assert_eq!(report.accepted, records.len());

    let corpus = Corpus::new(bible);
    for record in records {
        let query = format!("1 corintios {}:{}", record.chapter, record.verse);
        match corpus.search(&query).unwrap() {
            Passage::Verse(hit) => assert_eq!(hit.text, record.text),
            Passage::Range(_) => panic!("Expected verse for {query}"),
        }
    }
}

#[test]
fn book_names_are_case_space_and_underscore_insensitive() {
    assert_eq!(normalize_book_fragment("1 samuel"), "1_samuel");
    assert_eq!(normalize_book_fragment("1_samuel"), "1_samuel");
    assert_eq!(normalize_book_fragment("1   Samuel"), "1_samuel");

    let corpus = corpus();
    for query in ["1 samuel 1:1", "1_samuel 1:1", "1   SAMUEL   1 : 1"] {
        assert!(corpus.search(query).is_ok(), "query: {query}");
    }
}

#[test]
fn same_chapter_range_returns_ascending_verses() {
    let passage = corpus().search("genesis 1:1-3").unwrap();
    assert_eq!(range_positions(passage), vec![(1, 1), (1, 2), (1, 3)]);
}

#[test]
fn cross_chapter_range_returns_tail_then_head() {
    let corpus = corpus();
    let passage = corpus.search("genesis 1:30-2:2").unwrap();
    match &passage {
        Passage::Range(hit) => {
            assert_eq!(hit.label, "genesis 1:30-2:2");
            assert_eq!(hit.verses[0].text, "Génesis uno 30");
            assert_eq!(hit.verses[3].text, "Génesis dos 2");
        }
        Passage::Verse(_) => panic!("Expected range"),
    }
    assert_eq!(range_positions(passage), vec![(1, 30), (1, 31), (2, 1), (2, 2)]);

    // Spaced form from the usage examples
    let spaced = corpus.search("genesis 1:30 - 2:2").unwrap();
    assert_eq!(range_positions(spaced), vec![(1, 30), (1, 31), (2, 1), (2, 2)]);
}

#[test]
fn cross_chapter_range_includes_whole_interior_chapter() {
    let passage = corpus().search("genesis 1:3-3:1").unwrap();
    let expected: Vec<(u32, u32)> = (3..=31)
        .map(|verse| (1, verse))
        .chain((1..=4).map(|verse| (2, verse)))
        .chain([(3, 1)])
        .collect();
    assert_eq!(range_positions(passage), expected);
}

#[test]
fn cross_chapter_range_skips_missing_chapters() {
    let passage = corpus().search("1 samuel 1:4-3:9").unwrap();
    assert_eq!(range_positions(passage), vec![(1, 4), (3, 2)]);
}

#[test]
fn unknown_book_is_reported_verbatim() {
    assert_eq!(
        corpus().search("nogospel 1:1"),
        Err(LookupError::BookNotFound { book: "nogospel".to_string() })
    );
}

#[test]
fn missing_chapter_is_reported() {
    assert_eq!(
        corpus().search("genesis 999:1"),
        Err(LookupError::ChapterNotFound { book: "genesis".to_string(), chapter: 999 })
    );
}

#[test]
fn missing_verse_is_reported() {
    assert_eq!(
        corpus().search("1 samuel 1:2"),
        Err(LookupError::VerseNotFound { book: "1_samuel".to_string(), chapter: 1, verse: 2 })
    );
}

#[test]
fn malformed_query_is_a_syntax_error() {
    assert!(matches!(
        corpus().search("genesis chapter one"),
        Err(LookupError::Syntax { .. })
    ));
}

#[test]
fn range_over_holes_is_empty_not_success() {
    let result = corpus().search("1 samuel 1:2-3");
    assert_eq!(
        result,
        Err(LookupError::EmptyRange {
            book: "1_samuel".to_string(),
            label: "1 samuel 1:2-1:3".to_string(),
        })
    );
    assert_eq!(format_result(&result), "Error: No verses found in range 1 samuel 1:2-1:3");
}

#[test]
fn display_expands_break_markers() {
    let result = corpus().search("salmos 23:1");
    assert_eq!(
        format_result(&result),
        "salmos 23:1\nJehová es mi pastor;\nnada me faltará."
    );
    match result.unwrap() {
        Passage::Verse(hit) => assert_eq!(hit.text, "Jehová es mi pastor;/nnada me faltará."),
        Passage::Range(_) => panic!("Expected verse"),
    }
}
