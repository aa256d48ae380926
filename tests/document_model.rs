use std::fs;

use density_core::document::{
    Document, DocumentError, InMemorySource, JsonPageSource, PageIndex, PageText, RawPage,
    TextSource,
};
use density_core::{DensityAnalyzer, EngineConfig};
use tempfile::TempDir;

#[test]
fn empty_document_is_rejected() {
    let result = Document::ingest("empty.pdf", Vec::new());
    assert!(matches!(result, Err(DocumentError::EmptyCorpus)));

    let result = Document::from_texts("empty.pdf", Vec::<String>::new());
    assert!(matches!(result, Err(DocumentError::EmptyCorpus)));
}

#[test]
fn index_gap_is_rejected() {
    let pages = vec![
        RawPage::extracted(1, "first"),
        RawPage::extracted(2, "second"),
        RawPage::extracted(4, "fourth"),
    ];
    let result = Document::ingest("gap.pdf", pages);
    assert!(matches!(
        result,
        Err(DocumentError::NonContiguousIndex { expected: 3, found: 4 })
    ));

    let result = Document::ingest("zero.pdf", vec![RawPage::extracted(0, "zero")]);
    assert!(matches!(
        result,
        Err(DocumentError::NonContiguousIndex { expected: 1, found: 0 })
    ));
}

#[test]
fn duplicate_index_is_rejected() {
    let pages = vec![
        RawPage::extracted(1, "first"),
        RawPage::extracted(2, "second"),
        RawPage::extracted(2, "second again"),
    ];
    let result = Document::ingest("dup.pdf", pages);
    assert!(matches!(result, Err(DocumentError::DuplicatePage(2))));
}

#[test]
fn pages_are_ordered_by_index() {
    let pages = vec![
        RawPage::extracted(3, "third"),
        RawPage::extracted(1, "first"),
        RawPage::extracted(2, "second"),
    ];
    let document = Document::ingest("shuffled.pdf", pages).unwrap();

    let texts: Vec<&str> = document
        .pages()
        .iter()
        .map(|p| p.text.as_str().unwrap())
        .collect();
    assert_eq!(texts, vec!["first", "second", "third"]);
    assert_eq!(document.len(), 3);
    assert_eq!(document.source, "shuffled.pdf");
}

#[test]
fn page_lookup_is_one_based() {
    let document = Document::from_texts("doc.pdf", ["a", "b"]).unwrap();
    assert_eq!(
        document.page(PageIndex::new(2)).unwrap().text.as_str(),
        Some("b")
    );
    assert!(document.page(PageIndex::new(0)).is_none());
    assert!(document.page(PageIndex::new(3)).is_none());
}

#[test]
fn all_pages_unavailable_is_rejected() {
    let pages = vec![
        RawPage::unavailable(1, "encrypted"),
        RawPage::unavailable(2, "encrypted"),
    ];
    let result = Document::ingest("locked.pdf", pages);
    assert!(matches!(
        result,
        Err(DocumentError::ExtractionUnavailable { pages: 2 })
    ));
}

#[test]
fn partially_unavailable_document_is_kept() {
    let pages = vec![
        RawPage::extracted(1, "some text"),
        RawPage::unavailable(2, "scanned image"),
        RawPage {
            index: 3,
            text: None,
            error: None,
        },
    ];
    let document = Document::ingest("scan.pdf", pages).unwrap();

    assert!(document.pages()[0].text.is_available());
    assert_eq!(
        document.pages()[1].text,
        PageText::Unavailable {
            reason: "scanned image".to_string()
        }
    );
    assert!(!document.pages()[2].text.is_available());
}

#[test]
fn identical_text_has_identical_version() {
    let document = Document::from_texts("doc.pdf", ["same", "same", "other"]).unwrap();
    let pages = document.pages();
    assert_eq!(pages[0].version, pages[1].version);
    assert_ne!(pages[0].version, pages[2].version);
    assert!(pages[0].version.as_str().starts_with("sha256:"));
}

#[test]
fn in_memory_source_collects_document() {
    let source = InMemorySource::new(
        "memory",
        vec![RawPage::extracted(2, "two"), RawPage::extracted(1, "one")],
    );
    let document = source.collect().unwrap();
    assert_eq!(document.source, "memory");
    assert_eq!(document.pages()[0].text.as_str(), Some("one"));
}

#[test]
fn json_source_reads_pages_from_file() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("pages.json");
    fs::write(
        &path,
        r#"[
            { "index": 1, "text": "Entropy is defined as expected surprise." },
            { "index": 2, "text": null, "error": "image only" }
        ]"#,
    )
    .unwrap();

    let document = JsonPageSource::new(&path).collect().unwrap();
    assert_eq!(document.len(), 2);
    assert!(document.pages()[0].text.is_available());
    assert!(!document.pages()[1].text.is_available());
}

#[test]
fn json_source_reports_io_and_format_errors() {
    let temp = TempDir::new().unwrap();

    let missing = JsonPageSource::new(temp.path().join("missing.json")).collect();
    assert!(matches!(missing, Err(DocumentError::Io(_))));

    let path = temp.path().join("broken.json");
    fs::write(&path, "{ \"index\": 1 }").unwrap();
    let broken = JsonPageSource::new(&path).collect();
    assert!(matches!(broken, Err(DocumentError::Serialization(_))));
}

#[test]
fn scores_become_stale_when_text_changes() {
    let analyzer = DensityAnalyzer::new(EngineConfig::default()).unwrap();
    let original = Document::from_texts(
        "doc.pdf",
        [
            "The Fourier transform maps a signal to its frequency components.",
            "A matrix is called invertible when its determinant is nonzero.",
        ],
    )
    .unwrap();
    let scored = analyzer.analyze(&original).unwrap();
    assert!(scored.is_current_for(&original));

    let edited = Document::from_texts(
        "doc.pdf",
        [
            "The Fourier transform maps a signal to its frequency components.",
            "A matrix is called singular when its determinant is zero.",
        ],
    )
    .unwrap();
    assert!(!scored.is_current_for(&edited));
}
