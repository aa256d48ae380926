use std::fs;

use density_core::document::{Document, InMemorySource, RawPage};
use density_core::report::{
    read_analysis, write_analysis, write_report, AnalysisReport, SUMMARY_KEYWORDS,
};
use density_core::types::{PageIndex, PageVersion};
use density_core::{
    AnalysisError, DensityAnalyzer, EngineConfig, ExtractionConfig, PageSelector, ScoredDocument,
};
use tempfile::TempDir;

const PAGES: [&str; 3] = [
    "Bayes' rule states that P(A|B) = P(B|A) P(A) / P(B), where the prior P(A) is updated by the \
     likelihood of the observed evidence.",
    "A random variable is called discrete when it takes countably many values. Its distribution \
     refers to the probabilities assigned to each of those values.",
    "The central limit theorem says that a normalized sum of independent variables with finite \
     variance approaches a normal distribution as n → ∞.",
];

fn scored() -> ScoredDocument {
    let document = Document::from_texts("probability.pdf", PAGES).unwrap();
    DensityAnalyzer::new(EngineConfig::default())
        .unwrap()
        .analyze(&document)
        .unwrap()
}

fn assert_same_scores(a: &ScoredDocument, b: &ScoredDocument) {
    assert_eq!(a.analysis_version, b.analysis_version);
    assert_eq!(a.pages.len(), b.pages.len());
    for (x, y) in a.pages.iter().zip(&b.pages) {
        assert_eq!(x.index, y.index);
        assert_eq!(x.version, y.version);
        assert_eq!(x.is_filler, y.is_filler);
        assert_eq!(x.filler_reason, y.filler_reason);
        assert!((x.density_score - y.density_score).abs() < 1e-12);
        assert!((x.features.tfidf_score - y.features.tfidf_score).abs() < 1e-12);
        assert_eq!(x.keywords.len(), y.keywords.len());
    }
}

#[test]
fn scored_document_round_trips_through_disk() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("analysis.json");
    let scored = scored();

    write_analysis(&scored, &path).unwrap();
    assert!(path.exists());
    assert!(!path.with_extension("json.tmp").exists());

    let loaded = read_analysis(&path).unwrap();
    assert_same_scores(&scored, &loaded);

    // Reloaded scores select the same pages without re-scoring
    let config = ExtractionConfig::new(34.0, 0.0, true).unwrap();
    let before = PageSelector.select(&scored, &config).unwrap();
    let after = PageSelector.select(&loaded, &config).unwrap();
    assert_eq!(before.extraction_set, after.extraction_set);
}

#[test]
fn write_replaces_existing_file_and_stale_temp() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("analysis.json");
    fs::write(&path, "old contents").unwrap();
    fs::write(path.with_extension("json.tmp"), "leftover").unwrap();

    write_analysis(&scored(), &path).unwrap();
    assert!(read_analysis(&path).is_ok());
    assert!(!path.with_extension("json.tmp").exists());
}

#[test]
fn tampered_page_version_is_stale() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("analysis.json");

    let mut scored = scored();
    scored.pages[1].version = PageVersion::from_content(b"different text");
    write_analysis(&scored, &path).unwrap();

    let result = read_analysis(&path);
    assert!(matches!(result, Err(AnalysisError::StaleAnalysis { .. })));
}

#[test]
fn changed_config_fingerprint_is_stale() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("analysis.json");
    write_analysis(&scored(), &path).unwrap();

    let raw = fs::read_to_string(&path).unwrap();
    let mut value: serde_json::Value = serde_json::from_str(&raw).unwrap();
    value["config_fingerprint"] = serde_json::Value::String("sha256:0000".into());
    fs::write(&path, serde_json::to_string(&value).unwrap()).unwrap();

    let result = read_analysis(&path);
    assert!(matches!(result, Err(AnalysisError::StaleAnalysis { .. })));
}

#[test]
fn edited_score_is_not_covered_by_version() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("analysis.json");
    write_analysis(&scored(), &path).unwrap();

    let raw = fs::read_to_string(&path).unwrap();
    let mut value: serde_json::Value = serde_json::from_str(&raw).unwrap();
    value["pages"][0]["density_score"] = serde_json::json!(0.999);
    fs::write(&path, serde_json::to_string(&value).unwrap()).unwrap();

    // The version tracks source text and config only
    let loaded = read_analysis(&path).unwrap();
    assert_eq!(loaded.pages[0].density_score, 0.999);
}

#[test]
fn unreadable_analysis_file_is_an_error() {
    let temp = TempDir::new().unwrap();

    let missing = read_analysis(&temp.path().join("missing.json"));
    assert!(matches!(missing, Err(AnalysisError::Io(_))));

    let path = temp.path().join("garbage.json");
    fs::write(&path, "[1, 2, 3]").unwrap();
    assert!(matches!(
        read_analysis(&path),
        Err(AnalysisError::Serialization(_))
    ));
}

#[test]
fn report_covers_every_page() {
    let scored = scored();
    let config = ExtractionConfig::new(34.0, 0.0, true).unwrap();
    let result = PageSelector.select(&scored, &config).unwrap();
    let report = AnalysisReport::build(&scored, &result);

    assert_eq!(report.pages.len(), PAGES.len());
    assert_eq!(report.extraction_set, result.extraction_set);
    assert_eq!(report.statistics.total_pages, PAGES.len());

    let indices: Vec<u32> = report.pages.iter().map(|p| p.page_index.get()).collect();
    assert_eq!(indices, vec![1, 2, 3]);

    for row in &report.pages {
        assert_eq!(row.selected, result.extraction_set.contains(row.page_index));
        assert!(row.top_keywords.len() <= SUMMARY_KEYWORDS);
        assert!(row.rank >= 1 && row.rank <= PAGES.len());
    }
    assert_eq!(
        report.pages.iter().filter(|p| p.selected).count(),
        result.extraction_set.len()
    );
}

#[test]
fn report_flags_unavailable_pages() {
    let source = InMemorySource::new(
        "probability.pdf",
        vec![
            RawPage::extracted(1, PAGES[0]),
            RawPage::extracted(2, PAGES[1]),
            RawPage::unavailable(3, "image only"),
        ],
    );
    let scored = DensityAnalyzer::new(EngineConfig::default())
        .unwrap()
        .analyze_source(&source)
        .unwrap();
    let result = PageSelector
        .select(&scored, &ExtractionConfig::default())
        .unwrap();
    let report = AnalysisReport::build(&scored, &result);

    let row = report
        .pages
        .iter()
        .find(|p| p.page_index == PageIndex::new(3))
        .unwrap();
    assert!(row.extraction_unavailable);
    assert!(!row.selected);
    assert_eq!(row.rank, 3);
    assert_eq!(report.statistics.unavailable_pages, 1);
}

#[test]
fn report_is_written_as_json() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("report.json");

    let scored = scored();
    let result = PageSelector
        .select(&scored, &ExtractionConfig::default())
        .unwrap();
    let report = AnalysisReport::build(&scored, &result);
    write_report(&report, &path).unwrap();

    let raw = fs::read_to_string(&path).unwrap();
    let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
    assert_eq!(value["pages"].as_array().unwrap().len(), 3);
    assert!(value["extraction_set"].is_array());
    assert!(value["analysis_version"]
        .as_str()
        .unwrap()
        .starts_with("sha256:"));
}
