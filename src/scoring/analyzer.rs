use rayon::prelude::*;

use crate::config::{ConfigError, EngineConfig};
use crate::detectors::{extract_keywords, FeatureDetector, FillerReason, PatternDetector};
use crate::document::{Document, DocumentError, Page, TextSource};
use crate::scoring::DensityScorer;
use crate::types::{AnalysisError, FeatureScores, PageAnalysis, ScoredDocument};
use crate::weighting::CorpusModel;

/// Corpus-independent output of the pattern layer for one page.
struct PageSignals {
    formula_score: f64,
    definition_score: f64,
    vocabulary_score: f64,
    filler_reason: Option<FillerReason>,
}

/// Runs the whole scoring pipeline over one document.
///
/// Two phases: the document must be fully collected before analysis, because
/// the corpus model is fitted on every page at once. The analyzer holds no
/// per-document state and can be reused across documents.
pub struct DensityAnalyzer<D = PatternDetector> {
    config: EngineConfig,
    fingerprint: String,
    detector: D,
    scorer: DensityScorer,
}

impl DensityAnalyzer<PatternDetector> {
    pub fn new(config: EngineConfig) -> Result<Self, ConfigError> {
        let detector = PatternDetector::new(&config.detectors)?;
        Self::with_detector(config, detector)
    }
}

impl<D> DensityAnalyzer<D>
where
    D: FeatureDetector,
{
    /// Use a custom detector. The config is still validated in full.
    pub fn with_detector(config: EngineConfig, detector: D) -> Result<Self, ConfigError> {
        config.validate()?;
        let scorer = DensityScorer::new(config.weights)?;
        let fingerprint = config.fingerprint()?;
        Ok(Self {
            config,
            fingerprint,
            detector,
            scorer,
        })
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn fingerprint(&self) -> &str {
        &self.fingerprint
    }

    /// Collect every page from `source`, then analyze.
    pub fn analyze_source<S>(&self, source: &S) -> Result<ScoredDocument, AnalysisError>
    where
        S: TextSource + ?Sized,
    {
        let document = source.collect()?;
        self.analyze(&document)
    }

    pub fn analyze(&self, document: &Document) -> Result<ScoredDocument, AnalysisError> {
        if document.is_empty() {
            return Err(DocumentError::EmptyCorpus.into());
        }

        // 1. Pattern layer, independent per page
        let signals: Vec<Option<PageSignals>> = document
            .pages()
            .par_iter()
            .map(|page| self.detect(page))
            .collect();

        // 2. Corpus layer, needs every page
        let corpus: Vec<Option<&str>> = document.pages().iter().map(|p| p.text.as_str()).collect();
        let model = CorpusModel::fit(&corpus, &self.config.term_weighting);

        // 3. Combination
        let pages: Vec<PageAnalysis> = document
            .pages()
            .iter()
            .zip(signals)
            .enumerate()
            .map(|(position, (page, signals))| self.combine(position, page, signals, &model))
            .collect();

        log::debug!(
            "analyzed {} pages of {}, {} filler",
            pages.len(),
            document.source,
            pages.iter().filter(|p| p.is_filler).count()
        );

        Ok(ScoredDocument::new(self.fingerprint.clone(), pages))
    }

    fn detect(&self, page: &Page) -> Option<PageSignals> {
        let text = page.text.as_str()?;
        let stats = self.detector.page_stats(text);
        Some(PageSignals {
            formula_score: self.detector.detect_formula_density(text),
            definition_score: self.detector.detect_definition_density(text),
            vocabulary_score: self.detector.compute_vocabulary_richness(text),
            filler_reason: self.detector.filler_reason(text, &stats),
        })
    }

    fn combine(
        &self,
        position: usize,
        page: &Page,
        signals: Option<PageSignals>,
        model: &CorpusModel,
    ) -> PageAnalysis {
        let Some(signals) = signals else {
            log::warn!("page {}: no text available, scoring as 0.0", page.index);
            return PageAnalysis {
                index: page.index,
                version: page.version.clone(),
                extraction_unavailable: true,
                is_filler: false,
                filler_reason: None,
                features: FeatureScores::zero(),
                density_score: 0.0,
                keywords: Vec::new(),
            };
        };

        let features = FeatureScores::new(
            model.page_score(position),
            signals.formula_score,
            signals.definition_score,
            signals.vocabulary_score,
        )
        .sanitized(page.index);
        let density_score = self.scorer.compute_density(&features);

        let keywords = model
            .page_weights(position)
            .map(|weights| extract_keywords(weights, self.config.keywords_top_k))
            .unwrap_or_default();

        PageAnalysis {
            index: page.index,
            version: page.version.clone(),
            extraction_unavailable: false,
            is_filler: signals.filler_reason.is_some(),
            filler_reason: signals.filler_reason,
            features,
            density_score,
            keywords,
        }
    }
}
