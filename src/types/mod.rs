pub mod analysis_bundle;
pub mod identifiers;
pub mod scores;

pub use analysis_bundle::{
    AnalysisError, ExtractionSet, PageAnalysis, RankedPage, ScoredDocument, SelectionMetadata,
    SelectionResult,
};
pub use identifiers::{AnalysisVersion, PageIndex, PageVersion};
pub use scores::{Factor, FeatureScores, Keyword};
