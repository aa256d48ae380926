pub mod persist;
pub mod summary;

use std::path::Path;

use crate::types::AnalysisError;

pub use persist::{read_analysis, write_analysis};
pub use summary::{AnalysisReport, PageSummary, SUMMARY_KEYWORDS};

/// Write an exporter report as pretty JSON, atomically.
pub fn write_report(report: &AnalysisReport, path: &Path) -> Result<(), AnalysisError> {
    persist::write_json_atomic(report, path)
}
