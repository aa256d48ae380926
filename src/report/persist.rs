use std::fs;
use std::path::Path;

use serde::Serialize;

use crate::types::{AnalysisError, ScoredDocument};

/// Write a scored document as pretty JSON. The file is written next to its
/// destination and renamed into place, so readers never see a partial file.
pub fn write_analysis(scored: &ScoredDocument, path: &Path) -> Result<(), AnalysisError> {
    write_json_atomic(scored, path)
}

/// Load a scored document and verify its analysis version against its pages.
///
/// The version covers the config fingerprint and page versions only. A
/// mismatch means the recorded source text or config no longer matches the
/// stored version, and the file is rejected rather than re-ranked. Edited
/// scores are not detected.
pub fn read_analysis(path: &Path) -> Result<ScoredDocument, AnalysisError> {
    let f = fs::File::open(path)?;
    let scored: ScoredDocument = serde_json::from_reader(f)?;

    let computed = scored.recomputed_version();
    if computed != scored.analysis_version {
        return Err(AnalysisError::StaleAnalysis {
            stored: scored.analysis_version.as_str().to_string(),
            computed: computed.as_str().to_string(),
        });
    }
    Ok(scored)
}

pub(crate) fn write_json_atomic<T: Serialize>(value: &T, path: &Path) -> Result<(), AnalysisError> {
    let temp_path = path.with_extension("json.tmp");

    // Clean up any stale temp file from a crashed previous run
    if temp_path.exists() {
        fs::remove_file(&temp_path)?;
    }

    let f = fs::File::create(&temp_path)?;
    serde_json::to_writer_pretty(&f, value)?;
    f.sync_all()?;

    fs::rename(&temp_path, path)?;
    Ok(())
}
