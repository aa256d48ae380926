use std::fmt;

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

/// One-based position of a page in its source document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PageIndex(u32);

impl PageIndex {
    pub fn new(index: u32) -> Self {
        PageIndex(index)
    }

    pub fn get(self) -> u32 {
        self.0
    }
}

impl fmt::Display for PageIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Content hash of a page's raw text.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PageVersion(String);

impl PageVersion {
    pub fn from_content(content: &[u8]) -> Self {
        PageVersion(sha256_tag(content))
    }

    /// Version used for pages whose text could not be extracted.
    pub fn unavailable() -> Self {
        PageVersion("unavailable".into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Identity of one analysis run: config fingerprint plus every page version.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AnalysisVersion(String);

impl AnalysisVersion {
    pub fn compute<'a>(
        config_fingerprint: &str,
        pages: impl IntoIterator<Item = (PageIndex, &'a PageVersion)>,
    ) -> Self {
        let mut hasher = Sha256::new();
        hasher.update(config_fingerprint.as_bytes());
        for (index, version) in pages {
            let line = format!("{}:{}", index, version.as_str());
            hasher.update(line.as_bytes());
        }
        AnalysisVersion(format!("sha256:{}", hex::encode(hasher.finalize())))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

pub(crate) fn sha256_tag(bytes: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(bytes);
    format!("sha256:{}", hex::encode(hasher.finalize()))
}
