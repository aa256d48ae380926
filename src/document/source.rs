use std::fs;
use std::path::{Path, PathBuf};

use crate::document::document::{Document, DocumentError, RawPage};

/// Supplies the raw text of every page of one document.
///
/// Collection is the first half of a two-phase protocol: every page must be
/// collected before the corpus can be weighted.
pub trait TextSource {
    fn name(&self) -> String;

    fn collect_pages(&self) -> Result<Vec<RawPage>, DocumentError>;

    fn collect(&self) -> Result<Document, DocumentError> {
        let pages = self.collect_pages()?;
        Document::ingest(self.name(), pages)
    }
}

/// Pages already held in memory, e.g. handed over by a PDF text extractor.
#[derive(Debug, Clone)]
pub struct InMemorySource {
    name: String,
    pages: Vec<RawPage>,
}

impl InMemorySource {
    pub fn new(name: impl Into<String>, pages: Vec<RawPage>) -> Self {
        Self {
            name: name.into(),
            pages,
        }
    }
}

impl TextSource for InMemorySource {
    fn name(&self) -> String {
        self.name.clone()
    }

    fn collect_pages(&self) -> Result<Vec<RawPage>, DocumentError> {
        Ok(self.pages.clone())
    }
}

/// A JSON array of `{ "index": n, "text": "..." | null, "error": "..." }`.
#[derive(Debug, Clone)]
pub struct JsonPageSource {
    path: PathBuf,
}

impl JsonPageSource {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }
}

impl TextSource for JsonPageSource {
    fn name(&self) -> String {
        self.path.display().to_string()
    }

    fn collect_pages(&self) -> Result<Vec<RawPage>, DocumentError> {
        let f = fs::File::open(&self.path)?;
        let pages: Vec<RawPage> = serde_json::from_reader(f)?;
        Ok(pages)
    }
}
