use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::types::identifiers::{PageIndex, PageVersion};

#[derive(Debug, Error)]
pub enum DocumentError {
    #[error("Document has no pages")]
    EmptyCorpus,

    #[error("Page indices must be contiguous from 1: expected {expected}, found {found}")]
    NonContiguousIndex { expected: u32, found: u32 },

    #[error("Duplicate page index: {0}")]
    DuplicatePage(u32),

    #[error("No text could be extracted from any of the {pages} pages")]
    ExtractionUnavailable { pages: usize },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Page text as delivered by the text source, before validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawPage {
    pub index: u32,
    pub text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl RawPage {
    pub fn extracted(index: u32, text: impl Into<String>) -> Self {
        Self {
            index,
            text: Some(text.into()),
            error: None,
        }
    }

    pub fn unavailable(index: u32, reason: impl Into<String>) -> Self {
        Self {
            index,
            text: None,
            error: Some(reason.into()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PageText {
    Extracted(String),
    Unavailable { reason: String },
}

impl PageText {
    pub fn as_str(&self) -> Option<&str> {
        match self {
            PageText::Extracted(text) => Some(text),
            PageText::Unavailable { .. } => None,
        }
    }

    pub fn is_available(&self) -> bool {
        matches!(self, PageText::Extracted(_))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Page {
    pub index: PageIndex,
    pub version: PageVersion,
    pub text: PageText,
}

/// An ordered, immutable sequence of pages indexed 1..=N.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    pub source: String,
    pages: Vec<Page>,
}

impl Document {
    /// Validate raw pages into a Document.
    ///
    /// This is the ONLY way to construct a Document. Pages may arrive in any
    /// order but their indices must cover 1..=N exactly once. Pages without
    /// text are kept and marked unavailable; a document where every page is
    /// unavailable is rejected.
    pub fn ingest(source: impl Into<String>, raw_pages: Vec<RawPage>) -> Result<Self, DocumentError> {
        if raw_pages.is_empty() {
            return Err(DocumentError::EmptyCorpus);
        }

        let mut sorted = raw_pages;
        sorted.sort_by_key(|p| p.index);

        for pair in sorted.windows(2) {
            if pair[0].index == pair[1].index {
                return Err(DocumentError::DuplicatePage(pair[0].index));
            }
        }

        let mut pages = Vec::with_capacity(sorted.len());
        for (position, raw) in sorted.into_iter().enumerate() {
            let expected = position as u32 + 1;
            if raw.index != expected {
                return Err(DocumentError::NonContiguousIndex {
                    expected,
                    found: raw.index,
                });
            }

            let page = match raw.text {
                Some(text) => Page {
                    index: PageIndex::new(raw.index),
                    version: PageVersion::from_content(text.as_bytes()),
                    text: PageText::Extracted(text),
                },
                None => Page {
                    index: PageIndex::new(raw.index),
                    version: PageVersion::unavailable(),
                    text: PageText::Unavailable {
                        reason: raw.error.unwrap_or_else(|| "no text returned".into()),
                    },
                },
            };
            pages.push(page);
        }

        if pages.iter().all(|p| !p.text.is_available()) {
            return Err(DocumentError::ExtractionUnavailable { pages: pages.len() });
        }

        Ok(Document {
            source: source.into(),
            pages,
        })
    }

    /// Convenience: pages numbered 1..=N in iteration order.
    pub fn from_texts<I, S>(source: impl Into<String>, texts: I) -> Result<Self, DocumentError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let raw_pages = texts
            .into_iter()
            .enumerate()
            .map(|(i, text)| RawPage::extracted(i as u32 + 1, text))
            .collect();
        Self::ingest(source, raw_pages)
    }

    pub fn pages(&self) -> &[Page] {
        &self.pages
    }

    pub fn page(&self, index: PageIndex) -> Option<&Page> {
        let position = (index.get() as usize).checked_sub(1)?;
        self.pages.get(position)
    }

    pub fn len(&self) -> usize {
        self.pages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }
}
