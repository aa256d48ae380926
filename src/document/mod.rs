pub mod document;
pub mod source;
pub mod stats;

pub use crate::types::identifiers::{PageIndex, PageVersion};
pub use document::{Document, DocumentError, Page, PageText, RawPage};
pub use source::{InMemorySource, JsonPageSource, TextSource};
pub use stats::PageStats;
