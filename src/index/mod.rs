//! Indexing pipeline: raw page text → classified, component-tagged lines →
//! persisted per-document snapshot.

pub(crate) mod classify;
pub(crate) mod document;
pub(crate) mod extract;
pub(crate) mod page;
pub(crate) mod source;
pub(crate) mod store;

pub use classify::TextClassifier;
pub use document::DocumentIndexer;
pub use extract::ComponentExtractor;
pub use page::{PageIndex, PageIndexer};
pub use source::{DocumentProvider, PageContent, PageDump, PageDumpProvider, PageSource, Table};
pub use store::IndexStore;

use std::path::Path;

/// Document identifier without its directory or extension (`a/b.pdf` → `b`).
pub(crate) fn document_stem(document_id: &str) -> &str {
    Path::new(document_id)
        .file_stem()
        .and_then(|stem| stem.to_str())
        .unwrap_or(document_id)
}
