//! Whole-document indexing with page-tolerant, document-fatal failure handling.

use super::page::PageIndexer;
use super::source::{DocumentProvider, PageSource};
use super::store::IndexStore;
use crate::catalog::ComponentCatalog;
use crate::error::{DocumentError, Result};
use crate::types::{DocumentIndex, IndexStatus};
use anyhow::Context;
use std::sync::Arc;
use std::time::Instant;
use tracing::{error, info, warn};

/// Drives the [`PageIndexer`] over every page of a document and persists the result.
///
/// A page that fails is skipped and left out of every aggregate; the document
/// still finishes as `success`. Only failing to open the document, to count its
/// pages, or to write the snapshot marks the run `failed`.
#[derive(Debug, Clone)]
pub struct DocumentIndexer {
    pages: PageIndexer,
    store: IndexStore,
}

impl DocumentIndexer {
    pub fn new(catalog: Arc<ComponentCatalog>, store: IndexStore) -> Self {
        Self {
            pages: PageIndexer::new(catalog).with_artifacts(store.clone()),
            store,
        }
    }

    pub fn store(&self) -> &IndexStore {
        &self.store
    }

    /// Indexes `document_id` from scratch, overwriting any previous snapshot.
    pub fn index_document(
        &self,
        provider: &dyn DocumentProvider,
        document_id: &str,
    ) -> DocumentIndex {
        let start = Instant::now();
        let mut index = DocumentIndex::new(document_id);

        let source = match provider.open(document_id) {
            Ok(source) => source,
            Err(e) => {
                error!("Indexing '{}' failed: {}", document_id, e);
                index.fail(e);
                return index;
            }
        };

        if let Err(e) = self.index_pages(source.as_ref(), &mut index) {
            let err = DocumentError::Unreadable {
                document_id: document_id.to_string(),
                cause: e,
            };
            error!("Indexing '{}' failed: {}", document_id, err);
            index.fail(err);
            return index;
        }

        index.status = IndexStatus::Success;
        if let Err(cause) = self.store.save(&index) {
            let err = DocumentError::Persist {
                document_id: document_id.to_string(),
                cause,
            };
            error!("{}", err);
            index.fail(err);
            return index;
        }

        info!(
            "Indexed '{}': {}/{} pages, {} components in {:?}",
            document_id,
            index.success_pages,
            index.total_pages,
            index.total_components,
            start.elapsed()
        );
        index
    }

    fn index_pages(&self, source: &dyn PageSource, index: &mut DocumentIndex) -> Result<()> {
        index.total_pages = source.page_count().context("failed to read page count")?;

        for page_num in 1..=index.total_pages {
            match self.pages.index_page(source, &index.document_id, page_num) {
                Ok(page) => {
                    info!(
                        "Page {} indexed: {} components",
                        page_num, page.component_count
                    );
                    index.success_pages += 1;
                    index.total_components += page.component_count;
                    index
                        .page_components_count
                        .insert(page_num, page.component_count);
                    index.page_elements.insert(page_num, page.elements);
                }
                Err(e) => warn!("Skipping page of '{}': {}", index.document_id, e),
            }
        }

        Ok(())
    }
}
