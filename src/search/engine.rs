//! Search orchestration over every known document.

use super::strategy::{GeneralStrategy, SearchStrategy, SpecializedStrategy};
use super::synonyms::SynonymExpander;
use crate::catalog::{ComponentCatalog, SpecializedDataset, SynonymMap};
use crate::index::{DocumentIndexer, DocumentProvider, IndexStore, document_stem};
use crate::types::{DocumentIndex, DocumentSummary, IndexStatus, SearchResponse};
use std::collections::BTreeMap;
use std::sync::Arc;
use tracing::{debug, warn};

/// Entry point for indexing and searching documents.
///
/// Holds the static catalogs and dispatches each query to the strategy of its
/// document: the precomputed tables of a specialized document, or the
/// persisted line index for everything else. Documents are matched by their
/// stem, so `wiring` and `wiring.pdf` name the same document.
#[derive(Debug, Clone)]
pub struct SearchEngine {
    store: IndexStore,
    indexer: DocumentIndexer,
    expander: SynonymExpander,
    general: GeneralStrategy,
    specialized: BTreeMap<String, SpecializedStrategy>,
}

impl SearchEngine {
    pub fn new(catalog: Arc<ComponentCatalog>, synonyms: Arc<SynonymMap>, store: IndexStore) -> Self {
        let expander = SynonymExpander::new(synonyms);
        Self {
            indexer: DocumentIndexer::new(catalog, store.clone()),
            general: GeneralStrategy::new(store.clone(), expander.clone()),
            expander,
            store,
            specialized: BTreeMap::new(),
        }
    }

    /// Serves `document_id` from `dataset` instead of a persisted index.
    pub fn with_specialized(
        mut self,
        document_id: impl Into<String>,
        dataset: SpecializedDataset,
    ) -> Self {
        let strategy = SpecializedStrategy::new(Arc::new(dataset), self.expander.clone());
        self.specialized.insert(document_id.into(), strategy);
        self
    }

    pub fn store(&self) -> &IndexStore {
        &self.store
    }

    pub fn expander(&self) -> &SynonymExpander {
        &self.expander
    }

    fn specialized(&self, document_id: &str) -> Option<(&str, &SpecializedStrategy)> {
        let stem = document_stem(document_id);
        self.specialized
            .iter()
            .find(|(id, _)| document_stem(id) == stem)
            .map(|(id, strategy)| (id.as_str(), strategy))
    }

    pub fn is_specialized(&self, document_id: &str) -> bool {
        self.specialized(document_id).is_some()
    }

    fn strategy(&self, document_id: &str) -> &dyn SearchStrategy {
        match self.specialized(document_id) {
            Some((_, strategy)) => strategy,
            None => &self.general,
        }
    }

    /// Searches one document. A blank keyword yields an empty response.
    pub fn search(&self, document_id: &str, keyword: &str) -> SearchResponse {
        if keyword.trim().is_empty() || document_id.trim().is_empty() {
            return SearchResponse::empty();
        }
        self.strategy(document_id).search(document_id, keyword)
    }

    /// Searches every indexed and specialized document independently.
    ///
    /// Only documents with at least one hit are returned, keyed by snapshot
    /// stem or specialized id. Results are not ranked across documents.
    pub fn search_all(&self, keyword: &str) -> BTreeMap<String, SearchResponse> {
        if keyword.trim().is_empty() {
            return BTreeMap::new();
        }

        let indexed = self.indexed_stems().into_iter().filter_map(|stem| {
            let index = self.store.load_stem(&stem)?;
            let response = self.general.search_index(&stem, &index, keyword);
            Some((stem, response))
        });
        let specialized = self
            .specialized
            .iter()
            .map(|(id, strategy)| (id.clone(), strategy.search(id, keyword)));

        indexed
            .chain(specialized)
            .filter(|(_, response)| !response.is_empty())
            .collect()
    }

    /// Snapshot stems not shadowed by a specialized document.
    ///
    /// Stems are compared as listed. Running them through `document_stem`
    /// again would cut a dotted name such as `v3.0` down to `v3`.
    fn indexed_stems(&self) -> Vec<String> {
        self.store
            .indexed_documents()
            .into_iter()
            .filter(|stem| !self.specialized.keys().any(|id| document_stem(id) == *stem))
            .collect()
    }

    /// Indexes a document and persists its snapshot.
    ///
    /// Specialized documents are served from their tables and are never
    /// indexed; asking for one returns `None`.
    pub fn index(&self, provider: &dyn DocumentProvider, document_id: &str) -> Option<DocumentIndex> {
        if let Some((id, _)) = self.specialized(document_id) {
            warn!("'{}' is served from precomputed tables, not indexing", id);
            return None;
        }
        Some(self.indexer.index_document(provider, document_id))
    }

    /// One summary per persisted index and per specialized document.
    ///
    /// An unreadable snapshot is listed with no status rather than failing the listing.
    pub fn document_summaries(&self) -> Vec<DocumentSummary> {
        let mut summaries: Vec<DocumentSummary> = self
            .indexed_stems()
            .into_iter()
            .map(|stem| match self.store.load_stem(&stem) {
                Some(index) => DocumentSummary::from_index(&index),
                None => DocumentSummary {
                    document_id: stem,
                    status: None,
                    total_pages: 0,
                    success_pages: 0,
                    total_components: 0,
                    specialized: false,
                },
            })
            .collect();

        for (document_id, strategy) in &self.specialized {
            let dataset = strategy.dataset();
            let pages = u32::try_from(dataset.page_count()).unwrap_or(u32::MAX);
            summaries.push(DocumentSummary {
                document_id: document_id.clone(),
                status: Some(IndexStatus::Success),
                total_pages: pages,
                success_pages: pages,
                total_components: dataset.component_count(),
                specialized: true,
            });
        }

        debug!("Listed {} documents", summaries.len());
        summaries
    }
}
