//! The two search modes: precomputed page tables and persisted line indexes.

use super::highlight::{TermMatcher, highlight, mark};
use super::scoring::{SPECIALIZED_EXACT_SCORE, SPECIALIZED_PARTIAL_SCORE, relevance_score};
use super::synonyms::SynonymExpander;
use crate::catalog::SpecializedDataset;
use crate::index::IndexStore;
use crate::types::{DocumentIndex, SearchResponse, SearchResult, TextType};
use ahash::AHashSet;
use std::cmp::Ordering;
use std::sync::Arc;
use tracing::debug;

/// Other components listed in a specialized hit's context.
const CONTEXT_COMPONENTS: usize = 5;

/// A way of answering a keyword query against one document.
pub trait SearchStrategy: Send + Sync {
    /// Runs a non-blank `keyword` against `document_id`.
    ///
    /// Never fails: anything that prevents searching yields an empty response.
    fn search(&self, document_id: &str, keyword: &str) -> SearchResponse;
}

/// Score descending, then page ascending.
fn by_rank(a: &SearchResult, b: &SearchResult) -> Ordering {
    b.relevance_score
        .total_cmp(&a.relevance_score)
        .then(a.page_num.cmp(&b.page_num))
}

/// Looks terms up in a document's precomputed page ↔ component tables.
#[derive(Debug, Clone)]
pub struct SpecializedStrategy {
    dataset: Arc<SpecializedDataset>,
    expander: SynonymExpander,
}

impl SpecializedStrategy {
    pub fn new(dataset: Arc<SpecializedDataset>, expander: SynonymExpander) -> Self {
        Self { dataset, expander }
    }

    pub fn dataset(&self) -> &SpecializedDataset {
        &self.dataset
    }

    /// Up to five components on `page` other than `component`, with a trailing
    /// `...` entry when more were left out.
    fn page_context(&self, page: u32, component: &str) -> String {
        let others: Vec<&str> = self
            .dataset
            .components_on(page)
            .iter()
            .map(String::as_str)
            .filter(|name| *name != component)
            .collect();

        let mut context = others
            .iter()
            .take(CONTEXT_COMPONENTS)
            .copied()
            .collect::<Vec<_>>()
            .join(", ");
        if others.len() > CONTEXT_COMPONENTS {
            context.push_str(", ...");
        }
        context
    }

    fn hit(
        &self,
        page: u32,
        term: &str,
        component: &str,
        text_type: TextType,
        relevance_score: f64,
    ) -> SearchResult {
        let label = match text_type {
            TextType::ComponentTitle => mark(term),
            _ => format!("{}（包含{}）", component, mark(term)),
        };
        let context = self.page_context(page, component);
        let highlighted_text = if context.is_empty() {
            label
        } else {
            format!("{} - 该页还包含: {}", label, context)
        };

        SearchResult {
            page_num: page,
            text_type,
            relevance_score,
            matched_term: term.to_string(),
            highlighted_text,
            full_text: format!("{} 位于第{}页", component, page),
            components_in_text: self.dataset.components_on(page).to_vec(),
        }
    }
}

impl SearchStrategy for SpecializedStrategy {
    fn search(&self, document_id: &str, keyword: &str) -> SearchResponse {
        let terms = self.expander.query_terms(keyword);
        debug!("Specialized search in '{}' for {:?}", document_id, terms);

        let mut results = Vec::new();
        for term in &terms {
            if let Some(pages) = self.dataset.pages_of(term) {
                for &page in pages {
                    results.push(self.hit(
                        page,
                        term,
                        term,
                        TextType::ComponentTitle,
                        SPECIALIZED_EXACT_SCORE,
                    ));
                }
                continue;
            }

            let needle = term.to_lowercase();
            for (component, pages) in self.dataset.components() {
                if !component.to_lowercase().contains(&needle) {
                    continue;
                }
                for &page in pages {
                    results.push(self.hit(
                        page,
                        term,
                        component,
                        TextType::ComponentDesc,
                        SPECIALIZED_PARTIAL_SCORE,
                    ));
                }
            }
        }

        let mut seen = AHashSet::new();
        results.retain(|r| seen.insert((r.page_num, r.matched_term.clone(), r.full_text.clone())));
        results.sort_by(by_rank);

        SearchResponse::new(results, terms)
    }
}

/// Scans the persisted line index of a document.
#[derive(Debug, Clone)]
pub struct GeneralStrategy {
    store: IndexStore,
    expander: SynonymExpander,
}

impl GeneralStrategy {
    pub fn new(store: IndexStore, expander: SynonymExpander) -> Self {
        Self { store, expander }
    }

    /// Query terms lower-cased and deduplicated, keyword first.
    fn terms(&self, keyword: &str) -> Vec<String> {
        let mut seen = AHashSet::new();
        self.expander
            .query_terms(keyword)
            .into_iter()
            .map(|term| term.to_lowercase())
            .filter(|term| seen.insert(term.clone()))
            .collect()
    }
}

impl GeneralStrategy {
    /// Scans an already loaded `index` for `keyword`.
    pub(crate) fn search_index(
        &self,
        document_id: &str,
        index: &DocumentIndex,
        keyword: &str,
    ) -> SearchResponse {
        let terms = self.terms(keyword);
        debug!("Searching '{}' for {:?}", document_id, terms);
        let matchers: Vec<TermMatcher> = terms.iter().filter_map(|t| TermMatcher::new(t)).collect();

        let mut results = Vec::new();
        for element in index.page_elements.values().flatten() {
            let text = element.text.trim();
            let lowered = text.to_lowercase();

            // One result per line: the first term that matches wins.
            let Some(primary) = matchers.iter().find(|m| lowered.contains(m.term())) else {
                continue;
            };
            let term = primary.term();

            let exact = element
                .components
                .iter()
                .any(|c| c.name.to_lowercase() == term);
            let others: Vec<&TermMatcher> = matchers
                .iter()
                .filter(|other| other.term() != term && lowered.contains(other.term()))
                .collect();

            results.push(SearchResult {
                page_num: element.page_num,
                text_type: element.text_type,
                relevance_score: relevance_score(element.text_type, exact),
                matched_term: term.to_string(),
                highlighted_text: highlight(text, primary, &others),
                full_text: text.to_string(),
                components_in_text: element.components.iter().map(|c| c.name.clone()).collect(),
            });
        }

        // Sort before deduplicating so the best-ranked hit per (page, term) survives.
        results.sort_by(by_rank);
        let mut seen = AHashSet::new();
        results.retain(|r| seen.insert((r.page_num, r.matched_term.clone())));

        SearchResponse::new(results, terms)
    }
}

impl SearchStrategy for GeneralStrategy {
    fn search(&self, document_id: &str, keyword: &str) -> SearchResponse {
        match self.store.load(document_id) {
            Some(index) => self.search_index(document_id, &index, keyword),
            None => SearchResponse::empty(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::SynonymMap;
    use assert2::check;
    use rstest::{fixture, rstest};
    use std::collections::BTreeMap;

    #[fixture]
    fn expander() -> SynonymExpander {
        SynonymExpander::new(Arc::new(SynonymMap::builtin()))
    }

    fn names(names: &[&str]) -> Vec<String> {
        names.iter().map(|n| n.to_string()).collect()
    }

    #[fixture]
    fn specialized(expander: SynonymExpander) -> SpecializedStrategy {
        let dataset = SpecializedDataset::from_pages(BTreeMap::from([
            (
                3,
                names(&["大灯开关", "组合仪表", "雨刮电机", "点烟器", "ABS控制器", "倒车灯开关", "保险盒"]),
            ),
            (7, names(&["大灯开关", "近光灯继电器"])),
            (9, names(&["喇叭"])),
        ]));
        SpecializedStrategy::new(Arc::new(dataset), expander)
    }

    #[rstest]
    fn exact_component_hits_every_page(specialized: SpecializedStrategy) {
        let response = specialized.search("special.pdf", "大灯开关");
        let hits: Vec<_> = response
            .results
            .iter()
            .filter(|r| r.matched_term == "大灯开关")
            .collect();

        check!(hits.len() == 2);
        check!(hits.iter().all(|r| r.relevance_score == 4.0));
        check!(hits.iter().all(|r| r.text_type == TextType::ComponentTitle));
        check!(hits[0].page_num == 3);
        check!(
            hits[0].highlighted_text
                == "<mark>大灯开关</mark> - 该页还包含: 组合仪表, 雨刮电机, 点烟器, ABS控制器, 倒车灯开关, ..."
        );
        check!(hits[0].full_text == "大灯开关 位于第3页");
        check!(hits[0].components_in_text.len() == 7);
        check!(hits[1].highlighted_text == "<mark>大灯开关</mark> - 该页还包含: 近光灯继电器");
    }

    #[rstest]
    fn partial_component_hits_score_lower(specialized: SpecializedStrategy) {
        let response = specialized.search("special.pdf", "喇");
        check!(response.total == 1);
        let hit = &response.results[0];
        check!(hit.relevance_score == 3.0);
        check!(hit.text_type == TextType::ComponentDesc);
        check!(hit.highlighted_text == "喇叭（包含<mark>喇</mark>）");
        check!(hit.full_text == "喇叭 位于第9页");
    }

    #[rstest]
    fn specialized_results_are_ranked(specialized: SpecializedStrategy) {
        let response = specialized.search("special.pdf", "灯开关");
        let ranks: Vec<(f64, u32)> = response
            .results
            .iter()
            .map(|r| (r.relevance_score, r.page_num))
            .collect();
        let mut sorted = ranks.clone();
        sorted.sort_by(|a, b| b.0.total_cmp(&a.0).then(a.1.cmp(&b.1)));
        check!(ranks == sorted);
        check!(response.total == response.results.len());
    }

    #[rstest]
    fn missing_index_yields_empty_response(expander: SynonymExpander) {
        let dir = tempfile::tempdir().unwrap();
        let general = GeneralStrategy::new(IndexStore::new(dir.path()), expander);
        let response = general.search("nowhere.pdf", "大灯开关");
        check!(response == SearchResponse::empty());
    }

    #[rstest]
    fn general_terms_are_lowercased_and_unique(expander: SynonymExpander) {
        let general = GeneralStrategy::new(IndexStore::new("unused"), expander);
        let terms = general.terms("ACC电源");
        check!(terms[0] == "acc电源");
        check!(terms.contains(&"acc供电".to_string()));
        let unique: AHashSet<&String> = terms.iter().collect();
        check!(unique.len() == terms.len());
    }
}
