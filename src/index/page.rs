//! Per-page indexing: split, classify and extract components line by line.

use super::classify::TextClassifier;
use super::extract::ComponentExtractor;
use super::source::PageSource;
use super::store::IndexStore;
use crate::catalog::ComponentCatalog;
use crate::error::PageError;
use crate::types::LineElement;
use std::sync::Arc;
use tracing::warn;

/// Lines shorter than this (in characters, after trimming) are dropped.
const MIN_LINE_CHARS: usize = 2;

/// Indexed content of one page.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageIndex {
    pub elements: Vec<LineElement>,
    /// Component matches summed over all elements of the page.
    pub component_count: usize,
}

/// Turns the text of a single page into [`LineElement`]s.
#[derive(Debug, Clone)]
pub struct PageIndexer {
    classifier: TextClassifier,
    extractor: ComponentExtractor,
    artifacts: Option<IndexStore>,
}

impl PageIndexer {
    pub fn new(catalog: Arc<ComponentCatalog>) -> Self {
        Self {
            classifier: TextClassifier::new(catalog.clone()),
            extractor: ComponentExtractor::new(catalog),
            artifacts: None,
        }
    }

    /// Also write each page's combined text next to the snapshots in `store`.
    pub fn with_artifacts(mut self, store: IndexStore) -> Self {
        self.artifacts = Some(store);
        self
    }

    /// Extracts and indexes one page.
    ///
    /// Extraction failures are returned as a [`PageError`] for the caller to
    /// record; they never affect other pages.
    pub fn index_page(
        &self,
        source: &dyn PageSource,
        document_id: &str,
        page_num: u32,
    ) -> Result<PageIndex, PageError> {
        let content = source
            .page(page_num)
            .map_err(|cause| PageError { page_num, cause })?;
        let text = content.combined_text();

        if let Some(store) = &self.artifacts
            && let Err(e) = store.write_page_text(document_id, page_num, &text)
        {
            warn!("Could not write page text for page {}: {:#}", page_num, e);
        }

        Ok(self.index_text(&text, page_num))
    }

    /// Indexes already-extracted page text.
    pub fn index_text(&self, text: &str, page_num: u32) -> PageIndex {
        let elements: Vec<LineElement> = text
            .lines()
            .map(str::trim)
            .filter(|line| line.chars().count() >= MIN_LINE_CHARS)
            .map(|line| LineElement {
                text: line.to_string(),
                page_num,
                text_type: self.classifier.classify(line),
                components: self.extractor.extract(line),
            })
            .collect();

        let component_count = elements.iter().map(|e| e.components.len()).sum();
        PageIndex {
            elements,
            component_count,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::index::source::{PageContent, PageDump};
    use crate::types::TextType;
    use assert2::{check, let_assert};

    fn indexer() -> PageIndexer {
        PageIndexer::new(Arc::new(ComponentCatalog::builtin()))
    }

    #[test]
    fn short_and_blank_lines_are_dropped() {
        let page = indexer().index_text("  \nA\n 仪 \nAB\n\n组合仪表", 1);
        let texts: Vec<&str> = page.elements.iter().map(|e| e.text.as_str()).collect();
        check!(texts == ["AB", "组合仪表"]);
    }

    #[test]
    fn component_count_sums_all_lines() {
        let page = indexer().index_text("组合仪表 大灯开关\n雨刮电机\n见下页", 5);
        check!(page.component_count == 3);
        check!(page.elements.iter().all(|e| e.page_num == 5));
        check!(page.elements[0].text_type == TextType::ComponentTitle);
        check!(page.elements[2].text_type == TextType::NormalText);
    }

    #[test]
    fn table_rows_are_indexed_after_raw_text() {
        let dump = PageDump::new(vec![
            PageContent::new("整车电路图")
                .with_table(vec![vec![Some("A3".into()), Some("→".into()), Some("A2".into())]]),
        ]);
        let_assert!(Ok(page) = indexer().index_page(&dump, "doc.pdf", 1));
        let texts: Vec<&str> = page.elements.iter().map(|e| e.text.as_str()).collect();
        check!(texts == ["整车电路图", "A3 → A2"]);
        check!(page.elements[1].text_type == TextType::ComponentDesc);
    }

    #[test]
    fn extraction_failure_carries_page_number() {
        let dump = PageDump::new(vec![PageContent::new("组合仪表")]);
        let_assert!(Err(err) = indexer().index_page(&dump, "doc.pdf", 9));
        check!(err.page_num == 9);
    }

    #[test]
    fn debug_text_is_written_when_enabled() {
        let dir = tempfile::tempdir().unwrap();
        let store = IndexStore::new(dir.path());
        let dump = PageDump::new(vec![PageContent::new("组合仪表")]);

        indexer()
            .with_artifacts(store.clone())
            .index_page(&dump, "doc.pdf", 1)
            .unwrap();
        check!(store.page_text_path("doc.pdf", 1).exists());
    }
}
