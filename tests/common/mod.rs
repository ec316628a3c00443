//! Shared fixtures for integration tests.
//!
//! Every test gets its own [`TempWorkspace`]: a fresh temporary directory
//! holding the index store, so snapshots never leak between tests.
//! Page content comes either from JSON page dumps written into the workspace
//! or from the in-memory [`ScriptedProvider`], which can fail on demand.

use anyhow::{anyhow, bail};
use rstest::fixture;
use schematic_search::index::{PageContent, PageDump, PageDumpProvider};
use schematic_search::{
    ComponentCatalog, DocumentError, DocumentIndex, DocumentProvider, IndexStore, PageSource,
    SearchEngine, SpecializedDataset, SynonymMap,
};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tempfile::TempDir;

/// A temporary directory that is removed when dropped.
#[allow(dead_code)] // Methods used across different integration test crates
pub struct TempWorkspace {
    _temp: TempDir,
    root: PathBuf,
}

#[allow(dead_code)] // Methods used across different integration test crates
impl TempWorkspace {
    pub fn new() -> Self {
        let temp = TempDir::new().expect("Failed to create temp directory");
        let root = temp.path().to_path_buf();
        Self { _temp: temp, root }
    }

    pub fn path(&self) -> &Path {
        &self.root
    }

    /// Creates a file, and its parent directories, within this workspace.
    ///
    /// # Panics
    /// Panics if file creation fails.
    pub fn create_file(&self, path: &str, content: &str) {
        let full_path = self.root.join(path);
        if let Some(parent) = full_path.parent() {
            std::fs::create_dir_all(parent).unwrap_or_else(|e| {
                panic!("Failed to create parent directory for '{}': {}", path, e)
            });
        }
        std::fs::write(&full_path, content)
            .unwrap_or_else(|e| panic!("Failed to write file '{}': {}", path, e));
    }
}

impl Default for TempWorkspace {
    fn default() -> Self {
        Self::new()
    }
}

/// Pages served from memory. Listed pages fail extraction.
#[derive(Debug, Clone, Default)]
pub struct ScriptedSource {
    pub pages: Vec<String>,
    pub failing_pages: Vec<u32>,
    pub broken_page_count: bool,
}

impl PageSource for ScriptedSource {
    fn page_count(&self) -> anyhow::Result<u32> {
        if self.broken_page_count {
            bail!("document is encrypted");
        }
        Ok(self.pages.len() as u32)
    }

    fn page(&self, page_num: u32) -> anyhow::Result<PageContent> {
        if self.failing_pages.contains(&page_num) {
            bail!("extractor crashed on page {}", page_num);
        }
        self.pages
            .get(page_num as usize - 1)
            .map(|text| PageContent::new(text.as_str()))
            .ok_or_else(|| anyhow!("page {} out of range", page_num))
    }
}

/// Serves one [`ScriptedSource`] for every document id, or nothing at all.
#[allow(dead_code)]
#[derive(Debug, Clone, Default)]
pub struct ScriptedProvider {
    pub source: Option<ScriptedSource>,
}

#[allow(dead_code)]
impl ScriptedProvider {
    pub fn pages(pages: &[&str]) -> Self {
        Self {
            source: Some(ScriptedSource {
                pages: pages.iter().map(|p| p.to_string()).collect(),
                ..ScriptedSource::default()
            }),
        }
    }

    pub fn failing_on(mut self, pages: &[u32]) -> Self {
        if let Some(source) = &mut self.source {
            source.failing_pages = pages.to_vec();
        }
        self
    }

    pub fn missing() -> Self {
        Self { source: None }
    }
}

impl DocumentProvider for ScriptedProvider {
    fn open(&self, document_id: &str) -> Result<Box<dyn PageSource>, DocumentError> {
        match &self.source {
            Some(source) => Ok(Box::new(source.clone())),
            None => Err(DocumentError::NotFound {
                document_id: document_id.to_string(),
                path: PathBuf::from(document_id),
            }),
        }
    }
}

/// A workspace with a search engine whose index store lives inside it.
#[allow(dead_code)]
pub struct SearchWorkspace {
    pub workspace: TempWorkspace,
    pub engine: SearchEngine,
}

#[allow(dead_code)]
impl SearchWorkspace {
    pub fn with_catalog(catalog: ComponentCatalog) -> Self {
        let workspace = TempWorkspace::new();
        let store = IndexStore::new(workspace.path().join("indexes"));
        let engine = SearchEngine::new(Arc::new(catalog), Arc::new(SynonymMap::builtin()), store);
        Self { workspace, engine }
    }

    pub fn store(&self) -> &IndexStore {
        self.engine.store()
    }

    /// Indexes `pages` (one string per page) as `document_id`.
    pub fn index(&self, document_id: &str, pages: &[&str]) -> DocumentIndex {
        self.engine
            .index(&ScriptedProvider::pages(pages), document_id)
            .expect("document is not specialized")
    }

    /// Writes a JSON page dump under `extracted/` and returns a provider reading it.
    pub fn write_dump(&self, document_stem: &str, pages: &[&str]) -> PageDumpProvider {
        let dump = PageDump::new(pages.iter().map(|p| PageContent::new(*p)).collect());
        self.workspace.create_file(
            &format!("extracted/{}.json", document_stem),
            &serde_json::to_string(&dump).expect("dump serializes"),
        );
        PageDumpProvider::new(self.workspace.path().join("extracted"))
    }

    pub fn with_specialized(mut self, document_id: &str, dataset: SpecializedDataset) -> Self {
        self.engine = self.engine.with_specialized(document_id, dataset);
        self
    }
}

/// Builds a specialized dataset from `(page, components)` pairs.
#[allow(dead_code)]
pub fn dataset<'a>(pages: impl IntoIterator<Item = (u32, Vec<&'a str>)>) -> SpecializedDataset {
    SpecializedDataset::from_pages(
        pages
            .into_iter()
            .map(|(page, names)| (page, names.into_iter().map(String::from).collect()))
            .collect::<BTreeMap<_, _>>(),
    )
}

/// Engine over the built-in catalog and synonym map.
#[fixture]
pub fn workspace() -> SearchWorkspace {
    schematic_search::tracing::init();
    SearchWorkspace::with_catalog(ComponentCatalog::builtin())
}
