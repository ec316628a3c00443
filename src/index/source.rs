//! Seam to the external page text-and-table extractor.
//!
//! Rendering and raw PDF extraction live outside this crate. Whatever does that
//! work hands pages over through [`PageSource`]; [`PageDumpProvider`] reads the
//! JSON dumps such an extractor writes.

use super::document_stem;
use crate::error::{DocumentError, Result};
use anyhow::{Context, bail};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Rows of cells; a cell may be empty or missing entirely.
pub type Table = Vec<Vec<Option<String>>>;

/// Raw text and table cells of one page.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageContent {
    #[serde(default)]
    pub text: String,
    #[serde(default)]
    pub tables: Vec<Table>,
}

impl PageContent {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            tables: Vec::new(),
        }
    }

    pub fn with_table(mut self, table: Table) -> Self {
        self.tables.push(table);
        self
    }

    /// One line per table row: trimmed, non-empty cells joined by a space.
    pub fn table_text(&self) -> String {
        let mut out = String::new();
        for row in self.tables.iter().flatten() {
            let cells: Vec<&str> = row
                .iter()
                .flatten()
                .map(|cell| cell.trim())
                .filter(|cell| !cell.is_empty())
                .collect();
            if !cells.is_empty() {
                out.push_str(&cells.join(" "));
                out.push('\n');
            }
        }
        out
    }

    /// Raw text followed by the table text, separated by a newline.
    pub fn combined_text(&self) -> String {
        format!("{}\n{}", self.text, self.table_text())
    }
}

/// A paginated document as seen through the external extractor.
pub trait PageSource {
    fn page_count(&self) -> Result<u32>;

    /// Extracts page `page_num` (1-based).
    fn page(&self, page_num: u32) -> Result<PageContent>;
}

/// Opens documents by identifier. Failing to open is fatal for the indexing run.
pub trait DocumentProvider {
    fn open(&self, document_id: &str) -> std::result::Result<Box<dyn PageSource>, DocumentError>;
}

/// All pages of a document, already extracted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageDump {
    pub pages: Vec<PageContent>,
}

impl PageDump {
    pub fn new(pages: Vec<PageContent>) -> Self {
        Self { pages }
    }

    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read page dump {}", path.display()))?;
        serde_json::from_str(&content)
            .with_context(|| format!("failed to parse page dump {}", path.display()))
    }
}

impl PageSource for PageDump {
    fn page_count(&self) -> Result<u32> {
        u32::try_from(self.pages.len()).context("page count overflows u32")
    }

    fn page(&self, page_num: u32) -> Result<PageContent> {
        let Some(index) = (page_num as usize).checked_sub(1) else {
            bail!("page {} out of range", page_num);
        };
        match self.pages.get(index) {
            Some(page) => Ok(page.clone()),
            None => bail!(
                "page {} out of range (document has {} pages)",
                page_num,
                self.pages.len()
            ),
        }
    }
}

/// Reads `<root>/<document stem>.json` page dumps.
#[derive(Debug, Clone)]
pub struct PageDumpProvider {
    root: PathBuf,
}

impl PageDumpProvider {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn dump_path(&self, document_id: &str) -> PathBuf {
        self.root.join(format!("{}.json", document_stem(document_id)))
    }
}

impl DocumentProvider for PageDumpProvider {
    fn open(&self, document_id: &str) -> std::result::Result<Box<dyn PageSource>, DocumentError> {
        let path = self.dump_path(document_id);
        if !path.exists() {
            return Err(DocumentError::NotFound {
                document_id: document_id.to_string(),
                path,
            });
        }
        let dump = PageDump::load(&path).map_err(|cause| DocumentError::Unreadable {
            document_id: document_id.to_string(),
            cause,
        })?;
        Ok(Box::new(dump))
    }
}
