//! Persisted index snapshots and debug page-text artifacts.

use super::document_stem;
use crate::error::Result;
use crate::types::DocumentIndex;
use anyhow::Context;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;
use tracing::{debug, warn};

/// One JSON snapshot per document under a root directory.
///
/// Snapshots are replaced whole on every write; readers never see a half-written file.
#[derive(Debug, Clone)]
pub struct IndexStore {
    root: PathBuf,
}

impl IndexStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// `<root>/<document stem>.json`
    pub fn index_path(&self, document_id: &str) -> PathBuf {
        self.snapshot_path(document_stem(document_id))
    }

    fn snapshot_path(&self, stem: &str) -> PathBuf {
        self.root.join(format!("{}.json", stem))
    }

    /// `<root>/<document stem>/page_<n>_text.txt`
    pub fn page_text_path(&self, document_id: &str, page_num: u32) -> PathBuf {
        self.root
            .join(document_stem(document_id))
            .join(format!("page_{}_text.txt", page_num))
    }

    /// Writes `index` as pretty-printed JSON through a temp file and an atomic rename.
    pub fn save(&self, index: &DocumentIndex) -> Result<PathBuf> {
        std::fs::create_dir_all(&self.root)
            .with_context(|| format!("failed to create index directory {}", self.root.display()))?;

        let path = self.index_path(&index.document_id);
        let mut file = NamedTempFile::new_in(&self.root)
            .with_context(|| format!("failed to create temp file in {}", self.root.display()))?;
        serde_json::to_writer_pretty(&mut file, index).context("failed to serialize index")?;
        file.write_all(b"\n")?;
        file.as_file().sync_all()?;
        file.persist(&path)
            .with_context(|| format!("failed to replace {}", path.display()))?;

        debug!("Saved index for '{}' to {}", index.document_id, path.display());
        Ok(path)
    }

    /// Loads the snapshot of `document_id`.
    ///
    /// A missing or malformed snapshot is a normal outcome, not an error: it is
    /// logged and reported as `None`.
    pub fn load(&self, document_id: &str) -> Option<DocumentIndex> {
        self.load_stem(document_stem(document_id))
    }

    /// Loads the snapshot stored under `stem` as listed by
    /// [`indexed_documents`](Self::indexed_documents).
    ///
    /// The stem is used as is, so `v3.0` is not cut down to `v3` a second time.
    pub fn load_stem(&self, stem: &str) -> Option<DocumentIndex> {
        let path = self.snapshot_path(stem);
        let content = match std::fs::read_to_string(&path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                warn!("No index found for '{}' at {}", stem, path.display());
                return None;
            }
            Err(e) => {
                warn!("Failed to read index {}: {}", path.display(), e);
                return None;
            }
        };

        match serde_json::from_str(&content) {
            Ok(index) => Some(index),
            Err(e) => {
                warn!("Failed to parse index {}: {}", path.display(), e);
                None
            }
        }
    }

    /// Writes the combined page text for debugging. Never read back.
    pub fn write_page_text(&self, document_id: &str, page_num: u32, text: &str) -> Result<()> {
        let path = self.page_text_path(document_id, page_num);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("failed to create {}", parent.display()))?;
        }
        std::fs::write(&path, format!("=== 第{}页 ===\n{}", page_num, text))
            .with_context(|| format!("failed to write {}", path.display()))
    }

    /// Stems of every snapshot under the root, sorted.
    pub fn indexed_documents(&self) -> Vec<String> {
        let entries = match std::fs::read_dir(&self.root) {
            Ok(entries) => entries,
            Err(e) => {
                debug!("Cannot list index directory {}: {}", self.root.display(), e);
                return Vec::new();
            }
        };

        let mut documents: Vec<String> = entries
            .filter_map(|entry| entry.ok())
            .map(|entry| entry.path())
            .filter(|path| path.is_file() && path.extension().is_some_and(|ext| ext == "json"))
            .filter_map(|path| {
                let stem = path.file_stem()?.to_str()?;
                (!stem.starts_with('.')).then(|| stem.to_string())
            })
            .collect();
        documents.sort();
        documents
    }
}
