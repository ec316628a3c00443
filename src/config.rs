//! Runtime settings, read from an optional TOML file.
//!
//! ```toml
//! index_dir = "static/indexes"
//! source_dir = "static/extracted"
//! catalog = "catalog.toml"
//!
//! [[specialized]]
//! document_id = "xdy3-wiring.pdf"
//! dataset = "static/xdy3-pages.json"
//! ```

use crate::catalog::{ComponentCatalog, SpecializedDataset, SynonymMap, load_catalog_file};
use crate::error::Result;
use crate::index::{IndexStore, PageDumpProvider};
use crate::search::SearchEngine;
use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::{debug, info};

/// Looked up in the working directory when no config path is given.
pub const DEFAULT_CONFIG_FILE: &str = "schematic-search.toml";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    /// Persisted index snapshots and page-text artifacts.
    pub index_dir: PathBuf,
    /// Page dumps written by the external extractor.
    pub source_dir: PathBuf,
    /// Overrides for the built-in component list and synonym map.
    pub catalog: Option<PathBuf>,
    pub specialized: Vec<SpecializedDocument>,
}

/// A document answered from a precomputed page table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SpecializedDocument {
    pub document_id: String,
    pub dataset: PathBuf,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            index_dir: PathBuf::from("static/indexes"),
            source_dir: PathBuf::from("static/extracted"),
            catalog: None,
            specialized: Vec::new(),
        }
    }
}

impl Settings {
    /// Loads settings from `path`, or from [`DEFAULT_CONFIG_FILE`] if it exists,
    /// or falls back to the defaults.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let path = match path {
            Some(path) => path,
            None if Path::new(DEFAULT_CONFIG_FILE).is_file() => Path::new(DEFAULT_CONFIG_FILE),
            None => {
                debug!("No config file, using defaults");
                return Ok(Self::default());
            }
        };

        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config {}", path.display()))?;
        let settings = Self::from_toml(&content)
            .with_context(|| format!("invalid config {}", path.display()))?;
        info!("Loaded config from {}", path.display());
        Ok(settings)
    }

    pub fn from_toml(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    pub fn store(&self) -> IndexStore {
        IndexStore::new(&self.index_dir)
    }

    pub fn provider(&self) -> PageDumpProvider {
        PageDumpProvider::new(&self.source_dir)
    }

    /// The configured catalog file, or the built-in data.
    pub fn catalogs(&self) -> Result<(ComponentCatalog, SynonymMap)> {
        match &self.catalog {
            Some(path) => load_catalog_file(path),
            None => Ok((ComponentCatalog::builtin(), SynonymMap::builtin())),
        }
    }

    /// Builds the engine with every catalog and dataset loaded up front.
    pub fn build_engine(&self) -> Result<SearchEngine> {
        let (catalog, synonyms) = self.catalogs()?;
        debug!(
            "Catalog: {} components, {} synonym entries",
            catalog.len(),
            synonyms.len()
        );

        let mut engine = SearchEngine::new(Arc::new(catalog), Arc::new(synonyms), self.store());
        for doc in &self.specialized {
            let dataset = SpecializedDataset::load(&doc.dataset)
                .with_context(|| format!("specialized document '{}'", doc.document_id))?;
            engine = engine.with_specialized(doc.document_id.clone(), dataset);
        }
        Ok(engine)
    }
}
