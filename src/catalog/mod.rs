//! Static domain data: the component catalog, the synonym map and the
//! precomputed page tables of specialized documents.
//!
//! All three are built once at start-up and handed to the classifier,
//! extractor and search engine by reference. Nothing here is mutated at run time.

mod components;
pub(crate) mod specialized;
pub(crate) mod synonyms;

pub use specialized::SpecializedDataset;
pub use synonyms::{SynonymEntry, SynonymMap};

use crate::error::Result;
use anyhow::Context;
use regex::{Regex, RegexBuilder};
use serde::Deserialize;
use std::collections::HashSet;
use std::path::Path;

/// A catalog component name with its case-insensitive literal matcher.
#[derive(Debug, Clone)]
pub struct CatalogEntry {
    name: String,
    char_len: usize,
    pattern: Regex,
}

impl CatalogEntry {
    fn new(name: &str) -> Result<Self> {
        let pattern = RegexBuilder::new(&regex::escape(name))
            .case_insensitive(true)
            .build()
            .with_context(|| format!("invalid catalog entry '{}'", name))?;
        Ok(Self {
            name: name.to_string(),
            char_len: name.chars().count(),
            pattern,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Length of the name in characters (not bytes).
    pub fn char_len(&self) -> usize {
        self.char_len
    }

    /// First case-insensitive occurrence of this entry in `text`.
    pub fn find<'t>(&self, text: &'t str) -> Option<regex::Match<'t>> {
        self.pattern.find(text)
    }

    pub fn is_in(&self, text: &str) -> bool {
        self.pattern.is_match(text)
    }
}

/// Ordered set of known component names.
#[derive(Debug, Clone)]
pub struct ComponentCatalog {
    entries: Vec<CatalogEntry>,
}

impl ComponentCatalog {
    /// Builds a catalog from names in priority order. Blank names are ignored and
    /// repeated names keep their first position.
    pub fn new<I, S>(names: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut seen = HashSet::new();
        let mut entries = Vec::new();
        for name in names {
            let name = name.as_ref().trim();
            if name.is_empty() || !seen.insert(name.to_string()) {
                continue;
            }
            entries.push(CatalogEntry::new(name)?);
        }
        Ok(Self { entries })
    }

    /// The vehicle electrical catalog shipped with the crate.
    pub fn builtin() -> Self {
        Self::new(components::DEFAULT_COMPONENTS.iter().copied())
            .expect("built-in catalog entries are escaped literals")
    }

    pub fn entries(&self) -> &[CatalogEntry] {
        &self.entries
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(CatalogEntry::name)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Case-insensitive membership test for a full component name.
    pub fn contains(&self, name: &str) -> bool {
        let name = name.to_lowercase();
        self.entries.iter().any(|e| e.name.to_lowercase() == name)
    }
}

/// On-disk override for the built-in catalog and synonym map.
///
/// ```toml
/// components = ["大灯开关", "组合仪表"]
///
/// [[synonyms]]
/// canonical = "大灯开关"
/// aliases = ["前照灯开关", "头灯开关"]
/// ```
#[derive(Debug, Deserialize)]
struct CatalogFile {
    #[serde(default)]
    components: Vec<String>,
    #[serde(default)]
    synonyms: Vec<SynonymEntry>,
}

/// Loads a catalog override file. An empty section falls back to the built-in data.
pub fn load_catalog_file(path: &Path) -> Result<(ComponentCatalog, SynonymMap)> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read catalog file {}", path.display()))?;
    let file: CatalogFile = toml::from_str(&content)
        .with_context(|| format!("failed to parse catalog file {}", path.display()))?;

    let catalog = if file.components.is_empty() {
        ComponentCatalog::builtin()
    } else {
        ComponentCatalog::new(&file.components)?
    };
    let synonyms = if file.synonyms.is_empty() {
        SynonymMap::builtin()
    } else {
        SynonymMap::new(file.synonyms)
    };

    tracing::info!(
        "Loaded catalog from {}: {} components, {} synonym groups",
        path.display(),
        catalog.len(),
        synonyms.len()
    );
    Ok((catalog, synonyms))
}
