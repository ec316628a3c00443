//! Precomputed page ↔ component tables for documents that bypass general indexing.

use crate::error::Result;
use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

/// Page table of one specialized document together with its inverse.
///
/// Both directions are supplied whole; the search engine consumes them as-is.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpecializedDataset {
    /// page number → component names on that page, in drawing order
    pages: BTreeMap<u32, Vec<String>>,
    /// component name → pages it appears on
    components: BTreeMap<String, Vec<u32>>,
}

impl SpecializedDataset {
    pub fn new(pages: BTreeMap<u32, Vec<String>>, components: BTreeMap<String, Vec<u32>>) -> Self {
        Self { pages, components }
    }

    /// Builds the dataset from the page table alone, deriving the inverse.
    pub fn from_pages(pages: BTreeMap<u32, Vec<String>>) -> Self {
        let mut components: BTreeMap<String, Vec<u32>> = BTreeMap::new();
        for (page, names) in &pages {
            for name in names {
                let entry = components.entry(name.clone()).or_default();
                if !entry.contains(page) {
                    entry.push(*page);
                }
            }
        }
        Self { pages, components }
    }

    /// Reads a dataset from a JSON file with `pages` and `components` tables.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read specialized dataset {}", path.display()))?;
        serde_json::from_str(&content)
            .with_context(|| format!("failed to parse specialized dataset {}", path.display()))
    }

    /// Pages on which `component` appears, by exact name.
    pub fn pages_of(&self, component: &str) -> Option<&[u32]> {
        self.components.get(component).map(Vec::as_slice)
    }

    /// Components drawn on `page`; empty for unknown pages.
    pub fn components_on(&self, page: u32) -> &[String] {
        self.pages.get(&page).map(Vec::as_slice).unwrap_or_default()
    }

    /// All (component, pages) pairs of the inverse table.
    pub fn components(&self) -> impl Iterator<Item = (&str, &[u32])> {
        self.components
            .iter()
            .map(|(name, pages)| (name.as_str(), pages.as_slice()))
    }

    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    /// Total component placements over all pages.
    pub fn component_count(&self) -> usize {
        self.pages.values().map(Vec::len).sum()
    }
}
