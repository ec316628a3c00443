//! Data model shared by the indexer, the persisted snapshot and the search engine.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Structural role of a single line of diagram text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TextType {
    ComponentTitle,
    ComponentDesc,
    NormalText,
}

impl TextType {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::ComponentTitle => "component_title",
            Self::ComponentDesc => "component_desc",
            Self::NormalText => "normal_text",
        }
    }
}

impl fmt::Display for TextType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A catalog component found in a line of text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComponentMatch {
    pub name: String,
    /// Up to 10 characters either side of the match, newlines replaced by spaces.
    pub context: String,
    /// Character span `(start, end)` in the original line.
    pub position: (usize, usize),
}

/// One indexed line of a page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineElement {
    pub text: String,
    pub page_num: u32,
    pub text_type: TextType,
    pub components: Vec<ComponentMatch>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IndexStatus {
    Processing,
    Success,
    Failed,
}

impl fmt::Display for IndexStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Processing => "processing",
            Self::Success => "success",
            Self::Failed => "failed",
        })
    }
}

/// Persisted snapshot of one processed document.
///
/// Pages that failed extraction are absent from `page_elements` and
/// `page_components_count` and do not contribute to `total_components`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentIndex {
    pub document_id: String,
    pub status: IndexStatus,
    pub total_pages: u32,
    pub success_pages: u32,
    pub total_components: usize,
    pub page_components_count: BTreeMap<u32, usize>,
    pub page_elements: BTreeMap<u32, Vec<LineElement>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl DocumentIndex {
    /// A fresh snapshot in the `processing` state.
    pub fn new(document_id: impl Into<String>) -> Self {
        Self {
            document_id: document_id.into(),
            status: IndexStatus::Processing,
            total_pages: 0,
            success_pages: 0,
            total_components: 0,
            page_components_count: BTreeMap::new(),
            page_elements: BTreeMap::new(),
            error: None,
        }
    }

    pub(crate) fn fail(&mut self, error: impl fmt::Display) {
        self.status = IndexStatus::Failed;
        self.error = Some(error.to_string());
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchResult {
    pub page_num: u32,
    pub text_type: TextType,
    pub relevance_score: f64,
    pub matched_term: String,
    pub highlighted_text: String,
    pub full_text: String,
    pub components_in_text: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SearchResponse {
    pub results: Vec<SearchResult>,
    pub total: usize,
    pub search_terms: Vec<String>,
}

impl SearchResponse {
    pub fn new(results: Vec<SearchResult>, search_terms: Vec<String>) -> Self {
        Self {
            total: results.len(),
            results,
            search_terms,
        }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }
}

/// Listing entry for one known document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentSummary {
    pub document_id: String,
    /// `None` when the snapshot exists but could not be read.
    pub status: Option<IndexStatus>,
    pub total_pages: u32,
    pub success_pages: u32,
    pub total_components: usize,
    pub specialized: bool,
}

impl DocumentSummary {
    pub(crate) fn from_index(index: &DocumentIndex) -> Self {
        Self {
            document_id: index.document_id.clone(),
            status: Some(index.status),
            total_pages: index.total_pages,
            success_pages: index.success_pages,
            total_components: index.total_components,
            specialized: false,
        }
    }
}
