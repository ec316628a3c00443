pub mod catalog;
pub mod cli;
pub mod config;
pub mod error;
pub mod index;
pub mod search;
pub mod tracing;
pub mod types;

pub use catalog::{ComponentCatalog, SpecializedDataset, SynonymEntry, SynonymMap};
pub use config::Settings;
pub use error::{DocumentError, PageError, Result};
pub use index::{DocumentIndexer, DocumentProvider, IndexStore, PageContent, PageSource};
pub use search::{SearchEngine, SearchStrategy, SynonymExpander};
pub use types::{
    ComponentMatch, DocumentIndex, DocumentSummary, IndexStatus, LineElement, SearchResponse,
    SearchResult, TextType,
};
