//! Error handling types and utilities.

use std::path::PathBuf;
use thiserror::Error;

/// A specialized Result type for schematic-search operations.
///
/// This is an alias for `anyhow::Result` with context added via `.context()` and
/// `.with_context()` methods throughout the codebase.
pub type Result<T> = anyhow::Result<T>;

/// A single page could not be extracted.
///
/// Recovered at the page boundary: the page is skipped and its siblings keep going.
#[derive(Debug, Error)]
#[error("page {page_num} failed: {cause:#}")]
pub struct PageError {
    pub page_num: u32,
    #[source]
    pub cause: anyhow::Error,
}

/// Fatal failure for a whole indexing run.
#[derive(Debug, Error)]
pub enum DocumentError {
    /// The source document does not exist.
    #[error("document not found: {document_id} (looked in {})", .path.display())]
    NotFound { document_id: String, path: PathBuf },
    /// The source document exists but could not be opened or read.
    #[error("failed to open document '{document_id}': {cause:#}")]
    Unreadable {
        document_id: String,
        #[source]
        cause: anyhow::Error,
    },
    /// The finished snapshot could not be written.
    #[error("failed to persist index for '{document_id}': {cause:#}")]
    Persist {
        document_id: String,
        #[source]
        cause: anyhow::Error,
    },
}
