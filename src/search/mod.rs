//! Keyword search over indexed documents.
//!
//! Queries are expanded through the synonym map, matched against either a
//! persisted line index or a precomputed page table, scored by structural
//! role and returned with highlighted spans.

pub(crate) mod engine;
pub(crate) mod highlight;
pub(crate) mod scoring;
pub(crate) mod strategy;
pub(crate) mod synonyms;

pub use engine::SearchEngine;
pub use highlight::{MARK_CLOSE, MARK_OPEN, TermMatcher, highlight, mark};
pub use scoring::{
    EXACT_MATCH_BONUS, SPECIALIZED_EXACT_SCORE, SPECIALIZED_PARTIAL_SCORE, base_weight,
    relevance_score,
};
pub use strategy::{GeneralStrategy, SearchStrategy, SpecializedStrategy};
pub use synonyms::SynonymExpander;
