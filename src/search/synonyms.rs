//! Query expansion through the synonym map.

use crate::catalog::SynonymMap;
use ahash::AHashSet;
use std::sync::Arc;

/// Expands a query term into its related terms.
///
/// Matching is case-insensitive throughout; returned terms keep the casing of
/// the map. Three lookups contribute, in this order:
///
/// - the term equals a canonical key: that key's aliases
/// - the term is a substring of a canonical key: the key and its aliases
/// - the term equals an alias: its canonical key and the sibling aliases
#[derive(Debug, Clone)]
pub struct SynonymExpander {
    synonyms: Arc<SynonymMap>,
}

impl SynonymExpander {
    pub fn new(synonyms: Arc<SynonymMap>) -> Self {
        Self { synonyms }
    }

    /// Related terms of `term`, deduplicated, never containing `term` itself.
    pub fn expand(&self, term: &str) -> Vec<String> {
        let needle = term.trim().to_lowercase();
        if needle.is_empty() {
            return Vec::new();
        }

        let mut terms = TermSet::excluding(&needle);
        let entries = self.synonyms.entries();

        for entry in entries {
            if entry.canonical.to_lowercase() == needle {
                terms.extend(&entry.aliases);
            }
        }
        for entry in entries {
            if entry.canonical.to_lowercase().contains(&needle) {
                terms.push(&entry.canonical);
                terms.extend(&entry.aliases);
            }
        }
        // Aliases are only ever matched exactly; there is no substring pass over them.
        for entry in entries {
            if entry.aliases.iter().any(|alias| alias.to_lowercase() == needle) {
                terms.push(&entry.canonical);
                terms.extend(&entry.aliases);
            }
        }

        terms.into_vec()
    }

    /// The trimmed keyword followed by its expansion.
    ///
    /// Empty when the keyword is blank.
    pub fn query_terms(&self, keyword: &str) -> Vec<String> {
        let keyword = keyword.trim();
        if keyword.is_empty() {
            return Vec::new();
        }
        let mut terms = vec![keyword.to_string()];
        terms.extend(self.expand(keyword));
        terms
    }

    /// The keyword and those of its synonyms that occur in `text`, in query order.
    pub fn matched_terms(&self, text: &str, keyword: &str) -> Vec<String> {
        let haystack = text.to_lowercase();
        self.query_terms(keyword)
            .into_iter()
            .filter(|term| haystack.contains(&term.to_lowercase()))
            .collect()
    }
}

/// Insertion-ordered, case-insensitively deduplicated list of terms.
struct TermSet {
    seen: AHashSet<String>,
    terms: Vec<String>,
}

impl TermSet {
    fn excluding(lowered: &str) -> Self {
        Self {
            seen: AHashSet::from_iter([lowered.to_string()]),
            terms: Vec::new(),
        }
    }

    fn push(&mut self, term: &str) {
        let term = term.trim();
        if !term.is_empty() && self.seen.insert(term.to_lowercase()) {
            self.terms.push(term.to_string());
        }
    }

    fn extend(&mut self, terms: &[String]) {
        for term in terms {
            self.push(term);
        }
    }

    fn into_vec(self) -> Vec<String> {
        self.terms
    }
}
