//! Catalog component detection within a single line.

use crate::catalog::ComponentCatalog;
use crate::types::ComponentMatch;
use std::sync::Arc;

/// Characters of surrounding text captured on each side of a match.
const CONTEXT_CHARS: usize = 10;

/// Finds catalog components in lines of text.
#[derive(Debug, Clone)]
pub struct ComponentExtractor {
    catalog: Arc<ComponentCatalog>,
}

impl ComponentExtractor {
    pub fn new(catalog: Arc<ComponentCatalog>) -> Self {
        Self { catalog }
    }

    /// Returns the first occurrence of every catalog component found in `line`,
    /// in catalog order. Spans and context are measured in characters of the
    /// original line.
    pub fn extract(&self, line: &str) -> Vec<ComponentMatch> {
        let mut line_chars: Option<Vec<char>> = None;
        let mut matches: Vec<ComponentMatch> = Vec::new();

        for entry in self.catalog.entries() {
            let Some(found) = entry.find(line) else {
                continue;
            };
            if matches.iter().any(|m| m.name == entry.name()) {
                continue;
            }

            let start = line[..found.start()].chars().count();
            let end = start + found.as_str().chars().count();
            let chars = line_chars.get_or_insert_with(|| line.chars().collect());

            matches.push(ComponentMatch {
                name: entry.name().to_string(),
                context: context_window(chars, start, end),
                position: (start, end),
            });
        }

        matches
    }
}

fn context_window(chars: &[char], start: usize, end: usize) -> String {
    let from = start.saturating_sub(CONTEXT_CHARS);
    let to = (end + CONTEXT_CHARS).min(chars.len());
    chars[from..to]
        .iter()
        .map(|&c| if c == '\n' || c == '\r' { ' ' } else { c })
        .collect()
}
