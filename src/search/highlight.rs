//! Span-based highlighting of matched terms.

use regex::{Regex, RegexBuilder};
use std::ops::Range;

pub const MARK_OPEN: &str = "<mark>";
pub const MARK_CLOSE: &str = "</mark>";

/// Wraps `term` in highlight markers.
pub fn mark(term: &str) -> String {
    format!("{MARK_OPEN}{term}{MARK_CLOSE}")
}

/// A query term with its case-insensitive literal pattern, compiled once per
/// query and reused for every line.
#[derive(Debug, Clone)]
pub struct TermMatcher {
    term: String,
    pattern: Regex,
}

impl TermMatcher {
    /// `None` for an empty term.
    pub fn new(term: &str) -> Option<Self> {
        if term.is_empty() {
            return None;
        }
        let pattern = RegexBuilder::new(&regex::escape(term))
            .case_insensitive(true)
            .build()
            .ok()?;
        Some(Self {
            term: term.to_string(),
            pattern,
        })
    }

    pub fn term(&self) -> &str {
        &self.term
    }

    /// Byte range of the first occurrence in `text`.
    pub fn find(&self, text: &str) -> Option<Range<usize>> {
        self.pattern.find(text).map(|m| m.range())
    }
}

/// Renders `text` with the first occurrence of `primary` and of each of
/// `others` wrapped in markers.
///
/// Spans are collected first and rendered once, in text order. A term whose
/// first occurrence overlaps an already chosen span is skipped, so markers
/// never nest. The text between markers keeps its original casing.
pub fn highlight(text: &str, primary: &TermMatcher, others: &[&TermMatcher]) -> String {
    let mut spans: Vec<Range<usize>> = Vec::new();
    for matcher in std::iter::once(primary).chain(others.iter().copied()) {
        if let Some(span) = matcher.find(text)
            && !spans.iter().any(|s| s.start < span.end && span.start < s.end)
        {
            spans.push(span);
        }
    }
    spans.sort_by_key(|s| s.start);

    let mut out =
        String::with_capacity(text.len() + spans.len() * (MARK_OPEN.len() + MARK_CLOSE.len()));
    let mut cursor = 0;
    for span in spans {
        out.push_str(&text[cursor..span.start]);
        out.push_str(MARK_OPEN);
        out.push_str(&text[span.clone()]);
        out.push_str(MARK_CLOSE);
        cursor = span.end;
    }
    out.push_str(&text[cursor..]);
    out
}
