//! Relevance scoring.
//!
//! Scores form a small fixed universe driven only by the structural role of
//! the matched line and whether the term names a component found on it.
//! Term frequency and position play no part.

use crate::types::TextType;

/// Multiplier applied when the matched term is exactly a component on the line.
pub const EXACT_MATCH_BONUS: f64 = 1.5;

/// Score of a specialized-document hit on an exact component name.
pub const SPECIALIZED_EXACT_SCORE: f64 = 4.0;

/// Score of a specialized-document hit on part of a component name.
pub const SPECIALIZED_PARTIAL_SCORE: f64 = 3.0;

/// Base weight of a structural role.
///
/// - 3: component title
/// - 2: component description
/// - 1: normal text
pub fn base_weight(text_type: TextType) -> f64 {
    match text_type {
        TextType::ComponentTitle => 3.0,
        TextType::ComponentDesc => 2.0,
        TextType::NormalText => 1.0,
    }
}

/// Relevance of a general-mode hit, rounded to one decimal place.
pub fn relevance_score(text_type: TextType, exact_component_match: bool) -> f64 {
    let mut score = base_weight(text_type);
    if exact_component_match {
        score *= EXACT_MATCH_BONUS;
    }
    (score * 10.0).round() / 10.0
}
