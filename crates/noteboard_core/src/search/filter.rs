//! Substring filter over board notes.
//!
//! # Invariants
//! - Matching is case-insensitive over title OR raw content HTML.
//! - Results keep category-then-note order.

use crate::model::category::Category;
use crate::model::note::Note;

/// Returns whether `query` activates filtering.
pub fn is_filter_active(query: &str) -> bool {
    !query.trim().is_empty()
}

/// Returns notes whose title or content contains `query`, flattened across
/// categories.
///
/// Returns an empty list for blank queries; callers read that as "show the
/// unfiltered per-category lists". The query is matched as typed, only
/// lowercased, so inner and edge spaces are significant.
pub fn filter_notes(categories: &[Category], query: &str) -> Vec<Note> {
    if !is_filter_active(query) {
        return Vec::new();
    }

    let needle = query.to_lowercase();
    categories
        .iter()
        .flat_map(|category| category.notes.iter())
        .filter(|note| note.matches_lowercase(&needle))
        .cloned()
        .collect()
}
