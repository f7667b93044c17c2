//! Search box state and per-category display resolution.
//!
//! # Responsibility
//! - Track the typed term and the query applied by the search button.
//! - Decide which notes each category heading renders.
//!
//! # Invariants
//! - A non-empty result is shown, flattened, under every category heading.
//! - An empty result falls back to each category's own notes.
//! - Results are recomputed from the snapshot passed in, never cached.

use crate::model::category::CategoryId;
use crate::model::note::Note;
use crate::search::filter::{filter_notes, is_filter_active};
use crate::store::snapshot::BoardSnapshot;

/// Search box state.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchState {
    term: String,
    applied: Option<String>,
}

impl SearchState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Search input change callback. Does not apply the term.
    pub fn set_term(&mut self, term: impl Into<String>) {
        self.term = term.into();
    }

    pub fn term(&self) -> &str {
        &self.term
    }

    /// Applies the current term; a blank term deactivates filtering.
    pub fn apply(&mut self) {
        self.applied = if is_filter_active(&self.term) {
            Some(self.term.clone())
        } else {
            None
        };
    }

    /// Clears both the typed term and the applied query.
    pub fn clear(&mut self) {
        self.term.clear();
        self.applied = None;
    }

    pub fn applied_query(&self) -> Option<&str> {
        self.applied.as_deref()
    }
}

/// Notes rendered under one category heading.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryView {
    pub category_id: CategoryId,
    pub name: String,
    pub notes: Vec<Note>,
    /// `true` when `notes` is the flattened search result.
    pub is_filtered: bool,
}

/// Resolves one view per category, in category order.
///
/// While the applied query has hits, every heading shows the same flattened
/// hit list and grouping is lost.
pub fn resolve_display(snapshot: &BoardSnapshot, search: &SearchState) -> Vec<CategoryView> {
    let hits = search
        .applied_query()
        .map(|query| filter_notes(&snapshot.categories, query))
        .unwrap_or_default();
    let is_filtered = !hits.is_empty();

    snapshot
        .categories
        .iter()
        .map(|category| CategoryView {
            category_id: category.id.clone(),
            name: category.name.clone(),
            notes: if is_filtered {
                hits.clone()
            } else {
                category.notes.as_ref().clone()
            },
            is_filtered,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::SearchState;

    #[test]
    fn typing_does_not_apply_until_requested() {
        let mut search = SearchState::new();
        search.set_term("milk");
        assert_eq!(search.applied_query(), None);

        search.apply();
        assert_eq!(search.applied_query(), Some("milk"));

        search.set_term("   ");
        search.apply();
        assert_eq!(search.applied_query(), None);
    }

    #[test]
    fn clear_resets_term_and_applied_query() {
        let mut search = SearchState::new();
        search.set_term("milk");
        search.apply();
        search.clear();
        assert_eq!(search.term(), "");
        assert_eq!(search.applied_query(), None);
    }
}
