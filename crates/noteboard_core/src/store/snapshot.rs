//! Immutable board snapshot.
//!
//! # Invariants
//! - A published snapshot is never mutated; the store swaps in a new one.
//! - `version` increases by one per published change.

use crate::model::category::Category;
use crate::model::note::Note;
use serde::Serialize;
use std::collections::HashSet;

/// Point-in-time view of every category and its notes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BoardSnapshot {
    pub version: u64,
    /// Categories in insertion order.
    pub categories: Vec<Category>,
}

impl BoardSnapshot {
    pub(crate) fn initial(categories: Vec<Category>) -> Self {
        Self {
            version: 0,
            categories,
        }
    }

    pub fn category(&self, category_id: &str) -> Option<&Category> {
        self.categories.iter().find(|category| category.id == category_id)
    }

    /// Finds a note anywhere on the board.
    pub fn note(&self, note_id: &str) -> Option<&Note> {
        self.notes().find(|note| note.id == note_id)
    }

    /// Iterates notes in category-then-note order.
    pub fn notes(&self) -> impl Iterator<Item = &Note> + '_ {
        self.categories
            .iter()
            .flat_map(|category| category.notes.iter())
    }

    pub fn note_count(&self) -> usize {
        self.categories.iter().map(Category::len).sum()
    }

    /// Checks the board's structural invariants.
    ///
    /// # Errors
    /// - A note's `category` differs from the category holding it.
    /// - A note id appears more than once.
    /// - A category id appears more than once.
    pub fn check_invariants(&self) -> Result<(), String> {
        let mut category_ids = HashSet::new();
        let mut note_ids = HashSet::new();
        for category in &self.categories {
            if !category_ids.insert(category.id.as_str()) {
                return Err(format!("duplicate category id `{}`", category.id));
            }
            for note in category.notes.iter() {
                if note.category != category.id {
                    return Err(format!(
                        "note `{}` claims category `{}` but sits in `{}`",
                        note.id, note.category, category.id
                    ));
                }
                if !note_ids.insert(note.id.as_str()) {
                    return Err(format!("duplicate note id `{}`", note.id));
                }
            }
        }
        Ok(())
    }
}
