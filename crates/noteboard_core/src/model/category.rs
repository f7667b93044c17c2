//! Category domain model.
//!
//! # Responsibility
//! - Define the named, ordered bucket of notes.
//!
//! # Invariants
//! - Note sequences are immutable once published; mutation swaps the `Arc`.
//! - Category ids are unique within one board.

use super::note::Note;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Stable category identifier (the drag-and-drop droppable id).
pub type CategoryId = String;

/// Named, ordered bucket of notes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: CategoryId,
    /// User-facing heading.
    pub name: String,
    /// Ordered note sequence, shared with older snapshots until changed.
    pub notes: Arc<Vec<Note>>,
}

impl Category {
    /// Creates an empty category.
    pub fn new(id: impl Into<CategoryId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            notes: Arc::new(Vec::new()),
        }
    }

    /// Returns a copy of this category holding `notes`.
    pub fn with_notes(&self, notes: Vec<Note>) -> Self {
        Self {
            id: self.id.clone(),
            name: self.name.clone(),
            notes: Arc::new(notes),
        }
    }

    /// Returns the index of a note by id.
    pub fn position_of(&self, note_id: &str) -> Option<usize> {
        self.notes.iter().position(|note| note.id == note_id)
    }

    pub fn len(&self) -> usize {
        self.notes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.notes.is_empty()
    }
}
