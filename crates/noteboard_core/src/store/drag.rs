//! Drag-end payload reported by the drag-and-drop surface.
//!
//! Field names follow the surface's JSON (`droppableId`), so payloads can be
//! deserialized as-is.

use crate::model::category::CategoryId;
use crate::model::note::NoteId;
use serde::{Deserialize, Serialize};

/// One end of a drag gesture.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DragLocation {
    /// Category id of the list.
    pub droppable_id: CategoryId,
    /// Position within that list.
    pub index: usize,
}

impl DragLocation {
    pub fn new(droppable_id: impl Into<CategoryId>, index: usize) -> Self {
        Self {
            droppable_id: droppable_id.into(),
            index,
        }
    }
}

/// Completed drag gesture.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DragResult {
    pub source: DragLocation,
    /// `None` when dropped outside any list.
    #[serde(default)]
    pub destination: Option<DragLocation>,
}

/// What a move or drop did to the board.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveOutcome {
    /// Note changed position or category; a new snapshot was published.
    Moved { note_id: NoteId },
    /// Dropped back onto its own position.
    Unchanged,
    /// Dropped outside a valid target.
    Cancelled,
}
