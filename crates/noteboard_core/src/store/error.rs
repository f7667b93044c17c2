//! Store error taxonomy.

use crate::model::category::CategoryId;
use crate::model::note::{NoteField, NoteId};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Result type used by store operations.
pub type StoreResult<T> = Result<T, StoreError>;

/// Coarse error class, for callers that only branch on the kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreErrorKind {
    NotFound,
    InvalidIndex,
    EmptyField,
}

/// Errors from note store operations. All are recoverable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// Referenced category does not exist.
    CategoryNotFound(CategoryId),
    /// Referenced note is not in the named category.
    NoteNotFound {
        category_id: CategoryId,
        note_id: NoteId,
    },
    /// Position outside the category's current bounds.
    InvalidIndex {
        category_id: CategoryId,
        index: usize,
        len: usize,
    },
    /// Add attempted with a blank field.
    EmptyField(NoteField),
}

impl StoreError {
    pub fn kind(&self) -> StoreErrorKind {
        match self {
            Self::CategoryNotFound(_) | Self::NoteNotFound { .. } => StoreErrorKind::NotFound,
            Self::InvalidIndex { .. } => StoreErrorKind::InvalidIndex,
            Self::EmptyField(_) => StoreErrorKind::EmptyField,
        }
    }

    /// Stable snake_case reason used in log events.
    pub(crate) fn reason(&self) -> &'static str {
        match self {
            Self::CategoryNotFound(_) => "category_not_found",
            Self::NoteNotFound { .. } => "note_not_found",
            Self::InvalidIndex { .. } => "invalid_index",
            Self::EmptyField(_) => "empty_field",
        }
    }
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::CategoryNotFound(id) => write!(f, "category not found: {id}"),
            Self::NoteNotFound {
                category_id,
                note_id,
            } => write!(f, "note {note_id} not found in category {category_id}"),
            Self::InvalidIndex {
                category_id,
                index,
                len,
            } => write!(
                f,
                "index {index} out of bounds for category {category_id} (len {len})"
            ),
            Self::EmptyField(field) => write!(f, "note {field} must not be blank"),
        }
    }
}

impl Error for StoreError {}

impl From<NoteField> for StoreError {
    fn from(value: NoteField) -> Self {
        Self::EmptyField(value)
    }
}
