//! Per-form draft state for the add-note flow.
//!
//! # Responsibility
//! - Hold the title input and editor body while the user types.
//! - Hand both fields to the store as explicit parameters.
//!
//! # Invariants
//! - A draft is cleared only after the store accepted it.

use super::note::{check_note_fields, NoteField};

/// Title/content being composed in one category's form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NoteDraft {
    title: String,
    content: String,
}

impl NoteDraft {
    pub fn new() -> Self {
        Self::default()
    }

    /// Title input change callback.
    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = title.into();
    }

    /// Rich-text editor change callback; `html` is stored verbatim.
    pub fn set_content(&mut self, html: impl Into<String>) {
        self.content = html.into();
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    /// Returns the first empty field, if any.
    pub fn check(&self) -> Result<(), NoteField> {
        check_note_fields(&self.title, &self.content)
    }

    pub fn is_ready(&self) -> bool {
        self.check().is_ok()
    }

    /// Resets both fields after a successful submit.
    pub fn clear(&mut self) {
        self.title.clear();
        self.content.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::NoteDraft;
    use crate::model::note::NoteField;

    #[test]
    fn draft_tracks_inputs_and_clears() {
        let mut draft = NoteDraft::new();
        assert_eq!(draft.check(), Err(NoteField::Title));

        draft.set_title("Todo");
        assert_eq!(draft.check(), Err(NoteField::Content));

        draft.set_content("<p>wash car</p>");
        assert!(draft.is_ready());
        assert_eq!(draft.content(), "<p>wash car</p>");

        draft.clear();
        assert_eq!(draft, NoteDraft::default());
    }
}
