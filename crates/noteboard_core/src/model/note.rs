//! Note domain model.
//!
//! # Responsibility
//! - Define the note record rendered by the board.
//! - Provide the presence checks applied before a note is created.
//!
//! # Invariants
//! - `id` is stable for the note lifetime and never reused.
//! - `content` is opaque HTML from the rich-text editor; it is never sanitized here.

use super::category::CategoryId;
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

/// Stable note identifier (`note<epoch-ms>`).
pub type NoteId = String;

/// User-editable note field, used to report presence failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoteField {
    /// Single-line title input.
    Title,
    /// Rich-text editor body.
    Content,
}

impl NoteField {
    /// Returns the field name used in messages and logs.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Title => "title",
            Self::Content => "content",
        }
    }
}

impl Display for NoteField {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One titled rich-text item on the board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
    /// Unique id generated from the creation timestamp.
    pub id: NoteId,
    pub title: String,
    /// HTML produced by the editor.
    pub content: String,
    /// Owning category id.
    pub category: CategoryId,
}

impl Note {
    /// Builds a note record with a caller-provided id.
    ///
    /// Does not check field presence; see [`check_note_fields`].
    pub fn new(
        id: impl Into<NoteId>,
        title: impl Into<String>,
        content: impl Into<String>,
        category: impl Into<CategoryId>,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            content: content.into(),
            category: category.into(),
        }
    }

    /// Returns whether title or content contains `needle`.
    ///
    /// `needle` must already be lowercased.
    pub fn matches_lowercase(&self, needle: &str) -> bool {
        self.title.to_lowercase().contains(needle) || self.content.to_lowercase().contains(needle)
    }
}

/// Checks that both user fields carry something other than whitespace.
///
/// Title is checked first so the form reports the topmost empty input.
pub fn check_note_fields(title: &str, content: &str) -> Result<(), NoteField> {
    if title.trim().is_empty() {
        return Err(NoteField::Title);
    }
    if is_blank_html(content) {
        return Err(NoteField::Content);
    }
    Ok(())
}

/// Returns whether editor HTML has neither visible text nor embedded media.
///
/// An untouched editor reports `<p><br></p>`, which counts as blank; an
/// image-only body does not.
pub fn is_blank_html(content: &str) -> bool {
    crate::preview::derive_html_preview(content).is_none()
        && !crate::preview::has_embedded_media(content)
}

#[cfg(test)]
mod tests {
    use super::{check_note_fields, is_blank_html, Note, NoteField};

    #[test]
    fn matches_lowercase_checks_title_and_content() {
        let note = Note::new("note1", "Groceries", "<p>Milk</p>", "c1");
        assert!(note.matches_lowercase("groc"));
        assert!(note.matches_lowercase("milk"));
        assert!(!note.matches_lowercase("bread"));
    }

    #[test]
    fn check_note_fields_reports_title_first() {
        assert_eq!(check_note_fields(" ", ""), Err(NoteField::Title));
        assert_eq!(check_note_fields("t", "  "), Err(NoteField::Content));
        assert_eq!(check_note_fields("t", "<p>x</p>"), Ok(()));
    }

    #[test]
    fn empty_editor_markup_is_blank() {
        assert!(is_blank_html("<p><br></p>"));
        assert!(is_blank_html("<p>&nbsp;</p>"));
        assert!(!is_blank_html("<p>a</p>"));
        assert!(!is_blank_html(
            r#"<p><img src="data:image/png;base64,AAAA"></p>"#
        ));
        assert!(!is_blank_html(r#"<iframe src="https://example.com/v"></iframe>"#));
    }
}
