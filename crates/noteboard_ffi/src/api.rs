//! FFI use-case API for Flutter-facing calls.
//!
//! # Responsibility
//! - Expose board use-cases to Dart via FRB as sync, panic-free calls.
//! - Map strict core errors onto lenient response envelopes.
//!
//! # Invariants
//! - Exported functions must not panic across the FFI boundary.
//! - A failed call leaves the board exactly as it was.
//! - One process-wide board; the lock is held for one operation only.

use log::error;
use noteboard_core::{
    core_version as core_version_inner, filter_notes, init_logging as init_logging_inner,
    ping as ping_inner, resolve_display, BoardSnapshot, CategoryView, DragLocation, DragResult,
    MoveOutcome, Note, NoteStore, SearchState,
};
use std::sync::{Mutex, MutexGuard, OnceLock};

static BOARD: OnceLock<Mutex<NoteStore>> = OnceLock::new();

/// Minimal health-check API for FRB smoke integration.
///
/// # FFI contract
/// - Sync call, non-blocking.
/// - Never throws; always returns a UTF-8 string.
#[flutter_rust_bridge::frb(sync)]
pub fn ping() -> String {
    ping_inner().to_owned()
}

/// Expose core crate version through FFI.
#[flutter_rust_bridge::frb(sync)]
pub fn core_version() -> String {
    core_version_inner().to_owned()
}

/// Initializes core logging once per process.
///
/// Input semantics:
/// - `level`: one of `trace|debug|info|warn|error` (case-insensitive).
/// - `log_dir`: absolute directory path where rolling logs are written.
///
/// # FFI contract
/// - Safe to call repeatedly with the same `level + log_dir`.
/// - Returns empty string on success and the error message on failure.
#[flutter_rust_bridge::frb(sync)]
pub fn init_logging(level: String, log_dir: String) -> String {
    match init_logging_inner(level.as_str(), log_dir.as_str()) {
        Ok(()) => String::new(),
        Err(err) => err.to_string(),
    }
}

/// Note row for list rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardNoteItem {
    pub note_id: String,
    pub title: String,
    /// Editor HTML, rendered verbatim by the UI.
    pub content_html: String,
    pub category_id: String,
}

/// One category heading with its notes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardCategoryItem {
    pub category_id: String,
    pub name: String,
    pub notes: Vec<BoardNoteItem>,
    /// `true` when `notes` is the flattened search result shown under
    /// every heading.
    pub is_filtered: bool,
}

/// Full board state envelope.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardResponse {
    pub categories: Vec<BoardCategoryItem>,
    /// Snapshot version; unchanged version means nothing to redraw.
    pub version: u64,
    /// Empty on success; diagnostics otherwise.
    pub message: String,
}

/// Mutation result envelope.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActionResponse {
    /// Whether the operation succeeded (a cancelled drop counts as success).
    pub ok: bool,
    /// Affected note id, when one exists.
    pub note_id: Option<String>,
    /// Human-readable message for diagnostics/UI.
    pub message: String,
    /// Board version after the call.
    pub version: u64,
}

impl ActionResponse {
    fn success(message: impl Into<String>, note_id: Option<String>, version: u64) -> Self {
        Self {
            ok: true,
            note_id,
            message: message.into(),
            version,
        }
    }

    fn failure(message: impl Into<String>, version: u64) -> Self {
        Self {
            ok: false,
            note_id: None,
            message: message.into(),
            version,
        }
    }
}

/// Returns the current board.
#[flutter_rust_bridge::frb(sync)]
pub fn board_snapshot() -> BoardResponse {
    match lock_board() {
        Ok(board) => to_board_response(&board.snapshot()),
        Err(message) => BoardResponse {
            categories: Vec::new(),
            version: 0,
            message,
        },
    }
}

/// Adds a note from the form's title input and editor HTML.
///
/// # FFI contract
/// - Blank fields and unknown categories fail without changing the board.
#[flutter_rust_bridge::frb(sync)]
pub fn board_add_note(category_id: String, title: String, content: String) -> ActionResponse {
    with_board(|board| match board.add_note(&category_id, title, content) {
        Ok(note) => ActionResponse::success("Note added.", Some(note.id), board.version()),
        Err(err) => {
            ActionResponse::failure(format!("board_add_note failed: {err}"), board.version())
        }
    })
}

/// Deletes one note from a category.
#[flutter_rust_bridge::frb(sync)]
pub fn board_delete_note(category_id: String, note_id: String) -> ActionResponse {
    with_board(|board| match board.delete_note(&category_id, &note_id) {
        Ok(note) => ActionResponse::success("Note deleted.", Some(note.id), board.version()),
        Err(err) => {
            ActionResponse::failure(format!("board_delete_note failed: {err}"), board.version())
        }
    })
}

/// Applies a drag-end gesture.
///
/// Input semantics:
/// - `destination_id = None` and `destination_index = None` means dropped
///   outside any list.
/// - Exactly one of the two being set is rejected with a failed envelope.
#[flutter_rust_bridge::frb(sync)]
pub fn board_drag_end(
    source_id: String,
    source_index: u32,
    destination_id: Option<String>,
    destination_index: Option<u32>,
) -> ActionResponse {
    let destination = match (destination_id, destination_index) {
        (Some(id), Some(index)) => Some(DragLocation::new(id, index as usize)),
        (None, None) => None,
        (id, index) => {
            return with_board(|board| {
                ActionResponse::failure(
                    format!(
                        "board_drag_end failed: destination id ({id:?}) and index ({index:?}) must be set together"
                    ),
                    board.version(),
                )
            });
        }
    };
    let drag = DragResult {
        source: DragLocation::new(source_id, source_index as usize),
        destination,
    };

    with_board(|board| match board.apply_drag_end(&drag) {
        Ok(MoveOutcome::Moved { note_id }) => {
            ActionResponse::success("Note moved.", Some(note_id), board.version())
        }
        Ok(MoveOutcome::Unchanged) => ActionResponse::success("No change.", None, board.version()),
        Ok(MoveOutcome::Cancelled) => {
            ActionResponse::success("Drop cancelled.", None, board.version())
        }
        Err(err) => {
            ActionResponse::failure(format!("board_drag_end failed: {err}"), board.version())
        }
    })
}

/// Returns notes matching `query` across all categories.
///
/// Empty for a blank query: the UI keeps showing per-category lists.
#[flutter_rust_bridge::frb(sync)]
pub fn board_search(query: String) -> Vec<BoardNoteItem> {
    match lock_board() {
        Ok(board) => filter_notes(&board.snapshot().categories, &query)
            .iter()
            .map(to_note_item)
            .collect(),
        Err(_) => Vec::new(),
    }
}

/// Resolves what every category heading renders for `query`.
///
/// While `query` has hits, each heading carries the same flattened hit list
/// with `is_filtered = true`; otherwise each heading carries its own notes.
#[flutter_rust_bridge::frb(sync)]
pub fn board_display(query: String) -> BoardResponse {
    match lock_board() {
        Ok(board) => {
            let snapshot = board.snapshot();
            let mut search = SearchState::new();
            search.set_term(query);
            search.apply();
            BoardResponse {
                categories: resolve_display(&snapshot, &search)
                    .iter()
                    .map(to_category_view_item)
                    .collect(),
                version: snapshot.version,
                message: String::new(),
            }
        }
        Err(message) => BoardResponse {
            categories: Vec::new(),
            version: 0,
            message,
        },
    }
}

/// Empties every category.
///
/// The version keeps increasing across resets, so a UI holding an older
/// version always redraws.
#[flutter_rust_bridge::frb(sync)]
pub fn board_reset() -> BoardResponse {
    match lock_board() {
        Ok(mut board) => {
            board.reset();
            to_board_response(&board.snapshot())
        }
        Err(message) => BoardResponse {
            categories: Vec::new(),
            version: 0,
            message,
        },
    }
}

fn lock_board() -> Result<MutexGuard<'static, NoteStore>, String> {
    BOARD
        .get_or_init(|| Mutex::new(NoteStore::new()))
        .lock()
        .map_err(|_| {
            error!("event=board_lock module=ffi status=error reason=poisoned");
            "board state is unavailable after an earlier failure".to_string()
        })
}

fn with_board(f: impl FnOnce(&mut NoteStore) -> ActionResponse) -> ActionResponse {
    match lock_board() {
        Ok(mut board) => f(&mut board),
        Err(message) => ActionResponse::failure(message, 0),
    }
}

fn to_board_response(snapshot: &BoardSnapshot) -> BoardResponse {
    BoardResponse {
        categories: snapshot
            .categories
            .iter()
            .map(|category| BoardCategoryItem {
                category_id: category.id.clone(),
                name: category.name.clone(),
                notes: category.notes.iter().map(to_note_item).collect(),
                is_filtered: false,
            })
            .collect(),
        version: snapshot.version,
        message: String::new(),
    }
}

fn to_category_view_item(view: &CategoryView) -> BoardCategoryItem {
    BoardCategoryItem {
        category_id: view.category_id.clone(),
        name: view.name.clone(),
        notes: view.notes.iter().map(to_note_item).collect(),
        is_filtered: view.is_filtered,
    }
}

fn to_note_item(note: &Note) -> BoardNoteItem {
    BoardNoteItem {
        note_id: note.id.clone(),
        title: note.title.clone(),
        content_html: note.content.clone(),
        category_id: note.category.clone(),
    }
}
