//! Note store use-cases.
//!
//! # Responsibility
//! - Apply add/delete/move to the board and publish new snapshots.
//! - Translate drag-end payloads into moves.
//!
//! # Invariants
//! - Each successful change publishes exactly one new `Arc<BoardSnapshot>`.
//! - Categories untouched by a change keep sharing their note sequence.
//! - Errors leave `snapshot()` pointer-equal to its previous value.

use crate::config::{BoardConfig, ConfigError};
use crate::model::category::Category;
use crate::model::draft::NoteDraft;
use crate::model::note::{check_note_fields, Note};
use crate::store::drag::{DragResult, MoveOutcome};
use crate::store::error::{StoreError, StoreResult};
use crate::store::id_gen::{Clock, NoteIdGenerator, SystemClock};
use crate::store::snapshot::BoardSnapshot;
use log::{info, warn};
use std::sync::Arc;

/// Owned, versioned board state.
#[derive(Debug)]
pub struct NoteStore<C: Clock = SystemClock> {
    snapshot: Arc<BoardSnapshot>,
    ids: NoteIdGenerator<C>,
}

impl NoteStore<SystemClock> {
    /// Creates a store seeded with the default categories.
    pub fn new() -> Self {
        let config = BoardConfig::default();
        Self::build(&config, SystemClock)
    }

    /// Creates a store from validated seed config.
    pub fn from_config(config: &BoardConfig) -> Result<Self, ConfigError> {
        Self::with_clock(config, SystemClock)
    }
}

impl Default for NoteStore<SystemClock> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: Clock> NoteStore<C> {
    /// Creates a store using a caller-provided clock for id generation.
    pub fn with_clock(config: &BoardConfig, clock: C) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::build(config, clock))
    }

    fn build(config: &BoardConfig, clock: C) -> Self {
        info!(
            "event=store_init module=store status=ok categories={}",
            config.categories.len()
        );
        Self {
            snapshot: Arc::new(BoardSnapshot::initial(config.build_categories())),
            ids: NoteIdGenerator::new(clock),
        }
    }

    /// Returns the current snapshot.
    ///
    /// Compare with `Arc::ptr_eq` to detect change.
    pub fn snapshot(&self) -> Arc<BoardSnapshot> {
        Arc::clone(&self.snapshot)
    }

    pub fn version(&self) -> u64 {
        self.snapshot.version
    }

    pub fn category(&self, category_id: &str) -> Option<&Category> {
        self.snapshot.category(category_id)
    }

    pub fn note(&self, note_id: &str) -> Option<&Note> {
        self.snapshot.note(note_id)
    }

    pub fn note_count(&self) -> usize {
        self.snapshot.note_count()
    }

    /// Empties every category and publishes the result as a new version.
    ///
    /// Categories and their order are kept. The version keeps counting and
    /// the id generator is not rewound, so ids issued before the reset are
    /// never handed out again.
    pub fn reset(&mut self) {
        let categories = self
            .snapshot
            .categories
            .iter()
            .map(|category| category.with_notes(Vec::new()))
            .collect();
        self.publish(categories);
        info!(
            "event=store_reset module=store status=ok version={}",
            self.version()
        );
    }

    /// Appends a new note to the end of a category.
    ///
    /// # Errors
    /// - `EmptyField` when title or content is blank.
    /// - `CategoryNotFound` when `category_id` is unknown.
    pub fn add_note(
        &mut self,
        category_id: &str,
        title: impl Into<String>,
        content: impl Into<String>,
    ) -> StoreResult<Note> {
        let title = title.into();
        let content = content.into();
        let result = self.add_note_inner(category_id, title, content);
        if let Err(err) = &result {
            log_failure("note_add", err);
        }
        result
    }

    fn add_note_inner(
        &mut self,
        category_id: &str,
        title: String,
        content: String,
    ) -> StoreResult<Note> {
        check_note_fields(&title, &content)?;
        let position = self.category_position(category_id)?;

        let note = Note::new(self.ids.next_id(), title, content, category_id);
        let target = &self.snapshot.categories[position];
        let mut notes = target.notes.as_ref().clone();
        notes.push(note.clone());
        let mut categories = self.snapshot.categories.clone();
        categories[position] = target.with_notes(notes);
        self.publish(categories);

        info!(
            "event=note_add module=store status=ok category={} note={} version={}",
            category_id,
            note.id,
            self.version()
        );
        Ok(note)
    }

    /// Adds the draft's title/content and clears the draft on success.
    ///
    /// The draft is left as typed when the add fails.
    pub fn add_note_from_draft(
        &mut self,
        category_id: &str,
        draft: &mut NoteDraft,
    ) -> StoreResult<Note> {
        let note = self.add_note(category_id, draft.title(), draft.content())?;
        draft.clear();
        Ok(note)
    }

    /// Removes a note from a category and returns it.
    ///
    /// # Errors
    /// - `CategoryNotFound` when `category_id` is unknown.
    /// - `NoteNotFound` when the category holds no such note.
    pub fn delete_note(&mut self, category_id: &str, note_id: &str) -> StoreResult<Note> {
        let result = self.delete_note_inner(category_id, note_id);
        if let Err(err) = &result {
            log_failure("note_delete", err);
        }
        result
    }

    fn delete_note_inner(&mut self, category_id: &str, note_id: &str) -> StoreResult<Note> {
        let position = self.category_position(category_id)?;
        let target = &self.snapshot.categories[position];
        let index = target
            .position_of(note_id)
            .ok_or_else(|| StoreError::NoteNotFound {
                category_id: category_id.to_string(),
                note_id: note_id.to_string(),
            })?;

        let mut notes = target.notes.as_ref().clone();
        let removed = notes.remove(index);
        let mut categories = self.snapshot.categories.clone();
        categories[position] = target.with_notes(notes);
        self.publish(categories);

        info!(
            "event=note_delete module=store status=ok category={} note={} version={}",
            category_id,
            removed.id,
            self.version()
        );
        Ok(removed)
    }

    /// Moves the note at `source_index` to `destination_index`.
    ///
    /// Same-category moves reorder in place; cross-category moves rewrite the
    /// note's `category`. Bounds follow the drag surface: for a reorder the
    /// destination must be `< len`, for a cross move `<= destination len`.
    ///
    /// # Errors
    /// - `CategoryNotFound` for an unknown source or destination.
    /// - `InvalidIndex` for an out-of-bounds source or destination index.
    pub fn move_note(
        &mut self,
        source_category: &str,
        source_index: usize,
        destination_category: &str,
        destination_index: usize,
    ) -> StoreResult<MoveOutcome> {
        let result = self.move_note_inner(
            source_category,
            source_index,
            destination_category,
            destination_index,
        );
        if let Err(err) = &result {
            log_failure("note_move", err);
        }
        result
    }

    fn move_note_inner(
        &mut self,
        source_category: &str,
        source_index: usize,
        destination_category: &str,
        destination_index: usize,
    ) -> StoreResult<MoveOutcome> {
        let source_position = self.category_position(source_category)?;
        let destination_position = self.category_position(destination_category)?;
        let source = &self.snapshot.categories[source_position];
        ensure_index(source, source_index, source.len())?;

        let mut categories = self.snapshot.categories.clone();
        let note_id;
        if source_position == destination_position {
            ensure_index(source, destination_index, source.len())?;
            if source_index == destination_index {
                return Ok(MoveOutcome::Unchanged);
            }

            let mut notes = source.notes.as_ref().clone();
            let moved = notes.remove(source_index);
            note_id = moved.id.clone();
            notes.insert(destination_index, moved);
            categories[source_position] = source.with_notes(notes);
        } else {
            let destination = &self.snapshot.categories[destination_position];
            ensure_index(destination, destination_index, destination.len() + 1)?;

            let mut source_notes = source.notes.as_ref().clone();
            let mut moved = source_notes.remove(source_index);
            moved.category = destination.id.clone();
            note_id = moved.id.clone();
            let mut destination_notes = destination.notes.as_ref().clone();
            destination_notes.insert(destination_index, moved);
            categories[source_position] = source.with_notes(source_notes);
            categories[destination_position] = destination.with_notes(destination_notes);
        }
        self.publish(categories);

        info!(
            "event=note_move module=store status=ok note={} from={}:{} to={}:{} version={}",
            note_id,
            source_category,
            source_index,
            destination_category,
            destination_index,
            self.version()
        );
        Ok(MoveOutcome::Moved { note_id })
    }

    /// Applies a drag-end payload.
    ///
    /// A missing destination cancels the drop and leaves the board unchanged.
    pub fn apply_drag_end(&mut self, drag: &DragResult) -> StoreResult<MoveOutcome> {
        let Some(destination) = drag.destination.as_ref() else {
            info!(
                "event=drag_end module=store status=cancelled source={}:{}",
                drag.source.droppable_id, drag.source.index
            );
            return Ok(MoveOutcome::Cancelled);
        };
        self.move_note(
            &drag.source.droppable_id,
            drag.source.index,
            &destination.droppable_id,
            destination.index,
        )
    }

    fn category_position(&self, category_id: &str) -> StoreResult<usize> {
        self.snapshot
            .categories
            .iter()
            .position(|category| category.id == category_id)
            .ok_or_else(|| StoreError::CategoryNotFound(category_id.to_string()))
    }

    fn publish(&mut self, categories: Vec<Category>) {
        self.snapshot = Arc::new(BoardSnapshot {
            version: self.snapshot.version + 1,
            categories,
        });
    }
}

fn ensure_index(category: &Category, index: usize, bound: usize) -> StoreResult<()> {
    if index < bound {
        return Ok(());
    }
    Err(StoreError::InvalidIndex {
        category_id: category.id.clone(),
        index,
        len: category.len(),
    })
}

fn log_failure(event: &str, err: &StoreError) {
    warn!(
        "event={} module=store status=error reason={}",
        event,
        err.reason()
    );
}
