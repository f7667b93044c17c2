//! In-memory note store.
//!
//! # Responsibility
//! - Own the board state and apply add/delete/move use-cases to it.
//! - Publish immutable snapshots for renderers and search.
//!
//! # Invariants
//! - Failed operations leave the published snapshot untouched.
//! - Categories are never added, removed or reordered after init.

pub mod drag;
pub mod error;
pub mod id_gen;
pub mod note_store;
pub mod snapshot;
