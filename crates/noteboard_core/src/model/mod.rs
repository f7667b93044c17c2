//! Domain model for the note board.
//!
//! # Responsibility
//! - Define the category/note records shared by store, search and UI.
//! - Own the per-form draft state used by the add-note flow.
//!
//! # Invariants
//! - A note's `category` always names the category whose sequence holds it.
//! - Note ids are unique across the whole board and never reused.

pub mod category;
pub mod draft;
pub mod note;
