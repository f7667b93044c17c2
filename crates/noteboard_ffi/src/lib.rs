//! Flutter-facing bindings for the note board.

pub mod api;
