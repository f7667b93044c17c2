//! Core domain logic for the note board.
//! This crate is the single source of truth for board invariants.

pub mod config;
pub mod logging;
pub mod model;
pub mod preview;
pub mod search;
pub mod store;

pub use config::{BoardConfig, CategorySeed, ConfigError};
pub use logging::{default_log_level, init_logging, logging_status, LoggingError};
pub use model::category::{Category, CategoryId};
pub use model::draft::NoteDraft;
pub use model::note::{Note, NoteField, NoteId};
pub use preview::derive_html_preview;
pub use search::display::{resolve_display, CategoryView, SearchState};
pub use search::filter::{filter_notes, is_filter_active};
pub use store::drag::{DragLocation, DragResult, MoveOutcome};
pub use store::error::{StoreError, StoreErrorKind, StoreResult};
pub use store::id_gen::{Clock, SystemClock};
pub use store::note_store::NoteStore;
pub use store::snapshot::BoardSnapshot;

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::{core_version, ping};

    #[test]
    fn ping_returns_pong() {
        assert_eq!(ping(), "pong");
    }

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
