//! Timestamp-based note id generation.
//!
//! # Invariants
//! - Issued ids are strictly increasing, so never reused within one store,
//!   even when the clock stalls or steps backwards.

use std::time::{SystemTime, UNIX_EPOCH};

const NOTE_ID_PREFIX: &str = "note";

/// Wall-clock source in epoch milliseconds.
pub trait Clock {
    fn now_epoch_ms(&self) -> i64;
}

/// Process wall clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_epoch_ms(&self) -> i64 {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|elapsed| elapsed.as_millis() as i64)
            .unwrap_or(0)
    }
}

/// Issues `note<epoch-ms>` ids, bumping past the last issued value.
#[derive(Debug, Clone)]
pub struct NoteIdGenerator<C: Clock> {
    clock: C,
    last_issued_ms: Option<i64>,
}

impl<C: Clock> NoteIdGenerator<C> {
    pub fn new(clock: C) -> Self {
        Self {
            clock,
            last_issued_ms: None,
        }
    }

    /// Returns the next unique id.
    pub fn next_id(&mut self) -> String {
        let now = self.clock.now_epoch_ms();
        let stamp = match self.last_issued_ms {
            Some(last) if now <= last => last + 1,
            _ => now,
        };
        self.last_issued_ms = Some(stamp);
        format!("{NOTE_ID_PREFIX}{stamp}")
    }
}
