//! Note search entry points.
//!
//! # Responsibility
//! - Filter board notes by a case-insensitive substring query.
//! - Resolve what each category heading shows while a search is active.
//!
//! # Invariants
//! - A blank query means "no filter active", never "match nothing".

pub mod display;
pub mod filter;
