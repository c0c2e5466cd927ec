//! Agenda projection for stored revision entries.
//!
//! # Responsibility
//! - Turn a user's persisted entries into a sorted upcoming list, or an
//!   explicit empty-state value.
//!
//! # Invariants
//! - Projection is pure: output depends only on `(entries, now)`.
//! - Empty states are values, never errors; "no data yet" is expected.

pub mod projector;
