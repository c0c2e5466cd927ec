//! Domain model for revision scheduling.
//!
//! # Responsibility
//! - Define the canonical entry shape shared by the schedule generator,
//!   persistence and agenda projection.
//!
//! # Invariants
//! - Every persisted entry is identified by a stable `EntryId`.
//! - Entries are immutable once created; corrections are new entries.

pub mod entry;
