//! Repository layer abstractions and persistence implementations.
//!
//! # Responsibility
//! - Define the per-user entry store contract consumed by services.
//! - Isolate SQLite query details from scheduling and projection logic.
//!
//! # Invariants
//! - Writes enforce `RevisionEntry::validate()` before persistence.
//! - Reads reject invalid persisted state instead of masking it.

pub mod entry_repo;
