//! Revision schedule generation.
//!
//! # Responsibility
//! - Turn a topic start date into the canonical ladder of labeled
//!   revision checkpoints.
//!
//! # Invariants
//! - Generation is pure: output depends only on `(start, today)`.
//! - Checkpoint labels are an ordered subsequence of the five canonical
//!   labels; no label appears twice.

pub mod generator;
