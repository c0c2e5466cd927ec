//! Revision entry domain model.
//!
//! # Responsibility
//! - Define the persisted record for one scheduled revision of a topic.
//! - Provide constructors for generator output and import paths.
//!
//! # Invariants
//! - `uuid` is stable and never reused for another entry.
//! - `topic` and `label` are non-blank for every persisted entry.
//! - `date` is a plain calendar date; no time-of-day component exists
//!   anywhere in the model.

use crate::schedule::generator::Checkpoint;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

/// Stable identifier for every persisted revision entry.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
pub type EntryId = Uuid;

/// One scheduled revision of a topic, owned by storage after hand-off.
///
/// Serializes with `date` as an ISO-8601 calendar date (`YYYY-MM-DD`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RevisionEntry {
    /// Stable global ID used as the storage primary key.
    pub uuid: EntryId,
    /// Topic name as entered by the user.
    pub topic: String,
    /// Checkpoint label, e.g. `"1 Month"`.
    pub label: String,
    /// Scheduled revision date.
    pub date: NaiveDate,
}

/// Validation failure for a revision entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryValidationError {
    BlankTopic,
    BlankLabel,
}

impl Display for EntryValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::BlankTopic => write!(f, "entry topic must not be blank"),
            Self::BlankLabel => write!(f, "entry label must not be blank"),
        }
    }
}

impl Error for EntryValidationError {}

impl RevisionEntry {
    /// Creates a new entry with a generated stable ID.
    pub fn new(topic: impl Into<String>, label: impl Into<String>, date: NaiveDate) -> Self {
        Self::with_id(Uuid::new_v4(), topic, label, date)
    }

    /// Creates an entry with a caller-provided stable ID.
    ///
    /// Used by import paths where identity already exists externally.
    /// Does not validate; call [`RevisionEntry::validate`] before
    /// persisting.
    pub fn with_id(
        uuid: EntryId,
        topic: impl Into<String>,
        label: impl Into<String>,
        date: NaiveDate,
    ) -> Self {
        Self {
            uuid,
            topic: topic.into(),
            label: label.into(),
            date,
        }
    }

    /// Wraps a generator checkpoint into a persistable entry for a topic.
    pub fn from_checkpoint(topic: impl Into<String>, checkpoint: &Checkpoint) -> Self {
        Self::new(topic, checkpoint.label(), checkpoint.date)
    }

    /// Checks the non-blank invariants enforced on every write path.
    pub fn validate(&self) -> Result<(), EntryValidationError> {
        if self.topic.trim().is_empty() {
            return Err(EntryValidationError::BlankTopic);
        }
        if self.label.trim().is_empty() {
            return Err(EntryValidationError::BlankLabel);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::{EntryValidationError, RevisionEntry};
    use chrono::NaiveDate;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn validate_accepts_regular_entry() {
        let entry = RevisionEntry::new("Rust lifetimes", "1 Week", date(2026, 1, 7));
        assert!(entry.validate().is_ok());
    }

    #[test]
    fn validate_rejects_blank_topic_and_label() {
        let blank_topic = RevisionEntry::new("   ", "1 Week", date(2026, 1, 7));
        assert_eq!(
            blank_topic.validate().unwrap_err(),
            EntryValidationError::BlankTopic
        );

        let blank_label = RevisionEntry::new("Rust lifetimes", "", date(2026, 1, 7));
        assert_eq!(
            blank_label.validate().unwrap_err(),
            EntryValidationError::BlankLabel
        );
    }

    #[test]
    fn serde_round_trip_keeps_iso_calendar_date() {
        let entry = RevisionEntry::new("Ownership", "1 Year", date(2026, 8, 29));
        let json = serde_json::to_string(&entry).unwrap();
        assert!(json.contains("\"2026-08-29\""));

        let restored: RevisionEntry = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, entry);
    }
}
