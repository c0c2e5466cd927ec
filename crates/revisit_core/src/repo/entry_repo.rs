//! Entry repository contract and SQLite implementation.
//!
//! # Responsibility
//! - Provide the per-user get/add store backing schedule persistence.
//! - Keep SQL details inside the core persistence boundary.
//!
//! # Invariants
//! - `add_entries` validates every entry before any SQL mutation runs.
//! - `entries_for_user` returns rows in insertion order, so the agenda
//!   projector's stable tie-break reflects scheduling order.
//! - An empty result is a normal state, not an error.

use crate::db::DbError;
use crate::model::entry::{EntryValidationError, RevisionEntry};
use crate::schedule::generator::{parse_start_date, START_DATE_FORMAT};
use rusqlite::{params, Connection, Row};
use std::error::Error;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

const ENTRY_SELECT_SQL: &str = "SELECT
    uuid,
    topic,
    label,
    due_date
FROM revision_entries";

pub type RepoResult<T> = Result<T, RepoError>;

/// Generic repository error for entry persistence and query operations.
#[derive(Debug)]
pub enum RepoError {
    Validation(EntryValidationError),
    Db(DbError),
    InvalidData(String),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::Db(err) => write!(f, "{err}"),
            Self::InvalidData(message) => write!(f, "invalid persisted entry data: {message}"),
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::Db(err) => Some(err),
            Self::InvalidData(_) => None,
        }
    }
}

impl From<EntryValidationError> for RepoError {
    fn from(value: EntryValidationError) -> Self {
        Self::Validation(value)
    }
}

impl From<DbError> for RepoError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for RepoError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

/// Per-user entry store consumed by the revision service.
///
/// `user_id` is an opaque identifier; this crate never enumerates or
/// interprets it.
pub trait EntryRepository {
    /// Appends entries to a user's stored list. Validates all entries
    /// before writing any of them.
    fn add_entries(&self, user_id: &str, entries: &[RevisionEntry]) -> RepoResult<()>;

    /// Returns the user's stored entries in insertion order. An empty
    /// vector means "no data yet".
    fn entries_for_user(&self, user_id: &str) -> RepoResult<Vec<RevisionEntry>>;
}

/// SQLite-backed entry repository.
pub struct SqliteEntryRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteEntryRepository<'conn> {
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }
}

impl EntryRepository for SqliteEntryRepository<'_> {
    fn add_entries(&self, user_id: &str, entries: &[RevisionEntry]) -> RepoResult<()> {
        for entry in entries {
            entry.validate()?;
        }

        let mut stmt = self.conn.prepare(
            "INSERT INTO revision_entries (uuid, user_id, topic, label, due_date)
             VALUES (?1, ?2, ?3, ?4, ?5);",
        )?;

        for entry in entries {
            stmt.execute(params![
                entry.uuid.to_string(),
                user_id,
                entry.topic.as_str(),
                entry.label.as_str(),
                entry.date.format(START_DATE_FORMAT).to_string(),
            ])?;
        }

        Ok(())
    }

    fn entries_for_user(&self, user_id: &str) -> RepoResult<Vec<RevisionEntry>> {
        let mut stmt = self.conn.prepare(&format!(
            "{ENTRY_SELECT_SQL}
             WHERE user_id = ?1
             ORDER BY created_at ASC, rowid ASC;"
        ))?;

        let mut rows = stmt.query([user_id])?;
        let mut entries = Vec::new();

        while let Some(row) = rows.next()? {
            entries.push(parse_entry_row(row)?);
        }

        Ok(entries)
    }
}

fn parse_entry_row(row: &Row<'_>) -> RepoResult<RevisionEntry> {
    let uuid_text: String = row.get("uuid")?;
    let uuid = Uuid::parse_str(&uuid_text).map_err(|_| {
        RepoError::InvalidData(format!(
            "invalid uuid value `{uuid_text}` in revision_entries.uuid"
        ))
    })?;

    let due_date_text: String = row.get("due_date")?;
    let date = parse_start_date(&due_date_text).map_err(|_| {
        RepoError::InvalidData(format!(
            "invalid date value `{due_date_text}` in revision_entries.due_date"
        ))
    })?;

    let topic: String = row.get("topic")?;
    let label: String = row.get("label")?;

    let entry = RevisionEntry::with_id(uuid, topic, label, date);
    entry.validate()?;
    Ok(entry)
}
