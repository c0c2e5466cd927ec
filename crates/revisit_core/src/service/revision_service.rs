//! Revision scheduling use-case service.
//!
//! # Responsibility
//! - Tie the pure schedule generator and agenda projector to the entry
//!   repository.
//!
//! # Invariants
//! - `today` is threaded through from the caller; the service never
//!   samples a clock itself.
//! - Generator and projector stay side-effect free; logging happens
//!   only here and in the db layer.

use crate::agenda::projector::{project_agenda, Agenda};
use crate::model::entry::RevisionEntry;
use crate::repo::entry_repo::{EntryRepository, RepoError};
use crate::schedule::generator::{generate_schedule, ScheduleError};
use chrono::NaiveDate;
use log::{info, warn};
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type ServiceResult<T> = Result<T, ServiceError>;

/// Use-case error: either the schedule could not be generated or the
/// store failed.
#[derive(Debug)]
pub enum ServiceError {
    Schedule(ScheduleError),
    Repo(RepoError),
}

impl Display for ServiceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Schedule(err) => write!(f, "{err}"),
            Self::Repo(err) => write!(f, "{err}"),
        }
    }
}

impl Error for ServiceError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Schedule(err) => Some(err),
            Self::Repo(err) => Some(err),
        }
    }
}

impl From<ScheduleError> for ServiceError {
    fn from(value: ScheduleError) -> Self {
        Self::Schedule(value)
    }
}

impl From<RepoError> for ServiceError {
    fn from(value: RepoError) -> Self {
        Self::Repo(value)
    }
}

/// Use-case service wrapper over an entry repository.
pub struct RevisionService<R: EntryRepository> {
    repo: R,
}

impl<R: EntryRepository> RevisionService<R> {
    /// Creates a service using the provided repository implementation.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Schedules all revision checkpoints for a topic and persists them.
    ///
    /// # Contract
    /// - `start_date` must be a `YYYY-MM-DD` calendar date.
    /// - Returns the persisted entries in checkpoint order.
    /// - On `InvalidDate` nothing is persisted.
    pub fn schedule_topic(
        &self,
        user_id: &str,
        topic: &str,
        start_date: &str,
        today: NaiveDate,
    ) -> ServiceResult<Vec<RevisionEntry>> {
        let checkpoints = match generate_schedule(start_date, today) {
            Ok(checkpoints) => checkpoints,
            Err(err) => {
                warn!(
                    "event=topic_scheduled module=service status=error user_id={user_id} error={err}"
                );
                return Err(err.into());
            }
        };

        let entries: Vec<RevisionEntry> = checkpoints
            .iter()
            .map(|checkpoint| RevisionEntry::from_checkpoint(topic, checkpoint))
            .collect();

        self.repo.add_entries(user_id, &entries)?;

        info!(
            "event=topic_scheduled module=service status=ok user_id={user_id} checkpoints={}",
            entries.len()
        );

        Ok(entries)
    }

    /// Loads a user's stored entries and projects the upcoming agenda.
    pub fn agenda_for_user(&self, user_id: &str, today: NaiveDate) -> ServiceResult<Agenda> {
        let entries = self.repo.entries_for_user(user_id)?;
        let agenda = project_agenda(&entries, today);

        info!(
            "event=agenda_projected module=service status=ok user_id={user_id} entries={}",
            entries.len()
        );

        Ok(agenda)
    }
}
