//! Core domain logic for Revisit, a spaced-repetition revision planner.
//! This crate is the single source of truth for scheduling invariants.

pub mod agenda;
pub mod db;
pub mod logging;
pub mod model;
pub mod repo;
pub mod schedule;
pub mod service;

pub use agenda::projector::{project_agenda, Agenda, AgendaItem};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::entry::{EntryId, EntryValidationError, RevisionEntry};
pub use repo::entry_repo::{EntryRepository, RepoError, RepoResult, SqliteEntryRepository};
pub use schedule::generator::{
    generate_schedule, parse_start_date, Checkpoint, Offset, RevisionInterval, ScheduleError,
    ScheduleResult,
};
pub use service::revision_service::{RevisionService, ServiceError, ServiceResult};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::core_version;

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
