//! Upcoming-agenda projector.
//!
//! # Responsibility
//! - Floor past-due entry dates to "today" and sort for display.
//!
//! # Invariants
//! - No entry is dropped or duplicated; past-due items surface as due
//!   today instead of being hidden.
//! - Sorting is stable: entries with equal display dates keep their
//!   input order.

use crate::model::entry::RevisionEntry;
use chrono::NaiveDate;

/// One agenda row: the stored entry plus the date shown for it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AgendaItem {
    pub entry: RevisionEntry,
    /// `entry.date`, floored to `now` when the stored date has passed.
    pub display_date: NaiveDate,
}

/// Projection outcome for one user's stored entries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Agenda {
    /// The user has no stored entries yet.
    NoEntries,
    /// Entries exist but none remained after projection.
    ///
    /// Unreachable under the floor-to-today policy, which preserves
    /// every entry; kept as an explicit state so callers render it
    /// rather than treating an empty list as an error.
    NothingUpcoming,
    /// Ascending by display date, ties in input order.
    Upcoming(Vec<AgendaItem>),
}

/// Projects stored entries into the upcoming agenda for `now`.
pub fn project_agenda(entries: &[RevisionEntry], now: NaiveDate) -> Agenda {
    if entries.is_empty() {
        return Agenda::NoEntries;
    }

    let mut items: Vec<AgendaItem> = entries
        .iter()
        .map(|entry| AgendaItem {
            entry: entry.clone(),
            display_date: entry.date.max(now),
        })
        .collect();

    if items.is_empty() {
        return Agenda::NothingUpcoming;
    }

    // sort_by_key is stable, so equal display dates keep input order.
    items.sort_by_key(|item| item.display_date);

    Agenda::Upcoming(items)
}
