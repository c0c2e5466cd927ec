//! Checkpoint schedule generator.
//!
//! # Responsibility
//! - Compute the five canonical revision checkpoints from a start date.
//! - Re-anchor overdue checkpoints onto the catch-up ladder.
//!
//! # Invariants
//! - Month offsets clamp to the last day of the target month
//!   (Jan 31 + 1 month = Feb 28, or Feb 29 in a leap year); a month
//!   offset never lands in the month after the intended one.
//! - Output labels stay in canonical order; between 4 and 5 checkpoints
//!   survive, each dated today or later.
//! - `today` is always injected by the caller; this module never reads
//!   a clock.

use chrono::{Days, Months, NaiveDate};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Date format accepted for start dates, e.g. `2026-08-29`.
pub const START_DATE_FORMAT: &str = "%Y-%m-%d";

pub type ScheduleResult<T> = Result<T, ScheduleError>;

/// Failure modes for schedule generation.
///
/// Empty or missing entry lists are not errors anywhere in this crate;
/// only an unusable start date is.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScheduleError {
    /// The start date string did not parse as a calendar date.
    InvalidDate(String),
    /// An offset pushed the date outside chrono's representable range.
    StartOutOfRange,
}

impl Display for ScheduleError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidDate(input) => {
                write!(f, "invalid start date `{input}`; expected YYYY-MM-DD")
            }
            Self::StartOutOfRange => {
                write!(f, "start date is outside the supported calendar range")
            }
        }
    }
}

impl Error for ScheduleError {}

/// The five canonical revision intervals, in schedule order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevisionInterval {
    OneWeek,
    OneMonth,
    ThreeMonths,
    SixMonths,
    OneYear,
}

/// Offset applied to the start date for one interval.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Offset {
    Days(u64),
    CalendarMonths(u32),
}

impl RevisionInterval {
    /// Canonical schedule order. Generation, display and persistence all
    /// follow this order.
    pub const ALL: [RevisionInterval; 5] = [
        RevisionInterval::OneWeek,
        RevisionInterval::OneMonth,
        RevisionInterval::ThreeMonths,
        RevisionInterval::SixMonths,
        RevisionInterval::OneYear,
    ];

    /// Human-facing label, also used as the persisted label string.
    pub fn label(self) -> &'static str {
        match self {
            Self::OneWeek => "1 Week",
            Self::OneMonth => "1 Month",
            Self::ThreeMonths => "3 Months",
            Self::SixMonths => "6 Months",
            Self::OneYear => "1 Year",
        }
    }

    /// Parses a persisted label back into its interval.
    pub fn from_label(value: &str) -> Option<Self> {
        match value {
            "1 Week" => Some(Self::OneWeek),
            "1 Month" => Some(Self::OneMonth),
            "3 Months" => Some(Self::ThreeMonths),
            "6 Months" => Some(Self::SixMonths),
            "1 Year" => Some(Self::OneYear),
            _ => None,
        }
    }

    /// Offset from the start date for this interval.
    pub fn offset(self) -> Offset {
        match self {
            Self::OneWeek => Offset::Days(7),
            Self::OneMonth => Offset::CalendarMonths(1),
            Self::ThreeMonths => Offset::CalendarMonths(3),
            Self::SixMonths => Offset::CalendarMonths(6),
            Self::OneYear => Offset::CalendarMonths(12),
        }
    }

    /// Catch-up ladder slot used when this interval's computed date has
    /// already passed: months added to `today` instead.
    ///
    /// `OneWeek` has no slot; an overdue one-week checkpoint is moot and
    /// gets suppressed rather than re-anchored.
    pub fn catch_up_months(self) -> Option<u32> {
        match self {
            Self::OneWeek => None,
            Self::OneMonth => Some(0),
            Self::ThreeMonths => Some(2),
            Self::SixMonths => Some(5),
            Self::OneYear => Some(11),
        }
    }
}

/// One labeled target date produced by the generator, before being
/// attached to a topic.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Checkpoint {
    pub interval: RevisionInterval,
    pub date: NaiveDate,
}

impl Checkpoint {
    pub fn label(&self) -> &'static str {
        self.interval.label()
    }

    /// ISO-8601 calendar date string (`YYYY-MM-DD`).
    pub fn date_string(&self) -> String {
        self.date.format(START_DATE_FORMAT).to_string()
    }
}

/// Generates the revision checkpoint schedule for a start date string.
///
/// # Contract
/// - `start_date` must be a `YYYY-MM-DD` calendar date; anything else
///   fails with [`ScheduleError::InvalidDate`] and no partial result.
/// - `today` is the comparison anchor; pass the current calendar date
///   in production and a fixed date in tests.
///
/// See [`checkpoints_from`] for the schedule semantics.
pub fn generate_schedule(start_date: &str, today: NaiveDate) -> ScheduleResult<Vec<Checkpoint>> {
    let start = parse_start_date(start_date)?;
    checkpoints_from(start, today)
}

/// Parses a `YYYY-MM-DD` start date.
pub fn parse_start_date(value: &str) -> ScheduleResult<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), START_DATE_FORMAT)
        .map_err(|_| ScheduleError::InvalidDate(value.to_string()))
}

/// Computes checkpoints for an already-parsed start date.
///
/// For each interval in canonical order the candidate date is
/// `start + offset`. A candidate that has already passed is re-anchored
/// onto the catch-up ladder: `today` plus the interval's
/// [`catch_up_months`](RevisionInterval::catch_up_months) slot
/// (today, +2, +5, +11 months). The one-week checkpoint has no ladder
/// slot; when its date has passed it is dropped from the output.
///
/// The overdue check is made per candidate, so a past candidate is
/// re-anchored even in the (normally impossible) case of a future start
/// date producing one.
pub fn checkpoints_from(start: NaiveDate, today: NaiveDate) -> ScheduleResult<Vec<Checkpoint>> {
    let mut checkpoints = Vec::with_capacity(RevisionInterval::ALL.len());

    for interval in RevisionInterval::ALL {
        let computed = apply_offset(start, interval.offset())?;

        let date = if computed < today {
            match interval.catch_up_months() {
                Some(months) => add_calendar_months(today, months)?,
                // Still overdue after re-anchoring had no slot: moot.
                None => continue,
            }
        } else {
            computed
        };

        checkpoints.push(Checkpoint { interval, date });
    }

    Ok(checkpoints)
}

fn apply_offset(start: NaiveDate, offset: Offset) -> ScheduleResult<NaiveDate> {
    match offset {
        Offset::Days(days) => start
            .checked_add_days(Days::new(days))
            .ok_or(ScheduleError::StartOutOfRange),
        Offset::CalendarMonths(months) => add_calendar_months(start, months),
    }
}

/// Rollover-safe month addition.
///
/// Delegates to chrono, which clamps the day-of-month to the length of
/// the target month instead of overflowing into the following month:
/// 2025-01-31 + 1 month = 2025-02-28.
fn add_calendar_months(date: NaiveDate, months: u32) -> ScheduleResult<NaiveDate> {
    date.checked_add_months(Months::new(months))
        .ok_or(ScheduleError::StartOutOfRange)
}

#[cfg(test)]
mod tests {
    use super::{add_calendar_months, parse_start_date, RevisionInterval, ScheduleError};
    use chrono::NaiveDate;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn month_addition_clamps_to_end_of_short_month() {
        assert_eq!(
            add_calendar_months(date(2025, 1, 31), 1).unwrap(),
            date(2025, 2, 28)
        );
        assert_eq!(
            add_calendar_months(date(2024, 1, 31), 1).unwrap(),
            date(2024, 2, 29)
        );
        assert_eq!(
            add_calendar_months(date(2025, 3, 31), 6).unwrap(),
            date(2025, 9, 30)
        );
    }

    #[test]
    fn month_addition_keeps_day_when_it_fits() {
        assert_eq!(
            add_calendar_months(date(2025, 4, 15), 3).unwrap(),
            date(2025, 7, 15)
        );
    }

    #[test]
    fn labels_round_trip_through_from_label() {
        for interval in RevisionInterval::ALL {
            assert_eq!(RevisionInterval::from_label(interval.label()), Some(interval));
        }
        assert_eq!(RevisionInterval::from_label("2 Weeks"), None);
    }

    #[test]
    fn parse_start_date_trims_and_rejects_garbage() {
        assert_eq!(parse_start_date(" 2026-08-29 ").unwrap(), date(2026, 8, 29));

        let err = parse_start_date("yesterday").unwrap_err();
        assert!(matches!(err, ScheduleError::InvalidDate(input) if input == "yesterday"));

        assert!(parse_start_date("2026-02-30").is_err());
    }
}
