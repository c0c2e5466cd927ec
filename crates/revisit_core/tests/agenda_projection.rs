use chrono::NaiveDate;
use revisit_core::{project_agenda, Agenda, RevisionEntry};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn entry(topic: &str, label: &str, d: NaiveDate) -> RevisionEntry {
    RevisionEntry::new(topic, label, d)
}

#[test]
fn empty_entry_list_is_a_state_not_an_error() {
    let agenda = project_agenda(&[], date(2026, 8, 29));
    assert_eq!(agenda, Agenda::NoEntries);
}

#[test]
fn past_due_entries_surface_as_due_today() {
    let now = date(2026, 8, 29);
    let entries = vec![
        entry("Traits", "1 Month", date(2026, 2, 10)),
        entry("Closures", "1 Week", date(2026, 9, 3)),
    ];

    let items = match project_agenda(&entries, now) {
        Agenda::Upcoming(items) => items,
        other => panic!("expected upcoming agenda, got {other:?}"),
    };

    assert_eq!(items[0].entry.topic, "Traits");
    assert_eq!(items[0].display_date, now);
    // The stored date is untouched; only the display date floors.
    assert_eq!(items[0].entry.date, date(2026, 2, 10));
    assert_eq!(items[1].display_date, date(2026, 9, 3));
}

#[test]
fn agenda_sorts_ascending_by_display_date() {
    let now = date(2026, 8, 29);
    let entries = vec![
        entry("C", "1 Year", date(2027, 8, 1)),
        entry("A", "1 Week", date(2026, 9, 5)),
        entry("B", "3 Months", date(2026, 11, 1)),
    ];

    let items = match project_agenda(&entries, now) {
        Agenda::Upcoming(items) => items,
        other => panic!("expected upcoming agenda, got {other:?}"),
    };

    let topics: Vec<&str> = items.iter().map(|item| item.entry.topic.as_str()).collect();
    assert_eq!(topics, ["A", "B", "C"]);
}

#[test]
fn equal_display_dates_keep_input_order() {
    let now = date(2026, 8, 29);
    // Both floor to `now`, and two more share an exact future date.
    let entries = vec![
        entry("first overdue", "1 Month", date(2026, 1, 1)),
        entry("second overdue", "3 Months", date(2026, 3, 1)),
        entry("first future", "6 Months", date(2026, 10, 15)),
        entry("second future", "6 Months", date(2026, 10, 15)),
    ];

    let items = match project_agenda(&entries, now) {
        Agenda::Upcoming(items) => items,
        other => panic!("expected upcoming agenda, got {other:?}"),
    };

    let topics: Vec<&str> = items.iter().map(|item| item.entry.topic.as_str()).collect();
    assert_eq!(
        topics,
        ["first overdue", "second overdue", "first future", "second future"]
    );
}

#[test]
fn projection_never_drops_or_duplicates_entries() {
    let now = date(2026, 8, 29);
    let entries = vec![
        entry("a", "1 Week", date(2020, 1, 1)),
        entry("b", "1 Month", date(2026, 8, 29)),
        entry("c", "1 Year", date(2030, 12, 31)),
    ];

    let items = match project_agenda(&entries, now) {
        Agenda::Upcoming(items) => items,
        other => panic!("expected upcoming agenda, got {other:?}"),
    };

    assert_eq!(items.len(), entries.len());
    for source in &entries {
        assert_eq!(
            items
                .iter()
                .filter(|item| item.entry.uuid == source.uuid)
                .count(),
            1
        );
    }
}
