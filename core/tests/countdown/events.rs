// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use taqwim_core::{
    EventDraft, MODEL_YEAR_DAYS, MemoryStore, Store, canonical_events, days_until_event,
    upcoming_events,
};

use crate::common::{assert_sorted, hijri_on, test_event_draft};

#[test]
fn counts_forward_within_the_year() {
    assert_eq!(days_until_event(10, 1, &hijri_on(9, 15)), 16);
}

#[test]
fn wraps_past_the_end_of_the_year() {
    let days = days_until_event(1, 1, &hijri_on(12, 20));
    assert_eq!(days, 11);
}

#[test]
fn wraps_from_the_middle_of_the_year() {
    // 10 Muharram from 12 Rabi' al-Awwal: 18 days left in month 3, 8 whole
    // months, then 10 days into the next year.
    assert_eq!(days_until_event(1, 10, &hijri_on(3, 12)), 18 + 8 * 30 + 10);
    // 12 Rabi' al-Awwal from 15 Ramadan
    assert_eq!(days_until_event(3, 12, &hijri_on(9, 15)), 177);
}

#[test]
fn never_reaches_a_full_year() {
    for month in 1..=12 {
        for day in 1..=30 {
            let current = hijri_on(month, day);
            for (event_month, event_day) in [(1, 1), (9, 27), (12, 30)] {
                let days = days_until_event(event_month, event_day, &current);
                assert!(days < MODEL_YEAR_DAYS);
                let same = (event_month, event_day) == (month, day);
                assert_eq!(days == 0, same, "{month}/{day} to {event_month}/{event_day}");
            }
        }
    }
}

#[test]
fn orders_canonical_events_from_mid_ramadan() {
    // Arrange
    let store = MemoryStore::new();
    let events = store.events().unwrap();

    // Act
    let countdowns = upcoming_events(events, &hijri_on(9, 15));

    // Assert
    let names: Vec<_> = countdowns.iter().map(|c| c.event.name.as_str()).collect();
    assert_eq!(
        names,
        [
            "Laylat al-Qadr",
            "Eid al-Fitr",
            "Day of Arafah",
            "Eid al-Adha",
            "Islamic New Year",
            "Day of Ashura",
            "Mawlid an-Nabi",
            "Isra and Mi'raj",
        ]
    );
    let days: Vec<_> = countdowns.iter().map(|c| u64::from(c.days_until)).collect();
    assert_eq!(days, [12, 16, 84, 85, 106, 115, 177, 312]);
}

#[test]
fn keeps_sorting_after_events_are_added() {
    // Arrange
    let store = MemoryStore::new();
    store.create_event(test_event_draft("Today", 5, 6)).unwrap();
    store.create_event(test_event_draft("Tomorrow", 5, 7)).unwrap();

    // Act
    let countdowns = upcoming_events(store.events().unwrap(), &hijri_on(5, 6));

    // Assert
    assert_eq!(countdowns[0].event.name, "Today");
    assert_eq!(countdowns[0].days_until, 0);
    assert_eq!(countdowns[1].event.name, "Tomorrow");
    let days: Vec<_> = countdowns.iter().map(|c| u64::from(c.days_until)).collect();
    assert_sorted(&days);
}

#[test]
fn treats_one_off_events_like_recurring_ones() {
    let once = EventDraft {
        is_recurring: false,
        ..EventDraft::new("Once", 2, 1)
    };
    let recurring = EventDraft::new("Yearly", 2, 1);
    let store = MemoryStore::with_events([once, recurring]);

    let countdowns = upcoming_events(store.events().unwrap(), &hijri_on(1, 1));
    assert_eq!(countdowns[0].days_until, countdowns[1].days_until);
    assert_eq!(canonical_events().len(), 8);
}
