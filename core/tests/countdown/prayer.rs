// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use jiff::civil::{Time, date, time};
use taqwim_core::{
    City, FixedSchedule, LocationSetting, Prayer, PrayerTimes, compute_prayer_times, next_prayer,
    parse_time,
};

fn placeholder() -> PrayerTimes {
    compute_prayer_times(
        &FixedSchedule::default(),
        &LocationSetting::default(),
        date(2025, 3, 1),
    )
}

#[test]
fn computes_the_placeholder_schedule() {
    let times = placeholder();
    let expected = ["05:15", "06:45", "12:30", "15:45", "18:15", "19:45"];
    for (prayer, text) in Prayer::ALL.into_iter().zip(expected) {
        assert_eq!(times.get(prayer), parse_time(text).unwrap(), "{prayer}");
    }
}

#[test]
fn ignores_location_and_date_in_a_fixed_schedule() {
    let cairo = compute_prayer_times(
        &FixedSchedule::default(),
        &City::Cairo.into(),
        date(2030, 12, 1),
    );
    assert_eq!(cairo, placeholder());
}

#[test]
fn counts_down_to_the_next_prayer() {
    let times = placeholder();
    assert_eq!(next_prayer(&times, time(6, 0, 0, 0)).to_string(), "Dhuhr in 6h 30m");
    assert_eq!(next_prayer(&times, time(20, 0, 0, 0)).to_string(), "Fajr in 9h 15m");
    assert_eq!(next_prayer(&times, time(15, 0, 0, 0)).to_string(), "Asr in 45m");
}

#[test]
fn always_counts_down_between_one_minute_and_one_day() {
    let times = placeholder();
    let mut now = Time::MIN;
    loop {
        let next = next_prayer(&times, now);
        assert!((1..=1440).contains(&next.minutes_until), "{now}");
        assert_ne!(next.prayer, Prayer::Sunrise);
        match now.checked_add(jiff::Span::new().minutes(1)) {
            Ok(later) => now = later,
            Err(_) => break,
        }
    }
}

#[test]
fn reaches_each_prayer_one_minute_before_it() {
    let times = placeholder();
    for prayer in Prayer::DAILY {
        let before = times.get(prayer).checked_sub(jiff::Span::new().minutes(1)).unwrap();
        let next = next_prayer(&times, before);
        assert_eq!((next.prayer, next.minutes_until), (prayer, 1));
    }
}
