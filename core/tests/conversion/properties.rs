// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use jiff::{
    ToSpan,
    civil::{Date, date},
};
use taqwim_core::{days_in_month, gregorian_to_hijri, hijri_to_gregorian};

use crate::common::assert_hijri_in_range;

fn days(from: Date, to: Date) -> impl Iterator<Item = Date> {
    from.series(1.day()).take_while(move |d| *d <= to)
}

#[test]
fn stays_in_range_and_never_decreases() {
    let mut previous = gregorian_to_hijri(date(1899, 12, 31));
    for day in days(date(1900, 1, 1), date(2100, 12, 31)) {
        let hijri = gregorian_to_hijri(day);
        assert_hijri_in_range(&hijri);
        assert!(previous < hijri, "{day}: {previous} then {hijri}");
        previous = hijri;
    }
}

#[test]
fn round_trips_exactly() {
    for day in days(date(1900, 1, 1), date(2100, 12, 31)) {
        let hijri = gregorian_to_hijri(day);
        let back = hijri_to_gregorian(hijri.year(), hijri.month(), hijri.day());
        assert_eq!(back, day, "round trip through {hijri}");
    }
}

#[test]
fn maps_consecutive_hijri_days_to_consecutive_gregorian_days() {
    let mut previous = hijri_to_gregorian(1399, 12, days_in_month(1399, 12));
    for year in 1400..=1500 {
        for month in 1..=12 {
            for day in 1..=days_in_month(year, month) {
                let gregorian = hijri_to_gregorian(year, month, day);
                assert_eq!(previous.tomorrow().unwrap(), gregorian, "{year}/{month}/{day}");
                previous = gregorian;
            }
        }
    }
}

#[test]
fn is_total_over_the_supported_range() {
    for day in [Date::MIN, date(622, 7, 18), Date::MAX] {
        assert_hijri_in_range(&gregorian_to_hijri(day));
    }

    assert_eq!(hijri_to_gregorian(i32::MAX, 12, 30), Date::MAX);
    assert_eq!(hijri_to_gregorian(i32::MIN, 0, 0), date(622, 7, 19));
}
