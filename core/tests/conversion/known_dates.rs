// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use jiff::civil::date;
use taqwim_core::{HijriDate, days_in_month, gregorian_to_hijri, hijri_to_gregorian, is_leap_year};

use crate::common::assert_hijri_eq;

#[test]
fn converts_reference_dates_both_ways() {
    let cases = [
        (date(2024, 1, 1), (1445, 6, 19)),
        (date(2024, 7, 7), (1445, 12, 30)),
        (date(2024, 7, 8), (1446, 1, 1)),
        (date(2025, 3, 1), (1446, 9, 1)),
        (date(2025, 3, 30), (1446, 9, 30)),
        (date(2025, 6, 6), (1446, 12, 9)),
        (date(2025, 6, 27), (1447, 1, 1)),
        (date(2026, 10, 18), (1448, 5, 6)),
    ];

    for (gregorian, hijri) in cases {
        assert_hijri_eq(&gregorian_to_hijri(gregorian), hijri);
        assert_eq!(hijri_to_gregorian(hijri.0, hijri.1, hijri.2), gregorian);
    }
}

#[test]
fn names_months_in_converted_dates() {
    let hijri = gregorian_to_hijri(date(2025, 3, 30));
    assert_eq!(hijri.month_name(), "Ramadan");
    assert_eq!(hijri.formatted(), "30 Ramadan 1446 AH");

    let hijri = gregorian_to_hijri(date(2025, 6, 6));
    assert_eq!(hijri.formatted(), "9 Dhu al-Hijjah 1446 AH");
}

#[test]
fn starts_at_the_hijri_epoch() {
    assert_eq!(gregorian_to_hijri(date(622, 7, 19)), HijriDate::EPOCH);
    assert_eq!(HijriDate::EPOCH.to_gregorian(), date(622, 7, 19));
    assert_eq!(gregorian_to_hijri(date(1, 1, 1)), HijriDate::EPOCH);
}

#[test]
fn has_leap_years_of_355_days() {
    for year in [1442, 1445, 1447] {
        assert!(is_leap_year(year), "{year}");
        assert_eq!(days_in_month(year, 12), 30);
    }
    assert!(!is_leap_year(1446));

    let start = hijri_to_gregorian(1445, 1, 1);
    let end = hijri_to_gregorian(1446, 1, 1);
    assert_eq!(start.until(end).unwrap().get_days(), 355);
}

#[test]
fn sums_month_lengths_to_the_year_length() {
    for year in 1440..=1450 {
        let total: u32 = (1..=12).map(|m| u32::from(days_in_month(year, m))).sum();
        let expected = if is_leap_year(year) { 355 } else { 354 };
        assert_eq!(total, expected, "year {year}");
    }
}
