// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Custom assertion helpers for integration tests.

use taqwim_core::{HijriDate, HijriMonth, Response};

/// Asserts that a Hijri date has the expected components.
///
/// # Panics
///
/// Panics if any of year, month or day differs.
pub fn assert_hijri_eq(actual: &HijriDate, (year, month, day): (i32, u8, u8)) {
    assert_eq!(
        (actual.year(), actual.month(), actual.day()),
        (year, month, day),
        "Hijri date mismatch: {actual}"
    );
}

/// Asserts the range invariants of a converted Hijri date.
///
/// # Panics
///
/// Panics if a component is out of range or the month name does not match
/// the month number.
pub fn assert_hijri_in_range(hijri: &HijriDate) {
    assert!(hijri.year() >= 1, "year out of range: {hijri}");
    assert!((1..=12).contains(&hijri.month()), "month out of range: {hijri}");
    assert!((1..=30).contains(&hijri.day()), "day out of range: {hijri}");

    let expected = HijriMonth::ALL[usize::from(hijri.month()) - 1];
    assert_eq!(hijri.month_name(), expected.name(), "month name mismatch");
}

/// Asserts that a response failed with `status` and carries an error message.
///
/// # Panics
///
/// Panics if the status differs or the body has no `error` string.
pub fn assert_error(response: &Response, status: u16) {
    assert_eq!(response.status, status, "unexpected status: {}", response.body);
    assert!(
        response.body["error"].as_str().is_some_and(|s| !s.is_empty()),
        "missing error message: {}",
        response.body
    );
}

/// Asserts that a sequence of countdowns never decreases.
///
/// # Panics
///
/// Panics at the first pair out of order.
pub fn assert_sorted(days: &[u64]) {
    for pair in days.windows(2) {
        assert!(pair[0] <= pair[1], "not sorted ascending: {days:?}");
    }
}
