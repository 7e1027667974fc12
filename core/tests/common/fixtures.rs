// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Test data factories for integration tests.

use jiff::civil::DateTime;
use serde_json::{Value, json};
use taqwim_core::{EventDraft, FixedClock, HijriDate, LocationSetting, MemoryStore, Service};

/// Service over a fresh memory store and a stopped clock.
pub type TestService = Service<MemoryStore, FixedClock>;

/// Creates a service stopped at `now`, holding the canonical events and the
/// default location.
///
/// # Example
///
/// ```ignore
/// let service = test_service(date(2025, 3, 1).at(6, 0, 0, 0));
/// ```
#[must_use]
pub fn test_service(now: DateTime) -> TestService {
    let store = MemoryStore::new().with_location(LocationSetting::default());
    Service::new(store, FixedClock(now))
}

/// Creates a recurring event draft.
#[must_use]
pub fn test_event_draft(name: &str, hijri_month: u8, hijri_day: u8) -> EventDraft {
    EventDraft {
        description: Some(format!("{name} test event")),
        ..EventDraft::new(name, hijri_month, hijri_day)
    }
}

/// A Hijri date in 1446 AH.
///
/// # Panics
///
/// Panics if the month or day is out of range.
#[must_use]
pub fn hijri_on(month: u8, day: u8) -> HijriDate {
    HijriDate::new(1446, month, day).unwrap()
}

/// A `{year, month, day}` request body.
#[must_use]
pub fn request_body(year: i64, month: i64, day: i64) -> Value {
    json!({ "year": year, "month": month, "day": day })
}
