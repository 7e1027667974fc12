// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use jiff::civil::{date, time};
use serde_json::json;
use taqwim_core::{FixedClock, FixedSchedule, MemoryStore, Method, PrayerTimes, Service, Store};

use crate::common::{assert_error, test_service};

#[test]
fn reports_prayer_times_with_the_next_prayer() {
    let service = test_service(date(2025, 3, 1).at(6, 0, 0, 0));

    let response = service.handle(Method::Get, "/api/prayer-times", None);

    assert_eq!(response.status, 200);
    assert_eq!(response.body["city"], "Makkah");
    assert_eq!(response.body["date"], "2025-03-01");
    assert_eq!(response.body["times"]["dhuhr"], "12:30");
    assert_eq!(response.body["nextPrayer"], "Dhuhr in 6h 30m");
}

#[test]
fn wraps_to_fajr_after_isha() {
    let service = test_service(date(2025, 3, 1).at(20, 0, 0, 0));

    let schedule = service.prayer_times().unwrap();

    assert_eq!(schedule.next_prayer.to_string(), "Fajr in 9h 15m");
}

#[test]
fn answers_not_found_without_settings() {
    let service = Service::new(MemoryStore::new(), FixedClock(date(2025, 3, 1).at(6, 0, 0, 0)));

    let response = service.handle(Method::Get, "/api/prayer-times", None);

    assert_error(&response, 404);
    assert_eq!(response.body["error"], "Prayer time settings not found");
}

#[test]
fn updates_settings_and_uses_them() {
    // Arrange
    let service = Service::new(MemoryStore::new(), FixedClock(date(2025, 3, 1).at(6, 0, 0, 0)));
    let body = json!({ "city": "Istanbul", "calculationMethod": "MWL" });

    // Act
    let response = service.handle(Method::Post, "/api/prayer-settings", Some(&body));

    // Assert
    assert_eq!(response.status, 200);
    assert_eq!(
        response.body,
        json!({
            "city": "Istanbul",
            "latitude": 41.0082,
            "longitude": 28.9784,
            "timezone": "Europe/Istanbul",
            "calculationMethod": "MWL",
        })
    );

    let response = service.handle(Method::Get, "/api/prayer-times", None);
    assert_eq!(response.body["city"], "Istanbul");
}

#[test]
fn rejects_invalid_settings_without_changing_them() {
    let service = test_service(date(2025, 3, 1).at(6, 0, 0, 0));
    let before = service.store().location().unwrap();

    for body in [
        json!({ "latitude": 120 }),
        json!({ "calculationMethod": "Sundial" }),
        json!({ "city": "" }),
        json!("Cairo"),
    ] {
        let response = service.handle(Method::Post, "/api/prayer-settings", Some(&body));
        assert_error(&response, 400);
    }

    assert_eq!(service.store().location().unwrap(), before);
}

#[test]
fn uses_a_configured_schedule() {
    let times = PrayerTimes {
        fajr: time(4, 30, 0, 0),
        ..PrayerTimes::default()
    };
    let service = Service::new(
        MemoryStore::new().with_location(Default::default()),
        FixedClock(date(2025, 3, 1).at(4, 0, 0, 0)),
    )
    .with_calculator(FixedSchedule::new(times));

    let schedule = service.prayer_times().unwrap();

    assert_eq!(schedule.times.fajr, time(4, 30, 0, 0));
    assert_eq!(schedule.next_prayer.to_string(), "Fajr in 30m");
}
