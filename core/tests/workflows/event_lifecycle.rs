// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! End-to-end event lifecycle workflow tests.

use jiff::civil::date;
use serde_json::json;
use taqwim_core::{Method, Store};

use crate::common::{assert_error, assert_sorted, test_service};

fn days_until(body: &serde_json::Value) -> Vec<u64> {
    body.as_array()
        .unwrap()
        .iter()
        .map(|e| e["daysUntil"].as_u64().unwrap())
        .collect()
}

#[test]
fn lists_events_nearest_first() {
    let service = test_service(date(2025, 3, 15).at(12, 0, 0, 0));

    let response = service.handle(Method::Get, "/api/islamic-events", None);

    assert_eq!(response.status, 200);
    let days = days_until(&response.body);
    assert_eq!(days.len(), 8);
    assert_sorted(&days);
    assert_eq!(response.body[0]["name"], "Laylat al-Qadr");
    assert_eq!(response.body[0]["hijriMonth"], 9);
    assert!(response.body[0]["id"].is_u64());
}

#[test]
fn event_lifecycle_create_and_update_flow() {
    // Arrange
    let service = test_service(date(2025, 3, 1).at(6, 0, 0, 0));
    let draft = json!({
        "name": "Start of Ramadan",
        "hijriMonth": 9,
        "hijriDay": 1,
        "description": "First fast",
    });

    // Act - create
    let response = service.handle(Method::Post, "/api/islamic-events", Some(&draft));

    // Assert - created with the next id and listed first
    assert_eq!(response.status, 200);
    assert_eq!(response.body["id"], 9);
    assert_eq!(response.body["isRecurring"], true);
    let listed = service.handle(Method::Get, "/api/islamic-events", None);
    assert_eq!(listed.body[0]["name"], "Start of Ramadan");
    assert_eq!(listed.body[0]["daysUntil"], 0);

    // Act - update
    let patch = json!({ "hijriDay": 2, "description": null });
    let response = service.handle(Method::Patch, "/api/islamic-events/9", Some(&patch));

    // Assert - only the given fields changed
    assert_eq!(response.status, 200);
    assert_eq!(response.body["name"], "Start of Ramadan");
    assert_eq!(response.body["hijriDay"], 2);
    assert_eq!(response.body["description"], serde_json::Value::Null);
    let stored = service.store().event(9).unwrap().unwrap();
    assert_eq!(stored.hijri_day, 2);
    assert_eq!(stored.description, None);
}

#[test]
fn rejects_invalid_events() {
    let service = test_service(date(2025, 3, 1).at(6, 0, 0, 0));

    for body in [
        json!({ "hijriMonth": 9, "hijriDay": 1 }),
        json!({ "name": "Late", "hijriMonth": 13, "hijriDay": 1 }),
        json!({ "name": "Late", "hijriMonth": 12, "hijriDay": 31 }),
        json!({ "name": "Late", "hijriMonth": "12", "hijriDay": 1 }),
    ] {
        let response = service.handle(Method::Post, "/api/islamic-events", Some(&body));
        assert_error(&response, 400);
    }

    assert_eq!(service.store().events().unwrap().len(), 8);
}

#[test]
fn answers_not_found_for_unknown_events() {
    let service = test_service(date(2025, 3, 1).at(6, 0, 0, 0));
    let patch = json!({ "name": "Renamed" });

    let response = service.handle(Method::Patch, "/api/islamic-events/42", Some(&patch));

    assert_error(&response, 404);
}
