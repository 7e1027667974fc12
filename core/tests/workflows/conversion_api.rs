// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use jiff::civil::date;
use serde_json::json;
use taqwim_core::Method;

use crate::common::{assert_error, request_body, test_service};

#[test]
fn reports_todays_hijri_date() {
    let service = test_service(date(2025, 3, 1).at(6, 0, 0, 0));

    let response = service.handle(Method::Get, "/api/hijri-date", None);

    assert_eq!(response.status, 200);
    assert_eq!(
        response.body,
        json!({
            "year": 1446,
            "month": 9,
            "day": 1,
            "monthName": "Ramadan",
            "formatted": "1 Ramadan 1446 AH",
        })
    );
}

#[test]
fn converts_gregorian_to_hijri() {
    let service = test_service(date(2025, 3, 1).at(6, 0, 0, 0));
    let body = request_body(2024, 7, 8);

    let response = service.handle(Method::Post, "/api/convert/gregorian-to-hijri", Some(&body));

    assert_eq!(response.status, 200);
    assert_eq!(response.body["formatted"], "1 Muharram 1446 AH");
}

#[test]
fn converts_hijri_to_gregorian() {
    let service = test_service(date(2025, 3, 1).at(6, 0, 0, 0));
    let body = request_body(1446, 9, 1);

    let response = service.handle(Method::Post, "/api/convert/hijri-to-gregorian", Some(&body));

    assert_eq!(response.status, 200);
    assert_eq!(
        response.body,
        json!({ "year": 2025, "month": 3, "day": 1, "formatted": "March 1, 2025" })
    );
}

#[test]
fn rejects_bodies_with_missing_fields() {
    let service = test_service(date(2025, 3, 1).at(6, 0, 0, 0));
    for path in [
        "/api/convert/gregorian-to-hijri",
        "/api/convert/hijri-to-gregorian",
    ] {
        let body = json!({ "year": 2025, "month": 3 });
        let response = service.handle(Method::Post, path, Some(&body));
        assert_error(&response, 400);
        assert_eq!(response.body["error"], "day is required");

        let response = service.handle(Method::Post, path, None);
        assert_error(&response, 400);
    }
}

#[test]
fn rejects_impossible_dates() {
    let service = test_service(date(2025, 3, 1).at(6, 0, 0, 0));

    let body = request_body(2025, 2, 30);
    let response = service.handle(Method::Post, "/api/convert/gregorian-to-hijri", Some(&body));
    assert_error(&response, 400);
    assert_eq!(response.body["error"], "2025-02-30 is not a valid Gregorian date");

    let body = request_body(1446, 13, 1);
    let response = service.handle(Method::Post, "/api/convert/hijri-to-gregorian", Some(&body));
    assert_error(&response, 400);
}

#[test]
fn rejects_hijri_dates_past_the_gregorian_range() {
    let service = test_service(date(2025, 3, 1).at(6, 0, 0, 0));
    let path = "/api/convert/hijri-to-gregorian";

    let response = service.handle(Method::Post, path, Some(&request_body(9666, 4, 2)));
    assert_eq!(response.status, 200);
    assert_eq!(response.body["formatted"], "December 31, 9999");

    for body in [request_body(9666, 4, 3), request_body(9700, 1, 1)] {
        let response = service.handle(Method::Post, path, Some(&body));
        assert_error(&response, 400);
        assert_eq!(
            response.body["error"],
            "year must be a date no later than 2 Rabi' al-Thani 9666"
        );
    }
}
