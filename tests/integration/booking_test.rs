//! Booking creation, pricing, and concurrency tests.
//!
//! Require `COURTBOOK_TEST_DATABASE_URL`; each test skips itself otherwise.

mod helpers;

use helpers::{TestApp, unique};
use http::StatusCode;
use serde_json::json;

// 2025-01-06 is a Monday, 2025-01-04 a Saturday.
const MONDAY_10: &str = "2025-01-06T10:00:00";
const MONDAY_12: &str = "2025-01-06T12:00:00";

#[tokio::test]
async fn test_pricing_rules_applied_at_booking() {
    let Some(app) = TestApp::with_database().await else {
        return;
    };
    app.deactivate_all_rules().await;

    // No active rules: rate x hours.
    let court = app.create_court(20.0).await;
    let response = app
        .book(
            &unique("alice"),
            MONDAY_10,
            MONDAY_12,
            json!([{ "resource_type": "court", "resource_id": court }]),
        )
        .await;
    assert_eq!(response.status, StatusCode::CREATED);
    assert_eq!(response.body["message"], "Booking successful");
    assert_eq!(response.total_price(), 40.0);

    // Weekend multiplier.
    let weekend = app
        .request(
            "POST",
            "/api/admin/rules",
            Some(json!({
                "name": unique("Weekend"),
                "type": "multiplier",
                "value": 1.2,
                "conditions": { "days_of_week": [0, 6] },
            })),
        )
        .await;
    assert_eq!(weekend.status, StatusCode::CREATED);
    let weekend_id = weekend.body["data"]["id"].as_i64().unwrap();

    let court = app.create_court(20.0).await;
    let response = app
        .book(
            &unique("alice"),
            "2025-01-04T10:00:00",
            "2025-01-04T12:00:00",
            json!([{ "resource_type": "court", "resource_id": court }]),
        )
        .await;
    assert_eq!(response.status, StatusCode::CREATED);
    assert_eq!(response.total_price(), 48.0);

    // Multipliers compound and do not leak into weekday prices.
    let saturday = app
        .request(
            "POST",
            "/api/admin/rules",
            Some(json!({
                "name": unique("Saturday"),
                "type": "multiplier",
                "value": 1.5,
                "conditions": "{\"days_of_week\":[6]}",
            })),
        )
        .await;
    assert_eq!(saturday.status, StatusCode::CREATED);
    let saturday_id = saturday.body["data"]["id"].as_i64().unwrap();

    let court = app.create_court(50.0).await;
    let items = json!([{ "resource_type": "court", "resource_id": court }]);
    let quote = app
        .request(
            "POST",
            "/api/quote",
            Some(json!({
                "start_time": "2025-01-04T10:00:00",
                "end_time": "2025-01-04T12:00:00",
                "items": items,
            })),
        )
        .await;
    assert_eq!(quote.status, StatusCode::OK);
    assert_eq!(quote.body["base_price"].as_f64(), Some(100.0));
    assert_eq!(quote.total_price(), 180.0);

    let weekday = app
        .request(
            "POST",
            "/api/quote",
            Some(json!({ "start_time": MONDAY_10, "end_time": MONDAY_12, "items": items })),
        )
        .await;
    assert_eq!(weekday.total_price(), 100.0);

    for id in [weekend_id, saturday_id] {
        let response = app
            .request(
                "PATCH",
                &format!("/api/admin/rules/{id}"),
                Some(json!({ "is_active": false })),
            )
            .await;
        assert_eq!(response.status, StatusCode::OK);
    }
}

#[tokio::test]
async fn test_equipment_inventory_is_bounded() {
    let Some(app) = TestApp::with_database().await else {
        return;
    };
    let rackets = app.create_equipment(5, 5.0).await;

    let first = app
        .book(
            &unique("alice"),
            MONDAY_10,
            MONDAY_12,
            json!([{ "resource_type": "equipment", "resource_id": rackets, "quantity": 3 }]),
        )
        .await;
    assert_eq!(first.status, StatusCode::CREATED);
    assert_eq!(first.total_price(), 15.0);

    let too_many = app
        .book(
            &unique("bob"),
            "2025-01-06T10:30:00",
            "2025-01-06T11:30:00",
            json!([{ "resource_type": "equipment", "resource_id": rackets, "quantity": 3 }]),
        )
        .await;
    assert_eq!(too_many.status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(
        too_many.message(),
        format!("Insufficient inventory for equipment ID {rackets}")
    );

    let remainder = app
        .book(
            &unique("bob"),
            "2025-01-06T10:30:00",
            "2025-01-06T11:30:00",
            json!([{ "resource_type": "equipment", "resource_id": rackets, "quantity": 2 }]),
        )
        .await;
    assert_eq!(remainder.status, StatusCode::CREATED);
    assert_eq!(remainder.total_price(), 10.0);

    // Outside the window the full pool is available again.
    let later = app
        .book(
            &unique("carol"),
            MONDAY_12,
            "2025-01-06T13:00:00",
            json!([{ "resource_type": "equipment", "resource_id": rackets, "quantity": 5 }]),
        )
        .await;
    assert_eq!(later.status, StatusCode::CREATED);
}

#[tokio::test]
async fn test_duplicate_equipment_lines_are_summed() {
    let Some(app) = TestApp::with_database().await else {
        return;
    };
    let balls = app.create_equipment(3, 1.0).await;

    let response = app
        .book(
            &unique("alice"),
            MONDAY_10,
            MONDAY_12,
            json!([
                { "resource_type": "equipment", "resource_id": balls, "quantity": 2 },
                { "resource_type": "equipment", "resource_id": balls, "quantity": 2 },
            ]),
        )
        .await;

    assert_eq!(response.status, StatusCode::INTERNAL_SERVER_ERROR);
}

#[tokio::test]
async fn test_adjacent_windows_do_not_conflict() {
    let Some(app) = TestApp::with_database().await else {
        return;
    };
    let court = app.create_court(10.0).await;
    let items = json!([{ "resource_type": "court", "resource_id": court }]);

    let morning = app.book(&unique("alice"), MONDAY_10, MONDAY_12, items.clone()).await;
    let noon = app
        .book(&unique("bob"), MONDAY_12, "2025-01-06T14:00:00", items.clone())
        .await;
    let overlap = app
        .book(&unique("carol"), "2025-01-06T11:00:00", "2025-01-06T13:00:00", items)
        .await;

    assert_eq!(morning.status, StatusCode::CREATED);
    assert_eq!(noon.status, StatusCode::CREATED);
    assert_eq!(overlap.status, StatusCode::CONFLICT);
    assert_eq!(
        overlap.message(),
        "One or more selected resources are already booked for this time slot."
    );
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_court_bookings_one_wins() {
    let Some(app) = TestApp::with_database().await else {
        return;
    };
    let court = app.create_court(20.0).await;
    let body = json!({
        "user_name": unique("racer"),
        "start_time": MONDAY_10,
        "end_time": MONDAY_12,
        "items": [{ "resource_type": "court", "resource_id": court }],
    });

    let first = app.spawn_request("POST", "/api/bookings", body.clone());
    let second = app.spawn_request("POST", "/api/bookings", body);

    let mut statuses = vec![
        first.await.unwrap().status,
        second.await.unwrap().status,
    ];
    statuses.sort();

    assert_eq!(statuses, vec![StatusCode::CREATED, StatusCode::CONFLICT]);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_equipment_never_oversold() {
    let Some(app) = TestApp::with_database().await else {
        return;
    };
    let nets = app.create_equipment(3, 2.0).await;

    let handles: Vec<_> = (0..6)
        .map(|_| {
            app.spawn_request(
                "POST",
                "/api/bookings",
                json!({
                    "user_name": unique("racer"),
                    "start_time": MONDAY_10,
                    "end_time": MONDAY_12,
                    "items": [{ "resource_type": "equipment", "resource_id": nets, "quantity": 1 }],
                }),
            )
        })
        .collect();

    let mut created = 0;
    for handle in handles {
        if handle.await.unwrap().status == StatusCode::CREATED {
            created += 1;
        }
    }
    assert_eq!(created, 3);

    let (held,): (i64,) = sqlx::query_as(
        "SELECT COALESCE(SUM(quantity), 0)::BIGINT FROM booking_items \
         WHERE resource_type = 'equipment' AND resource_id = $1 AND status = 'confirmed'",
    )
    .bind(nets)
    .fetch_one(app.pool())
    .await
    .unwrap();
    assert_eq!(held, 3);
}

#[tokio::test]
async fn test_failed_booking_leaves_nothing_behind() {
    let Some(app) = TestApp::with_database().await else {
        return;
    };
    let taken = app.create_court(20.0).await;
    let free = app.create_court(20.0).await;

    let holder = app
        .book(
            &unique("alice"),
            MONDAY_10,
            MONDAY_12,
            json!([{ "resource_type": "court", "resource_id": taken }]),
        )
        .await;
    assert_eq!(holder.status, StatusCode::CREATED);

    // Second item conflicts, so the first must not stay reserved.
    let user = unique("bob");
    let rejected = app
        .book(
            &user,
            MONDAY_10,
            MONDAY_12,
            json!([
                { "resource_type": "court", "resource_id": free },
                { "resource_type": "court", "resource_id": taken },
            ]),
        )
        .await;
    assert_eq!(rejected.status, StatusCode::CONFLICT);

    // Unknown resource aborts before anything is written.
    let missing = app
        .book(
            &user,
            MONDAY_10,
            MONDAY_12,
            json!([
                { "resource_type": "court", "resource_id": free },
                { "resource_type": "coach", "resource_id": i64::MAX },
            ]),
        )
        .await;
    assert_eq!(missing.status, StatusCode::INTERNAL_SERVER_ERROR);

    let history = app
        .request("GET", &format!("/api/my-bookings?user_name={user}"), None)
        .await;
    assert_eq!(history.status, StatusCode::OK);
    assert_eq!(history.body, json!([]));

    let retry = app
        .book(
            &user,
            MONDAY_10,
            MONDAY_12,
            json!([{ "resource_type": "court", "resource_id": free }]),
        )
        .await;
    assert_eq!(retry.status, StatusCode::CREATED);
}

#[tokio::test]
async fn test_busy_slots_and_history() {
    let Some(app) = TestApp::with_database().await else {
        return;
    };
    let court = app.create_court(20.0).await;
    let coach = app.create_coach(30.0).await;
    let user = unique("alice");

    let response = app
        .book(
            &user,
            MONDAY_10,
            MONDAY_12,
            json!([
                { "resource_type": "court", "resource_id": court },
                { "resource_type": "coach", "resource_id": coach },
            ]),
        )
        .await;
    assert_eq!(response.status, StatusCode::CREATED);
    let booking_id = response.body["booking_id"].as_i64().unwrap();

    let slots = app
        .request(
            "GET",
            &format!("/api/bookings?date=2025-01-06&resource_type=court&resource_id={court}"),
            None,
        )
        .await;
    assert_eq!(slots.status, StatusCode::OK);
    assert_eq!(
        slots.body,
        json!([{
            "start_time": MONDAY_10,
            "end_time": MONDAY_12,
            "resource_type": "court",
            "resource_id": court,
        }])
    );

    let other_day = app
        .request(
            "GET",
            &format!("/api/bookings?date=2025-01-07&resource_type=court&resource_id={court}"),
            None,
        )
        .await;
    assert_eq!(other_day.body, json!([]));

    let history = app
        .request("GET", &format!("/api/my-bookings?user_name={user}"), None)
        .await;
    assert_eq!(history.status, StatusCode::OK);
    let entries = history.body.as_array().unwrap();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0]["id"], booking_id);
    assert_eq!(entries[0]["status"], "confirmed");
    assert_eq!(entries[0]["items"].as_array().unwrap().len(), 2);
    assert!(entries[0]["items"][0]["resource_name"].is_string());
}
