//! Request validation tests. None of these reach the database.

mod helpers;

use helpers::TestApp;
use http::StatusCode;
use serde_json::json;

#[tokio::test]
async fn test_health() {
    let app = TestApp::lazy();

    let response = app.request("GET", "/api/health", None).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["status"], "ok");
}

#[tokio::test]
async fn test_database_health_degraded_without_database() {
    let app = TestApp::lazy();

    let response = app.request("GET", "/api/health/db", None).await;

    assert_eq!(response.status, StatusCode::SERVICE_UNAVAILABLE);
}

#[tokio::test]
async fn test_booking_missing_fields() {
    let app = TestApp::lazy();

    let response = app
        .request("POST", "/api/bookings", Some(json!({ "user_name": "alice" })))
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["error"], "VALIDATION_ERROR");
    assert!(response.message().contains("Missing required fields"));
}

#[tokio::test]
async fn test_booking_blank_user_name() {
    let app = TestApp::lazy();

    let response = app
        .book(
            "   ",
            "2025-01-06T10:00:00",
            "2025-01-06T12:00:00",
            json!([{ "resource_type": "court", "resource_id": 1 }]),
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_booking_empty_items() {
    let app = TestApp::lazy();

    let response = app
        .book("alice", "2025-01-06T10:00:00", "2025-01-06T12:00:00", json!([]))
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_booking_end_not_after_start() {
    let app = TestApp::lazy();
    let items = json!([{ "resource_type": "court", "resource_id": 1 }]);

    let reversed = app
        .book("alice", "2025-01-06T12:00:00", "2025-01-06T10:00:00", items.clone())
        .await;
    assert_eq!(reversed.status, StatusCode::BAD_REQUEST);

    let empty = app
        .book("alice", "2025-01-06T10:00:00", "2025-01-06T10:00:00", items)
        .await;
    assert_eq!(empty.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_booking_unparseable_timestamp() {
    let app = TestApp::lazy();

    let response = app
        .book(
            "alice",
            "next tuesday",
            "2025-01-06T12:00:00",
            json!([{ "resource_type": "court", "resource_id": 1 }]),
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_booking_unknown_resource_type() {
    let app = TestApp::lazy();

    let response = app
        .book(
            "alice",
            "2025-01-06T10:00:00",
            "2025-01-06T12:00:00",
            json!([{ "resource_type": "pool", "resource_id": 1 }]),
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_booking_zero_quantity() {
    let app = TestApp::lazy();

    let response = app
        .book(
            "alice",
            "2025-01-06T10:00:00",
            "2025-01-06T12:00:00",
            json!([{ "resource_type": "equipment", "resource_id": 1, "quantity": 0 }]),
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_booking_quantity_above_per_item_limit() {
    let app = TestApp::lazy();

    let response = app
        .book(
            "alice",
            "2025-01-06T10:00:00",
            "2025-01-06T12:00:00",
            json!([{ "resource_type": "equipment", "resource_id": 1, "quantity": 101 }]),
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["error"], "VALIDATION_ERROR");
    assert!(response.message().contains("between 1 and 100"));
}

#[tokio::test]
async fn test_busy_slots_requires_date() {
    let app = TestApp::lazy();

    let response = app.request("GET", "/api/bookings", None).await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.message(), "Date required");

    let garbled = app.request("GET", "/api/bookings?date=06-01-2025", None).await;
    assert_eq!(garbled.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_history_requires_user_name() {
    let app = TestApp::lazy();

    let response = app.request("GET", "/api/my-bookings", None).await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.message(), "User name required");
}

#[tokio::test]
async fn test_waitlist_missing_fields() {
    let app = TestApp::lazy();

    let response = app
        .request("POST", "/api/waitlist", Some(json!({ "user_name": "bob" })))
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_quote_rejects_empty_window() {
    let app = TestApp::lazy();

    let response = app
        .request(
            "POST",
            "/api/quote",
            Some(json!({
                "start_time": "2025-01-06T10:00:00",
                "end_time": "2025-01-06T09:00:00",
                "items": [{ "resource_type": "court", "resource_id": 1 }],
            })),
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_cancel_non_numeric_id() {
    let app = TestApp::lazy();

    let response = app.request("POST", "/api/bookings/abc/cancel", None).await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_rule_with_malformed_conditions() {
    let app = TestApp::lazy();

    let response = app
        .request(
            "POST",
            "/api/admin/rules",
            Some(json!({
                "name": "Broken",
                "type": "multiplier",
                "value": 1.5,
                "conditions": "{not json",
            })),
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_unknown_route() {
    let app = TestApp::lazy();

    let response = app.request("GET", "/api/nowhere", None).await;

    assert_eq!(response.status, StatusCode::NOT_FOUND);
}
