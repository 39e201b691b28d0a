//! Cancellation and waitlist promotion tests.
//!
//! Require `COURTBOOK_TEST_DATABASE_URL`; each test skips itself otherwise.

mod helpers;

use helpers::{TestApp, TestResponse, unique};
use http::StatusCode;
use serde_json::{Value, json};

async fn join(app: &TestApp, user: &str, court: i64, start: &str, end: &str) {
    let response = app
        .request(
            "POST",
            "/api/waitlist",
            Some(json!({
                "user_name": user,
                "resource_type": "court",
                "resource_id": court,
                "start_time": start,
                "end_time": end,
            })),
        )
        .await;
    assert_eq!(response.status, StatusCode::CREATED);
    assert_eq!(response.body["message"], "Added to waitlist");
}

async fn waitlist_status(app: &TestApp, user: &str) -> Value {
    let response = app
        .request("GET", &format!("/api/waitlist?user_name={user}"), None)
        .await;
    assert_eq!(response.status, StatusCode::OK);
    response.body[0]["status"].clone()
}

async fn cancel(app: &TestApp, booking_id: i64) -> TestResponse {
    app.request("POST", &format!("/api/bookings/{booking_id}/cancel"), None)
        .await
}

async fn book_court(app: &TestApp, court: i64) -> i64 {
    let response = app
        .book(
            &unique("alice"),
            "2025-01-06T10:00:00",
            "2025-01-06T12:00:00",
            json!([{ "resource_type": "court", "resource_id": court }]),
        )
        .await;
    assert_eq!(response.status, StatusCode::CREATED);
    response.body["booking_id"].as_i64().unwrap()
}

#[tokio::test]
async fn test_cancel_promotes_oldest_overlapping_entry() {
    let Some(app) = TestApp::with_database().await else {
        return;
    };
    let court = app.create_court(20.0).await;
    let booking_id = book_court(&app, court).await;

    let bob = unique("bob");
    let carol = unique("carol");
    let dave = unique("dave");
    join(&app, &bob, court, "2025-01-06T10:00:00", "2025-01-06T12:00:00").await;
    join(&app, &carol, court, "2025-01-06T10:30:00", "2025-01-06T11:30:00").await;
    // Touches the released window without overlapping it.
    join(&app, &dave, court, "2025-01-06T12:00:00", "2025-01-06T13:00:00").await;

    let response = cancel(&app, booking_id).await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.message(), "Booking cancelled. Waitlist processed.");

    assert_eq!(waitlist_status(&app, &bob).await, "notified");
    assert_eq!(waitlist_status(&app, &carol).await, "pending");
    assert_eq!(waitlist_status(&app, &dave).await, "pending");
}

#[tokio::test]
async fn test_cancel_is_idempotent() {
    let Some(app) = TestApp::with_database().await else {
        return;
    };
    let court = app.create_court(20.0).await;
    let booking_id = book_court(&app, court).await;

    let bob = unique("bob");
    let carol = unique("carol");
    join(&app, &bob, court, "2025-01-06T10:00:00", "2025-01-06T12:00:00").await;
    join(&app, &carol, court, "2025-01-06T10:00:00", "2025-01-06T12:00:00").await;

    assert_eq!(cancel(&app, booking_id).await.status, StatusCode::OK);
    let again = cancel(&app, booking_id).await;
    assert_eq!(again.status, StatusCode::OK);

    // The second cancel releases nothing, so nobody else is promoted.
    assert_eq!(waitlist_status(&app, &bob).await, "notified");
    assert_eq!(waitlist_status(&app, &carol).await, "pending");
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_cancels_promote_once() {
    let Some(app) = TestApp::with_database().await else {
        return;
    };
    let court = app.create_court(20.0).await;
    let booking_id = book_court(&app, court).await;

    let bob = unique("bob");
    let carol = unique("carol");
    join(&app, &bob, court, "2025-01-06T10:00:00", "2025-01-06T12:00:00").await;
    join(&app, &carol, court, "2025-01-06T10:00:00", "2025-01-06T12:00:00").await;

    let path = format!("/api/bookings/{booking_id}/cancel");
    let first = app.spawn_request("POST", path.clone(), json!({}));
    let second = app.spawn_request("POST", path, json!({}));

    assert_eq!(first.await.unwrap().status, StatusCode::OK);
    assert_eq!(second.await.unwrap().status, StatusCode::OK);

    // The booking row lock makes the later cancel a no-op.
    assert_eq!(waitlist_status(&app, &bob).await, "notified");
    assert_eq!(waitlist_status(&app, &carol).await, "pending");
}

#[tokio::test]
async fn test_cancel_frees_the_slot() {
    let Some(app) = TestApp::with_database().await else {
        return;
    };
    let court = app.create_court(20.0).await;
    let booking_id = book_court(&app, court).await;
    let items = json!([{ "resource_type": "court", "resource_id": court }]);

    let blocked = app
        .book(&unique("bob"), "2025-01-06T11:00:00", "2025-01-06T12:00:00", items.clone())
        .await;
    assert_eq!(blocked.status, StatusCode::CONFLICT);

    assert_eq!(cancel(&app, booking_id).await.status, StatusCode::OK);

    let rebooked = app
        .book(&unique("bob"), "2025-01-06T11:00:00", "2025-01-06T12:00:00", items)
        .await;
    assert_eq!(rebooked.status, StatusCode::CREATED);

    let slots = app
        .request(
            "GET",
            &format!("/api/bookings?date=2025-01-06&resource_type=court&resource_id={court}"),
            None,
        )
        .await;
    assert_eq!(slots.body.as_array().unwrap().len(), 1);
    assert_eq!(slots.body[0]["start_time"], "2025-01-06T11:00:00");
}

#[tokio::test]
async fn test_cancel_releases_equipment() {
    let Some(app) = TestApp::with_database().await else {
        return;
    };
    let rackets = app.create_equipment(2, 5.0).await;
    let items = json!([{ "resource_type": "equipment", "resource_id": rackets, "quantity": 2 }]);

    let first = app
        .book(&unique("alice"), "2025-01-06T10:00:00", "2025-01-06T12:00:00", items.clone())
        .await;
    assert_eq!(first.status, StatusCode::CREATED);
    let booking_id = first.body["booking_id"].as_i64().unwrap();

    assert_eq!(cancel(&app, booking_id).await.status, StatusCode::OK);

    let second = app
        .book(&unique("bob"), "2025-01-06T10:00:00", "2025-01-06T12:00:00", items)
        .await;
    assert_eq!(second.status, StatusCode::CREATED);
}

#[tokio::test]
async fn test_cancel_unknown_booking() {
    let Some(app) = TestApp::with_database().await else {
        return;
    };

    let response = cancel(&app, i64::MAX).await;

    assert_eq!(response.status, StatusCode::INTERNAL_SERVER_ERROR);
}

#[tokio::test]
async fn test_history_shows_cancelled_status() {
    let Some(app) = TestApp::with_database().await else {
        return;
    };
    let court = app.create_court(20.0).await;
    let user = unique("alice");
    let response = app
        .book(
            &user,
            "2025-01-06T10:00:00",
            "2025-01-06T12:00:00",
            json!([{ "resource_type": "court", "resource_id": court }]),
        )
        .await;
    let booking_id = response.body["booking_id"].as_i64().unwrap();

    cancel(&app, booking_id).await;

    let history = app
        .request("GET", &format!("/api/my-bookings?user_name={user}"), None)
        .await;
    assert_eq!(history.body[0]["status"], "cancelled");
    assert_eq!(history.body[0]["items"][0]["status"], "cancelled");
}
