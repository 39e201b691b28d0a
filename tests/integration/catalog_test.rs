//! Catalog and pricing rule administration tests.
//!
//! Require `COURTBOOK_TEST_DATABASE_URL`; each test skips itself otherwise.

mod helpers;

use helpers::{TestApp, unique};
use http::StatusCode;
use serde_json::{Value, json};

fn ids(body: &Value) -> Vec<i64> {
    body.as_array()
        .unwrap()
        .iter()
        .filter_map(|v| v["id"].as_i64())
        .collect()
}

#[tokio::test]
async fn test_database_health() {
    let Some(app) = TestApp::with_database().await else {
        return;
    };

    let response = app.request("GET", "/api/health/db", None).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["database"], "connected");
}

#[tokio::test]
async fn test_court_lifecycle() {
    let Some(app) = TestApp::with_database().await else {
        return;
    };
    let name = unique("Center Court");

    let created = app
        .request(
            "POST",
            "/api/admin/courts",
            Some(json!({ "name": name, "type": "outdoor", "base_price_per_hour": 25.5 })),
        )
        .await;
    assert_eq!(created.status, StatusCode::CREATED);
    assert_eq!(created.body["success"], true);
    assert_eq!(created.body["data"]["type"], "outdoor");
    let id = created.body["data"]["id"].as_i64().unwrap();

    let listed = app.request("GET", "/api/courts", None).await;
    assert_eq!(listed.status, StatusCode::OK);
    assert!(ids(&listed.body).contains(&id));

    let deleted = app
        .request("DELETE", &format!("/api/admin/courts/{id}"), None)
        .await;
    assert_eq!(deleted.status, StatusCode::OK);
    assert_eq!(deleted.body["success"], true);

    let listed = app.request("GET", "/api/courts", None).await;
    assert!(!ids(&listed.body).contains(&id));

    let again = app
        .request("DELETE", &format!("/api/admin/courts/{id}"), None)
        .await;
    assert_eq!(again.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_coach_and_equipment_listing() {
    let Some(app) = TestApp::with_database().await else {
        return;
    };
    let coach = app.create_coach(40.0).await;
    let equipment = app.create_equipment(8, 3.0).await;

    let coaches = app.request("GET", "/api/coaches", None).await;
    assert!(ids(&coaches.body).contains(&coach));

    let pools = app.request("GET", "/api/equipment", None).await;
    let pool = pools
        .body
        .as_array()
        .unwrap()
        .iter()
        .find(|e| e["id"] == equipment)
        .cloned()
        .unwrap();
    assert_eq!(pool["total_quantity"], 8);

    for path in [
        format!("/api/admin/coaches/{coach}"),
        format!("/api/admin/equipment/{equipment}"),
    ] {
        assert_eq!(app.request("DELETE", &path, None).await.status, StatusCode::OK);
    }
}

#[tokio::test]
async fn test_create_resource_validation() {
    let Some(app) = TestApp::with_database().await else {
        return;
    };

    let negative = app
        .request(
            "POST",
            "/api/admin/courts",
            Some(json!({ "name": "Cheap", "base_price_per_hour": -1.0 })),
        )
        .await;
    assert_eq!(negative.status, StatusCode::BAD_REQUEST);

    let unnamed = app
        .request(
            "POST",
            "/api/admin/equipment",
            Some(json!({ "name": "", "total_quantity": 1, "price_per_use": 1.0 })),
        )
        .await;
    assert_eq!(unnamed.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_rule_lifecycle() {
    let Some(app) = TestApp::with_database().await else {
        return;
    };
    let name = unique("Sunday surcharge");

    let created = app
        .request(
            "POST",
            "/api/admin/rules",
            Some(json!({
                "name": name,
                "type": "flat_fee",
                "value": 7.5,
                "conditions": "{\"days_of_week\":[0],\"start_hour\":8,\"end_hour\":10}",
            })),
        )
        .await;
    assert_eq!(created.status, StatusCode::CREATED);
    let id = created.body["data"]["id"].as_i64().unwrap();
    assert_eq!(created.body["data"]["type"], "flat_fee");
    assert_eq!(created.body["data"]["conditions"]["days_of_week"], json!([0]));
    assert_eq!(created.body["data"]["is_active"], true);

    let toggled = app
        .request(
            "PATCH",
            &format!("/api/admin/rules/{id}"),
            Some(json!({ "is_active": false })),
        )
        .await;
    assert_eq!(toggled.status, StatusCode::OK);

    let rules = app.request("GET", "/api/admin/rules", None).await;
    let rule = rules
        .body
        .as_array()
        .unwrap()
        .iter()
        .find(|r| r["id"] == id)
        .cloned()
        .unwrap();
    assert_eq!(rule["is_active"], false);
    assert_eq!(rule["name"], name);
}

#[tokio::test]
async fn test_toggle_unknown_rule() {
    let Some(app) = TestApp::with_database().await else {
        return;
    };

    let response = app
        .request(
            "PATCH",
            &format!("/api/admin/rules/{}", i64::MAX),
            Some(json!({ "is_active": true })),
        )
        .await;

    assert_eq!(response.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_rule_with_negative_multiplier() {
    let Some(app) = TestApp::with_database().await else {
        return;
    };

    let response = app
        .request(
            "POST",
            "/api/admin/rules",
            Some(json!({
                "name": unique("Refund"),
                "type": "multiplier",
                "value": -1.0,
                "conditions": {},
            })),
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
}
