//! Integration tests for assignment notifications and preferences.

mod helpers;

use axum::http::StatusCode;
use serde_json::json;

use helpers::{TestApp, parse_id};

#[tokio::test]
async fn test_assignment_notifies_employee() {
    let app = TestApp::new();
    let ava = app.create_employee("Ava R.").await;
    let job = app
        .create_job("Bridge deck", "2024-06-10T00:00:00Z", "2024-06-15T00:00:00Z", &[])
        .await;

    let response = app
        .as_foreman(
            "POST",
            &format!("/api/jobs/{job}/moves"),
            Some(json!({ "employee_id": ava, "from": "pool", "to": "night" })),
        )
        .await;
    assert_eq!(response.body["data"]["outcome"], "applied");

    let unread = app.unread_eventually(ava, 1).await;
    assert_eq!(unread.len(), 1);
    assert_eq!(unread[0]["title"], "New Job Assignment");
    assert_eq!(unread[0]["message"], "You have been assigned to Bridge deck");
    assert_eq!(parse_id(&unread[0]["job_id"]), job);
}

#[tokio::test]
async fn test_mark_read_clears_unread_and_is_owner_only() {
    let app = TestApp::new();
    let ava = app.create_employee("Ava R.").await;
    app.create_job("Bridge deck", "2024-06-10T00:00:00Z", "2024-06-15T00:00:00Z", &[ava])
        .await;

    let unread = app.unread_eventually(ava, 1).await;
    let notification = parse_id(&unread[0]["id"]);

    let response = app
        .request(
            "PUT",
            &format!("/api/notifications/{notification}/read"),
            None,
            Some((uuid::Uuid::new_v4(), "crew")),
        )
        .await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);

    let response = app
        .request(
            "PUT",
            &format!("/api/notifications/{notification}/read"),
            None,
            Some((ava, "crew")),
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);

    let response = app
        .request("GET", "/api/notifications", None, Some((ava, "crew")))
        .await;
    assert_eq!(response.body["data"], json!([]));
}

#[tokio::test]
async fn test_preferences_default_and_update() {
    let app = TestApp::new();
    let ava = app.create_employee("Ava R.").await;

    let response = app
        .request(
            "GET",
            "/api/notifications/preferences",
            None,
            Some((ava, "crew")),
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);
    let prefs = &response.body["data"];
    assert_eq!(prefs["email"], true);
    assert_eq!(prefs["sms"], true);
    assert_eq!(prefs["in_app"], true);

    let response = app
        .request(
            "PUT",
            "/api/notifications/preferences",
            Some(json!({ "sms": false })),
            Some((ava, "crew")),
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["data"]["sms"], false);
    assert_eq!(response.body["data"]["email"], true);

    let response = app
        .request(
            "GET",
            "/api/notifications/preferences",
            None,
            Some((ava, "crew")),
        )
        .await;
    assert_eq!(response.body["data"]["sms"], false);
}
