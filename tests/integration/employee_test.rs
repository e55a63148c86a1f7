//! Integration tests for the employee roster.

mod helpers;

use axum::http::StatusCode;
use serde_json::json;

use helpers::TestApp;

#[tokio::test]
async fn test_roster_is_sorted_by_name() {
    let app = TestApp::new();
    app.create_employee("Noah S.").await;
    app.create_employee("Ava R.").await;

    let response = app.as_foreman("GET", "/api/employees", None).await;

    assert_eq!(response.status, StatusCode::OK);
    let names: Vec<&str> = response.body["data"]
        .as_array()
        .expect("employee list")
        .iter()
        .filter_map(|e| e["name"].as_str())
        .collect();
    assert_eq!(names, ["Ava R.", "Noah S."]);
}

#[tokio::test]
async fn test_only_admins_manage_roster() {
    let app = TestApp::new();

    let response = app
        .as_foreman("POST", "/api/employees", Some(json!({ "name": "Ava R." })))
        .await;

    assert_eq!(response.status, StatusCode::FORBIDDEN);
    assert_eq!(response.body["error"], "FORBIDDEN");
}

#[tokio::test]
async fn test_short_name_is_rejected() {
    let app = TestApp::new();

    let response = app
        .request(
            "POST",
            "/api/employees",
            Some(json!({ "name": " A " })),
            Some((app.admin, "admin")),
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(
        response.body["details"]["name"][0],
        "Employee name must be at least 2 characters"
    );
}

#[tokio::test]
async fn test_malformed_body_is_a_validation_error() {
    let app = TestApp::new();

    let response = app
        .request(
            "POST",
            "/api/employees",
            Some(json!({ "nickname": "Ava" })),
            Some((app.admin, "admin")),
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["error"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn test_remove_refused_while_on_active_job() {
    let app = TestApp::new();
    let jim = app.create_employee("Jim E.").await;
    let job = app
        .create_job("Bridge deck", "2024-06-10T00:00:00Z", "2024-06-15T00:00:00Z", &[jim])
        .await;

    let response = app
        .request(
            "DELETE",
            &format!("/api/employees/{jim}"),
            None,
            Some((app.admin, "admin")),
        )
        .await;
    assert_eq!(response.status, StatusCode::CONFLICT);
    assert_eq!(response.body["details"]["jobs"], json!([job]));

    let response = app
        .as_foreman("DELETE", &format!("/api/jobs/{job}"), None)
        .await;
    assert_eq!(response.status, StatusCode::OK);

    let response = app
        .request(
            "DELETE",
            &format!("/api/employees/{jim}"),
            None,
            Some((app.admin, "admin")),
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);

    let response = app.as_foreman("GET", "/api/employees", None).await;
    assert_eq!(response.body["data"], json!([]));
}
