//! Integration tests for job scheduling and shift staffing.

mod helpers;

use axum::http::StatusCode;
use serde_json::json;

use helpers::{TestApp, parse_id, zone_ids};

const A_START: &str = "2024-06-10T00:00:00Z";
const A_END: &str = "2024-06-15T00:00:00Z";
const B_START: &str = "2024-06-14T00:00:00Z";
const B_END: &str = "2024-06-20T00:00:00Z";

#[tokio::test]
async fn test_health_reports_memory_storage() {
    let app = TestApp::new();

    let response = app.request("GET", "/api/health", None, None).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["data"]["status"], "ok");
    assert_eq!(response.body["data"]["storage"], "ok");
}

#[tokio::test]
async fn test_missing_identity_is_unauthorized() {
    let app = TestApp::new();

    let response = app.request("GET", "/api/jobs", None, None).await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert_eq!(response.body["error"], "UNAUTHORIZED");
}

#[tokio::test]
async fn test_crew_cannot_create_jobs() {
    let app = TestApp::new();

    let response = app
        .request(
            "POST",
            "/api/jobs",
            Some(helpers::job_body("Bridge deck", A_START, A_END, &[])),
            Some((uuid::Uuid::new_v4(), "employee")),
        )
        .await;

    assert_eq!(response.status, StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_create_job_reports_field_errors() {
    let app = TestApp::new();

    let response = app
        .as_foreman(
            "POST",
            "/api/jobs",
            Some(json!({
                "name": "Br",
                "job_number": "J-1",
                "location": "",
                "start_date": A_END,
                "end_date": A_START,
            })),
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    let details = &response.body["details"];
    assert_eq!(details["name"][0], "Job name must be at least 3 characters");
    assert_eq!(details["job_number"][0], "Job number must be at least 4 characters");
    assert_eq!(details["location"][0], "Location is required");
    assert_eq!(details["end_date"][0], "End date must be after start date");
}

#[tokio::test]
async fn test_create_get_and_filter_jobs() {
    let app = TestApp::new();
    let bridge = app.create_job("Bridge deck", A_START, A_END, &[]).await;
    app.create_job("Tunnel lining", B_START, B_END, &[]).await;

    let response = app
        .as_foreman("GET", &format!("/api/jobs/{bridge}"), None)
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["data"]["name"], "Bridge deck");
    assert_eq!(response.body["data"]["status"], "pending");
    assert_eq!(response.body["data"]["assigned_employees"], json!([]));

    let response = app.as_foreman("GET", "/api/jobs?search=tunnel", None).await;
    assert_eq!(response.status, StatusCode::OK);
    let jobs = response.body["data"].as_array().expect("job list");
    assert_eq!(jobs.len(), 1);
    assert_eq!(jobs[0]["name"], "Tunnel lining");
}

#[tokio::test]
async fn test_unknown_job_is_not_found() {
    let app = TestApp::new();

    let response = app
        .as_foreman("GET", &format!("/api/jobs/{}", uuid::Uuid::new_v4()), None)
        .await;

    assert_eq!(response.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_move_into_shift_refused_when_booked_elsewhere() {
    let app = TestApp::new();
    let jim = app.create_employee("Jim E.").await;
    let noah = app.create_employee("Noah S.").await;
    let job_a = app.create_job("Bridge deck", A_START, A_END, &[jim]).await;
    let job_b = app.create_job("Tunnel lining", B_START, B_END, &[]).await;

    let response = app
        .as_foreman(
            "POST",
            &format!("/api/jobs/{job_b}/moves"),
            Some(json!({ "employee_id": jim, "from": "pool", "to": "day" })),
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    let data = &response.body["data"];
    assert_eq!(data["outcome"], "unavailable");
    assert_eq!(parse_id(&data["conflicts"][0]), job_a);
    assert!(zone_ids(&data["board"], "pool").contains(&jim));
    assert!(zone_ids(&data["board"], "day_shift").is_empty());

    let response = app
        .as_foreman(
            "POST",
            &format!("/api/jobs/{job_b}/moves"),
            Some(json!({ "employee_id": noah, "from": "pool", "to": "day" })),
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    let data = &response.body["data"];
    assert_eq!(data["outcome"], "applied");
    assert_eq!(zone_ids(&data["board"], "day_shift"), vec![noah]);
    assert_eq!(data["job"]["assigned_employees"], json!([noah]));
}

#[tokio::test]
async fn test_move_between_shifts_keeps_single_membership() {
    let app = TestApp::new();
    let ava = app.create_employee("Ava R.").await;
    let job = app.create_job("Bridge deck", A_START, A_END, &[ava]).await;

    let response = app
        .as_foreman(
            "POST",
            &format!("/api/jobs/{job}/moves"),
            Some(json!({ "employee_id": ava, "from": "day", "to": "night" })),
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);
    let data = &response.body["data"];
    assert_eq!(data["outcome"], "applied");
    assert_eq!(data["job"]["day_shift"], json!([]));
    assert_eq!(data["job"]["night_shift"], json!([ava]));
    assert_eq!(data["job"]["assigned_employees"], json!([ava]));

    let response = app
        .as_foreman("GET", &format!("/api/jobs/{job}/board"), None)
        .await;
    assert_eq!(zone_ids(&response.body["data"], "night_shift"), vec![ava]);
    assert!(zone_ids(&response.body["data"], "pool").is_empty());
}

#[tokio::test]
async fn test_same_zone_move_is_unchanged() {
    let app = TestApp::new();
    let ava = app.create_employee("Ava R.").await;
    let job = app.create_job("Bridge deck", A_START, A_END, &[]).await;

    let response = app
        .as_foreman(
            "POST",
            &format!("/api/jobs/{job}/moves"),
            Some(json!({ "employee_id": ava, "from": "pool", "to": "pool" })),
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["data"]["outcome"], "unchanged");
}

#[tokio::test]
async fn test_saving_double_booked_crew_conflicts() {
    let app = TestApp::new();
    let jim = app.create_employee("Jim E.").await;
    let job_a = app.create_job("Bridge deck", A_START, A_END, &[jim]).await;

    let response = app
        .as_foreman(
            "POST",
            "/api/jobs",
            Some(helpers::job_body("Tunnel lining", B_START, B_END, &[jim])),
        )
        .await;

    assert_eq!(response.status, StatusCode::CONFLICT);
    let blocked = &response.body["details"][jim.to_string()];
    assert_eq!(parse_id(&blocked[0]), job_a);
}

#[tokio::test]
async fn test_availability_excludes_booked_employees() {
    let app = TestApp::new();
    let jim = app.create_employee("Jim E.").await;
    let noah = app.create_employee("Noah S.").await;
    let job_a = app.create_job("Bridge deck", A_START, A_END, &[jim]).await;

    let response = app
        .as_foreman(
            "GET",
            &format!("/api/availability?start={B_START}&end={B_END}"),
            None,
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(zone_ids(&response.body["data"], "employees"), vec![noah]);

    let response = app
        .as_foreman(
            "GET",
            &format!("/api/availability?start={B_START}&end={B_END}&job_id={job_a}"),
            None,
        )
        .await;
    assert_eq!(zone_ids(&response.body["data"], "employees"), vec![jim, noah]);
}

#[tokio::test]
async fn test_update_and_delete_job() {
    let app = TestApp::new();
    let job = app.create_job("Bridge deck", A_START, A_END, &[]).await;

    let response = app
        .as_foreman(
            "PUT",
            &format!("/api/jobs/{job}"),
            Some(json!({ "status": "in-progress", "location": "Pier 4" })),
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["data"]["status"], "in-progress");
    assert_eq!(response.body["data"]["location"], "Pier 4");

    let response = app
        .as_foreman("DELETE", &format!("/api/jobs/{job}"), None)
        .await;
    assert_eq!(response.status, StatusCode::OK);

    let response = app
        .as_foreman("GET", &format!("/api/jobs/{job}"), None)
        .await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
}
