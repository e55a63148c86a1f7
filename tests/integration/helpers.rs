//! Shared test helpers for integration tests.

#![allow(dead_code)]

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use serde_json::{Value, json};
use tower::ServiceExt;
use uuid::Uuid;

use crewboard_api::extractors::auth::{USER_ID_HEADER, USER_ROLE_HEADER};
use crewboard_core::config::AppConfig;
use crewboard_database::Stores;

/// Test application context
pub struct TestApp {
    /// The Axum router for making test requests
    pub router: Router,
    /// In-memory stores behind the router
    pub stores: Stores,
    /// Caller used for foreman requests
    pub foreman: Uuid,
    /// Caller used for admin requests
    pub admin: Uuid,
}

impl TestApp {
    /// Create a new test application over in-memory stores
    pub fn new() -> Self {
        let stores = Stores::memory();
        let state = crewboard_api::build_state(AppConfig::default(), stores.clone())
            .expect("Failed to build state");

        Self {
            router: crewboard_api::build_app(state),
            stores,
            foreman: Uuid::new_v4(),
            admin: Uuid::new_v4(),
        }
    }

    /// Add an employee through the API and return its id
    pub async fn create_employee(&self, name: &str) -> Uuid {
        let response = self
            .request(
                "POST",
                "/api/employees",
                Some(json!({ "name": name })),
                Some((self.admin, "admin")),
            )
            .await;
        assert_eq!(response.status, StatusCode::CREATED, "{}", response.body);
        parse_id(&response.body["data"]["id"])
    }

    /// Create a job through the API and return its id
    pub async fn create_job(&self, name: &str, start: &str, end: &str, day_shift: &[Uuid]) -> Uuid {
        let response = self
            .request(
                "POST",
                "/api/jobs",
                Some(job_body(name, start, end, day_shift)),
                Some((self.foreman, "foreman")),
            )
            .await;
        assert_eq!(response.status, StatusCode::CREATED, "{}", response.body);
        parse_id(&response.body["data"]["id"])
    }

    /// Request as the test foreman
    pub async fn as_foreman(&self, method: &str, path: &str, body: Option<Value>) -> TestResponse {
        self.request(method, path, body, Some((self.foreman, "foreman")))
            .await
    }

    /// Make an HTTP request against the test app
    pub async fn request(
        &self,
        method: &str,
        path: &str,
        body: Option<Value>,
        caller: Option<(Uuid, &str)>,
    ) -> TestResponse {
        let body_str = body
            .map(|b| serde_json::to_string(&b).expect("Failed to serialize body"))
            .unwrap_or_default();

        let mut req = Request::builder()
            .method(method)
            .uri(path)
            .header("Content-Type", "application/json");

        if let Some((user_id, role)) = caller {
            req = req
                .header(USER_ID_HEADER, user_id.to_string())
                .header(USER_ROLE_HEADER, role);
        }

        let req = req
            .body(Body::from(body_str))
            .expect("Failed to build request");

        let response = self
            .router
            .clone()
            .oneshot(req)
            .await
            .expect("Failed to send request");

        let status = response.status();
        let body_bytes = axum::body::to_bytes(response.into_body(), 1024 * 1024)
            .await
            .expect("Failed to read body");

        let body: Value = serde_json::from_slice(&body_bytes).unwrap_or(Value::Null);

        TestResponse { status, body }
    }

    /// Poll an employee's unread notifications until `count` have arrived
    pub async fn unread_eventually(&self, employee: Uuid, count: usize) -> Vec<Value> {
        for _ in 0..50 {
            let response = self
                .request("GET", "/api/notifications", None, Some((employee, "crew")))
                .await;
            assert_eq!(response.status, StatusCode::OK);
            let items = response.body["data"]
                .as_array()
                .cloned()
                .unwrap_or_default();
            if items.len() >= count {
                return items;
            }
            tokio::time::sleep(std::time::Duration::from_millis(10)).await;
        }
        panic!("expected {count} notifications for {employee}");
    }
}

/// Test HTTP response
pub struct TestResponse {
    /// HTTP status
    pub status: StatusCode,
    /// Parsed JSON body (Null when empty)
    pub body: Value,
}

/// JSON body of a job draft with `day_shift` already staffed
pub fn job_body(name: &str, start: &str, end: &str, day_shift: &[Uuid]) -> Value {
    json!({
        "name": name,
        "job_number": "J-1001",
        "location": "Main St",
        "start_date": start,
        "end_date": end,
        "assigned_employees": day_shift,
        "day_shift": day_shift,
        "night_shift": [],
    })
}

/// Parse a uuid out of a JSON string value
pub fn parse_id(value: &Value) -> Uuid {
    value
        .as_str()
        .and_then(|s| s.parse().ok())
        .expect("Expected a uuid string")
}

/// Ids of the employees in one board zone
pub fn zone_ids(body: &Value, zone: &str) -> Vec<Uuid> {
    body[zone]
        .as_array()
        .map(|items| items.iter().map(|e| parse_id(&e["id"])).collect())
        .unwrap_or_default()
}
