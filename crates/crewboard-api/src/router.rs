//! Route definitions for the CrewBoard HTTP API.
//!
//! All routes are organized by domain and mounted under `/api`.

use axum::{
    Router, middleware as axum_middleware,
    routing::{get, post, put},
};
use tower_http::compression::CompressionLayer;
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::middleware;
use crate::state::AppState;

/// Build the complete Axum router with all routes and middleware.
pub fn build_router(state: AppState) -> Router {
    let api_routes = Router::new()
        .merge(job_routes())
        .merge(employee_routes())
        .merge(availability_routes())
        .merge(notification_routes())
        .merge(health_routes());

    let cors = middleware::cors::build_cors_layer(&state.config.server.cors);

    Router::new()
        .nest("/api", api_routes)
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .layer(axum_middleware::from_fn(middleware::logging::request_logging))
        .with_state(state)
}

/// Job CRUD, board and drag-and-drop moves
fn job_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/jobs",
            get(handlers::job::list_jobs).post(handlers::job::create_job),
        )
        .route(
            "/jobs/{id}",
            get(handlers::job::get_job)
                .put(handlers::job::update_job)
                .delete(handlers::job::delete_job),
        )
        .route("/jobs/{id}/board", get(handlers::job::get_board))
        .route("/jobs/{id}/moves", post(handlers::job::move_employee))
}

/// Employee roster
fn employee_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/employees",
            get(handlers::employee::list_employees).post(handlers::employee::add_employee),
        )
        .route(
            "/employees/{id}",
            axum::routing::delete(handlers::employee::remove_employee),
        )
}

/// Free employees for a date range
fn availability_routes() -> Router<AppState> {
    Router::new().route(
        "/availability",
        get(handlers::availability::available_employees),
    )
}

/// In-app notifications and channel preferences
fn notification_routes() -> Router<AppState> {
    Router::new()
        .route("/notifications", get(handlers::notification::list_unread))
        .route(
            "/notifications/preferences",
            get(handlers::notification::get_preferences)
                .put(handlers::notification::update_preferences),
        )
        .route(
            "/notifications/{id}/read",
            put(handlers::notification::mark_read),
        )
}

/// Liveness
fn health_routes() -> Router<AppState> {
    Router::new().route("/health", get(handlers::health::health))
}
